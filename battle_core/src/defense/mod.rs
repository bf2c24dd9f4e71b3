//! Defense modifiers - Stone Armor, Object Sight, Dodge
//!
//! A modifier turns the raw true damage of an incoming attack into the
//! damage that reaches crit scaling. Output is clamped to
//! `[0, damage.modifier_cap]`.

use crate::config::BattleConstants;
use crate::rng::RandomSource;
use arsenal_core::{DamageType, DefenseModifier};
use serde::{Deserialize, Serialize};

/// What a modifier did to one hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierOutcome {
    pub damage: i32,
    pub dodged: bool,
}

impl ModifierOutcome {
    fn passed(damage: i32) -> Self {
        ModifierOutcome {
            damage,
            dodged: false,
        }
    }
}

/// Apply a defense modifier to raw true damage
///
/// Only Dodge draws from `rng`.
pub fn apply_modifier<R>(
    modifier: DefenseModifier,
    true_damage: i32,
    damage_type: DamageType,
    constants: &BattleConstants,
    rng: &mut R,
) -> ModifierOutcome
where
    R: RandomSource + ?Sized,
{
    let outcome = match modifier {
        DefenseModifier::StoneArmor => {
            ModifierOutcome::passed(true_damage - modifier.reduction())
        }
        DefenseModifier::ObjectSight => match damage_type {
            DamageType::Decoding => ModifierOutcome::passed(true_damage - modifier.reduction()),
            DamageType::Normal => ModifierOutcome::passed(true_damage),
        },
        DefenseModifier::Dodge => {
            let face = rng.roll_below(constants.dodge.sides);
            if face == constants.dodge.dodge_face {
                ModifierOutcome {
                    damage: 0,
                    dodged: true,
                }
            } else {
                ModifierOutcome::passed(true_damage)
            }
        }
    };

    ModifierOutcome {
        damage: outcome.damage.clamp(0, constants.damage.modifier_cap),
        ..outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandom;

    fn apply(modifier: DefenseModifier, damage: i32, damage_type: DamageType) -> ModifierOutcome {
        let mut rng = ScriptedRandom::new();
        apply_modifier(
            modifier,
            damage,
            damage_type,
            &BattleConstants::default(),
            &mut rng,
        )
    }

    #[test]
    fn test_stone_armor_reduces_by_one() {
        for damage_type in [DamageType::Normal, DamageType::Decoding] {
            assert_eq!(apply(DefenseModifier::StoneArmor, 3, damage_type).damage, 2);
            assert_eq!(apply(DefenseModifier::StoneArmor, 1, damage_type).damage, 0);
            assert_eq!(apply(DefenseModifier::StoneArmor, 0, damage_type).damage, 0);
        }
    }

    #[test]
    fn test_object_sight_only_stops_decoding() {
        assert_eq!(apply(DefenseModifier::ObjectSight, 5, DamageType::Decoding).damage, 3);
        assert_eq!(apply(DefenseModifier::ObjectSight, 1, DamageType::Decoding).damage, 0);
        assert_eq!(apply(DefenseModifier::ObjectSight, 5, DamageType::Normal).damage, 5);
        assert_eq!(apply(DefenseModifier::ObjectSight, 0, DamageType::Normal).damage, 0);
    }

    #[test]
    fn test_dodge_on_face_three() {
        let constants = BattleConstants::default();
        let mut rng = ScriptedRandom::new().with_ints([3, 2]);

        let dodged = apply_modifier(DefenseModifier::Dodge, 4, DamageType::Normal, &constants, &mut rng);
        assert!(dodged.dodged);
        assert_eq!(dodged.damage, 0);

        let hit = apply_modifier(DefenseModifier::Dodge, 4, DamageType::Normal, &constants, &mut rng);
        assert!(!hit.dodged);
        assert_eq!(hit.damage, 4);
    }

    #[test]
    fn test_dodge_rate_is_one_in_five() {
        let constants = BattleConstants::default();
        let mut rng = ScriptedRandom::new().with_ints(0..5);
        let dodges = (0..5)
            .filter(|_| {
                apply_modifier(DefenseModifier::Dodge, 1, DamageType::Normal, &constants, &mut rng)
                    .dodged
            })
            .count();
        assert_eq!(dodges, 1);
    }

    #[test]
    fn test_output_capped() {
        let mut constants = BattleConstants::default();
        constants.damage.modifier_cap = 4;
        let mut rng = ScriptedRandom::new();
        let outcome = apply_modifier(
            DefenseModifier::ObjectSight,
            10,
            DamageType::Normal,
            &constants,
            &mut rng,
        );
        assert_eq!(outcome.damage, 4);
    }
}
