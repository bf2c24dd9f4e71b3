//! Attack templates
//!
//! An attack is a fixed profile (damage type, accuracy, crit rate) plus a
//! base damage rule. The per-use part of the base damage is rolled by the
//! battle engine, once per invocation.

use crate::types::{DamageType, StatusEffect, StatusKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the pre-modifier damage of an attack is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum BaseDamage {
    /// Always the same amount
    Fixed { amount: i32 },
    /// `base + roll` where roll is uniform in `[0, spread)`
    Rolled { base: i32, spread: u32 },
    /// One point per living combatant on the field, both sides counted
    PerCombatant,
}

impl BaseDamage {
    pub const fn fixed(amount: i32) -> Self {
        BaseDamage::Fixed { amount }
    }

    pub const fn rolled(base: i32, spread: u32) -> Self {
        BaseDamage::Rolled { base, spread }
    }

    /// Whether each use needs a fresh roll or field count
    pub fn is_variable(&self) -> bool {
        !matches!(self, BaseDamage::Fixed { .. })
    }
}

/// Every attack in the game, standard or gear-granted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackKind {
    Punch,
    BoneCrunch,
    Bite,
    Unravel,
    Slash,
    Stab,
    Rend,
    QuickShot,
    BigOopsie,
}

/// Static numbers behind an attack
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackProfile {
    pub name: &'static str,
    pub damage_type: DamageType,
    pub base_damage: BaseDamage,
    /// Probability of hitting, 0.0 - 1.0
    pub accuracy: f64,
    /// Probability of a critical on hit, 0.0 - 1.0
    pub crit_rate: f64,
}

impl AttackKind {
    /// Get all attack kinds
    pub fn all() -> &'static [AttackKind] {
        &[
            AttackKind::Punch,
            AttackKind::BoneCrunch,
            AttackKind::Bite,
            AttackKind::Unravel,
            AttackKind::Slash,
            AttackKind::Stab,
            AttackKind::Rend,
            AttackKind::QuickShot,
            AttackKind::BigOopsie,
        ]
    }

    pub fn profile(self) -> AttackProfile {
        use DamageType::{Decoding, Normal};
        let (name, damage_type, base_damage, accuracy, crit_rate) = match self {
            AttackKind::Punch => ("PUNCH", Normal, BaseDamage::fixed(1), 1.0, 0.1),
            AttackKind::BoneCrunch => ("BONE CRUNCH", Normal, BaseDamage::rolled(0, 2), 1.0, 0.2),
            AttackKind::Bite => ("BITE", Normal, BaseDamage::fixed(1), 1.0, 0.3),
            AttackKind::Unravel => ("UNRAVEL", Decoding, BaseDamage::rolled(0, 7), 1.0, 0.4),
            AttackKind::Slash => ("SLASH", Normal, BaseDamage::fixed(2), 1.0, 0.1),
            AttackKind::Stab => ("STAB", Normal, BaseDamage::fixed(1), 1.0, 0.1),
            AttackKind::Rend => ("REND", Normal, BaseDamage::fixed(2), 1.0, 0.2),
            AttackKind::QuickShot => ("QUICK SHOT", Normal, BaseDamage::fixed(3), 0.5, 0.5),
            AttackKind::BigOopsie => ("BIG OOPSIE", Decoding, BaseDamage::PerCombatant, 0.9, 0.0),
        };
        AttackProfile {
            name,
            damage_type,
            base_damage,
            accuracy,
            crit_rate,
        }
    }

    pub fn name(self) -> &'static str {
        self.profile().name
    }

    /// Secondary effect inflicted on the target when this attack crits
    pub fn on_crit(self) -> Option<StatusEffect> {
        match self {
            AttackKind::Rend => Some(StatusEffect::new(StatusKind::Bleed, 2)),
            _ => None,
        }
    }
}

impl fmt::Display for AttackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probabilities_in_range() {
        for attack in AttackKind::all() {
            let profile = attack.profile();
            assert!((0.0..=1.0).contains(&profile.accuracy), "{attack}");
            assert!((0.0..=1.0).contains(&profile.crit_rate), "{attack}");
        }
    }

    #[test]
    fn test_only_rend_bleeds_on_crit() {
        for attack in AttackKind::all() {
            match attack {
                AttackKind::Rend => assert_eq!(
                    attack.on_crit(),
                    Some(StatusEffect::new(StatusKind::Bleed, 2))
                ),
                _ => assert_eq!(attack.on_crit(), None),
            }
        }
    }

    #[test]
    fn test_variable_base_damage() {
        assert!(!AttackKind::Punch.profile().base_damage.is_variable());
        assert!(AttackKind::BoneCrunch.profile().base_damage.is_variable());
        assert_eq!(
            AttackKind::Unravel.profile().base_damage,
            BaseDamage::Rolled { base: 0, spread: 7 }
        );
        assert_eq!(
            AttackKind::BigOopsie.profile().base_damage,
            BaseDamage::PerCombatant
        );
    }

    #[test]
    fn test_decoding_attacks() {
        let decoding: Vec<_> = AttackKind::all()
            .iter()
            .filter(|a| a.profile().damage_type == DamageType::Decoding)
            .copied()
            .collect();
        assert_eq!(decoding, vec![AttackKind::Unravel, AttackKind::BigOopsie]);
    }
}
