//! Character archetypes - the templates parties are built from

use crate::attack::AttackKind;
use crate::item::Gear;
use crate::modifier::DefenseModifier;
use crate::types::{ActionKind, Faction};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every kind of combatant in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    TrueProgrammer,
    VinFletcher,
    Skeleton,
    StoneAmarok,
    UncodedOne,
}

/// Immutable stats for an archetype
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterTemplate {
    pub default_name: &'static str,
    pub faction: Faction,
    pub max_hp: i32,
    pub defense: Option<DefenseModifier>,
    pub standard_attack: AttackKind,
    /// Actions available regardless of gear. `Special` is never listed here;
    /// it is derived from the equipped slot.
    pub base_actions: &'static [ActionKind],
    pub starting_gear: Option<Gear>,
}

const HERO_ACTIONS: &[ActionKind] = &[
    ActionKind::StandardAttack,
    ActionKind::UseItem,
    ActionKind::Equip,
    ActionKind::Idle,
];

impl Archetype {
    pub fn all() -> &'static [Archetype] {
        &[
            Archetype::TrueProgrammer,
            Archetype::VinFletcher,
            Archetype::Skeleton,
            Archetype::StoneAmarok,
            Archetype::UncodedOne,
        ]
    }

    pub fn template(self) -> CharacterTemplate {
        match self {
            Archetype::TrueProgrammer => CharacterTemplate {
                default_name: "TRUE PROGRAMMER",
                faction: Faction::Good,
                max_hp: 25,
                defense: Some(DefenseModifier::ObjectSight),
                standard_attack: AttackKind::Punch,
                base_actions: HERO_ACTIONS,
                starting_gear: Some(Gear::Sword),
            },
            Archetype::VinFletcher => CharacterTemplate {
                default_name: "VIN FLETCHER",
                faction: Faction::Good,
                max_hp: 15,
                defense: Some(DefenseModifier::Dodge),
                standard_attack: AttackKind::Punch,
                base_actions: HERO_ACTIONS,
                starting_gear: Some(Gear::VinBow),
            },
            Archetype::Skeleton => CharacterTemplate {
                default_name: "SKELETON",
                faction: Faction::Evil,
                max_hp: 7,
                defense: None,
                standard_attack: AttackKind::BoneCrunch,
                base_actions: &[
                    ActionKind::StandardAttack,
                    ActionKind::UseItem,
                    ActionKind::Equip,
                ],
                starting_gear: None,
            },
            Archetype::StoneAmarok => CharacterTemplate {
                default_name: "STONE AMAROK",
                faction: Faction::Evil,
                max_hp: 6,
                defense: Some(DefenseModifier::StoneArmor),
                standard_attack: AttackKind::Bite,
                base_actions: &[ActionKind::StandardAttack],
                starting_gear: Some(Gear::StoneClaw),
            },
            Archetype::UncodedOne => CharacterTemplate {
                default_name: "THE UNCODED ONE",
                faction: Faction::Evil,
                max_hp: 45,
                defense: None,
                standard_attack: AttackKind::Unravel,
                base_actions: &[ActionKind::StandardAttack, ActionKind::UseItem],
                starting_gear: None,
            },
        }
    }

    pub fn faction(self) -> Faction {
        self.template().faction
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template().default_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_is_never_a_base_action() {
        for archetype in Archetype::all() {
            let template = archetype.template();
            assert!(!template.base_actions.contains(&ActionKind::Special));
            assert!(template.base_actions.contains(&ActionKind::StandardAttack));
            assert!(template.max_hp > 0);
        }
    }

    #[test]
    fn test_factions() {
        assert_eq!(Archetype::TrueProgrammer.faction(), Faction::Good);
        assert_eq!(Archetype::VinFletcher.faction(), Faction::Good);
        assert_eq!(Archetype::Skeleton.faction(), Faction::Evil);
        assert_eq!(Archetype::StoneAmarok.faction(), Faction::Evil);
        assert_eq!(Archetype::UncodedOne.faction(), Faction::Evil);
    }

    #[test]
    fn test_only_amarok_wears_stone_armor() {
        let armored: Vec<_> = Archetype::all()
            .iter()
            .filter(|a| a.template().defense == Some(DefenseModifier::StoneArmor))
            .collect();
        assert_eq!(armored, vec![&Archetype::StoneAmarok]);
    }
}
