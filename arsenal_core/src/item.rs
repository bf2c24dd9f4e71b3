use crate::attack::AttackKind;
use crate::types::{StatusEffect, StatusKind, TargetPool};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One-shot items consumed from a player's inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Consumable {
    HealthPotion,
    RegenPotion,
    PoisonFlask,
    SimulaSoup,
}

/// What a consumable does to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    /// Restore HP, clamped to max
    Heal(i32),
    /// Restore HP to max
    FullHeal,
    /// Append a status entry
    Inflict(StatusEffect),
}

impl Consumable {
    pub fn all() -> &'static [Consumable] {
        &[
            Consumable::HealthPotion,
            Consumable::RegenPotion,
            Consumable::PoisonFlask,
            Consumable::SimulaSoup,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Consumable::HealthPotion => "Health Potion",
            Consumable::RegenPotion => "Regen Potion",
            Consumable::PoisonFlask => "Poison Flask",
            Consumable::SimulaSoup => "Simula's Soup",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Consumable::HealthPotion => "Restores a friendly character's HP by 10, or until full.",
            Consumable::RegenPotion => "Potion that regenerates 2 HP over 8 rounds.",
            Consumable::PoisonFlask => "Poison that deals 1 damage per round for 6 rounds.",
            Consumable::SimulaSoup => {
                "Delicious soup in a pretty mason jar. Fully heals a party member."
            }
        }
    }

    pub fn effect(self) -> ItemEffect {
        match self {
            Consumable::HealthPotion => ItemEffect::Heal(10),
            Consumable::RegenPotion => ItemEffect::Inflict(StatusEffect::new(StatusKind::Regen, 8)),
            Consumable::PoisonFlask => ItemEffect::Inflict(StatusEffect::new(StatusKind::Poison, 6)),
            Consumable::SimulaSoup => ItemEffect::FullHeal,
        }
    }

    /// Poison goes on hostiles, everything else on allies
    pub fn target_pool(self) -> TargetPool {
        match self {
            Consumable::PoisonFlask => TargetPool::Hostiles,
            _ => TargetPool::Allies,
        }
    }
}

impl fmt::Display for Consumable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Equippable gear. Each piece grants exactly one special skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gear {
    Sword,
    Dagger,
    VinBow,
    OopsieDaisy,
    StoneClaw,
}

impl Gear {
    pub fn all() -> &'static [Gear] {
        &[
            Gear::Sword,
            Gear::Dagger,
            Gear::VinBow,
            Gear::OopsieDaisy,
            Gear::StoneClaw,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Gear::Sword => "Sword",
            Gear::Dagger => "Dagger",
            Gear::VinBow => "Vin's Bow",
            Gear::OopsieDaisy => "OOP-sie Daisy",
            Gear::StoneClaw => "Stone Claw",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Gear::Sword => "Grants character the 'SLASH' attack, which deals 2 damage.",
            Gear::Dagger => "Grants character the 'STAB' attack, which deals 1 damage.",
            Gear::VinBow => {
                "Grants character the 'QUICK SHOT' attack, which deals 3 damage at 50% accuracy."
            }
            Gear::OopsieDaisy => {
                "A magic flower grown near the Fountain of Objects. Glows brighter the more objects are nearby..."
            }
            Gear::StoneClaw => "The tough claw of a stone Amarok. Inflicts bleed on crit.",
        }
    }

    /// The special attack this gear grants while equipped
    pub fn skill(self) -> AttackKind {
        match self {
            Gear::Sword => AttackKind::Slash,
            Gear::Dagger => AttackKind::Stab,
            Gear::VinBow => AttackKind::QuickShot,
            Gear::OopsieDaisy => AttackKind::BigOopsie,
            Gear::StoneClaw => AttackKind::Rend,
        }
    }
}

impl fmt::Display for Gear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_only_poison_targets_hostiles() {
        for item in Consumable::all() {
            let expected = if *item == Consumable::PoisonFlask {
                TargetPool::Hostiles
            } else {
                TargetPool::Allies
            };
            assert_eq!(item.target_pool(), expected, "{item}");
        }
    }

    #[test]
    fn test_status_items() {
        assert_eq!(
            Consumable::RegenPotion.effect(),
            ItemEffect::Inflict(StatusEffect::new(StatusKind::Regen, 8))
        );
        assert_eq!(
            Consumable::PoisonFlask.effect(),
            ItemEffect::Inflict(StatusEffect::new(StatusKind::Poison, 6))
        );
    }

    #[test]
    fn test_gear_skills_are_distinct() {
        let skills: HashSet<_> = Gear::all().iter().map(|g| g.skill()).collect();
        assert_eq!(skills.len(), Gear::all().len());
        assert_eq!(Gear::StoneClaw.skill(), AttackKind::Rend);
    }
}
