//! Character - runtime state of one combatant
//!
//! HP only changes through [`Character::adjust_hp`], which clamps to
//! `[0, max_hp]` and reports whether this change was the killing one.

use arsenal_core::{
    ActionKind, Archetype, AttackKind, CharacterTemplate, DefenseModifier, Faction, Gear,
    StatusEffect,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a character, unique within one battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharacterId(pub u32);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of a single HP mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HpChange {
    pub before: i32,
    pub after: i32,
    /// True only for the change that took HP from above zero to zero
    pub died: bool,
}

impl HpChange {
    /// Signed amount actually applied (negative for damage)
    pub fn delta(&self) -> i32 {
        self.after - self.before
    }
}

/// A combatant on the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub archetype: Option<Archetype>,
    pub faction: Faction,
    max_hp: i32,
    hp: i32,
    /// Fixed at creation
    defense: Option<DefenseModifier>,
    pub standard_attack: AttackKind,
    /// Gear-independent actions in menu order
    base_actions: Vec<ActionKind>,
    equipped: Option<Gear>,
    /// Active status entries, in the order they were applied
    pub statuses: Vec<StatusEffect>,
}

impl Character {
    /// Create a bare character at full HP with only a standard attack
    pub fn new(
        id: CharacterId,
        name: impl Into<String>,
        faction: Faction,
        max_hp: i32,
        standard_attack: AttackKind,
    ) -> Self {
        let max_hp = max_hp.max(1);
        Character {
            id,
            name: name.into(),
            archetype: None,
            faction,
            max_hp,
            hp: max_hp,
            defense: None,
            standard_attack,
            base_actions: vec![ActionKind::StandardAttack],
            equipped: None,
            statuses: Vec::new(),
        }
    }

    /// Create a character from an archetype template with its starting gear
    pub fn from_archetype(id: CharacterId, name: impl Into<String>, archetype: Archetype) -> Self {
        let template: CharacterTemplate = archetype.template();
        let mut character = Character::new(
            id,
            name,
            template.faction,
            template.max_hp,
            template.standard_attack,
        )
        .with_actions(template.base_actions.to_vec())
        .with_gear(template.starting_gear);
        character.defense = template.defense;
        character.archetype = Some(archetype);
        character
    }

    pub fn with_defense(mut self, defense: DefenseModifier) -> Self {
        self.defense = Some(defense);
        self
    }

    /// Set the gear-independent action list. `Special` entries are dropped;
    /// that action only ever comes from the equipped slot.
    pub fn with_actions(mut self, actions: Vec<ActionKind>) -> Self {
        self.base_actions = actions
            .into_iter()
            .filter(|a| *a != ActionKind::Special)
            .collect();
        self
    }

    pub fn with_gear(mut self, gear: Option<Gear>) -> Self {
        self.equipped = gear;
        self
    }

    /// Start below full HP (clamped)
    pub fn with_hp(mut self, hp: i32) -> Self {
        self.hp = hp.clamp(0, self.max_hp);
        self
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Below half HP, using integer division on max HP
    pub fn is_wounded(&self) -> bool {
        self.hp < self.max_hp / 2
    }

    pub fn defense(&self) -> Option<DefenseModifier> {
        self.defense
    }

    pub fn equipped(&self) -> Option<Gear> {
        self.equipped
    }

    /// The one HP entry point: add `delta` and clamp to `[0, max_hp]`
    pub fn adjust_hp(&mut self, delta: i32) -> HpChange {
        let before = self.hp;
        self.hp = before.saturating_add(delta).clamp(0, self.max_hp);
        HpChange {
            before,
            after: self.hp,
            died: before > 0 && self.hp == 0,
        }
    }

    pub fn take_damage(&mut self, amount: i32) -> HpChange {
        self.adjust_hp(amount.saturating_neg())
    }

    pub fn heal(&mut self, amount: i32) -> HpChange {
        self.adjust_hp(amount)
    }

    /// Put gear in the slot, returning whatever was there before
    pub fn equip(&mut self, gear: Gear) -> Option<Gear> {
        self.equipped.replace(gear)
    }

    /// Empty the slot
    pub fn unequip(&mut self) -> Option<Gear> {
        self.equipped.take()
    }

    /// The attack behind the Special action, if gear is equipped
    pub fn special_attack(&self) -> Option<AttackKind> {
        self.equipped.map(Gear::skill)
    }

    /// Actions this character may take right now
    ///
    /// Derived from the base list: `Special` sits directly after
    /// `StandardAttack` while gear is equipped and is absent otherwise.
    pub fn available_actions(&self) -> Vec<ActionKind> {
        let mut actions = self.base_actions.clone();
        if self.equipped.is_some() {
            let at = actions
                .iter()
                .position(|a| *a == ActionKind::StandardAttack)
                .map(|i| i + 1)
                .unwrap_or(0);
            actions.insert(at, ActionKind::Special);
        }
        actions
    }

    pub fn can(&self, action: ActionKind) -> bool {
        match action {
            ActionKind::Special => self.equipped.is_some(),
            other => self.base_actions.contains(&other),
        }
    }

    /// Append a status entry. Same-kind entries are kept side by side.
    pub fn add_status(&mut self, effect: StatusEffect) {
        self.statuses.push(effect);
    }

    /// Read-only view for display
    pub fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot {
            id: self.id,
            name: self.name.clone(),
            faction: self.faction,
            hp: self.hp,
            max_hp: self.max_hp,
            equipped: self.equipped,
            statuses: self.statuses.clone(),
        }
    }
}

/// Display copy of a character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub id: CharacterId,
    pub name: String,
    pub faction: Faction,
    pub hp: i32,
    pub max_hp: i32,
    pub equipped: Option<Gear>,
    pub statuses: Vec<StatusEffect>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use arsenal_core::StatusKind;
    use proptest::prelude::*;

    fn skeleton() -> Character {
        Character::from_archetype(CharacterId(1), "SKELETON", Archetype::Skeleton)
    }

    #[test]
    fn test_starts_at_full_hp() {
        let c = Character::from_archetype(CharacterId(0), "ADA", Archetype::TrueProgrammer);
        assert_eq!(c.hp(), 25);
        assert_eq!(c.max_hp(), 25);
        assert_eq!(c.defense(), Some(DefenseModifier::ObjectSight));
        assert_eq!(c.equipped(), Some(Gear::Sword));
        assert_eq!(c.name, "ADA");
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut c = skeleton();
        let change = c.take_damage(100);
        assert_eq!(change.after, 0);
        assert_eq!(change.delta(), -7);
        assert!(change.died);
        assert!(!c.is_alive());
    }

    #[test]
    fn test_death_reported_once() {
        let mut c = skeleton();
        assert!(c.take_damage(7).died);
        assert!(!c.take_damage(3).died);
        assert!(!c.take_damage(0).died);
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut c = skeleton().with_hp(3);
        let change = c.heal(10);
        assert_eq!(change.after, 7);
        assert_eq!(change.delta(), 4);
    }

    #[test]
    fn test_wounded_uses_integer_half() {
        // max 7 -> half is 3
        assert!(!skeleton().with_hp(3).is_wounded());
        assert!(skeleton().with_hp(2).is_wounded());
    }

    #[test]
    fn test_special_inserted_after_standard_attack() {
        let mut c = skeleton();
        assert_eq!(
            c.available_actions(),
            vec![ActionKind::StandardAttack, ActionKind::UseItem, ActionKind::Equip]
        );
        assert!(!c.can(ActionKind::Special));

        c.equip(Gear::Dagger);
        assert_eq!(
            c.available_actions(),
            vec![
                ActionKind::StandardAttack,
                ActionKind::Special,
                ActionKind::UseItem,
                ActionKind::Equip
            ]
        );
        assert_eq!(c.special_attack(), Some(arsenal_core::AttackKind::Stab));

        c.unequip();
        assert!(!c.available_actions().contains(&ActionKind::Special));
    }

    #[test]
    fn test_special_never_duplicated() {
        let mut c = skeleton().with_actions(vec![
            ActionKind::StandardAttack,
            ActionKind::Special,
            ActionKind::Equip,
        ]);
        c.equip(Gear::Sword);
        c.equip(Gear::Dagger);
        let specials = c
            .available_actions()
            .iter()
            .filter(|a| **a == ActionKind::Special)
            .count();
        assert_eq!(specials, 1);
    }

    #[test]
    fn test_equip_returns_previous() {
        let mut c = skeleton();
        assert_eq!(c.equip(Gear::Dagger), None);
        assert_eq!(c.equip(Gear::Sword), Some(Gear::Dagger));
        assert_eq!(c.equipped(), Some(Gear::Sword));
    }

    #[test]
    fn test_statuses_not_merged() {
        let mut c = skeleton();
        c.add_status(StatusEffect::new(StatusKind::Bleed, 2));
        c.add_status(StatusEffect::new(StatusKind::Bleed, 2));
        assert_eq!(c.statuses.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_hp_stays_in_bounds(
            max_hp in 1i32..100,
            deltas in prop::collection::vec(-200i32..200, 0..50)
        ) {
            let mut c = Character::new(CharacterId(0), "X", Faction::Good, max_hp, AttackKind::Punch);
            let mut deaths = 0;
            for delta in deltas {
                let change = c.adjust_hp(delta);
                prop_assert!(c.hp() >= 0 && c.hp() <= c.max_hp());
                if change.died {
                    deaths += 1;
                }
            }
            // Death can recur only after a heal brings HP back above zero
            prop_assert!(deaths <= 50);
        }

        #[test]
        fn prop_extreme_values_clamp(delta in any::<i32>()) {
            let mut c = Character::new(CharacterId(0), "X", Faction::Evil, 10, AttackKind::Bite);
            c.adjust_hp(delta);
            prop_assert!(c.hp() >= 0 && c.hp() <= 10);
            c.take_damage(delta);
            prop_assert!(c.hp() >= 0 && c.hp() <= 10);
        }
    }
}
