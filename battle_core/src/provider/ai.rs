//! Computer player

use super::{BattleView, DecisionProvider, Intent, SelectionKind, TurnContext};
use crate::character::Character;
use crate::rng::{RandomSource, SeededRandom};
use arsenal_core::{ActionKind, Consumable};
use tracing::debug;

/// Rule-based computer player with its own random source
///
/// Each turn it first considers healing (when an ally is below half HP),
/// otherwise gearing up (when an ally has nothing equipped), and falls back
/// to a random available action. A plain attack is upgraded to the special
/// whenever gear is equipped.
#[derive(Debug, Clone)]
pub struct AiProvider<R = SeededRandom> {
    rng: R,
    label: String,
}

impl AiProvider<SeededRandom> {
    pub fn seeded(seed: u64) -> Self {
        AiProvider::new(SeededRandom::new(seed))
    }
}

impl<R: RandomSource> AiProvider<R> {
    pub fn new(rng: R) -> Self {
        AiProvider {
            rng,
            label: "computer".to_string(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl<R: RandomSource> DecisionProvider for AiProvider<R> {
    fn pick_action(&mut self, view: &BattleView<'_>, ctx: &mut TurnContext) -> ActionKind {
        let actor = view.actor;

        if view.allies.iter().any(Character::is_wounded) {
            if self.rng.roll_below(5) == 1
                && actor.can(ActionKind::UseItem)
                && view.items.contains(&Consumable::HealthPotion)
            {
                ctx.intent = Some(Intent::HealWounded);
                return ActionKind::UseItem;
            }
        } else if view.allies.iter().any(|a| a.equipped().is_none())
            && self.rng.roll_below(2) == 1
            && actor.can(ActionKind::Equip)
            && !view.gear.is_empty()
        {
            ctx.intent = Some(Intent::EquipGear);
            return ActionKind::Equip;
        }

        let actions = actor.available_actions();
        let Some(&choice) = actions.get(self.rng.pick_index(actions.len())) else {
            return ActionKind::Idle;
        };
        let choice = if choice == ActionKind::StandardAttack && actor.can(ActionKind::Special) {
            ActionKind::Special
        } else {
            choice
        };
        debug!(actor = %actor.name, action = %choice, "computer picked action");
        choice
    }

    fn pick_target(
        &mut self,
        view: &BattleView<'_>,
        candidates: &[Character],
        ctx: &mut TurnContext,
    ) -> usize {
        if ctx.intent == Some(Intent::HealWounded) && view.items.contains(&Consumable::HealthPotion)
        {
            ctx.intent = None;
            if let Some(index) = candidates.iter().position(Character::is_wounded) {
                return index;
            }
        }
        self.rng.pick_index(candidates.len())
    }

    fn pick_item_index(
        &mut self,
        view: &BattleView<'_>,
        kind: SelectionKind,
        size: usize,
        ctx: &mut TurnContext,
    ) -> usize {
        if kind == SelectionKind::Item && ctx.intent == Some(Intent::HealWounded) {
            if let Some(index) = view
                .items
                .iter()
                .position(|item| *item == Consumable::HealthPotion)
            {
                return index;
            }
        }
        if kind == SelectionKind::Gear {
            ctx.intent = None;
        }
        self.rng.pick_index(size)
    }

    fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::Player;
    use crate::character::CharacterId;
    use crate::rng::ScriptedRandom;
    use arsenal_core::{Archetype, Faction, Gear};

    fn field() -> (Player, Player) {
        let mut heroes = Player::new(Faction::Good);
        heroes
            .party
            .push(Character::from_archetype(CharacterId(0), "ADA", Archetype::TrueProgrammer));
        heroes
            .party
            .push(Character::from_archetype(CharacterId(1), "VIN", Archetype::VinFletcher).with_hp(5));
        heroes.inventory = vec![Consumable::RegenPotion, Consumable::HealthPotion];
        let mut villains = Player::new(Faction::Evil);
        villains
            .party
            .push(Character::from_archetype(CharacterId(2), "SKELETON", Archetype::Skeleton));
        (heroes, villains)
    }

    #[test]
    fn test_heals_wounded_ally() {
        let (heroes, villains) = field();
        let view = BattleView::new(1, &heroes, &villains, CharacterId(0)).unwrap();
        let mut ai = AiProvider::new(ScriptedRandom::new().with_ints([1]));
        let mut ctx = TurnContext::default();

        assert_eq!(ai.pick_action(&view, &mut ctx), ActionKind::UseItem);
        assert_eq!(ctx.intent, Some(Intent::HealWounded));
        assert_eq!(ai.pick_item_index(&view, SelectionKind::Item, 2, &mut ctx), 1);
        assert_eq!(ai.pick_target(&view, view.allies, &mut ctx), 1);
        assert_eq!(ctx.intent, None);
    }

    #[test]
    fn test_heal_roll_missed_falls_back_to_attack() {
        let (heroes, villains) = field();
        let view = BattleView::new(1, &heroes, &villains, CharacterId(0)).unwrap();
        // heal roll 0, then action index 0 (attack, upgraded to special)
        let mut ai = AiProvider::new(ScriptedRandom::new().with_ints([0, 0]));
        let mut ctx = TurnContext::default();

        assert_eq!(ai.pick_action(&view, &mut ctx), ActionKind::Special);
        assert_eq!(ctx.intent, None);
    }

    #[test]
    fn test_equips_unarmed_ally() {
        let (mut heroes, villains) = field();
        heroes.party[1].heal(10);
        heroes.party[1].unequip();
        heroes.gear_inventory.push(Gear::OopsieDaisy);
        let view = BattleView::new(1, &heroes, &villains, CharacterId(1)).unwrap();
        let mut ai = AiProvider::new(ScriptedRandom::new().with_ints([1, 0]));
        let mut ctx = TurnContext::default();

        assert_eq!(ai.pick_action(&view, &mut ctx), ActionKind::Equip);
        assert_eq!(ctx.intent, Some(Intent::EquipGear));
        assert_eq!(ai.pick_item_index(&view, SelectionKind::Gear, 1, &mut ctx), 0);
        assert_eq!(ctx.intent, None);
    }

    #[test]
    fn test_amarok_only_bites_or_rends() {
        let (heroes, mut villains) = field();
        villains
            .party
            .push(Character::from_archetype(CharacterId(3), "AMAROK", Archetype::StoneAmarok));
        let mut ai = AiProvider::seeded(11);
        for _ in 0..50 {
            let view = BattleView::new(1, &villains, &heroes, CharacterId(3)).unwrap();
            let mut ctx = TurnContext::default();
            assert_eq!(ai.pick_action(&view, &mut ctx), ActionKind::Special);
        }
    }

    #[test]
    fn test_picks_stay_in_range() {
        let (heroes, villains) = field();
        let view = BattleView::new(1, &villains, &heroes, CharacterId(2)).unwrap();
        let mut ai = AiProvider::seeded(3);
        for _ in 0..100 {
            let mut ctx = TurnContext::default();
            assert!(ai.pick_target(&view, view.hostiles, &mut ctx) < 2);
            assert!(ai.pick_item_index(&view, SelectionKind::Item, 3, &mut ctx) < 3);
        }
    }
}
