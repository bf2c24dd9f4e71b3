//! Scripted provider - replays queued picks

use super::{BattleView, DecisionProvider, SelectionKind, TurnContext};
use crate::character::Character;
use arsenal_core::ActionKind;
use std::collections::VecDeque;

/// Replays a fixed sequence of answers
///
/// Once a queue runs dry the provider attacks (special if available) and
/// picks index 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    actions: VecDeque<ActionKind>,
    targets: VecDeque<usize>,
    indices: VecDeque<usize>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_actions(mut self, actions: impl IntoIterator<Item = ActionKind>) -> Self {
        self.actions.extend(actions);
        self
    }

    pub fn with_targets(mut self, targets: impl IntoIterator<Item = usize>) -> Self {
        self.targets.extend(targets);
        self
    }

    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }

    /// Answers not yet given
    pub fn remaining(&self) -> usize {
        self.actions.len() + self.targets.len() + self.indices.len()
    }

    fn fallback_action(actor: &Character) -> ActionKind {
        if actor.can(ActionKind::Special) {
            ActionKind::Special
        } else if actor.can(ActionKind::StandardAttack) {
            ActionKind::StandardAttack
        } else {
            ActionKind::Idle
        }
    }
}

impl DecisionProvider for ScriptedProvider {
    fn pick_action(&mut self, view: &BattleView<'_>, _ctx: &mut TurnContext) -> ActionKind {
        self.actions
            .pop_front()
            .unwrap_or_else(|| Self::fallback_action(view.actor))
    }

    fn pick_target(
        &mut self,
        _view: &BattleView<'_>,
        _candidates: &[Character],
        _ctx: &mut TurnContext,
    ) -> usize {
        self.targets.pop_front().unwrap_or(0)
    }

    fn pick_item_index(
        &mut self,
        _view: &BattleView<'_>,
        _kind: SelectionKind,
        _size: usize,
        _ctx: &mut TurnContext,
    ) -> usize {
        self.indices.pop_front().unwrap_or(0)
    }

    fn label(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::Player;
    use crate::character::CharacterId;
    use arsenal_core::{Archetype, Faction};

    #[test]
    fn test_replays_then_falls_back() {
        let mut heroes = Player::new(Faction::Good);
        heroes
            .party
            .push(Character::from_archetype(CharacterId(0), "VIN", Archetype::VinFletcher));
        let villains = Player::new(Faction::Evil);
        let view = BattleView::new(1, &heroes, &villains, CharacterId(0)).unwrap();

        let mut provider = ScriptedProvider::new()
            .with_actions([ActionKind::Idle])
            .with_targets([2]);
        let mut ctx = TurnContext::default();

        assert_eq!(provider.remaining(), 2);
        assert_eq!(provider.pick_action(&view, &mut ctx), ActionKind::Idle);
        assert_eq!(provider.pick_action(&view, &mut ctx), ActionKind::Special);
        assert_eq!(provider.pick_target(&view, view.allies, &mut ctx), 2);
        assert_eq!(provider.pick_target(&view, view.allies, &mut ctx), 0);
        assert_eq!(
            provider.pick_item_index(&view, SelectionKind::Gear, 4, &mut ctx),
            0
        );
    }
}
