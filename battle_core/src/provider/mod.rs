//! Decision providers - who picks actions, targets and inventory slots
//!
//! The engine asks a provider three kinds of question during a turn and
//! validates every answer. Out-of-range or unusable answers are refused and
//! asked again, so a provider never has to be trusted.

mod ai;
mod scripted;

pub use ai::AiProvider;
pub use scripted::ScriptedProvider;

use crate::battle::Player;
use crate::character::{Character, CharacterId};
use crate::error::BattleError;
use arsenal_core::{ActionKind, Consumable, Gear};

/// Read-only view of the field from the acting character's side
#[derive(Debug, Clone, Copy)]
pub struct BattleView<'a> {
    pub wave: u32,
    pub actor: &'a Character,
    /// The actor's party, actor included
    pub allies: &'a [Character],
    pub hostiles: &'a [Character],
    pub items: &'a [Consumable],
    pub gear: &'a [Gear],
}

impl<'a> BattleView<'a> {
    pub fn new(
        wave: u32,
        active: &'a Player,
        opposing: &'a Player,
        actor: CharacterId,
    ) -> Result<Self, BattleError> {
        let actor = active
            .find(actor)
            .ok_or(BattleError::UnknownCharacter(actor))?;
        Ok(BattleView {
            wave,
            actor,
            allies: &active.party,
            hostiles: &opposing.party,
            items: &active.inventory,
            gear: &active.gear_inventory,
        })
    }
}

/// What a provider said it was going to do this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Use a Health Potion on a wounded ally
    HealWounded,
    /// Put gear on someone
    EquipGear,
}

/// Per-turn scratch space shared by the three calls of one turn
///
/// A fresh context is made for every turn and reset whenever an action
/// pick is refused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnContext {
    pub intent: Option<Intent>,
}

/// Which inventory an index pick is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Item,
    Gear,
}

/// Makes the choices for one side
pub trait DecisionProvider {
    /// Choose an action for `view.actor`
    fn pick_action(&mut self, view: &BattleView<'_>, ctx: &mut TurnContext) -> ActionKind;

    /// Choose an index into `candidates` (never empty)
    fn pick_target(
        &mut self,
        view: &BattleView<'_>,
        candidates: &[Character],
        ctx: &mut TurnContext,
    ) -> usize;

    /// Choose a slot in an inventory of `size` entries (never zero)
    fn pick_item_index(
        &mut self,
        view: &BattleView<'_>,
        kind: SelectionKind,
        size: usize,
        ctx: &mut TurnContext,
    ) -> usize;

    /// Short label for logs
    fn label(&self) -> &str {
        "provider"
    }
}

impl<P: DecisionProvider + ?Sized> DecisionProvider for Box<P> {
    fn pick_action(&mut self, view: &BattleView<'_>, ctx: &mut TurnContext) -> ActionKind {
        (**self).pick_action(view, ctx)
    }

    fn pick_target(
        &mut self,
        view: &BattleView<'_>,
        candidates: &[Character],
        ctx: &mut TurnContext,
    ) -> usize {
        (**self).pick_target(view, candidates, ctx)
    }

    fn pick_item_index(
        &mut self,
        view: &BattleView<'_>,
        kind: SelectionKind,
        size: usize,
        ctx: &mut TurnContext,
    ) -> usize {
        (**self).pick_item_index(view, kind, size, ctx)
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}
