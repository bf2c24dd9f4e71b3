//! Engine errors
//!
//! These are broken invariants, not recoverable situations. Bad picks from a
//! decision provider never show up here; they are re-requested instead.

use crate::character::CharacterId;
use arsenal_core::{ActionKind, Faction};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BattleError {
    #[error("{action} needs a target but the {faction} party is empty")]
    EmptyTargetPool { action: ActionKind, faction: Faction },

    #[error("character {0} is not on the field")]
    UnknownCharacter(CharacterId),

    #[error("campaign has no wave {0}")]
    MissingWave(u32),

    #[error("campaign error: {0}")]
    Campaign(#[from] waves_core::ConfigError),
}
