//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Core types
pub use crate::battle::{
    Battle, BattleEvent, BattleObserver, BattlePhase, BattleSnapshot, GameResult, Player,
    WaveOutcome,
};
pub use crate::character::{Character, CharacterId, HpChange};
pub use crate::error::BattleError;

// Combat
pub use crate::combat::{resolve_attack, roll_attack, AttackInstance, AttackOutcome};
pub use crate::status::{tick_status_effects, TickReport};

// Providers and randomness
pub use crate::provider::{
    AiProvider, BattleView, DecisionProvider, ScriptedProvider, SelectionKind, TurnContext,
};
pub use crate::rng::{RandomSource, ScriptedRandom, SeededRandom};

// Config
pub use crate::config::BattleConstants;

// Re-exports from the template and campaign crates
pub use arsenal_core::{
    ActionKind, Archetype, AttackKind, Consumable, DamageType, DefenseModifier, Faction, Gear,
    StatusEffect, StatusKind,
};
pub use waves_core::Campaign;
