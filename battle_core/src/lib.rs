//! battle_core - Turn-resolution engine for wave battles
//!
//! This library provides:
//! - Character: runtime combatant state with clamped HP
//! - Combat resolution: hit, crit, defense modifiers and on-crit effects
//! - Status ticker: poison, regen and bleed at the end of each turn
//! - Dispatcher: turns a picked action into an effect on the field
//! - Battle: the side/wave state machine, loot and game over
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use battle_core::prelude::*;
//!
//! let mut battle = Battle::new(
//!     Campaign::the_final_battle(),
//!     BattleConstants::default(),
//!     AiProvider::seeded(1),
//!     AiProvider::seeded(2),
//!     SeededRandom::new(3),
//! );
//! let result = battle.run()?;
//! println!("{result:?} after wave {}", battle.wave());
//! ```

pub mod action;
pub mod battle;
pub mod character;
pub mod combat;
pub mod config;
pub mod defense;
pub mod error;
pub mod prelude;
pub mod provider;
pub mod rng;
pub mod status;

// Core API
pub use battle::{Battle, BattleEvent, BattleObserver, BattlePhase, BattleSnapshot, GameResult};
pub use character::{Character, CharacterId, HpChange};
pub use error::BattleError;

// Collaborators
pub use provider::{AiProvider, BattleView, DecisionProvider, ScriptedProvider, TurnContext};
pub use rng::{RandomSource, ScriptedRandom, SeededRandom};

// Configuration
pub use config::BattleConstants;

// Re-export the template and campaign crates
pub use arsenal_core;
pub use waves_core;
