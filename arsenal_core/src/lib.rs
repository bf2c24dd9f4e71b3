//! arsenal_core - Immutable combat templates
//!
//! Everything here is plain data: the attacks, gear, consumables, defense
//! modifiers and character archetypes that battles are built from. Runtime
//! state and all randomness live in `battle_core`.

pub mod archetype;
pub mod attack;
pub mod item;
pub mod modifier;
pub mod types;

pub use archetype::{Archetype, CharacterTemplate};
pub use attack::{AttackKind, AttackProfile, BaseDamage};
pub use item::{Consumable, Gear, ItemEffect};
pub use modifier::DefenseModifier;
pub use types::{ActionKind, DamageType, Faction, StatusEffect, StatusKind, TargetPool};
