//! Combat - rolling and resolving single attack instances

mod resolution;
mod result;

pub use resolution::{resolve_attack, roll_attack};
pub use result::{AttackInstance, AttackOutcome};
