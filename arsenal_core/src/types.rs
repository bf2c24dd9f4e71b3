use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of the battle a character fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    /// The hero side, always acts first in a wave
    Good,
    /// The hostile side
    Evil,
}

impl Faction {
    /// The faction on the other side of the field
    pub fn opponent(self) -> Faction {
        match self {
            Faction::Good => Faction::Evil,
            Faction::Evil => Faction::Good,
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Faction::Good => write!(f, "Heroes"),
            Faction::Evil => write!(f, "Uncoded Forces"),
        }
    }
}

/// Damage types for attacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    #[default]
    Normal,
    /// Damage that unravels the code of its target
    Decoding,
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DamageType::Normal => write!(f, "Normal"),
            DamageType::Decoding => write!(f, "Decoding"),
        }
    }
}

/// Status effects that tick at the end of a character's turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Poison,
    Regen,
    Bleed,
}

impl StatusKind {
    /// Get all status kinds
    pub fn all() -> &'static [StatusKind] {
        &[StatusKind::Poison, StatusKind::Regen, StatusKind::Bleed]
    }

    /// Whether this status removes HP when it ticks
    pub fn is_damaging(&self) -> bool {
        matches!(self, StatusKind::Poison | StatusKind::Bleed)
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusKind::Poison => write!(f, "Poison"),
            StatusKind::Regen => write!(f, "Regen"),
            StatusKind::Bleed => write!(f, "Bleed"),
        }
    }
}

/// A status entry on a character: kind plus turns left
///
/// Entries of the same kind are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: StatusKind,
    pub remaining: u32,
}

impl StatusEffect {
    pub fn new(kind: StatusKind, remaining: u32) -> Self {
        StatusEffect { kind, remaining }
    }
}

/// The kinds of action a character can take on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Idle,
    StandardAttack,
    /// Skill granted by equipped gear
    Special,
    UseItem,
    Equip,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Idle => write!(f, "Do Nothing"),
            ActionKind::StandardAttack => write!(f, "Attack"),
            ActionKind::Special => write!(f, "Special"),
            ActionKind::UseItem => write!(f, "Use Item"),
            ActionKind::Equip => write!(f, "Equip"),
        }
    }
}

/// Which roster an effect picks its target from, relative to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetPool {
    Allies,
    Hostiles,
}
