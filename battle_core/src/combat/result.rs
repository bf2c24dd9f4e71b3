//! Attack instances and their outcomes

use crate::character::{CharacterId, HpChange};
use arsenal_core::{AttackKind, DamageType, DefenseModifier, StatusEffect};
use serde::{Deserialize, Serialize};

/// One use of an attack, with its per-use damage already rolled
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackInstance {
    pub kind: AttackKind,
    pub damage_type: DamageType,
    /// Damage after per-use randomization, before modifier and crit
    pub true_damage: i32,
    pub accuracy: f64,
    pub crit_rate: f64,
}

/// Everything that happened when an attack instance met its target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub attack: AttackKind,
    pub target: CharacterId,
    pub target_name: String,
    pub hit: bool,
    pub critical: bool,
    pub dodged: bool,
    /// Modifier consulted on the target, if it has one
    pub modifier: Option<DefenseModifier>,
    /// How much the modifier took off the true damage
    pub reduced_by: i32,
    /// Final damage applied to HP
    pub damage: i32,
    pub status_applied: Option<StatusEffect>,
    /// HP change on the target; `None` on a miss
    pub change: Option<HpChange>,
}

impl AttackOutcome {
    pub(crate) fn miss(attack: AttackKind, target: CharacterId, target_name: String) -> Self {
        AttackOutcome {
            attack,
            target,
            target_name,
            hit: false,
            critical: false,
            dodged: false,
            modifier: None,
            reduced_by: 0,
            damage: 0,
            status_applied: None,
            change: None,
        }
    }

    /// True if this attack took the target from alive to dead
    pub fn killing_blow(&self) -> bool {
        self.change.map(|c| c.died).unwrap_or(false)
    }

    pub fn hp_after(&self) -> Option<i32> {
        self.change.map(|c| c.after)
    }
}
