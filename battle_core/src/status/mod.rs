//! Status ticker - poison, regen and bleed at the end of a turn
//!
//! Only the entries present when the tick starts are processed. Expired
//! entries are removed after the full pass.
//!
//! An entry that already sits at zero turns stops the whole tick on the
//! spot: later entries are not processed and the removal pass is skipped.
//! Entries only reach zero through [`StatusEffect::new`] with a zero
//! duration, since expiring entries are never written back.
//!
//! [`StatusEffect::new`]: arsenal_core::StatusEffect::new

use crate::character::{Character, HpChange};
use crate::config::BattleConstants;
use arsenal_core::StatusKind;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One entry's effect during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTick {
    pub kind: StatusKind,
    pub change: HpChange,
    /// Turns left after this tick; 0 means the entry expired
    pub remaining: u32,
}

/// Everything one tick did to a character
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    pub ticks: Vec<StatusTick>,
    /// Kinds whose entries expired and were removed, in list order
    pub recovered: Vec<StatusKind>,
    /// True if a tick took the character to zero HP
    pub died: bool,
    /// True if the tick stopped early on a zero-duration entry
    pub halted: bool,
}

/// Signed HP delta for one tick of `kind`
pub fn tick_amount(kind: StatusKind, constants: &BattleConstants) -> i32 {
    match kind {
        StatusKind::Poison => -constants.status.poison_damage,
        StatusKind::Regen => constants.status.regen_heal,
        StatusKind::Bleed => -constants.status.bleed_damage,
    }
}

/// Tick every status entry on `character` once
pub fn tick_status_effects(character: &mut Character, constants: &BattleConstants) -> TickReport {
    let mut report = TickReport::default();
    let mut expired = Vec::new();
    let count = character.statuses.len();

    for index in 0..count {
        let effect = character.statuses[index];
        if effect.remaining == 0 {
            debug!(character = %character.name, kind = %effect.kind, "zero-duration status, tick halted");
            report.halted = true;
            return report;
        }

        let change = character.adjust_hp(tick_amount(effect.kind, constants));
        report.died |= change.died;

        let remaining = effect.remaining - 1;
        if remaining == 0 {
            expired.push(index);
        } else {
            character.statuses[index].remaining = remaining;
        }
        debug!(
            character = %character.name,
            kind = %effect.kind,
            hp = change.after,
            remaining,
            "status tick"
        );
        report.ticks.push(StatusTick {
            kind: effect.kind,
            change,
            remaining,
        });
    }

    for index in expired.into_iter().rev() {
        let effect = character.statuses.remove(index);
        report.recovered.push(effect.kind);
    }
    report.recovered.reverse();
    report
}
