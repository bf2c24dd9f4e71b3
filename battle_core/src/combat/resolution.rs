//! Damage resolution - apply an attack instance to a target

use super::result::{AttackInstance, AttackOutcome};
use crate::character::Character;
use crate::config::BattleConstants;
use crate::defense::apply_modifier;
use crate::rng::RandomSource;
use arsenal_core::{AttackKind, BaseDamage};
use tracing::debug;

/// Roll the per-use part of an attack
///
/// Runs once per use, before a target is picked. `living_combatants` counts
/// both parties and feeds attacks that scale with the field.
pub fn roll_attack<R>(kind: AttackKind, living_combatants: usize, rng: &mut R) -> AttackInstance
where
    R: RandomSource + ?Sized,
{
    let profile = kind.profile();
    let true_damage = match profile.base_damage {
        BaseDamage::Fixed { amount } => amount,
        BaseDamage::Rolled { base, spread } => base + rng.roll_below(spread) as i32,
        BaseDamage::PerCombatant => living_combatants.min(i32::MAX as usize) as i32,
    };
    AttackInstance {
        kind,
        damage_type: profile.damage_type,
        true_damage,
        accuracy: profile.accuracy,
        crit_rate: profile.crit_rate,
    }
}

/// Resolve an attack instance against a target and apply the damage
///
/// Steps:
/// 1. Draw the hit roll, then the crit roll
/// 2. Hit iff `accuracy >= hit_roll`; a miss changes nothing
/// 3. Crit iff `crit_rate > crit_roll`; a crit applies the attack's on-crit status
/// 4. Pass the true damage through the target's defense modifier, if any
/// 5. Multiply by the crit multiplier (after the modifier)
/// 6. Apply to HP through the clamped entry point
pub fn resolve_attack<R>(
    target: &mut Character,
    instance: &AttackInstance,
    constants: &BattleConstants,
    rng: &mut R,
) -> AttackOutcome
where
    R: RandomSource + ?Sized,
{
    let hit_roll = rng.roll_unit();
    let crit_roll = rng.roll_unit();
    debug!(
        attack = %instance.kind,
        target = %target.name,
        hit_roll,
        crit_roll,
        true_damage = instance.true_damage,
        "attack rolls"
    );

    if instance.accuracy < hit_roll {
        return AttackOutcome::miss(instance.kind, target.id, target.name.clone());
    }

    let critical = instance.crit_rate > crit_roll;
    let status_applied = if critical {
        instance.kind.on_crit()
    } else {
        None
    };
    if let Some(effect) = status_applied {
        target.add_status(effect);
    }

    let modifier = target.defense();
    let (after_modifier, dodged) = match modifier {
        Some(m) => {
            let outcome = apply_modifier(m, instance.true_damage, instance.damage_type, constants, rng);
            (outcome.damage, outcome.dodged)
        }
        None => (instance.true_damage, false),
    };

    let damage = if critical {
        after_modifier.saturating_mul(constants.crit.multiplier)
    } else {
        after_modifier
    };
    let change = target.take_damage(damage);

    AttackOutcome {
        attack: instance.kind,
        target: target.id,
        target_name: target.name.clone(),
        hit: true,
        critical,
        dodged,
        modifier,
        reduced_by: instance.true_damage - after_modifier,
        damage,
        status_applied,
        change: Some(change),
    }
}
