//! Action dispatcher - one character's turn, from pick to effect

use super::idle_line;
use crate::battle::{bury, BattleEvent, EventLog, Player, Rejection};
use crate::character::{Character, CharacterId};
use crate::combat::{resolve_attack, roll_attack};
use crate::config::BattleConstants;
use crate::error::BattleError;
use crate::provider::{BattleView, DecisionProvider, SelectionKind, TurnContext};
use crate::rng::RandomSource;
use arsenal_core::{ActionKind, AttackKind, ItemEffect, TargetPool};
use tracing::{debug, warn};

/// Runs turns for the characters of `active` against `opposing`
///
/// Every provider answer is validated. Refused answers are logged as
/// [`BattleEvent::SelectionRejected`] and asked for again.
pub struct Dispatcher<'a, R: RandomSource + ?Sized> {
    active: &'a mut Player,
    opposing: &'a mut Player,
    provider: &'a mut dyn DecisionProvider,
    rng: &'a mut R,
    constants: &'a BattleConstants,
    log: &'a mut EventLog,
    wave: u32,
}

impl<'a, R: RandomSource + ?Sized> Dispatcher<'a, R> {
    pub fn new(
        active: &'a mut Player,
        opposing: &'a mut Player,
        provider: &'a mut dyn DecisionProvider,
        rng: &'a mut R,
        constants: &'a BattleConstants,
        log: &'a mut EventLog,
    ) -> Self {
        Dispatcher {
            active,
            opposing,
            provider,
            rng,
            constants,
            log,
            wave: 1,
        }
    }

    pub fn with_wave(mut self, wave: u32) -> Self {
        self.wave = wave;
        self
    }

    /// Ask for an action for `actor` and carry it out
    pub fn take_turn(&mut self, actor: CharacterId) -> Result<ActionKind, BattleError> {
        let mut ctx = TurnContext::default();
        let action = self.select_action(actor, &mut ctx)?;
        debug!(character = %actor, %action, "action selected");
        self.execute(actor, action, &mut ctx)?;
        Ok(action)
    }

    /// Carry out an already chosen action
    ///
    /// Item use and equipping do nothing when the matching inventory is
    /// empty, and so does a special with no gear equipped.
    pub fn execute(
        &mut self,
        actor: CharacterId,
        action: ActionKind,
        ctx: &mut TurnContext,
    ) -> Result<(), BattleError> {
        match action {
            ActionKind::Idle => self.idle(actor),
            ActionKind::StandardAttack => {
                let kind = self.actor(actor)?.standard_attack;
                self.attack(actor, kind, action, ctx)
            }
            ActionKind::Special => match self.actor(actor)?.special_attack() {
                Some(kind) => self.attack(actor, kind, action, ctx),
                None => Ok(()),
            },
            ActionKind::UseItem => self.use_item(actor, ctx),
            ActionKind::Equip => self.equip(actor, ctx),
        }
    }

    fn actor(&self, id: CharacterId) -> Result<&Character, BattleError> {
        self.active.find(id).ok_or(BattleError::UnknownCharacter(id))
    }

    fn select_action(
        &mut self,
        id: CharacterId,
        ctx: &mut TurnContext,
    ) -> Result<ActionKind, BattleError> {
        loop {
            let action = {
                let view = BattleView::new(self.wave, &*self.active, &*self.opposing, id)?;
                self.provider.pick_action(&view, ctx)
            };

            let rejection = if !self.actor(id)?.can(action) {
                Some(Rejection::ActionUnavailable { action })
            } else if action == ActionKind::UseItem && self.active.inventory.is_empty() {
                Some(Rejection::EmptyInventory)
            } else if action == ActionKind::Equip && self.active.gear_inventory.is_empty() {
                Some(Rejection::EmptyGearInventory)
            } else {
                None
            };

            match rejection {
                None => return Ok(action),
                Some(rejection) => {
                    self.reject(id, rejection);
                    *ctx = TurnContext::default();
                }
            }
        }
    }

    fn reject(&mut self, id: CharacterId, rejection: Rejection) {
        let name = self
            .active
            .find(id)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        warn!(provider = self.provider.label(), character = %name, ?rejection, "selection rejected");
        self.log.push(BattleEvent::SelectionRejected {
            character: id,
            name,
            rejection,
        });
    }

    fn pick_target(
        &mut self,
        id: CharacterId,
        pool: TargetPool,
        action: ActionKind,
        ctx: &mut TurnContext,
    ) -> Result<usize, BattleError> {
        let faction = match pool {
            TargetPool::Allies => self.active.faction,
            TargetPool::Hostiles => self.opposing.faction,
        };
        loop {
            let (pick, len) = {
                let view = BattleView::new(self.wave, &*self.active, &*self.opposing, id)?;
                let candidates = match pool {
                    TargetPool::Allies => view.allies,
                    TargetPool::Hostiles => view.hostiles,
                };
                if candidates.is_empty() {
                    return Err(BattleError::EmptyTargetPool { action, faction });
                }
                (
                    self.provider.pick_target(&view, candidates, ctx),
                    candidates.len(),
                )
            };
            if pick < len {
                return Ok(pick);
            }
            self.reject(id, Rejection::TargetOutOfRange { index: pick, len });
        }
    }

    fn pick_index(
        &mut self,
        id: CharacterId,
        kind: SelectionKind,
        ctx: &mut TurnContext,
    ) -> Result<usize, BattleError> {
        loop {
            let (pick, len) = {
                let view = BattleView::new(self.wave, &*self.active, &*self.opposing, id)?;
                let len = match kind {
                    SelectionKind::Item => view.items.len(),
                    SelectionKind::Gear => view.gear.len(),
                };
                (self.provider.pick_item_index(&view, kind, len, ctx), len)
            };
            if pick < len {
                return Ok(pick);
            }
            self.reject(id, Rejection::IndexOutOfRange { index: pick, len });
        }
    }

    fn idle(&mut self, id: CharacterId) -> Result<(), BattleError> {
        let name = self.actor(id)?.name.clone();
        let line = idle_line(&name, &mut *self.rng);
        self.log.push(BattleEvent::Idled {
            character: id,
            name,
            line,
        });
        Ok(())
    }

    fn attack(
        &mut self,
        id: CharacterId,
        kind: AttackKind,
        action: ActionKind,
        ctx: &mut TurnContext,
    ) -> Result<(), BattleError> {
        let attacker_name = self.actor(id)?.name.clone();
        let living = self.active.party.len() + self.opposing.party.len();
        let instance = roll_attack(kind, living, &mut *self.rng);

        let index = self.pick_target(id, TargetPool::Hostiles, action, ctx)?;
        let target = &mut self.opposing.party[index];
        let outcome = resolve_attack(target, &instance, self.constants, &mut *self.rng);
        let killed = outcome.killing_blow().then_some(outcome.target);

        self.log.push(BattleEvent::AttackUsed {
            attacker: id,
            attacker_name,
            outcome,
        });
        if let Some(dead) = killed {
            bury(&mut *self.opposing, &mut *self.active, dead, &mut *self.log);
        }
        Ok(())
    }

    fn use_item(&mut self, id: CharacterId, ctx: &mut TurnContext) -> Result<(), BattleError> {
        if self.active.inventory.is_empty() {
            return Ok(());
        }
        let user_name = self.actor(id)?.name.clone();
        let index = self.pick_index(id, SelectionKind::Item, ctx)?;
        let item = self.active.inventory[index];
        let pool = item.target_pool();
        let target_index = self.pick_target(id, pool, ActionKind::UseItem, ctx)?;

        let side = match pool {
            TargetPool::Allies => &mut *self.active,
            TargetPool::Hostiles => &mut *self.opposing,
        };
        let target = &mut side.party[target_index];
        let (change, status) = match item.effect() {
            ItemEffect::Heal(amount) => (Some(target.heal(amount)), None),
            ItemEffect::FullHeal => {
                let max_hp = target.max_hp();
                (Some(target.heal(max_hp)), None)
            }
            ItemEffect::Inflict(effect) => {
                target.add_status(effect);
                (None, Some(effect))
            }
        };
        let (target_id, target_name) = (target.id, target.name.clone());
        self.active.inventory.remove(index);

        debug!(user = %user_name, %item, target = %target_name, "item used");
        self.log.push(BattleEvent::ItemUsed {
            user: id,
            user_name,
            item,
            target: target_id,
            target_name,
            change,
            status,
        });
        Ok(())
    }

    fn equip(&mut self, id: CharacterId, ctx: &mut TurnContext) -> Result<(), BattleError> {
        if self.active.gear_inventory.is_empty() {
            return Ok(());
        }
        self.actor(id)?;
        let index = self.pick_index(id, SelectionKind::Gear, ctx)?;
        let gear = self.active.gear_inventory.remove(index);

        let actor = self
            .active
            .find_mut(id)
            .ok_or(BattleError::UnknownCharacter(id))?;
        let replaced = actor.equip(gear);
        let name = actor.name.clone();
        if let Some(old) = replaced {
            self.active.gear_inventory.push(old);
        }

        self.log.push(BattleEvent::GearEquipped {
            character: id,
            name,
            gear,
            replaced,
        });
        Ok(())
    }
}
