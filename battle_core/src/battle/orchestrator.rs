//! Battle orchestrator - sides, waves and the end of the game
//!
//! ```text
//! WaveIntro -> InBattle -> WaveResolved(Won | Lost) -> WaveIntro (next wave)
//!                                                   -> GameOver
//! ```
//!
//! Each `InBattle` step is one full pass of the active side. The hero side
//! always opens a wave.

use super::event::{BattleEvent, BattleObserver, EventLog, GameResult};
use super::player::{bury, Player, PlayerSnapshot};
use crate::action::Dispatcher;
use crate::character::{Character, CharacterId};
use crate::config::BattleConstants;
use crate::error::BattleError;
use crate::provider::DecisionProvider;
use crate::rng::{RandomSource, SeededRandom};
use crate::status::tick_status_effects;
use arsenal_core::Faction;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use waves_core::{Campaign, MemberSpec};

/// How a single wave ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveOutcome {
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattlePhase {
    /// Next wave's hostiles are about to be fielded
    WaveIntro,
    InBattle,
    WaveResolved(WaveOutcome),
    GameOver(GameResult),
}

/// Display copy of the whole field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub wave: u32,
    pub final_wave: u32,
    pub phase: BattlePhase,
    pub active_faction: Faction,
    pub heroes: PlayerSnapshot,
    pub villains: PlayerSnapshot,
}

/// A full campaign in progress
pub struct Battle<R: RandomSource = SeededRandom> {
    campaign: Campaign,
    constants: BattleConstants,
    heroes: Player,
    villains: Player,
    hero_provider: Box<dyn DecisionProvider>,
    villain_provider: Box<dyn DecisionProvider>,
    rng: R,
    wave: u32,
    phase: BattlePhase,
    active: Faction,
    next_id: u32,
    log: EventLog,
}

fn spawn(next_id: &mut u32, member: &MemberSpec) -> Character {
    let id = CharacterId(*next_id);
    *next_id += 1;
    Character::from_archetype(id, member.name.clone(), member.archetype).with_gear(member.gear)
}

impl<R: RandomSource> Battle<R> {
    /// Field the hero party and get ready for wave 1
    pub fn new<H, V>(
        campaign: Campaign,
        constants: BattleConstants,
        hero_provider: H,
        villain_provider: V,
        rng: R,
    ) -> Self
    where
        H: DecisionProvider + 'static,
        V: DecisionProvider + 'static,
    {
        let mut next_id = 0;
        let mut heroes = Player::new(Faction::Good);
        heroes.party = campaign
            .heroes()
            .members
            .iter()
            .map(|m| spawn(&mut next_id, m))
            .collect();
        heroes.inventory = campaign.heroes().items.clone();
        heroes.gear_inventory = campaign.heroes().gear.clone();

        Battle {
            campaign,
            constants,
            heroes,
            villains: Player::new(Faction::Evil),
            hero_provider: Box::new(hero_provider),
            villain_provider: Box::new(villain_provider),
            rng,
            wave: 1,
            phase: BattlePhase::WaveIntro,
            active: Faction::Good,
            next_id,
            log: EventLog::new(),
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn BattleObserver>) -> Self {
        self.log.set_observer(observer);
        self
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Current wave, numbered from 1
    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn active_faction(&self) -> Faction {
        self.active
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, BattlePhase::GameOver(_))
    }

    pub fn heroes(&self) -> &Player {
        &self.heroes
    }

    pub fn villains(&self) -> &Player {
        &self.villains
    }

    /// Direct access for setting up scenarios
    pub fn heroes_mut(&mut self) -> &mut Player {
        &mut self.heroes
    }

    pub fn villains_mut(&mut self) -> &mut Player {
        &mut self.villains
    }

    pub fn constants(&self) -> &BattleConstants {
        &self.constants
    }

    pub fn events(&self) -> &[BattleEvent] {
        self.log.events()
    }

    pub fn take_events(&mut self) -> Vec<BattleEvent> {
        self.log.take()
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            wave: self.wave,
            final_wave: self.campaign.final_wave(),
            phase: self.phase,
            active_faction: self.active,
            heroes: self.heroes.snapshot(),
            villains: self.villains.snapshot(),
        }
    }

    /// Advance the state machine by one transition
    pub fn step(&mut self) -> Result<BattlePhase, BattleError> {
        self.phase = match self.phase {
            BattlePhase::WaveIntro => {
                self.start_wave()?;
                BattlePhase::InBattle
            }
            BattlePhase::InBattle => {
                self.side_pass()?;
                self.active = self.active.opponent();
                self.check_wave()
            }
            BattlePhase::WaveResolved(WaveOutcome::Lost) => self.finish(GameResult::Defeat),
            BattlePhase::WaveResolved(WaveOutcome::Won) => {
                info!(wave = self.wave, "wave defeated");
                self.log.push(BattleEvent::WaveWon { wave: self.wave });
                if self.wave >= self.campaign.final_wave() {
                    self.finish(GameResult::Victory)
                } else {
                    self.transfer_loot();
                    self.wave += 1;
                    BattlePhase::WaveIntro
                }
            }
            over @ BattlePhase::GameOver(_) => over,
        };
        Ok(self.phase)
    }

    /// Step until the game is over
    pub fn run(&mut self) -> Result<GameResult, BattleError> {
        loop {
            if let BattlePhase::GameOver(result) = self.step()? {
                return Ok(result);
            }
        }
    }

    fn start_wave(&mut self) -> Result<(), BattleError> {
        let spec = self
            .campaign
            .wave(self.wave)
            .ok_or(BattleError::MissingWave(self.wave))?;
        let next_id = &mut self.next_id;
        self.villains.party = spec.members.iter().map(|m| spawn(next_id, m)).collect();
        self.villains.inventory = spec.items.clone();
        self.villains.gear_inventory = spec.gear.clone();
        self.active = Faction::Good;

        let hostiles: Vec<String> = self.villains.party.iter().map(|c| c.name.clone()).collect();
        info!(wave = self.wave, ?hostiles, "wave started");
        self.log.push(BattleEvent::WaveStarted {
            wave: self.wave,
            hostiles,
        });
        Ok(())
    }

    /// Every living member of the active side acts once, in party order
    ///
    /// Stops as soon as the opposing side has nobody left.
    fn side_pass(&mut self) -> Result<(), BattleError> {
        let wave = self.wave;
        let (active, opposing, provider) = match self.active {
            Faction::Good => (
                &mut self.heroes,
                &mut self.villains,
                &mut self.hero_provider,
            ),
            Faction::Evil => (
                &mut self.villains,
                &mut self.heroes,
                &mut self.villain_provider,
            ),
        };

        for id in active.ids() {
            if opposing.is_defeated() {
                break;
            }
            let Some(actor) = active.find(id) else {
                continue;
            };
            debug!(wave, character = %actor.name, "turn started");
            self.log.push(BattleEvent::TurnStarted {
                wave,
                faction: actor.faction,
                character: id,
                name: actor.name.clone(),
            });

            Dispatcher::new(
                &mut *active,
                &mut *opposing,
                &mut **provider,
                &mut self.rng,
                &self.constants,
                &mut self.log,
            )
            .with_wave(wave)
            .take_turn(id)?;

            end_of_turn(active, opposing, id, &self.constants, &mut self.log);
        }
        Ok(())
    }

    fn check_wave(&self) -> BattlePhase {
        if self.heroes.is_defeated() {
            BattlePhase::WaveResolved(WaveOutcome::Lost)
        } else if self.villains.is_defeated() {
            BattlePhase::WaveResolved(WaveOutcome::Won)
        } else {
            BattlePhase::InBattle
        }
    }

    fn transfer_loot(&mut self) {
        let items: Vec<_> = self.villains.inventory.drain(..).collect();
        let gear: Vec<_> = self.villains.gear_inventory.drain(..).collect();
        self.heroes.inventory.extend(items.iter().copied());
        self.heroes.gear_inventory.extend(gear.iter().copied());
        info!(items = items.len(), gear = gear.len(), "loot transferred");
        self.log.push(BattleEvent::LootTransferred { items, gear });
    }

    fn finish(&mut self, result: GameResult) -> BattlePhase {
        info!(wave = self.wave, ?result, "game over");
        self.log.push(BattleEvent::GameOver {
            wave: self.wave,
            result,
        });
        BattlePhase::GameOver(result)
    }
}

/// Tick the actor's statuses and bury it if they killed it
fn end_of_turn(
    active: &mut Player,
    opposing: &mut Player,
    id: CharacterId,
    constants: &BattleConstants,
    log: &mut EventLog,
) {
    let Some(actor) = active.find_mut(id) else {
        return;
    };
    let report = tick_status_effects(actor, constants);
    let name = actor.name.clone();

    for tick in report.ticks {
        log.push(BattleEvent::StatusTicked {
            character: id,
            name: name.clone(),
            tick,
        });
    }
    for kind in report.recovered {
        log.push(BattleEvent::StatusRecovered {
            character: id,
            name: name.clone(),
            kind,
        });
    }
    if report.died {
        bury(active, opposing, id, log);
    }
}
