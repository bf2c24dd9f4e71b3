//! Battle events - what the display side gets to see

use crate::character::{CharacterId, HpChange};
use crate::combat::AttackOutcome;
use crate::status::StatusTick;
use arsenal_core::{ActionKind, Consumable, Faction, Gear, StatusEffect, StatusKind};
use serde::{Deserialize, Serialize};

/// Final result of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    Victory,
    Defeat,
}

/// Why a decision provider's pick was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum Rejection {
    ActionUnavailable { action: ActionKind },
    EmptyInventory,
    EmptyGearInventory,
    TargetOutOfRange { index: usize, len: usize },
    IndexOutOfRange { index: usize, len: usize },
}

/// One observable step of a battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum BattleEvent {
    WaveStarted {
        wave: u32,
        hostiles: Vec<String>,
    },
    TurnStarted {
        wave: u32,
        faction: Faction,
        character: CharacterId,
        name: String,
    },
    SelectionRejected {
        character: CharacterId,
        name: String,
        rejection: Rejection,
    },
    Idled {
        character: CharacterId,
        name: String,
        line: String,
    },
    AttackUsed {
        attacker: CharacterId,
        attacker_name: String,
        outcome: AttackOutcome,
    },
    ItemUsed {
        user: CharacterId,
        user_name: String,
        item: Consumable,
        target: CharacterId,
        target_name: String,
        /// HP change for healing items
        change: Option<HpChange>,
        /// Status added by potions and flasks
        status: Option<StatusEffect>,
    },
    GearEquipped {
        character: CharacterId,
        name: String,
        gear: Gear,
        /// Gear that went back to the inventory
        replaced: Option<Gear>,
    },
    StatusTicked {
        character: CharacterId,
        name: String,
        tick: StatusTick,
    },
    StatusRecovered {
        character: CharacterId,
        name: String,
        kind: StatusKind,
    },
    CharacterDied {
        character: CharacterId,
        name: String,
        faction: Faction,
    },
    CorpsePlundered {
        corpse: CharacterId,
        name: String,
        gear: Gear,
        to: Faction,
    },
    LootTransferred {
        items: Vec<Consumable>,
        gear: Vec<Gear>,
    },
    WaveWon {
        wave: u32,
    },
    GameOver {
        wave: u32,
        result: GameResult,
    },
}

/// Receives events as they happen
pub trait BattleObserver {
    fn on_event(&mut self, event: &BattleEvent);
}

impl<F: FnMut(&BattleEvent)> BattleObserver for F {
    fn on_event(&mut self, event: &BattleEvent) {
        self(event)
    }
}

/// Append-only event record with an optional live observer
#[derive(Default)]
pub struct EventLog {
    events: Vec<BattleEvent>,
    observer: Option<Box<dyn BattleObserver>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(mut self, observer: Box<dyn BattleObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn set_observer(&mut self, observer: Box<dyn BattleObserver>) {
        self.observer = Some(observer);
    }

    pub fn push(&mut self, event: BattleEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(&event);
        }
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Drain recorded events, keeping the observer
    pub fn take(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl std::fmt::Debug for EventLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLog")
            .field("events", &self.events.len())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_observer_sees_every_event() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut log = EventLog::new().with_observer(Box::new(move |e: &BattleEvent| {
            sink.borrow_mut().push(e.clone());
        }));

        log.push(BattleEvent::WaveWon { wave: 1 });
        log.push(BattleEvent::GameOver {
            wave: 1,
            result: GameResult::Victory,
        });

        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(log.take().len(), 2);
        assert!(log.is_empty());

        log.push(BattleEvent::WaveWon { wave: 2 });
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn test_event_json_shape() {
        let event = BattleEvent::SelectionRejected {
            character: CharacterId(4),
            name: "VIN".to_string(),
            rejection: Rejection::EmptyGearInventory,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "selection_rejected");
        assert_eq!(json["rejection"]["reason"], "empty_gear_inventory");
        assert_eq!(json["character"], 4);
    }
}
