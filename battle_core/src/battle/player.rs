//! Player - one side's roster and inventories

use super::event::{BattleEvent, EventLog};
use crate::character::{Character, CharacterId, CharacterSnapshot};
use arsenal_core::{Consumable, Faction, Gear};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One side of the field
///
/// The party holds only living characters, in turn order. Both inventories
/// belong to the player, not to any character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub faction: Faction,
    pub party: Vec<Character>,
    pub inventory: Vec<Consumable>,
    pub gear_inventory: Vec<Gear>,
}

impl Player {
    pub fn new(faction: Faction) -> Self {
        Player {
            faction,
            party: Vec::new(),
            inventory: Vec::new(),
            gear_inventory: Vec::new(),
        }
    }

    pub fn find(&self, id: CharacterId) -> Option<&Character> {
        self.party.iter().find(|c| c.id == id)
    }

    pub fn find_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.party.iter_mut().find(|c| c.id == id)
    }

    pub fn is_defeated(&self) -> bool {
        self.party.is_empty()
    }

    pub fn ids(&self) -> Vec<CharacterId> {
        self.party.iter().map(|c| c.id).collect()
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            faction: self.faction,
            party: self.party.iter().map(Character::snapshot).collect(),
            inventory: self.inventory.clone(),
            gear_inventory: self.gear_inventory.clone(),
        }
    }
}

/// Take a dead character off its roster and plunder its gear
///
/// The corpse's equipped gear goes to the opponent's gear inventory.
/// Returns the removed character, or `None` if it was not on the roster.
pub(crate) fn bury(
    owner: &mut Player,
    opponent: &mut Player,
    id: CharacterId,
    log: &mut EventLog,
) -> Option<Character> {
    let index = owner.party.iter().position(|c| c.id == id)?;
    let mut corpse = owner.party.remove(index);
    info!(character = %corpse.name, faction = %corpse.faction, "character perished");
    log.push(BattleEvent::CharacterDied {
        character: corpse.id,
        name: corpse.name.clone(),
        faction: corpse.faction,
    });

    if let Some(gear) = corpse.unequip() {
        opponent.gear_inventory.push(gear);
        log.push(BattleEvent::CorpsePlundered {
            corpse: corpse.id,
            name: corpse.name.clone(),
            gear,
            to: opponent.faction,
        });
    }
    Some(corpse)
}

/// Display copy of a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub faction: Faction,
    pub party: Vec<CharacterSnapshot>,
    pub inventory: Vec<Consumable>,
    pub gear_inventory: Vec<Gear>,
}
