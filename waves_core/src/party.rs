use crate::config::{MemberConfig, PartyConfig};
use crate::ConfigError;
use arsenal_core::{Archetype, Consumable, Faction, Gear};

/// A resolved party member: archetype, display name and starting slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSpec {
    pub archetype: Archetype,
    pub name: String,
    pub gear: Option<Gear>,
}

impl MemberSpec {
    /// Member with the archetype's default name and gear
    pub fn new(archetype: Archetype) -> Self {
        let template = archetype.template();
        MemberSpec {
            archetype,
            name: template.default_name.to_string(),
            gear: template.starting_gear,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_gear(mut self, gear: Option<Gear>) -> Self {
        self.gear = gear;
        self
    }

    fn from_config(config: MemberConfig) -> Self {
        let mut member = MemberSpec::new(config.archetype);
        if let Some(name) = config.name {
            member.name = name;
        }
        if config.unarmed {
            member.gear = None;
        } else if config.gear.is_some() {
            member.gear = config.gear;
        }
        member
    }
}

/// A party as it enters the field, plus the inventories it brings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartySpec {
    pub members: Vec<MemberSpec>,
    pub items: Vec<Consumable>,
    pub gear: Vec<Gear>,
}

impl PartySpec {
    pub fn new(members: Vec<MemberSpec>) -> Self {
        PartySpec {
            members,
            ..Default::default()
        }
    }

    pub fn with_items(mut self, items: Vec<Consumable>) -> Self {
        self.items = items;
        self
    }

    pub fn with_gear(mut self, gear: Vec<Gear>) -> Self {
        self.gear = gear;
        self
    }

    pub(crate) fn from_config(config: PartyConfig) -> Self {
        PartySpec {
            members: config.members.into_iter().map(MemberSpec::from_config).collect(),
            items: config.items,
            gear: config.gear,
        }
    }

    /// Check the party is non-empty and every member fights for `faction`
    pub(crate) fn validate(&self, faction: Faction, label: &str) -> Result<(), ConfigError> {
        if self.members.is_empty() {
            return Err(ConfigError::validation(format!("{label} has no members")));
        }
        if let Some(stray) = self
            .members
            .iter()
            .find(|m| m.archetype.faction() != faction)
        {
            return Err(ConfigError::validation(format!(
                "{label}: {} ({}) cannot fight for the {faction}",
                stray.name, stray.archetype
            )));
        }
        Ok(())
    }
}
