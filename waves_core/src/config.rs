use arsenal_core::{Archetype, Consumable, Gear};
use serde::Deserialize;

/// TOML configuration for a campaign file
#[derive(Debug, Deserialize)]
pub struct CampaignFileConfig {
    pub heroes: PartyConfig,
    #[serde(default)]
    pub waves: Vec<PartyConfig>,
}

/// One party with its shared inventories
#[derive(Debug, Deserialize)]
pub struct PartyConfig {
    #[serde(default)]
    pub members: Vec<MemberConfig>,
    #[serde(default)]
    pub items: Vec<Consumable>,
    #[serde(default)]
    pub gear: Vec<Gear>,
}

/// Configuration for a single party member
#[derive(Debug, Deserialize)]
pub struct MemberConfig {
    pub archetype: Archetype,
    /// Overrides the archetype's default name
    #[serde(default)]
    pub name: Option<String>,
    /// Overrides the archetype's starting gear
    #[serde(default)]
    pub gear: Option<Gear>,
    /// Start with an empty slot even if the archetype carries gear
    #[serde(default)]
    pub unarmed: bool,
}
