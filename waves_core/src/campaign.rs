use crate::config::CampaignFileConfig;
use crate::party::{MemberSpec, PartySpec};
use crate::ConfigError;
use arsenal_core::{Archetype, Consumable, Faction, Gear};
use std::path::Path;

/// The hero party and the ordered waves it has to beat
///
/// Waves are numbered from 1; the last wave is the final boss wave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campaign {
    heroes: PartySpec,
    waves: Vec<PartySpec>,
}

impl Campaign {
    /// Build and validate a campaign
    pub fn new(heroes: PartySpec, waves: Vec<PartySpec>) -> Result<Self, ConfigError> {
        heroes.validate(Faction::Good, "hero party")?;
        if waves.is_empty() {
            return Err(ConfigError::validation("campaign defines no waves"));
        }
        for (i, wave) in waves.iter().enumerate() {
            wave.validate(Faction::Evil, &format!("wave {}", i + 1))?;
        }
        Ok(Campaign { heroes, waves })
    }

    /// Load a campaign from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;
        Self::from_toml_str(&content).map_err(|e| e.at(path))
    }

    /// Parse a campaign from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CampaignFileConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse {
                error: e,
                path: None,
            })?;

        let heroes = PartySpec::from_config(config.heroes);
        let waves = config.waves.into_iter().map(PartySpec::from_config).collect();
        Self::new(heroes, waves)
    }

    /// The built-in four-wave campaign against the Uncoded One
    pub fn the_final_battle() -> Self {
        use Archetype::*;

        let heroes = PartySpec::new(vec![
            MemberSpec::new(TrueProgrammer),
            MemberSpec::new(VinFletcher),
        ])
        .with_items(vec![
            Consumable::SimulaSoup,
            Consumable::HealthPotion,
            Consumable::RegenPotion,
            Consumable::RegenPotion,
            Consumable::PoisonFlask,
        ])
        .with_gear(vec![Gear::OopsieDaisy]);

        let waves = vec![
            PartySpec::new(vec![
                MemberSpec::new(Skeleton).with_gear(Some(Gear::Dagger)),
                MemberSpec::new(StoneAmarok),
            ])
            .with_items(vec![Consumable::HealthPotion]),
            PartySpec::new(vec![
                MemberSpec::new(Skeleton).named("SKELETON A"),
                MemberSpec::new(Skeleton).named("SKELETON B"),
                MemberSpec::new(Skeleton).named("SKELETON C"),
            ])
            .with_items(vec![
                Consumable::RegenPotion,
                Consumable::PoisonFlask,
                Consumable::PoisonFlask,
            ])
            .with_gear(vec![Gear::Dagger, Gear::Dagger]),
            PartySpec::new(vec![
                MemberSpec::new(StoneAmarok).named("STONE AMAROK A"),
                MemberSpec::new(StoneAmarok).named("STONE AMAROK B"),
            ])
            .with_items(vec![Consumable::HealthPotion, Consumable::HealthPotion]),
            PartySpec::new(vec![
                MemberSpec::new(UncodedOne),
                MemberSpec::new(Skeleton)
                    .named("BONER THE TERRIBLE")
                    .with_gear(Some(Gear::Sword)),
                MemberSpec::new(StoneAmarok).named("POOCH"),
                MemberSpec::new(StoneAmarok).named("SNUFFLES"),
            ]),
        ];

        Campaign { heroes, waves }
    }

    /// Rename the first True Programmer, or the first hero if there is none
    pub fn with_hero_name(mut self, name: impl Into<String>) -> Self {
        let index = self
            .heroes
            .members
            .iter()
            .position(|m| m.archetype == Archetype::TrueProgrammer)
            .unwrap_or(0);
        if let Some(member) = self.heroes.members.get_mut(index) {
            member.name = name.into();
        }
        self
    }

    pub fn heroes(&self) -> &PartySpec {
        &self.heroes
    }

    /// Get a wave by its 1-based number
    pub fn wave(&self, number: u32) -> Option<&PartySpec> {
        let index = (number as usize).checked_sub(1)?;
        self.waves.get(index)
    }

    /// Number of the final boss wave
    pub fn final_wave(&self) -> u32 {
        self.waves.len() as u32
    }

    pub fn wave_count(&self) -> usize {
        self.waves.len()
    }
}

impl Default for Campaign {
    fn default() -> Self {
        Self::the_final_battle()
    }
}
