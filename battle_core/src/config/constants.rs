//! Battle constants configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::ConfigError;

/// Tunable battle constants
///
/// Every field has a default, so a constants file only needs to name what it
/// changes. The battle takes its own copy at construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattleConstants {
    #[serde(default)]
    pub crit: CritConstants,
    #[serde(default)]
    pub damage: DamageConstants,
    #[serde(default)]
    pub status: StatusConstants,
    #[serde(default)]
    pub dodge: DodgeConstants,
}

impl BattleConstants {
    /// Load constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let constants: BattleConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse constants from a TOML string
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        let constants: BattleConstants = super::parse_toml(toml)?;
        constants.validate()?;
        Ok(constants)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.crit.multiplier < 1 {
            return Err(ConfigError::ValidationError(
                "crit.multiplier must be at least 1".to_string(),
            ));
        }
        if self.damage.modifier_cap < 0 {
            return Err(ConfigError::ValidationError(
                "damage.modifier_cap cannot be negative".to_string(),
            ));
        }
        if self.dodge.sides == 0 {
            return Err(ConfigError::ValidationError(
                "dodge.sides must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CritConstants {
    /// Applied to post-modifier damage on a critical hit
    #[serde(default = "default_crit_multiplier")]
    pub multiplier: i32,
}

impl Default for CritConstants {
    fn default() -> Self {
        CritConstants { multiplier: 2 }
    }
}

fn default_crit_multiplier() -> i32 {
    2
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageConstants {
    /// Upper clamp on defense modifier output
    #[serde(default = "default_modifier_cap")]
    pub modifier_cap: i32,
}

impl Default for DamageConstants {
    fn default() -> Self {
        DamageConstants { modifier_cap: 99 }
    }
}

fn default_modifier_cap() -> i32 {
    99
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusConstants {
    #[serde(default = "default_poison_damage")]
    pub poison_damage: i32,
    #[serde(default = "default_regen_heal")]
    pub regen_heal: i32,
    #[serde(default = "default_bleed_damage")]
    pub bleed_damage: i32,
}

impl Default for StatusConstants {
    fn default() -> Self {
        StatusConstants {
            poison_damage: 1,
            regen_heal: 2,
            bleed_damage: 2,
        }
    }
}

fn default_poison_damage() -> i32 {
    1
}
fn default_regen_heal() -> i32 {
    2
}
fn default_bleed_damage() -> i32 {
    2
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DodgeConstants {
    /// Faces on the dodge die
    #[serde(default = "default_dodge_sides")]
    pub sides: u32,
    /// The face that means the hit was dodged
    #[serde(default = "default_dodge_face")]
    pub dodge_face: u32,
}

impl Default for DodgeConstants {
    fn default() -> Self {
        DodgeConstants {
            sides: 5,
            dodge_face: 3,
        }
    }
}

fn default_dodge_sides() -> u32 {
    5
}
fn default_dodge_face() -> u32 {
    3
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_constants() {
        let constants = BattleConstants::default();
        assert_eq!(constants.crit.multiplier, 2);
        assert_eq!(constants.damage.modifier_cap, 99);
        assert_eq!(constants.status.poison_damage, 1);
        assert_eq!(constants.status.regen_heal, 2);
        assert_eq!(constants.status.bleed_damage, 2);
        assert_eq!(constants.dodge.sides, 5);
        assert_eq!(constants.dodge.dodge_face, 3);
    }

    #[test]
    fn test_parse_partial_constants() {
        let toml = r#"
[status]
bleed_damage = 3

[dodge]
sides = 4
"#;
        let constants = BattleConstants::parse(toml).unwrap();
        assert_eq!(constants.status.bleed_damage, 3);
        assert_eq!(constants.status.poison_damage, 1);
        assert_eq!(constants.dodge.sides, 4);
        assert_eq!(constants.dodge.dodge_face, 3);
        assert_eq!(constants.crit, CritConstants::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(BattleConstants::parse("").unwrap(), BattleConstants::default());
    }

    #[test]
    fn test_rejects_zero_crit_multiplier() {
        let err = BattleConstants::parse("[crit]\nmultiplier = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[crit]\nmultiplier = 3\n").unwrap();

        let constants = BattleConstants::load_from_path(file.path()).unwrap();
        assert_eq!(constants.crit.multiplier, 3);
    }

    #[test]
    fn test_load_missing_file() {
        let err = BattleConstants::load_from_path(Path::new("/nonexistent/constants.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
