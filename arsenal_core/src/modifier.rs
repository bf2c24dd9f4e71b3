use serde::{Deserialize, Serialize};
use std::fmt;

/// Permanent defensive trait fixed on a character at creation
///
/// The damage math lives in `battle_core::defense`; this is only the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefenseModifier {
    /// Flat reduction against everything
    StoneArmor,
    /// Flat reduction against Decoding damage only
    ObjectSight,
    /// Chance to negate a hit entirely
    Dodge,
}

impl DefenseModifier {
    pub fn name(self) -> &'static str {
        match self {
            DefenseModifier::StoneArmor => "STONE ARMOR",
            DefenseModifier::ObjectSight => "OBJECT SIGHT",
            DefenseModifier::Dodge => "DODGE",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DefenseModifier::StoneArmor => {
                "Magically-enhanced, rocky skin that reduces ALL incoming damage by 1."
            }
            DefenseModifier::ObjectSight => {
                "The ability to perceive the types and objects that make up the world. Grants resistance to DECODING damage."
            }
            DefenseModifier::Dodge => "Vin be nimble, Vin be quick, dodge your hit and punch your [CENSORED]",
        }
    }

    /// Flat amount removed from qualifying damage
    pub fn reduction(self) -> i32 {
        match self {
            DefenseModifier::StoneArmor => 1,
            DefenseModifier::ObjectSight => 2,
            DefenseModifier::Dodge => 0,
        }
    }
}

impl fmt::Display for DefenseModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
