//! Consumable entity - tooling and supplies used up while running a machine

use serde::{Deserialize, Serialize};

/// How a consumable's replacement life is denominated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConsumableLifeUnit {
    /// Replaced after a number of machine operating hours
    #[default]
    #[serde(alias = "hr", alias = "hrs")]
    Hours,
    /// Replaced after a number of parts produced
    #[serde(alias = "part")]
    Parts,
}

impl std::fmt::Display for ConsumableLifeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsumableLifeUnit::Hours => write!(f, "hours"),
            ConsumableLifeUnit::Parts => write!(f, "parts"),
        }
    }
}

impl std::str::FromStr for ConsumableLifeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hours" | "hrs" | "hr" => Ok(ConsumableLifeUnit::Hours),
            "parts" | "part" => Ok(ConsumableLifeUnit::Parts),
            _ => Err(format!(
                "Invalid consumable life unit: {}. Use hours or parts",
                s
            )),
        }
    }
}

/// A consumable tool or supply tied to one machine.
///
/// Multiple consumables may attach to the same machine; within a machine
/// they are keyed by name, so names must be unique per machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consumable {
    /// Consumable name (unique per machine)
    pub name: String,

    /// Name of the machine this consumable is used with
    pub machine: String,

    /// Price per replacement ($)
    pub price: f64,

    /// Replacement life, in the unit given by `life_unit`
    pub life: f64,

    /// Unit for `life`
    #[serde(default)]
    pub life_unit: ConsumableLifeUnit,
}
