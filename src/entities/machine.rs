//! Machine entity - production equipment definitions

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::consumable::Consumable;

/// How a machine's depreciation life is denominated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MachineLifeUnit {
    /// Depreciated over calendar years
    #[default]
    #[serde(alias = "yrs", alias = "year")]
    Years,
    /// Depreciated over a number of parts produced; converted to years
    /// using the machine's annual throughput
    #[serde(alias = "part")]
    Parts,
}

impl std::fmt::Display for MachineLifeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MachineLifeUnit::Years => write!(f, "years"),
            MachineLifeUnit::Parts => write!(f, "parts"),
        }
    }
}

/// A machine cost override that may be stated three ways: an absolute
/// currency amount, a fraction in (0, 1) of the machine purchase price, or
/// a percentage string such as `"10%"`.
///
/// Text that does not parse as a percentage resolves to 0; the scenario
/// loader warns about such values up front so the engine itself stays
/// silent and deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CostSpec {
    Amount(f64),
    Text(String),
}

impl Default for CostSpec {
    fn default() -> Self {
        CostSpec::Amount(0.0)
    }
}

impl CostSpec {
    /// Resolve to a currency amount against the machine purchase price.
    pub fn resolve(&self, price: f64) -> f64 {
        match self {
            CostSpec::Amount(v) => {
                if *v > 0.0 && *v < 1.0 {
                    v * price
                } else {
                    *v
                }
            }
            CostSpec::Text(s) => match parse_percent(s) {
                Some(frac) => frac * price,
                None => 0.0,
            },
        }
    }

    /// True when the spec is a text form that will resolve to 0.
    pub fn is_malformed(&self) -> bool {
        matches!(self, CostSpec::Text(s) if parse_percent(s).is_none())
    }
}

fn parse_percent(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    let digits = trimmed.strip_suffix('%')?;
    digits.trim().parse::<f64>().ok().map(|pct| pct / 100.0)
}

/// A piece of production equipment.
///
/// One machine definition may back several process steps; each step
/// carries its own copy along with its own cycle time and batch size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    /// Machine name
    #[serde(default)]
    pub name: String,

    /// Purchase price ($)
    pub price: f64,

    /// Installation cost: absolute $, fraction of price, or "N%"
    #[serde(default)]
    pub install_cost: CostSpec,

    /// Annual maintenance cost: absolute $, fraction of price, or "N%"
    #[serde(default)]
    pub maintenance_cost: CostSpec,

    /// Depreciation life, in the unit given by `life_unit`
    pub life: f64,

    /// Unit for `life`
    #[serde(default)]
    pub life_unit: MachineLifeUnit,

    /// Setup time per batch (hrs)
    #[serde(default)]
    pub setup_time: f64,

    /// Teardown time per batch (hrs)
    #[serde(default)]
    pub teardown_time: f64,

    /// Heat-up time per batch (hrs)
    #[serde(default)]
    pub heat_time: f64,

    /// Cool-down time per batch (hrs)
    #[serde(default)]
    pub cool_time: f64,

    /// Machine footprint (m^2)
    #[serde(default)]
    pub floor_space: f64,

    /// Working clearance around the machine (m^2)
    #[serde(default)]
    pub clearance: f64,

    /// Electricity consumption while running (kW)
    #[serde(default)]
    pub power: f64,

    /// Fraction of input material scrapped, in [0, 1]
    #[serde(default)]
    pub scrap_rate: f64,

    /// Fraction of produced parts that pass inspection, in (0, 1]
    pub accept_rate: f64,

    /// Fraction of a cycle that requires operator attention, in [0, 1]
    #[serde(default)]
    pub labor_fraction: f64,

    /// Consumables used by this machine, keyed by consumable name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub consumables: BTreeMap<String, Consumable>,
}

impl Machine {
    /// Attach a consumable, replacing any existing one with the same name.
    pub fn add_consumable(&mut self, consumable: Consumable) {
        self.consumables
            .insert(consumable.name.clone(), consumable);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::consumable::ConsumableLifeUnit;

    #[test]
    fn test_cost_spec_absolute() {
        assert_eq!(CostSpec::Amount(5000.0).resolve(100_000.0), 5000.0);
        assert_eq!(CostSpec::Amount(0.0).resolve(100_000.0), 0.0);
        // 1.0 exactly is an absolute dollar, not a fraction
        assert_eq!(CostSpec::Amount(1.0).resolve(100_000.0), 1.0);
    }

    #[test]
    fn test_cost_spec_fraction_of_price() {
        assert!((CostSpec::Amount(0.05).resolve(100_000.0) - 5000.0).abs() < 1e-10);
    }

    #[test]
    fn test_cost_spec_percent_string() {
        assert!((CostSpec::Text("10%".to_string()).resolve(250_000.0) - 25_000.0).abs() < 1e-10);
        assert!((CostSpec::Text(" 7.5 % ".to_string()).resolve(1000.0) - 75.0).abs() < 1e-10);
    }

    #[test]
    fn test_cost_spec_malformed_resolves_to_zero() {
        let bad = CostSpec::Text("ten percent".to_string());
        assert!(bad.is_malformed());
        assert_eq!(bad.resolve(100_000.0), 0.0);

        let no_suffix = CostSpec::Text("10".to_string());
        assert!(no_suffix.is_malformed());
        assert_eq!(no_suffix.resolve(100_000.0), 0.0);
    }

    #[test]
    fn test_cost_spec_untagged_yaml() {
        let m: Machine = serde_yml::from_str(
            "price: 185000\ninstall_cost: \"15%\"\nmaintenance_cost: 0.04\nlife: 10\naccept_rate: 0.98\n",
        )
        .unwrap();
        assert!((m.install_cost.resolve(m.price) - 27_750.0).abs() < 1e-9);
        assert!((m.maintenance_cost.resolve(m.price) - 7400.0).abs() < 1e-9);
        assert_eq!(m.life_unit, MachineLifeUnit::Years);
    }

    #[test]
    fn test_add_consumable_replaces_by_name() {
        let mut m: Machine = serde_yml::from_str(
            "price: 1000\nlife: 5\naccept_rate: 1.0\n",
        )
        .unwrap();
        m.add_consumable(Consumable {
            name: "die".to_string(),
            machine: "press".to_string(),
            price: 100.0,
            life: 1000.0,
            life_unit: ConsumableLifeUnit::Parts,
        });
        m.add_consumable(Consumable {
            name: "die".to_string(),
            machine: "press".to_string(),
            price: 150.0,
            life: 1000.0,
            life_unit: ConsumableLifeUnit::Parts,
        });
        assert_eq!(m.consumables.len(), 1);
        assert_eq!(m.consumables["die"].price, 150.0);
    }
}
