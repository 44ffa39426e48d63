//! Facility entity - plant-wide operating assumptions

use serde::{Deserialize, Serialize};

/// Facility-wide hours, prices, financial assumptions, and resource
/// dedication policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    /// Machine-available hours per year
    pub operating_hours: f64,

    /// Working hours per employee per year
    pub labor_hours: f64,

    /// Electricity price ($/kWh)
    pub electricity_price: f64,

    /// Floor space rent ($/m^2/yr)
    pub rent: f64,

    /// Discount rate used for capital recovery, in [0, 1]
    pub discount_rate: f64,

    /// Labor burden as a fraction of salary (benefits, taxes)
    #[serde(default)]
    pub labor_burden: f64,

    /// Overhead as a fraction of direct cost. Legacy simple overhead
    /// model; the itemized overhead inputs are used instead.
    #[serde(default)]
    pub overhead_fraction: f64,

    /// Production labor annual salary ($)
    pub salary: f64,

    /// Buy whole machines dedicated to each step, rather than sharing a
    /// pooled fleet at fractional utilization
    #[serde(default)]
    pub dedicate_equipment: bool,

    /// Staff whole operators per step, rather than pooling fractional
    /// headcount
    #[serde(default)]
    pub dedicate_labor: bool,

    /// Fraction of raw material scrapped, for assembly-weight material
    /// costing, in [0, 1]
    #[serde(default)]
    pub scrap_fraction: f64,

    /// Fraction of scrapped material recovered, in [0, 1]
    #[serde(default)]
    pub recovery_fraction: f64,

    /// Facility buildout cost ($/m^2), annualized over a fixed 20 years
    #[serde(default)]
    pub buildout_cost: f64,
}
