//! Overhead entity - coefficients for the facility-wide indirect cost model

use serde::{Deserialize, Serialize};

/// Inputs to the itemized overhead cost model.
///
/// Every coefficient defaults to zero so scenario files only need to
/// state the terms they care about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Overhead {
    /// Ratio of managers to production laborers, in [0, 1]
    pub management_ratio: f64,

    /// Manager annual salary ($)
    pub management_salary: f64,

    /// Fraction of finished parts given a QA inspection, in [0, 1]
    pub qa_inspect_fraction: f64,

    /// Time to inspect one part (hrs)
    pub qa_time: f64,

    /// QA inspector annual salary ($)
    pub qa_salary: f64,

    /// Ratio of administrative staff to production laborers, in [0, 1]
    pub admin_ratio: f64,

    /// Administrative staff annual salary ($)
    pub admin_salary: f64,

    /// HR services cost per employee per year ($)
    pub hr_price: f64,

    /// Regulatory compliance cost per employee per year ($)
    pub compliance_cost: f64,

    /// Legal services required per unit produced (hrs)
    pub legal_fraction: f64,

    /// Legal services rate ($/hr)
    pub legal_price: f64,

    /// Annual insurance cost ($)
    pub insurance_price: f64,

    /// Monthly accounting cost ($)
    pub accounting_price: f64,

    /// Office space per office employee (m^2)
    pub space_per_employee: f64,

    /// Office buildout depreciation life (yrs)
    pub office_life: f64,

    /// Office buildout cost per office employee ($)
    pub office_build_price: f64,

    /// Days of finished inventory held on site
    pub inventory_days: f64,

    /// Height to which finished units are stacked in inventory (m)
    pub inventory_stack_height: f64,

    /// Miscellaneous space (hallways, storage, bathrooms) as a fraction
    /// of office + inventory + production space
    pub misc_space_fraction: f64,

    /// Monthly cleaning cost ($/m^2)
    pub cleaning_price: f64,

    /// Office supplies cost per employee per year ($)
    pub supply_price: f64,

    /// IT equipment and software cost per employee per year ($)
    pub it_price: f64,

    /// Packing crate cost per shipped unit ($)
    pub crate_price: f64,

    /// General building utilities (lighting, water, trash) ($/m^2/yr)
    pub building_utility_price: f64,
}
