//! Facility sizing and annualized facility cost

use crate::engine::crf::capital_recovery_factor;
use crate::entities::facility::Facility;
use crate::entities::process::ProcessStep;

/// Facility buildout is depreciated over a fixed 20 years.
const BUILDOUT_LIFE_YEARS: f64 = 20.0;

/// Production floor space for a step (m^2): footprint plus working
/// clearance for every machine provisioned.
pub fn floor_space(machine_count: f64, step: &ProcessStep) -> f64 {
    machine_count * (step.machine.floor_space + step.machine.clearance)
}

/// Facility cost per accepted unit: rent plus annualized buildout on the
/// step's floor space.
pub fn facility_cost(annual_volume: f64, floor_space: f64, facility: &Facility) -> f64 {
    let crf = capital_recovery_factor(facility.discount_rate, BUILDOUT_LIFE_YEARS);
    let buildout_rate = crf * facility.buildout_cost;
    floor_space * (facility.rent + buildout_rate) / annual_volume
}
