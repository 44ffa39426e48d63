//! Energy cost per process step

use crate::entities::process::ProcessStep;

/// Electricity cost per accepted unit: machine operating hours times the
/// machine's draw times the facility electricity price.
pub fn utility_cost(
    annual_volume: f64,
    machine_hours: f64,
    electricity_price: f64,
    step: &ProcessStep,
) -> f64 {
    machine_hours * step.machine.power * electricity_price / annual_volume
}
