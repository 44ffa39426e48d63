//! Consumable replacement cost per process step

use crate::entities::consumable::ConsumableLifeUnit;
use crate::entities::process::ProcessStep;

/// Consumable cost per accepted unit, summed over every consumable bound
/// to the step's machine.
///
/// An hours-based life is drawn down by machine operating hours; a
/// parts-based life by gross parts through the step.
pub fn consumables_cost(
    annual_volume: f64,
    step_volume: f64,
    machine_hours: f64,
    step: &ProcessStep,
) -> f64 {
    let mut total = 0.0;
    for consumable in step.machine.consumables.values() {
        let replacements = match consumable.life_unit {
            ConsumableLifeUnit::Hours => machine_hours / consumable.life,
            ConsumableLifeUnit::Parts => step_volume / consumable.life,
        };
        total += replacements * consumable.price;
    }
    total / annual_volume
}
