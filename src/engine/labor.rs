//! Labor sizing and annualized labor cost

use crate::entities::process::ProcessStep;

/// Operators required for a step.
///
/// Labor tracks the capacity provisioned, not the volume directly: each
/// machine demands attention for `labor_fraction` of the operating year.
/// A dedicated policy staffs whole operators (ceiling); a pooled policy
/// accepts fractional headcount.
pub fn labor_headcount(
    machine_count: f64,
    dedicated: bool,
    operating_hours: f64,
    labor_hours: f64,
    step: &ProcessStep,
) -> f64 {
    let labor_hours_total = operating_hours * step.machine.labor_fraction * machine_count;

    if dedicated {
        (labor_hours_total / labor_hours).ceil()
    } else {
        labor_hours_total / labor_hours
    }
}

/// Burdened labor cost per accepted unit.
pub fn labor_cost(annual_volume: f64, salary: f64, labor_burden: f64, headcount: f64) -> f64 {
    headcount * salary * (1.0 + labor_burden) / annual_volume
}
