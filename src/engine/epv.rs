//! Effective production volume

use crate::engine::error::CostError;
use crate::entities::process::ProcessStep;

/// Gross annual starts required to yield `annual_volume` accepted units,
/// compounding reject rates across every process step.
///
/// Each step passes only `accept_rate` of its output, so the required
/// starts are `annual_volume / prod(accept_rate)`, rounded up to whole
/// units. Any non-positive acceptance rate would make the division
/// degenerate and is rejected as a configuration error.
pub fn effective_volume(annual_volume: f64, process: &[ProcessStep]) -> Result<f64, CostError> {
    if process.is_empty() {
        return Err(CostError::EmptyProcess);
    }
    if annual_volume <= 0.0 {
        return Err(CostError::InvalidVolume(annual_volume));
    }

    let mut acceptance = 1.0;
    for step in process {
        let rate = step.machine.accept_rate;
        if rate <= 0.0 {
            return Err(CostError::AcceptanceRate {
                step: step.name.clone(),
                rate,
            });
        }
        acceptance *= rate;
    }

    Ok((annual_volume / acceptance).ceil())
}
