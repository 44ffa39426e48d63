//! Parameter sensitivity sweeps

use serde::Serialize;

use crate::engine::aggregate::{aggregate, CostBreakdown};
use crate::engine::error::CostError;
use crate::entities::scenario::Scenario;
use crate::entities::variation::ParamTarget;

/// Cost breakdown with one parameter moved by a percentage.
#[derive(Debug, Clone, Serialize)]
pub struct SensitivityPoint {
    pub step: String,
    pub target: ParamTarget,
    pub change_pct: f64,
    pub breakdown: CostBreakdown,
}

/// Aggregate the scenario with each target parameter of the named step
/// adjusted across a percentage grid.
///
/// For every target and every percentage in `min_pct..=max_pct` at
/// `interval_pct` spacing, an independent scenario copy gets the
/// parameter scaled by `(1 + pct/100)` and is aggregated. The grid
/// always includes `min_pct` and steps until `max_pct` is passed.
pub fn sensitivity(
    scenario: &Scenario,
    step_name: &str,
    targets: &[ParamTarget],
    min_pct: i32,
    max_pct: i32,
    interval_pct: u32,
) -> Result<Vec<SensitivityPoint>, CostError> {
    if interval_pct == 0 {
        return Err(CostError::InvalidInterval);
    }
    let base_step = scenario
        .step(step_name)
        .ok_or_else(|| CostError::UnknownStep(step_name.to_string()))?;

    let mut results = Vec::new();
    for &target in targets {
        let base_value = base_step.param(target);
        let mut pct = min_pct;
        while pct <= max_pct {
            let mut copy = scenario.clone();
            let adjusted = base_value * (1.0 + pct as f64 / 100.0);
            // the step exists: it was just looked up on the original
            if let Some(step) = copy.step_mut(step_name) {
                step.set_param(target, adjusted);
            }
            let breakdown = aggregate(&mut copy)?;
            results.push(SensitivityPoint {
                step: step_name.to_string(),
                target,
                change_pct: pct as f64,
                breakdown,
            });
            pct += interval_pct as i32;
        }
    }
    Ok(results)
}
