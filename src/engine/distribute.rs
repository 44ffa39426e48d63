//! Proportional overhead distribution across process steps

use crate::engine::error::CostError;
use crate::entities::process::ProcessStep;

/// Allocate the facility overhead across steps in proportion to each
/// step's share of the direct (non-overhead, non-material) cost, and
/// fold the allocation into the step cost caches.
///
/// Returns the per-step totals with overhead included, in process order.
/// The allocation is total-preserving: the shares sum to the overhead
/// passed in. If every step has zero direct cost there is no defined
/// distribution and the call fails.
pub fn distribute_overhead(
    overhead_per_unit: f64,
    process: &mut [ProcessStep],
) -> Result<Vec<(String, f64)>, CostError> {
    let mut direct_total = 0.0;
    for step in process.iter() {
        let costs = step.costs.as_ref().ok_or_else(|| CostError::MissingStepCost {
            step: step.name.clone(),
        })?;
        direct_total += costs.total;
    }

    if direct_total == 0.0 {
        return Err(CostError::NothingToDistribute);
    }

    let mut allocated = Vec::with_capacity(process.len());
    for step in process.iter_mut() {
        let costs = step.costs.as_mut().ok_or_else(|| CostError::MissingStepCost {
            step: step.name.clone(),
        })?;
        let share = costs.total / direct_total * overhead_per_unit;
        costs.overhead = share;
        costs.total += share;
        allocated.push((step.name.clone(), costs.total));
    }

    Ok(allocated)
}
