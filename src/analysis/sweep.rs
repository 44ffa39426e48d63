//! Cost vs. annual production volume

use serde::Serialize;

use crate::engine::aggregate::{aggregate, CostBreakdown};
use crate::engine::error::CostError;
use crate::entities::scenario::Scenario;

/// Cost breakdown at one annual volume.
#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint {
    pub volume: f64,
    pub breakdown: CostBreakdown,
}

/// A log-spaced set of annual volumes between `min` and `max`, rounded
/// to whole units with duplicates removed.
pub fn volume_range(min: f64, max: f64, points: usize) -> Vec<f64> {
    if points <= 1 {
        return vec![min.round()];
    }
    let (log_min, log_max) = (min.ln(), max.ln());
    let step = (log_max - log_min) / (points - 1) as f64;

    let mut volumes: Vec<f64> = Vec::with_capacity(points);
    for i in 0..points {
        let v = (log_min + step * i as f64).exp().round();
        if volumes.last() != Some(&v) {
            volumes.push(v);
        }
    }
    volumes
}

/// Aggregate the scenario at every volume in a log-spaced range.
///
/// Each point runs on an independent copy of the scenario, so the input
/// snapshot (and its step caches) is untouched.
pub fn volume_sweep(
    scenario: &Scenario,
    min: f64,
    max: f64,
    points: usize,
) -> Result<Vec<SweepPoint>, CostError> {
    if min < 1.0 || min > max {
        return Err(CostError::InvalidRange { min, max });
    }

    let mut results = Vec::new();
    for volume in volume_range(min, max, points) {
        let mut copy = scenario.with_volume(volume);
        let breakdown = aggregate(&mut copy)?;
        results.push(SweepPoint { volume, breakdown });
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fixtures;

    fn sweep_scenario() -> Scenario {
        let mut step = fixtures::step("Molding");
        step.material_use = true;
        step.parts_per_unit = 40.0;
        step.part = Some(fixtures::part("plate"));
        fixtures::scenario(vec![step, fixtures::step("Assembly")])
    }

    #[test]
    fn test_volume_range_bounds_and_order() {
        let range = volume_range(10.0, 10_000.0, 50);
        assert_eq!(*range.first().unwrap(), 10.0);
        assert_eq!(*range.last().unwrap(), 10_000.0);
        assert!(range.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_volume_range_dedupes_small_spans() {
        // 100 points between 10 and 20 collapses to far fewer integers
        let range = volume_range(10.0, 20.0, 100);
        assert!(range.len() <= 11);
        assert!(range.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_invalid_range_is_fatal() {
        let scenario = sweep_scenario();
        assert!(matches!(
            volume_sweep(&scenario, 0.0, 100.0, 10),
            Err(CostError::InvalidRange { .. })
        ));
        assert!(matches!(
            volume_sweep(&scenario, 500.0, 100.0, 10),
            Err(CostError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_sweep_leaves_input_scenario_untouched() {
        let scenario = sweep_scenario();
        let before = scenario.clone();
        volume_sweep(&scenario, 100.0, 1000.0, 5).unwrap();
        assert_eq!(scenario, before);
    }

    #[test]
    fn test_fixed_costs_amortize_with_volume() {
        // economies of scale: equipment, facility, and overhead per unit
        // fall as volume rises, while variable categories stay flat
        let scenario = sweep_scenario();
        let points = volume_sweep(&scenario, 200.0, 100_000.0, 12).unwrap();
        let first = &points.first().unwrap().breakdown;
        let last = &points.last().unwrap().breakdown;
        assert!(last.equipment < first.equipment);
        assert!(last.facility < first.facility);
        assert!(last.overhead < first.overhead);
        // variable costs flat within the rounding noise from the ceil on EPV
        assert!((first.material - last.material).abs() / first.material < 0.02);
        assert!((first.utility - last.utility).abs() / first.utility < 0.02);
    }

    #[test]
    fn test_pooled_fleet_costs_never_rise_with_volume() {
        // with fractional (pooled) machines and labor there are no
        // step-function jumps, so per-unit fixed costs are non-increasing
        // point to point up to EPV rounding
        let mut scenario = sweep_scenario();
        scenario.facility.dedicate_equipment = false;
        scenario.facility.dedicate_labor = false;
        let points = volume_sweep(&scenario, 200.0, 100_000.0, 20).unwrap();
        for pair in points.windows(2) {
            let (lo, hi) = (&pair[0].breakdown, &pair[1].breakdown);
            assert!(hi.equipment <= lo.equipment * 1.02);
            assert!(hi.facility <= lo.facility * 1.02);
        }
    }
}
