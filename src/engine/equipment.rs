//! Equipment sizing and annualized equipment cost

use crate::engine::crf::capital_recovery_factor;
use crate::entities::machine::MachineLifeUnit;
use crate::entities::process::ProcessStep;

/// Machine provisioning for one step at a given gross volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachineUsage {
    /// Machines required; whole under a dedicated policy, fractional
    /// utilization of a pooled fleet otherwise
    pub count: f64,

    /// Total machine operating hours per year for the step
    pub hours: f64,

    /// Gross parts through this step per year
    pub step_volume: f64,
}

/// Size the machine fleet for a step.
///
/// A dedicated policy buys whole machines for this step alone, so the
/// count rounds up; a pooled policy shares machine time fleet-wide and
/// accepts fractional utilization.
pub fn machine_usage(
    dedicated: bool,
    effective_volume: f64,
    operating_hours: f64,
    step: &ProcessStep,
) -> MachineUsage {
    let hours_per_part = step.hours_per_part();
    let annual_capacity = operating_hours / hours_per_part;

    let step_volume = effective_volume * step.parts_per_unit;
    let hours = step_volume * hours_per_part;

    let count = if dedicated {
        (step_volume / annual_capacity).ceil()
    } else {
        step_volume / annual_capacity
    };

    MachineUsage {
        count,
        hours,
        step_volume,
    }
}

/// Annualized equipment cost per accepted unit for a step.
///
/// The machine's capital is recovered over its stated life; a life
/// denominated in parts converts to years through the machine's annual
/// throughput. Install and maintenance overrides resolve against the
/// purchase price.
pub fn equipment_cost(
    operating_hours: f64,
    annual_volume: f64,
    machine_count: f64,
    discount_rate: f64,
    step: &ProcessStep,
) -> f64 {
    let machine = &step.machine;
    let annual_throughput = operating_hours / step.hours_per_part();

    let life_years = match machine.life_unit {
        MachineLifeUnit::Years => machine.life,
        MachineLifeUnit::Parts => machine.life / annual_throughput,
    };

    let crf = capital_recovery_factor(discount_rate, life_years);
    let annual_cost = crf * (machine.price + machine.install_cost.resolve(machine.price))
        + machine.maintenance_cost.resolve(machine.price);

    machine_count * annual_cost / annual_volume
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fixtures;

    #[test]
    fn test_machine_usage_dedicated_rounds_up() {
        let step = fixtures::step("molding");
        // hours/part = (0.5 + 0.25 + 0.25) / 2 = 0.5; capacity = 12000
        let usage = machine_usage(true, 13_000.0, 6000.0, &step);
        assert_eq!(usage.count, 2.0);
        assert!((usage.step_volume - 13_000.0).abs() < 1e-10);
        assert!((usage.hours - 6500.0).abs() < 1e-10);
    }

    #[test]
    fn test_machine_usage_pooled_is_fractional() {
        let step = fixtures::step("molding");
        let usage = machine_usage(false, 13_000.0, 6000.0, &step);
        assert!((usage.count - 13_000.0 / 12_000.0).abs() < 1e-10);
    }

    #[test]
    fn test_dedicated_count_never_below_pooled() {
        let step = fixtures::step("molding");
        for volume in [100.0, 5000.0, 12_000.0, 50_000.0] {
            let dedicated = machine_usage(true, volume, 6000.0, &step);
            let pooled = machine_usage(false, volume, 6000.0, &step);
            assert!(dedicated.count >= pooled.count);
            assert_eq!(dedicated.count, dedicated.count.trunc());
        }
    }

    #[test]
    fn test_parts_per_unit_scales_volume() {
        let mut step = fixtures::step("molding");
        step.parts_per_unit = 40.0;
        let usage = machine_usage(false, 1000.0, 6000.0, &step);
        assert!((usage.step_volume - 40_000.0).abs() < 1e-10);
    }

    #[test]
    fn test_equipment_cost_years_life() {
        let step = fixtures::step("molding");
        // crf(0.08, 10) * (100000 + 10000) + 5000, one machine, 1000 units
        let crf = capital_recovery_factor(0.08, 10.0);
        let expected = (crf * 110_000.0 + 5000.0) / 1000.0;
        let cost = equipment_cost(6000.0, 1000.0, 1.0, 0.08, &step);
        assert!((cost - expected).abs() < 1e-9);
    }

    #[test]
    fn test_equipment_cost_parts_life_converts_to_years() {
        let mut step = fixtures::step("molding");
        step.machine.life = 24_000.0;
        step.machine.life_unit = MachineLifeUnit::Parts;
        // throughput = 6000 / 0.5 = 12000 parts/yr, so life = 2 years
        let crf = capital_recovery_factor(0.08, 2.0);
        let expected = (crf * 110_000.0 + 5000.0) / 1000.0;
        let cost = equipment_cost(6000.0, 1000.0, 1.0, 0.08, &step);
        assert!((cost - expected).abs() < 1e-9);
    }

    #[test]
    fn test_equipment_cost_scales_with_count() {
        let step = fixtures::step("molding");
        let one = equipment_cost(6000.0, 1000.0, 1.0, 0.08, &step);
        let three = equipment_cost(6000.0, 1000.0, 3.0, 0.08, &step);
        assert!((three - 3.0 * one).abs() < 1e-9);
    }
}
