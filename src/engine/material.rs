//! Raw material cost per process step

use crate::engine::error::CostError;
use crate::entities::facility::Facility;
use crate::entities::part::Assembly;
use crate::entities::process::ProcessStep;
use crate::entities::scenario::MaterialPolicy;

/// Material cost per accepted unit for one step under the scenario's
/// material policy. Steps that do not consume material always cost zero.
///
/// Under `PartBased`, the step's bound part supplies the weight and
/// material; the machine scrap rate is discounted by the material's
/// recycling rate. A material-consuming step without a part is a
/// configuration error.
///
/// Under `AssemblyWeight` (the legacy geometry path), the overall
/// assembly supplies the per-unit mass - density times volume when the
/// volume is known, plate weight times fin count times two otherwise -
/// inflated by the facility scrap fraction.
pub fn material_cost(
    policy: MaterialPolicy,
    annual_volume: f64,
    effective_volume: f64,
    step: &ProcessStep,
    assembly: &Assembly,
    facility: &Facility,
) -> Result<f64, CostError> {
    if !step.material_use {
        return Ok(0.0);
    }

    match policy {
        MaterialPolicy::PartBased => {
            let part = step.part.as_ref().ok_or_else(|| CostError::MissingPart {
                step: step.name.clone(),
            })?;
            let weight_per_part = part.unit_weight();
            let scrap_multiplier = 1.0
                + step.machine.scrap_rate * (1.0 - part.material.recycling_rate);
            let step_volume = effective_volume * step.parts_per_unit;
            let total =
                step_volume * weight_per_part * scrap_multiplier * part.material.price;
            Ok(total / annual_volume)
        }
        MaterialPolicy::AssemblyWeight => {
            let scrap = 1.0 + facility.scrap_fraction;
            let mass_per_unit = if assembly.volume > 0.0 {
                assembly.material.density * assembly.volume * scrap
            } else {
                assembly.plate_weight * assembly.fin_count * 2.0 * scrap
            };
            let total_mass = effective_volume * mass_per_unit;
            Ok(total_mass * assembly.material.price / annual_volume)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fixtures;

    #[test]
    fn test_no_material_use_costs_zero_under_both_policies() {
        let step = fixtures::step("welding");
        let assembly = fixtures::assembly();
        let facility = fixtures::facility();
        for policy in [MaterialPolicy::PartBased, MaterialPolicy::AssemblyWeight] {
            let cost =
                material_cost(policy, 1000.0, 1100.0, &step, &assembly, &facility).unwrap();
            assert_eq!(cost, 0.0);
        }
    }

    #[test]
    fn test_part_based_cost() {
        let mut step = fixtures::step("molding");
        step.material_use = true;
        step.parts_per_unit = 40.0;
        step.part = Some(fixtures::part("plate"));

        let cost = material_cost(
            MaterialPolicy::PartBased,
            1000.0,
            1100.0,
            &step,
            &fixtures::assembly(),
            &fixtures::facility(),
        )
        .unwrap();

        // 1100 * 40 parts * 0.05 kg * (1 + 0.02*(1-0.2)) * $3 / 1000
        let expected = 1100.0 * 40.0 * 0.05 * (1.0 + 0.02 * 0.8) * 3.0 / 1000.0;
        assert!((cost - expected).abs() < 1e-9);
    }

    #[test]
    fn test_part_based_prefers_volume_weight() {
        let mut step = fixtures::step("molding");
        step.material_use = true;
        let mut part = fixtures::part("plate");
        part.volume = 0.001; // 1.2 kg at density 1200
        step.part = Some(part);

        let cost = material_cost(
            MaterialPolicy::PartBased,
            1000.0,
            1000.0,
            &step,
            &fixtures::assembly(),
            &fixtures::facility(),
        )
        .unwrap();
        let expected = 1000.0 * 1.2 * (1.0 + 0.02 * 0.8) * 3.0 / 1000.0;
        assert!((cost - expected).abs() < 1e-9);
    }

    #[test]
    fn test_part_based_without_part_is_fatal() {
        let mut step = fixtures::step("molding");
        step.material_use = true;
        let res = material_cost(
            MaterialPolicy::PartBased,
            1000.0,
            1100.0,
            &step,
            &fixtures::assembly(),
            &fixtures::facility(),
        );
        assert!(matches!(res, Err(CostError::MissingPart { step }) if step == "molding"));
    }

    #[test]
    fn test_assembly_weight_plate_path() {
        let mut step = fixtures::step("molding");
        step.material_use = true;
        let assembly = fixtures::assembly(); // volume 0 -> plate path
        let facility = fixtures::facility();

        let cost = material_cost(
            MaterialPolicy::AssemblyWeight,
            1000.0,
            1100.0,
            &step,
            &assembly,
            &facility,
        )
        .unwrap();

        // 0.012 kg * 40 fins * 2 * 1.05 scrap * 1100 starts * $3 / 1000
        let expected = 0.012 * 40.0 * 2.0 * 1.05 * 1100.0 * 3.0 / 1000.0;
        assert!((cost - expected).abs() < 1e-9);
    }

    #[test]
    fn test_assembly_weight_volume_path() {
        let mut step = fixtures::step("molding");
        step.material_use = true;
        let mut assembly = fixtures::assembly();
        assembly.volume = 0.002;
        let facility = fixtures::facility();

        let cost = material_cost(
            MaterialPolicy::AssemblyWeight,
            1000.0,
            1100.0,
            &step,
            &assembly,
            &facility,
        )
        .unwrap();

        // 1200 kg/m^3 * 0.002 m^3 * 1.05 * 1100 * $3 / 1000
        let expected = 1200.0 * 0.002 * 1.05 * 1100.0 * 3.0 / 1000.0;
        assert!((cost - expected).abs() < 1e-9);
    }
}
