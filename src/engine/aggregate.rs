//! Cost aggregation - orchestrates the per-step cost functions into a
//! per-unit cost breakdown

use serde::Serialize;

use crate::engine::consumables::consumables_cost;
use crate::engine::distribute::distribute_overhead;
use crate::engine::epv::effective_volume;
use crate::engine::equipment::{equipment_cost, machine_usage};
use crate::engine::error::CostError;
use crate::engine::facility::{facility_cost, floor_space};
use crate::engine::labor::{labor_cost, labor_headcount};
use crate::engine::material::material_cost;
use crate::engine::overhead::overhead_cost;
use crate::engine::utility::utility_cost;
use crate::entities::process::{StepCost, StepResources};
use crate::entities::scenario::Scenario;

/// Per-unit cost of one produced unit, broken down by category and by
/// process step.
///
/// Created fresh by each [`aggregate`] call and never mutated afterward.
/// `cost_per_kw` and `cost_per_ua` are normalizations downstream tooling
/// may fill in; the engine leaves them unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub material: f64,
    pub equipment: f64,
    pub labor: f64,
    pub overhead: f64,
    pub utility: f64,
    pub facility: f64,
    pub consumables: f64,

    /// Per-step totals with allocated overhead, in process order
    pub step_totals: Vec<(String, f64)>,

    /// Grand per-unit cost: the sum of the seven categories
    pub total: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_per_kw: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_per_ua: Option<f64>,
}

/// Run the full cost pipeline over a scenario.
///
/// Computes the effective production volume once, then sizes and costs
/// every step in process order, accumulating category totals and writing
/// each step's resource and cost caches. After the loop the facility
/// overhead is computed from the aggregated headcount and floor space
/// and distributed across steps in proportion to their direct cost.
///
/// Rerunning on the same scenario overwrites the step caches; it never
/// accumulates into them.
pub fn aggregate(scenario: &mut Scenario) -> Result<CostBreakdown, CostError> {
    let annual_volume = scenario.annual_volume;
    let eff_volume = effective_volume(annual_volume, &scenario.process)?;

    let facility = &scenario.facility;
    let assembly = &scenario.assembly;
    let policy = scenario.material_policy;

    let mut material = 0.0;
    let mut equipment = 0.0;
    let mut labor = 0.0;
    let mut utility = 0.0;
    let mut fac = 0.0;
    let mut consumables = 0.0;
    let mut total_headcount = 0.0;
    let mut total_floor_space = 0.0;

    for step in scenario.process.iter_mut() {
        let usage = machine_usage(
            facility.dedicate_equipment,
            eff_volume,
            facility.operating_hours,
            step,
        );

        let step_equipment = equipment_cost(
            facility.operating_hours,
            annual_volume,
            usage.count,
            facility.discount_rate,
            step,
        );
        let step_consumables =
            consumables_cost(annual_volume, usage.step_volume, usage.hours, step);

        let headcount = labor_headcount(
            usage.count,
            facility.dedicate_labor,
            facility.operating_hours,
            facility.labor_hours,
            step,
        );
        let step_labor = labor_cost(annual_volume, facility.salary, facility.labor_burden, headcount);

        let space = floor_space(usage.count, step);
        let step_facility = facility_cost(annual_volume, space, facility);

        let step_utility =
            utility_cost(annual_volume, usage.hours, facility.electricity_price, step);

        let step_material =
            material_cost(policy, annual_volume, eff_volume, step, assembly, facility)?;

        let direct =
            step_equipment + step_labor + step_facility + step_utility + step_consumables;

        step.resources = Some(StepResources {
            machine_count: usage.count,
            machine_hours: usage.hours,
            headcount,
            floor_space: space,
        });
        step.costs = Some(StepCost {
            equipment: step_equipment,
            labor: step_labor,
            facility: step_facility,
            utility: step_utility,
            consumables: step_consumables,
            overhead: 0.0,
            total: direct,
        });

        material += step_material;
        equipment += step_equipment;
        labor += step_labor;
        utility += step_utility;
        fac += step_facility;
        consumables += step_consumables;
        total_headcount += headcount;
        total_floor_space += space;
    }

    let overhead = overhead_cost(
        &scenario.overhead,
        assembly,
        total_headcount,
        eff_volume,
        facility.labor_hours,
        annual_volume,
        facility.rent,
        total_floor_space,
        facility.discount_rate,
        facility.salary,
    )
    .per_unit(annual_volume);

    let step_totals = distribute_overhead(overhead, &mut scenario.process)?;

    let total = material + equipment + labor + overhead + utility + fac + consumables;

    Ok(CostBreakdown {
        material,
        equipment,
        labor,
        overhead,
        utility,
        facility: fac,
        consumables,
        step_totals,
        total,
        cost_per_kw: None,
        cost_per_ua: None,
    })
}
