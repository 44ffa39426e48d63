//! The cost engine
//!
//! Pure, deterministic calculations over a resolved scenario snapshot:
//! capital recovery, effective production volume, the per-step cost
//! functions (equipment, labor, facility, utility, consumables,
//! material), the facility-wide overhead model, proportional overhead
//! distribution, and the aggregator that orchestrates them into a
//! [`aggregate::CostBreakdown`].
//!
//! The only mutation anywhere in the engine is the step-level cache
//! write-back performed by the aggregator, which happens exactly once
//! per run and overwrites on rerun.

pub mod aggregate;
pub mod consumables;
pub mod crf;
pub mod distribute;
pub mod epv;
pub mod equipment;
pub mod error;
pub mod facility;
pub mod labor;
pub mod material;
pub mod overhead;
pub mod table;
pub mod utility;

pub use aggregate::{aggregate, CostBreakdown};
pub use error::CostError;
pub use table::{CostRow, CostTable};

#[cfg(test)]
pub(crate) mod fixtures {
    //! Shared builders for engine unit tests.

    use std::collections::BTreeMap;

    use crate::entities::consumable::{Consumable, ConsumableLifeUnit};
    use crate::entities::facility::Facility;
    use crate::entities::machine::{CostSpec, Machine, MachineLifeUnit};
    use crate::entities::material::Material;
    use crate::entities::overhead::Overhead;
    use crate::entities::part::{Assembly, Part};
    use crate::entities::process::ProcessStep;
    use crate::entities::scenario::{MaterialPolicy, Scenario};

    pub fn machine(name: &str) -> Machine {
        Machine {
            name: name.to_string(),
            price: 100_000.0,
            install_cost: CostSpec::Amount(10_000.0),
            maintenance_cost: CostSpec::Amount(5000.0),
            life: 10.0,
            life_unit: MachineLifeUnit::Years,
            setup_time: 0.25,
            teardown_time: 0.25,
            heat_time: 0.0,
            cool_time: 0.0,
            floor_space: 10.0,
            clearance: 5.0,
            power: 30.0,
            scrap_rate: 0.02,
            accept_rate: 0.98,
            labor_fraction: 0.25,
            consumables: BTreeMap::new(),
        }
    }

    pub fn consumable(name: &str, machine: &str, unit: ConsumableLifeUnit) -> Consumable {
        Consumable {
            name: name.to_string(),
            machine: machine.to_string(),
            price: 500.0,
            life: 1000.0,
            life_unit: unit,
        }
    }

    pub fn step(name: &str) -> ProcessStep {
        ProcessStep {
            name: name.to_string(),
            machine: machine(&format!("{} machine", name)),
            cycle_time: 0.5,
            batch_size: 2.0,
            parts_per_unit: 1.0,
            material_use: false,
            part: None,
            resources: None,
            costs: None,
        }
    }

    pub fn material() -> Material {
        Material {
            name: "polycarbonate".to_string(),
            density: 1200.0,
            price: 3.0,
            recycling_rate: 0.2,
        }
    }

    pub fn part(name: &str) -> Part {
        Part {
            name: name.to_string(),
            parent: None,
            material: material(),
            weight: 0.05,
            length: 0.3,
            width: 0.2,
            height: 0.002,
            volume: 0.0,
            count: 1,
        }
    }

    pub fn assembly() -> Assembly {
        Assembly {
            name: "HX".to_string(),
            material: material(),
            plate_weight: 0.012,
            length: 0.5,
            width: 0.3,
            height: 0.4,
            volume: 0.0,
            fin_count: 40.0,
            parts: BTreeMap::new(),
        }
    }

    pub fn facility() -> Facility {
        Facility {
            operating_hours: 6000.0,
            labor_hours: 1800.0,
            electricity_price: 0.12,
            rent: 180.0,
            discount_rate: 0.08,
            labor_burden: 0.35,
            overhead_fraction: 0.3,
            salary: 45_000.0,
            dedicate_equipment: true,
            dedicate_labor: true,
            scrap_fraction: 0.05,
            recovery_fraction: 0.3,
            buildout_cost: 800.0,
        }
    }

    pub fn overhead() -> Overhead {
        Overhead {
            management_ratio: 0.125,
            management_salary: 110_000.0,
            qa_inspect_fraction: 0.05,
            qa_time: 0.5,
            qa_salary: 55_000.0,
            admin_ratio: 0.1,
            admin_salary: 50_000.0,
            hr_price: 1500.0,
            compliance_cost: 800.0,
            legal_fraction: 0.001,
            legal_price: 350.0,
            insurance_price: 15_000.0,
            accounting_price: 2500.0,
            space_per_employee: 20.0,
            office_life: 10.0,
            office_build_price: 600.0,
            inventory_days: 14.0,
            inventory_stack_height: 2.0,
            misc_space_fraction: 0.2,
            cleaning_price: 2.5,
            supply_price: 600.0,
            it_price: 1200.0,
            crate_price: 35.0,
            building_utility_price: 12.0,
        }
    }

    pub fn scenario(steps: Vec<ProcessStep>) -> Scenario {
        Scenario {
            name: "fixture".to_string(),
            annual_volume: 2000.0,
            material_policy: MaterialPolicy::PartBased,
            assembly: assembly(),
            process: steps,
            facility: facility(),
            overhead: overhead(),
            uncertainty: Vec::new(),
        }
    }
}
