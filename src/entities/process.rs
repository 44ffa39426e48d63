//! Process step entity - one operation in the manufacturing sequence

use serde::{Deserialize, Serialize};

use crate::entities::machine::{CostSpec, Machine};
use crate::entities::part::Part;
use crate::entities::variation::{MachineParam, ParamTarget, StepParam};

/// Provisioned resources for a step, written by the cost aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StepResources {
    /// Machines provisioned (whole under a dedicated policy, fractional
    /// under a pooled one)
    pub machine_count: f64,

    /// Total machine operating hours per year
    pub machine_hours: f64,

    /// Operators provisioned
    pub headcount: f64,

    /// Floor space including clearance (m^2)
    pub floor_space: f64,
}

/// Per-unit cost of a step by category, written by the cost aggregator.
///
/// `overhead` starts at zero and is filled in by overhead distribution,
/// which also folds the allocation into `total`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StepCost {
    pub equipment: f64,
    pub labor: f64,
    pub facility: f64,
    pub utility: f64,
    pub consumables: f64,
    pub overhead: f64,
    pub total: f64,
}

/// One step of the manufacturing process.
///
/// Each step carries its own copy of the machine definition along with
/// the cycle time and batch size that are specific to the step, so two
/// steps backed by the same machine type stay independent.
///
/// `resources` and `costs` are populate-after-compute caches: the cost
/// aggregator writes them exactly once per run and overwrites them on
/// rerun. They are never inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    /// Step name (unique within a scenario, order-significant)
    pub name: String,

    /// Machine this step runs on
    pub machine: Machine,

    /// Cycle time per batch (hrs)
    pub cycle_time: f64,

    /// Parts processed per cycle
    #[serde(default = "default_batch_size")]
    pub batch_size: f64,

    /// Parts this step produces per finished unit of product
    #[serde(default = "default_parts_per_unit")]
    pub parts_per_unit: f64,

    /// Whether this step consumes raw material
    #[serde(default)]
    pub material_use: bool,

    /// Part consumed by this step, for part-based material costing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part: Option<Part>,

    /// Resource cache, written by the aggregator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<StepResources>,

    /// Cost cache, written by the aggregator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub costs: Option<StepCost>,
}

fn default_batch_size() -> f64 {
    1.0
}

fn default_parts_per_unit() -> f64 {
    1.0
}

impl ProcessStep {
    /// Read the current value of a perturbable parameter.
    ///
    /// Machine cost overrides read as currency resolved against the
    /// machine price.
    pub fn param(&self, target: ParamTarget) -> f64 {
        match target {
            ParamTarget::Step(p) => match p {
                StepParam::CycleTime => self.cycle_time,
                StepParam::BatchSize => self.batch_size,
                StepParam::PartsPerUnit => self.parts_per_unit,
            },
            ParamTarget::Machine(p) => {
                let m = &self.machine;
                match p {
                    MachineParam::Price => m.price,
                    MachineParam::InstallCost => m.install_cost.resolve(m.price),
                    MachineParam::MaintenanceCost => m.maintenance_cost.resolve(m.price),
                    MachineParam::SetupTime => m.setup_time,
                    MachineParam::TeardownTime => m.teardown_time,
                    MachineParam::HeatTime => m.heat_time,
                    MachineParam::CoolTime => m.cool_time,
                    MachineParam::FloorSpace => m.floor_space,
                    MachineParam::Clearance => m.clearance,
                    MachineParam::Power => m.power,
                    MachineParam::ScrapRate => m.scrap_rate,
                    MachineParam::AcceptRate => m.accept_rate,
                    MachineParam::LaborFraction => m.labor_fraction,
                }
            }
        }
    }

    /// Set a perturbable parameter to an absolute value.
    ///
    /// Machine cost overrides are written back as absolute currency
    /// amounts, replacing any fractional or percentage form.
    pub fn set_param(&mut self, target: ParamTarget, value: f64) {
        match target {
            ParamTarget::Step(p) => match p {
                StepParam::CycleTime => self.cycle_time = value,
                StepParam::BatchSize => self.batch_size = value,
                StepParam::PartsPerUnit => self.parts_per_unit = value,
            },
            ParamTarget::Machine(p) => {
                let m = &mut self.machine;
                match p {
                    MachineParam::Price => m.price = value,
                    MachineParam::InstallCost => m.install_cost = CostSpec::Amount(value),
                    MachineParam::MaintenanceCost => m.maintenance_cost = CostSpec::Amount(value),
                    MachineParam::SetupTime => m.setup_time = value,
                    MachineParam::TeardownTime => m.teardown_time = value,
                    MachineParam::HeatTime => m.heat_time = value,
                    MachineParam::CoolTime => m.cool_time = value,
                    MachineParam::FloorSpace => m.floor_space = value,
                    MachineParam::Clearance => m.clearance = value,
                    MachineParam::Power => m.power = value,
                    MachineParam::ScrapRate => m.scrap_rate = value,
                    MachineParam::AcceptRate => m.accept_rate = value,
                    MachineParam::LaborFraction => m.labor_fraction = value,
                }
            }
        }
    }

    /// Machine hours to run one batch, including setup, teardown, heat,
    /// and cool time.
    pub fn hours_per_batch(&self) -> f64 {
        self.cycle_time
            + self.machine.setup_time
            + self.machine.teardown_time
            + self.machine.heat_time
            + self.machine.cool_time
    }

    /// Machine hours per part produced.
    pub fn hours_per_part(&self) -> f64 {
        self.hours_per_batch() / self.batch_size
    }
}
