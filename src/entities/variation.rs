//! Parameter variation targets and input uncertainty declarations
//!
//! Sensitivity sweeps and Monte Carlo sampling both perturb named
//! parameters of a process step or its machine. The target is an explicit
//! tagged union resolved when the scenario is configured, never by
//! runtime attribute lookup.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A perturbable parameter on a process step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepParam {
    CycleTime,
    BatchSize,
    PartsPerUnit,
}

/// A perturbable parameter on a step's machine.
///
/// `InstallCost` and `MaintenanceCost` read as resolved currency amounts
/// and write back as absolute amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineParam {
    Price,
    InstallCost,
    MaintenanceCost,
    SetupTime,
    TeardownTime,
    HeatTime,
    CoolTime,
    FloorSpace,
    Clearance,
    Power,
    ScrapRate,
    AcceptRate,
    LaborFraction,
}

/// Which object a varied parameter lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamTarget {
    Step(StepParam),
    Machine(MachineParam),
}

impl std::fmt::Display for ParamTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamTarget::Step(p) => write!(f, "step.{}", step_param_name(*p)),
            ParamTarget::Machine(p) => write!(f, "machine.{}", machine_param_name(*p)),
        }
    }
}

fn step_param_name(p: StepParam) -> &'static str {
    match p {
        StepParam::CycleTime => "cycle_time",
        StepParam::BatchSize => "batch_size",
        StepParam::PartsPerUnit => "parts_per_unit",
    }
}

fn machine_param_name(p: MachineParam) -> &'static str {
    match p {
        MachineParam::Price => "price",
        MachineParam::InstallCost => "install_cost",
        MachineParam::MaintenanceCost => "maintenance_cost",
        MachineParam::SetupTime => "setup_time",
        MachineParam::TeardownTime => "teardown_time",
        MachineParam::HeatTime => "heat_time",
        MachineParam::CoolTime => "cool_time",
        MachineParam::FloorSpace => "floor_space",
        MachineParam::Clearance => "clearance",
        MachineParam::Power => "power",
        MachineParam::ScrapRate => "scrap_rate",
        MachineParam::AcceptRate => "accept_rate",
        MachineParam::LaborFraction => "labor_fraction",
    }
}

impl std::str::FromStr for ParamTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        let (scope, name) = match lowered.split_once('.') {
            Some((scope, name)) => (Some(scope), name),
            None => (None, lowered.as_str()),
        };

        let step = match name {
            "cycle_time" => Some(StepParam::CycleTime),
            "batch_size" => Some(StepParam::BatchSize),
            "parts_per_unit" => Some(StepParam::PartsPerUnit),
            _ => None,
        };
        let machine = match name {
            "price" => Some(MachineParam::Price),
            "install_cost" => Some(MachineParam::InstallCost),
            "maintenance_cost" => Some(MachineParam::MaintenanceCost),
            "setup_time" => Some(MachineParam::SetupTime),
            "teardown_time" => Some(MachineParam::TeardownTime),
            "heat_time" => Some(MachineParam::HeatTime),
            "cool_time" => Some(MachineParam::CoolTime),
            "floor_space" => Some(MachineParam::FloorSpace),
            "clearance" => Some(MachineParam::Clearance),
            "power" => Some(MachineParam::Power),
            "scrap_rate" => Some(MachineParam::ScrapRate),
            "accept_rate" => Some(MachineParam::AcceptRate),
            "labor_fraction" => Some(MachineParam::LaborFraction),
            _ => None,
        };

        match (scope, step, machine) {
            (Some("step") | None, Some(p), _) => Ok(ParamTarget::Step(p)),
            (Some("machine") | None, _, Some(p)) => Ok(ParamTarget::Machine(p)),
            _ => Err(format!(
                "Invalid parameter target: {}. Use step.cycle_time, step.batch_size, \
                 step.parts_per_unit, or machine.<price|install_cost|maintenance_cost|\
                 setup_time|teardown_time|heat_time|cool_time|floor_space|clearance|\
                 power|scrap_rate|accept_rate|labor_fraction>",
                s
            )),
        }
    }
}

/// Statistical distribution for sampling an uncertain input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    /// Uniform between `low` and `high`
    Uniform { low: f64, high: f64 },
    /// Normal (Gaussian) with the given mean and standard deviation
    Normal { mean: f64, std_dev: f64 },
    /// Triangular between `low` and `high` with the given mode
    Triangular { low: f64, mode: f64, high: f64 },
}

impl Distribution {
    /// Draw one value from the distribution.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            Distribution::Uniform { low, high } => rng.random_range(low..=high),
            Distribution::Normal { mean, std_dev } => {
                // Box-Muller transform for normal distribution
                let u1: f64 = rng.random();
                let u2: f64 = rng.random();
                let z = (-2.0_f64 * u1.ln()).sqrt() * (2.0_f64 * std::f64::consts::PI * u2).cos();
                mean + std_dev * z
            }
            Distribution::Triangular { low, mode, high } => {
                // Triangular distribution using inverse transform
                let u: f64 = rng.random();
                let fc = (mode - low) / (high - low);
                if u < fc {
                    low + (u * (high - low) * (mode - low)).sqrt()
                } else {
                    high - ((1.0 - u) * (high - low) * (high - mode)).sqrt()
                }
            }
        }
    }
}

/// One uncertain input declared in a scenario file: a parameter on a
/// named process step and the distribution it is drawn from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UncertainInput {
    /// Name of the process step the parameter belongs to
    pub step: String,

    /// Which parameter to sample
    pub target: ParamTarget,

    /// Distribution to draw absolute parameter values from
    pub distribution: Distribution,
}
