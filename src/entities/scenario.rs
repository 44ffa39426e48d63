//! Scenario entity - an immutable snapshot of every cost model input
//!
//! A scenario file is a single YAML document bundling the material
//! catalog, machine definitions, consumables, the product assembly, the
//! ordered process list, and the facility-wide assumptions. References
//! between sections (step -> machine, part -> material, consumable ->
//! machine) are resolved when the file is loaded, so a resolved
//! [`Scenario`] is self-contained and every lookup failure surfaces as a
//! loud [`ScenarioError`] up front.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::consumable::Consumable;
use crate::entities::facility::Facility;
use crate::entities::machine::Machine;
use crate::entities::material::Material;
use crate::entities::overhead::Overhead;
use crate::entities::part::{Assembly, Part};
use crate::entities::process::ProcessStep;
use crate::entities::variation::UncertainInput;

/// Which material costing model a scenario uses.
///
/// The choice is explicit in the scenario file; it is never inferred
/// from the shape of the step or part data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaterialPolicy {
    /// Cost each material-consuming step from its bound part's weight,
    /// the machine scrap rate, and the material recycling rate
    #[default]
    PartBased,
    /// Cost material from the overall assembly geometry and the facility
    /// scrap fraction (legacy simple-geometry path)
    AssemblyWeight,
}

impl std::fmt::Display for MaterialPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialPolicy::PartBased => write!(f, "part_based"),
            MaterialPolicy::AssemblyWeight => write!(f, "assembly_weight"),
        }
    }
}

impl std::str::FromStr for MaterialPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "part_based" | "partbased" => Ok(MaterialPolicy::PartBased),
            "assembly_weight" | "assemblyweight" => Ok(MaterialPolicy::AssemblyWeight),
            _ => Err(format!(
                "Invalid material policy: {}. Use part_based or assembly_weight",
                s
            )),
        }
    }
}

/// Errors raised while loading or resolving a scenario file.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse scenario file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yml::Error,
    },

    #[error("annual production volume must be positive (got {0})")]
    InvalidVolume(f64),

    #[error("scenario has no process steps")]
    EmptyProcess,

    #[error("duplicate process step name '{0}'")]
    DuplicateStep(String),

    #[error("step '{step}' references unknown machine '{machine}'")]
    UnknownMachine { step: String, machine: String },

    #[error("consumable '{consumable}' references unknown machine '{machine}'")]
    ConsumableMachine {
        consumable: String,
        machine: String,
    },

    #[error("{owner} references unknown material '{material}'")]
    UnknownMaterial { owner: String, material: String },

    #[error("step '{step}' references unknown part '{part}'")]
    UnknownPart { step: String, part: String },

    #[error("step '{step}': batch size must be >= 1 (got {value})")]
    InvalidBatchSize { step: String, value: f64 },

    #[error("machine '{machine}': part acceptance rate must be in (0, 1] (got {value})")]
    InvalidAcceptRate { machine: String, value: f64 },

    #[error("consumable '{consumable}': life must be positive (got {value})")]
    InvalidConsumableLife { consumable: String, value: f64 },

    #[error("uncertainty entry references unknown step '{0}'")]
    UnknownStep(String),
}

/// A fully-resolved scenario: the input snapshot one cost aggregation
/// runs over.
///
/// Copies made with the `with_*` methods are deep and fully independent,
/// including the process list and its caches, so concurrent or repeated
/// aggregations never share step state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    /// Scenario name
    pub name: String,

    /// Target accepted units per year
    pub annual_volume: f64,

    /// Material costing model
    pub material_policy: MaterialPolicy,

    /// Product assembly
    pub assembly: Assembly,

    /// Ordered process steps; vec order drives iteration and table order
    pub process: Vec<ProcessStep>,

    /// Facility-wide assumptions
    pub facility: Facility,

    /// Overhead model coefficients
    pub overhead: Overhead,

    /// Declared input uncertainty, for Monte Carlo simulation
    pub uncertainty: Vec<UncertainInput>,
}

impl Scenario {
    /// Load and resolve a scenario file.
    pub fn load(path: &Path) -> Result<Scenario, ScenarioError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ScenarioFile =
            serde_yml::from_str(&text).map_err(|source| ScenarioError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        file.resolve()
    }

    /// Look up a process step by name.
    pub fn step(&self, name: &str) -> Option<&ProcessStep> {
        self.process.iter().find(|s| s.name == name)
    }

    /// Look up a process step by name, mutably.
    pub fn step_mut(&mut self, name: &str) -> Option<&mut ProcessStep> {
        self.process.iter_mut().find(|s| s.name == name)
    }

    /// Copy with a different annual production volume.
    pub fn with_volume(&self, annual_volume: f64) -> Scenario {
        let mut copy = self.clone();
        copy.annual_volume = annual_volume;
        copy
    }

    /// Copy with a different material policy.
    pub fn with_material_policy(&self, policy: MaterialPolicy) -> Scenario {
        let mut copy = self.clone();
        copy.material_policy = policy;
        copy
    }

    /// Machine cost overrides written as text that will not parse and so
    /// resolve to zero. Reported once per machine for loader warnings.
    pub fn malformed_cost_specs(&self) -> Vec<String> {
        let mut seen = Vec::new();
        let mut warnings = Vec::new();
        for step in &self.process {
            let m = &step.machine;
            if seen.contains(&m.name) {
                continue;
            }
            seen.push(m.name.clone());
            if m.install_cost.is_malformed() {
                warnings.push(format!(
                    "machine '{}': install_cost is not a percentage; treating as 0",
                    m.name
                ));
            }
            if m.maintenance_cost.is_malformed() {
                warnings.push(format!(
                    "machine '{}': maintenance_cost is not a percentage; treating as 0",
                    m.name
                ));
            }
        }
        warnings
    }
}

/// Raw scenario file as written on disk, before reference resolution.
#[derive(Debug, Deserialize)]
pub struct ScenarioFile {
    #[serde(default)]
    pub name: String,

    pub annual_volume: f64,

    #[serde(default)]
    pub material_policy: MaterialPolicy,

    pub assembly: AssemblySpec,

    #[serde(default)]
    pub materials: BTreeMap<String, Material>,

    pub machines: BTreeMap<String, Machine>,

    #[serde(default)]
    pub consumables: Vec<Consumable>,

    pub process: Vec<StepSpec>,

    pub facility: Facility,

    #[serde(default)]
    pub overhead: Overhead,

    #[serde(default)]
    pub uncertainty: Vec<UncertainInput>,
}

/// Assembly section of a scenario file; materials by catalog key.
#[derive(Debug, Deserialize)]
pub struct AssemblySpec {
    #[serde(default)]
    pub name: String,
    pub material: String,
    #[serde(default)]
    pub plate_weight: f64,
    #[serde(default)]
    pub length: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub volume: f64,
    #[serde(default)]
    pub fin_count: f64,
    #[serde(default)]
    pub parts: BTreeMap<String, PartSpec>,
}

/// Part section of a scenario file; material by catalog key.
#[derive(Debug, Deserialize)]
pub struct PartSpec {
    #[serde(default)]
    pub parent: Option<String>,
    pub material: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub length: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub volume: f64,
    #[serde(default = "default_part_count")]
    pub count: u32,
}

fn default_part_count() -> u32 {
    1
}

/// Process step section of a scenario file; machine and part by key.
#[derive(Debug, Deserialize)]
pub struct StepSpec {
    pub name: String,
    pub machine: String,
    pub cycle_time: f64,
    #[serde(default = "default_batch_size")]
    pub batch_size: f64,
    #[serde(default = "default_parts_per_unit")]
    pub parts_per_unit: f64,
    #[serde(default)]
    pub material_use: bool,
    #[serde(default)]
    pub part: Option<String>,
}

fn default_batch_size() -> f64 {
    1.0
}

fn default_parts_per_unit() -> f64 {
    1.0
}

impl ScenarioFile {
    /// Resolve every by-name reference and validate structural
    /// invariants, producing a self-contained [`Scenario`].
    pub fn resolve(self) -> Result<Scenario, ScenarioError> {
        if self.annual_volume <= 0.0 {
            return Err(ScenarioError::InvalidVolume(self.annual_volume));
        }
        if self.process.is_empty() {
            return Err(ScenarioError::EmptyProcess);
        }

        // Materials carry their catalog key as a name.
        let mut materials = BTreeMap::new();
        for (key, mut mat) in self.materials {
            mat.name = key.clone();
            materials.insert(key, mat);
        }

        let lookup_material = |owner: String, key: &str| -> Result<Material, ScenarioError> {
            materials
                .get(key)
                .cloned()
                .ok_or(ScenarioError::UnknownMaterial {
                    owner,
                    material: key.to_string(),
                })
        };

        // Machines get their key as a name plus their consumables.
        let mut machines = BTreeMap::new();
        for (key, mut machine) in self.machines {
            machine.name = key.clone();
            if machine.accept_rate <= 0.0 || machine.accept_rate > 1.0 {
                return Err(ScenarioError::InvalidAcceptRate {
                    machine: key,
                    value: machine.accept_rate,
                });
            }
            machines.insert(key, machine);
        }
        for consumable in self.consumables {
            if consumable.life <= 0.0 {
                return Err(ScenarioError::InvalidConsumableLife {
                    consumable: consumable.name,
                    value: consumable.life,
                });
            }
            match machines.get_mut(&consumable.machine) {
                Some(machine) => machine.add_consumable(consumable),
                None => {
                    return Err(ScenarioError::ConsumableMachine {
                        consumable: consumable.name,
                        machine: consumable.machine,
                    })
                }
            }
        }

        // Assembly and its parts.
        let asm_material = lookup_material(
            format!("assembly '{}'", self.assembly.name),
            &self.assembly.material,
        )?;
        let mut parts = BTreeMap::new();
        for (key, spec) in self.assembly.parts {
            let material = lookup_material(format!("part '{}'", key), &spec.material)?;
            parts.insert(
                key.clone(),
                Part {
                    name: key,
                    parent: spec.parent,
                    material,
                    weight: spec.weight,
                    length: spec.length,
                    width: spec.width,
                    height: spec.height,
                    volume: spec.volume,
                    count: spec.count,
                },
            );
        }
        let assembly = Assembly {
            name: self.assembly.name,
            material: asm_material,
            plate_weight: self.assembly.plate_weight,
            length: self.assembly.length,
            width: self.assembly.width,
            height: self.assembly.height,
            volume: self.assembly.volume,
            fin_count: self.assembly.fin_count,
            parts,
        };

        // Process steps, in file order.
        let mut process: Vec<ProcessStep> = Vec::with_capacity(self.process.len());
        for spec in self.process {
            if process.iter().any(|s| s.name == spec.name) {
                return Err(ScenarioError::DuplicateStep(spec.name));
            }
            if spec.batch_size < 1.0 {
                return Err(ScenarioError::InvalidBatchSize {
                    step: spec.name,
                    value: spec.batch_size,
                });
            }
            let machine = machines
                .get(&spec.machine)
                .cloned()
                .ok_or_else(|| ScenarioError::UnknownMachine {
                    step: spec.name.clone(),
                    machine: spec.machine.clone(),
                })?;
            let part = match &spec.part {
                Some(part_name) => Some(
                    assembly
                        .part(part_name)
                        .cloned()
                        .ok_or_else(|| ScenarioError::UnknownPart {
                            step: spec.name.clone(),
                            part: part_name.clone(),
                        })?,
                ),
                None => None,
            };
            process.push(ProcessStep {
                name: spec.name,
                machine,
                cycle_time: spec.cycle_time,
                batch_size: spec.batch_size,
                parts_per_unit: spec.parts_per_unit,
                material_use: spec.material_use,
                part,
                resources: None,
                costs: None,
            });
        }

        for entry in &self.uncertainty {
            if !process.iter().any(|s| s.name == entry.step) {
                return Err(ScenarioError::UnknownStep(entry.step.clone()));
            }
        }

        Ok(Scenario {
            name: self.name,
            annual_volume: self.annual_volume,
            material_policy: self.material_policy,
            assembly,
            process,
            facility: self.facility,
            overhead: self.overhead,
            uncertainty: self.uncertainty,
        })
    }
}
