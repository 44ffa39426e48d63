//! Entity type definitions
//!
//! A scenario bundles the following entity types:
//!
//! **Reference data (read-only once loaded):**
//! - [`Material`] - Raw materials incorporated into parts
//! - [`Consumable`] - Tooling and supplies used up while running a machine
//! - [`Machine`] - Production equipment with cost, timing, and yield data
//! - [`Part`] / [`Assembly`] - Product geometry for material costing
//! - [`Facility`] - Plant-wide hours, prices, and dedication policy
//! - [`Overhead`] - Coefficients for the indirect cost model
//!
//! **The process graph:**
//! - [`ProcessStep`] - One operation, bound to a machine, with
//!   populate-after-compute resource and cost caches
//!
//! **Variation:**
//! - [`ParamTarget`] - Explicit step/machine parameter reference for
//!   sensitivity sweeps and Monte Carlo sampling
//! - [`Scenario`] - The immutable input snapshot an aggregation runs over

pub mod consumable;
pub mod facility;
pub mod machine;
pub mod material;
pub mod overhead;
pub mod part;
pub mod process;
pub mod scenario;
pub mod variation;

pub use consumable::{Consumable, ConsumableLifeUnit};
pub use facility::Facility;
pub use machine::{CostSpec, Machine, MachineLifeUnit};
pub use material::Material;
pub use overhead::Overhead;
pub use part::{Assembly, Part};
pub use process::{ProcessStep, StepCost, StepResources};
pub use scenario::{MaterialPolicy, Scenario, ScenarioError, ScenarioFile};
pub use variation::{Distribution, MachineParam, ParamTarget, StepParam, UncertainInput};
