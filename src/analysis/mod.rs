//! Analysis drivers built on the cost engine
//!
//! Each driver runs independent aggregations over fresh scenario copies:
//! cost-vs-volume sweeps, percentage sensitivity grids, and Monte Carlo
//! sampling over declared input uncertainty.

pub mod monte_carlo;
pub mod sensitivity;
pub mod sweep;

pub use monte_carlo::{simulate, SimulationSummary, SummaryStat};
pub use sensitivity::{sensitivity, SensitivityPoint};
pub use sweep::{volume_range, volume_sweep, SweepPoint};
