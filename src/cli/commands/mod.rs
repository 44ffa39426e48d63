//! Command implementations

pub mod cost;
pub mod sensitivity;
pub mod simulate;
pub mod sweep;
pub mod validate;

use std::path::Path;

use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::warn;
use crate::entities::scenario::Scenario;

/// Load a scenario and surface loader warnings (malformed percentage
/// strings resolve to zero rather than failing, but should not pass
/// silently).
pub(crate) fn load_scenario(path: &Path, quiet: bool) -> Result<Scenario> {
    let scenario = Scenario::load(path).into_diagnostic()?;
    if !quiet {
        for warning in scenario.malformed_cost_specs() {
            warn(&warning);
        }
    }
    Ok(scenario)
}
