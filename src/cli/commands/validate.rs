//! `cct validate` command - load a scenario and report what it contains

use std::collections::BTreeSet;
use std::path::PathBuf;

use console::style;
use miette::Result;

use crate::cli::GlobalOpts;

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Scenario file (YAML)
    pub scenario: PathBuf,
}

pub fn run(args: ValidateArgs, global: &GlobalOpts) -> Result<()> {
    let scenario = super::load_scenario(&args.scenario, global.quiet)?;

    let machines: BTreeSet<&str> = scenario
        .process
        .iter()
        .map(|s| s.machine.name.as_str())
        .collect();
    let consumables: usize = scenario
        .process
        .iter()
        .map(|s| s.machine.consumables.len())
        .sum();
    let uncertain = scenario.uncertainty.len();

    println!(
        "{} {} is valid",
        style("ok:").green().bold(),
        args.scenario.display()
    );
    println!(
        "  {} step(s), {} machine type(s), {} consumable binding(s), {} part(s)",
        scenario.process.len(),
        machines.len(),
        consumables,
        scenario.assembly.parts.len()
    );
    println!(
        "  annual volume {:.0}, material policy {}, {} uncertain input(s)",
        scenario.annual_volume, scenario.material_policy, uncertain
    );
    Ok(())
}
