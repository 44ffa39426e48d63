//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    cost::CostArgs, sensitivity::SensitivityArgs, simulate::SimulateArgs, sweep::SweepArgs,
    validate::ValidateArgs,
};

#[derive(Parser)]
#[command(name = "cct")]
#[command(author, version, about = "Camber Cost Toolkit")]
#[command(
    long_about = "A toolkit for process-based manufacturing cost modeling: per-unit cost breakdowns, volume sweeps, sensitivity grids, and Monte Carlo simulation over plain-text YAML scenario files."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the per-unit cost breakdown for a scenario
    Cost(CostArgs),

    /// Sweep cost vs. annual production volume over a log-spaced range
    Sweep(SweepArgs),

    /// Vary step/machine parameters across a percentage grid
    Sensitivity(SensitivityArgs),

    /// Monte Carlo simulation over declared input uncertainty
    Simulate(SimulateArgs),

    /// Load a scenario file and report structural problems
    Validate(ValidateArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically pick a format (markdown tables)
    #[default]
    Auto,
    /// Markdown tables
    Md,
    /// CSV (for spreadsheets and downstream tooling)
    Csv,
    /// JSON (for programs)
    Json,
}
