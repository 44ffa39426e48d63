//! `cct simulate` command - Monte Carlo over declared input uncertainty

use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::analysis::monte_carlo::{simulate, SimulationSummary, SummaryStat};
use crate::cli::helpers::{fmt_money, warn, write_output};
use crate::cli::{GlobalOpts, OutputFormat};

#[derive(clap::Args, Debug)]
pub struct SimulateArgs {
    /// Scenario file (YAML)
    pub scenario: PathBuf,

    /// Number of simulations
    #[arg(long, default_value_t = 100)]
    pub sims: u32,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: SimulateArgs, global: &GlobalOpts) -> Result<()> {
    let scenario = super::load_scenario(&args.scenario, global.quiet)?;
    if scenario.uncertainty.is_empty() && !global.quiet {
        warn("scenario declares no uncertainty; every simulation will be identical");
    }
    let summary = simulate(&scenario, args.sims).into_diagnostic()?;

    match global.format {
        OutputFormat::Csv => {
            let csv = to_csv(&summary).into_diagnostic()?;
            write_output(&csv, args.output)?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary).into_diagnostic()?;
            write_output(&format!("{}\n", json), args.output)?;
        }
        OutputFormat::Auto | OutputFormat::Md => {
            let rendered = to_markdown(&summary);
            if args.output.is_some() {
                write_output(&rendered, args.output)?;
            } else {
                print!("{}", rendered);
                if !global.quiet {
                    println!(
                        "\n{} simulation(s) run.",
                        style(summary.simulations).cyan()
                    );
                }
            }
        }
    }
    Ok(())
}

fn stat_table(title: &str, stats: &[SummaryStat]) -> String {
    let mut out = format!("## {}\n\n", title);
    let mut builder = Builder::default();
    builder.push_record(["Name", "Mean", "Std Dev", "Min", "Max"]);
    for stat in stats {
        builder.push_record([
            stat.name.clone(),
            format!("{:.2}", stat.mean),
            format!("{:.2}", stat.std_dev),
            format!("{:.2}", stat.min),
            format!("{:.2}", stat.max),
        ]);
    }
    out.push_str(&builder.build().with(Style::markdown()).to_string());
    out.push('\n');
    out
}

fn to_markdown(summary: &SimulationSummary) -> String {
    let mut out = format!(
        "# Monte Carlo Summary ({} simulations)\n\n",
        summary.simulations
    );
    out.push_str(&stat_table("Cost Categories ($/unit)", &summary.categories));
    out.push('\n');
    out.push_str(&stat_table("Process Steps ($/unit)", &summary.steps));
    out.push('\n');
    out.push_str(&format!(
        "Grand total: {} +/- {} per unit (95% interval {} to {})\n",
        fmt_money(summary.total.mean),
        fmt_money(summary.total.std_dev),
        fmt_money(summary.total_p2_5),
        fmt_money(summary.total_p97_5),
    ));
    out
}

fn to_csv(summary: &SimulationSummary) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Group", "Name", "Mean", "Std Dev", "Min", "Max"])?;
    for (group, stats) in [
        ("category", &summary.categories),
        ("step", &summary.steps),
    ] {
        for stat in stats {
            writer.write_record([
                group.to_string(),
                stat.name.clone(),
                stat.mean.to_string(),
                stat.std_dev.to_string(),
                stat.min.to_string(),
                stat.max.to_string(),
            ])?;
        }
    }
    writer.write_record([
        "total".to_string(),
        summary.total.name.clone(),
        summary.total.mean.to_string(),
        summary.total.std_dev.to_string(),
        summary.total.min.to_string(),
        summary.total.max.to_string(),
    ])?;
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
