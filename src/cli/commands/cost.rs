//! `cct cost` command - per-unit cost breakdown for one scenario

use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{fmt_money, write_output};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::engine::aggregate::aggregate;
use crate::engine::table::CostTable;
use crate::entities::scenario::Scenario;

#[derive(clap::Args, Debug)]
pub struct CostArgs {
    /// Scenario file (YAML)
    pub scenario: PathBuf,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Also show per-step machine counts, hours, headcount, and floor space
    #[arg(long)]
    pub detail: bool,
}

pub fn run(args: CostArgs, global: &GlobalOpts) -> Result<()> {
    let mut scenario = super::load_scenario(&args.scenario, global.quiet)?;
    let breakdown = aggregate(&mut scenario).into_diagnostic()?;
    let table = CostTable::build(&scenario, &breakdown).into_diagnostic()?;

    match global.format {
        OutputFormat::Csv => {
            let csv = table.to_csv().into_diagnostic()?;
            write_output(&csv, args.output)?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&breakdown).into_diagnostic()?;
            write_output(&format!("{}\n", json), args.output)?;
        }
        OutputFormat::Auto | OutputFormat::Md => {
            let mut out = String::new();
            out.push_str(&format!(
                "# Cost Breakdown - {}\n\n",
                if scenario.name.is_empty() {
                    "scenario"
                } else {
                    scenario.name.as_str()
                }
            ));
            out.push_str(&format!(
                "Annual accepted volume: {:.0} units/yr, material policy: {}\n\n",
                scenario.annual_volume, scenario.material_policy
            ));
            out.push_str(&table.to_markdown());
            out.push('\n');

            if args.detail {
                out.push('\n');
                out.push_str("## Provisioned Resources\n\n");
                out.push_str(&resources_markdown(&scenario));
                out.push('\n');
            }

            out.push_str(&format!(
                "\nGrand total: {} per unit\n",
                fmt_money(breakdown.total)
            ));

            if args.output.is_some() {
                out.push_str(&format!(
                    "\n---\n\n*Generated: {}*\n",
                    chrono::Local::now().format("%Y-%m-%d %H:%M")
                ));
                write_output(&out, args.output)?;
            } else {
                print!("{}", out);
                if !global.quiet {
                    println!(
                        "\n{} process step(s) costed.",
                        style(scenario.process.len()).cyan()
                    );
                }
            }
        }
    }

    Ok(())
}

fn resources_markdown(scenario: &Scenario) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Process", "Machines", "Machine hrs", "Operators", "Floor m^2"]);
    for step in &scenario.process {
        if let Some(resources) = &step.resources {
            builder.push_record([
                step.name.clone(),
                format!("{:.2}", resources.machine_count),
                format!("{:.1}", resources.machine_hours),
                format!("{:.2}", resources.headcount),
                format!("{:.1}", resources.floor_space),
            ]);
        }
    }
    builder.build().with(Style::markdown()).to_string()
}
