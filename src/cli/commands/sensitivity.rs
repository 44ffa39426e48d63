//! `cct sensitivity` command - percentage variation of step/machine parameters

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::analysis::sensitivity::{sensitivity, SensitivityPoint};
use crate::cli::helpers::write_output;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::entities::variation::ParamTarget;

#[derive(clap::Args, Debug)]
pub struct SensitivityArgs {
    /// Scenario file (YAML)
    pub scenario: PathBuf,

    /// Process step whose parameters are varied
    #[arg(long, short = 's')]
    pub step: String,

    /// Parameter to vary, e.g. machine.price or step.cycle_time
    /// (repeatable)
    #[arg(long = "param", short = 'p', required = true)]
    pub params: Vec<ParamTarget>,

    /// Lowest percentage change
    #[arg(long, default_value_t = -20, allow_hyphen_values = true)]
    pub min: i32,

    /// Highest percentage change
    #[arg(long, default_value_t = 20)]
    pub max: i32,

    /// Percentage step between grid points
    #[arg(long, default_value_t = 5)]
    pub interval: u32,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

const SENS_COLUMNS: [&str; 4] = ["Parameter", "Change %", "Category Delta", "Total"];

pub fn run(args: SensitivityArgs, global: &GlobalOpts) -> Result<()> {
    let scenario = super::load_scenario(&args.scenario, global.quiet)?;
    let points = sensitivity(
        &scenario,
        &args.step,
        &args.params,
        args.min,
        args.max,
        args.interval,
    )
    .into_diagnostic()?;

    let rendered = match global.format {
        OutputFormat::Csv => to_csv(&points).into_diagnostic()?,
        OutputFormat::Json => {
            format!("{}\n", serde_json::to_string_pretty(&points).into_diagnostic()?)
        }
        OutputFormat::Auto | OutputFormat::Md => to_markdown(&args.step, &points),
    };
    write_output(&rendered, args.output)
}

/// The grand total at 0% change, for the delta column.
fn baseline_total(target: ParamTarget, points: &[SensitivityPoint]) -> Option<f64> {
    points
        .iter()
        .find(|p| p.target == target && p.change_pct == 0.0)
        .map(|p| p.breakdown.total)
}

fn to_markdown(step: &str, points: &[SensitivityPoint]) -> String {
    let mut out = format!("# Sensitivity - {}\n\n", step);
    let mut builder = Builder::default();
    builder.push_record(SENS_COLUMNS);
    for point in points {
        let delta = baseline_total(point.target, points)
            .map(|base| format!("{:+.2}", point.breakdown.total - base))
            .unwrap_or_else(|| "-".to_string());
        builder.push_record([
            point.target.to_string(),
            format!("{:+.0}", point.change_pct),
            delta,
            format!("{:.2}", point.breakdown.total),
        ]);
    }
    out.push_str(&builder.build().with(Style::markdown()).to_string());
    out.push('\n');
    out
}

fn to_csv(points: &[SensitivityPoint]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "Step",
        "Parameter",
        "Change %",
        "Material",
        "Equipment",
        "Labor",
        "Facility",
        "Utilities",
        "Consumables",
        "Overhead",
        "Total",
    ])?;
    for point in points {
        let bd = &point.breakdown;
        writer.write_record([
            point.step.clone(),
            point.target.to_string(),
            point.change_pct.to_string(),
            bd.material.to_string(),
            bd.equipment.to_string(),
            bd.labor.to_string(),
            bd.facility.to_string(),
            bd.utility.to_string(),
            bd.consumables.to_string(),
            bd.overhead.to_string(),
            bd.total.to_string(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
