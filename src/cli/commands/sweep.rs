//! `cct sweep` command - cost vs. annual production volume

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::analysis::sweep::{volume_sweep, SweepPoint};
use crate::cli::helpers::write_output;
use crate::cli::{GlobalOpts, OutputFormat};

#[derive(clap::Args, Debug)]
pub struct SweepArgs {
    /// Scenario file (YAML)
    pub scenario: PathBuf,

    /// Smallest annual volume
    #[arg(long)]
    pub min: f64,

    /// Largest annual volume
    #[arg(long)]
    pub max: f64,

    /// Number of log-spaced points (duplicates removed after rounding)
    #[arg(long, default_value_t = 100)]
    pub points: usize,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

const SWEEP_COLUMNS: [&str; 9] = [
    "APV",
    "Material",
    "Equipment",
    "Labor",
    "Facility",
    "Utilities",
    "Consumables",
    "Overhead",
    "Total",
];

pub fn run(args: SweepArgs, global: &GlobalOpts) -> Result<()> {
    let scenario = super::load_scenario(&args.scenario, global.quiet)?;
    let points = volume_sweep(&scenario, args.min, args.max, args.points).into_diagnostic()?;

    let rendered = match global.format {
        OutputFormat::Csv => to_csv(&points).into_diagnostic()?,
        OutputFormat::Json => {
            format!("{}\n", serde_json::to_string_pretty(&points).into_diagnostic()?)
        }
        OutputFormat::Auto | OutputFormat::Md => to_markdown(&points),
    };
    write_output(&rendered, args.output)
}

fn row_values(point: &SweepPoint) -> [f64; 9] {
    let bd = &point.breakdown;
    [
        point.volume,
        bd.material,
        bd.equipment,
        bd.labor,
        bd.facility,
        bd.utility,
        bd.consumables,
        bd.overhead,
        bd.total,
    ]
}

fn to_markdown(points: &[SweepPoint]) -> String {
    let mut builder = Builder::default();
    builder.push_record(SWEEP_COLUMNS);
    for point in points {
        let values = row_values(point);
        let mut record = vec![format!("{:.0}", values[0])];
        record.extend(values[1..].iter().map(|v| format!("{:.2}", v)));
        builder.push_record(record);
    }
    let mut out = builder.build().with(Style::markdown()).to_string();
    out.push('\n');
    out
}

fn to_csv(points: &[SweepPoint]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(SWEEP_COLUMNS)?;
    for point in points {
        let record: Vec<String> = row_values(point).iter().map(|v| v.to_string()).collect();
        writer.write_record(&record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
