//! Per-step cost table - the tabular contract downstream tooling reads
//!
//! Rows are keyed by process-step name with columns {Equipment, Labor,
//! Facility, Utilities, Consumables, Overhead, Total}, followed by a
//! synthetic "Material" row carrying the material cost and a synthetic
//! "Total" row summing every column. Sweep and Monte Carlo summaries and
//! CSV consumers depend on these names verbatim.

use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

use crate::engine::aggregate::CostBreakdown;
use crate::engine::error::CostError;
use crate::entities::scenario::Scenario;

/// Column headers, in output order.
pub const COLUMNS: [&str; 8] = [
    "Process",
    "Equipment",
    "Labor",
    "Facility",
    "Utilities",
    "Consumables",
    "Overhead",
    "Total",
];

/// One row of the cost table, all values per accepted unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostRow {
    pub process: String,
    pub equipment: f64,
    pub labor: f64,
    pub facility: f64,
    pub utilities: f64,
    pub consumables: f64,
    pub overhead: f64,
    pub total: f64,
}

impl CostRow {
    fn values(&self) -> [f64; 7] {
        [
            self.equipment,
            self.labor,
            self.facility,
            self.utilities,
            self.consumables,
            self.overhead,
            self.total,
        ]
    }
}

/// The full per-step cost table for one aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostTable {
    pub rows: Vec<CostRow>,
}

impl CostTable {
    /// Build the table from an aggregated scenario's step caches and its
    /// breakdown. The scenario must have been aggregated first.
    pub fn build(scenario: &Scenario, breakdown: &CostBreakdown) -> Result<CostTable, CostError> {
        let mut rows = Vec::with_capacity(scenario.process.len() + 2);

        for step in &scenario.process {
            let costs = step.costs.as_ref().ok_or_else(|| CostError::MissingStepCost {
                step: step.name.clone(),
            })?;
            rows.push(CostRow {
                process: step.name.clone(),
                equipment: costs.equipment,
                labor: costs.labor,
                facility: costs.facility,
                utilities: costs.utility,
                consumables: costs.consumables,
                overhead: costs.overhead,
                total: costs.total,
            });
        }

        rows.push(CostRow {
            process: "Material".to_string(),
            equipment: 0.0,
            labor: 0.0,
            facility: 0.0,
            utilities: 0.0,
            consumables: 0.0,
            overhead: 0.0,
            total: breakdown.material,
        });

        let mut sums = [0.0; 7];
        for row in &rows {
            for (sum, value) in sums.iter_mut().zip(row.values()) {
                *sum += value;
            }
        }
        rows.push(CostRow {
            process: "Total".to_string(),
            equipment: sums[0],
            labor: sums[1],
            facility: sums[2],
            utilities: sums[3],
            consumables: sums[4],
            overhead: sums[5],
            total: sums[6],
        });

        Ok(CostTable { rows })
    }

    /// Render as a markdown table with two-decimal currency values.
    pub fn to_markdown(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(COLUMNS);
        for row in &self.rows {
            let mut record = vec![row.process.clone()];
            record.extend(row.values().iter().map(|v| format!("{:.2}", v)));
            builder.push_record(record);
        }
        builder.build().with(Style::markdown()).to_string()
    }

    /// Serialize as CSV with the contract column names.
    pub fn to_csv(&self) -> Result<String, CostError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(COLUMNS)?;
        for row in &self.rows {
            let mut record = vec![row.process.clone()];
            record.extend(row.values().iter().map(|v| v.to_string()));
            writer.write_record(&record)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
