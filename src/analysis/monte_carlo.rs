//! Monte Carlo simulation over declared input uncertainty

use serde::Serialize;

use crate::engine::aggregate::aggregate;
use crate::engine::error::CostError;
use crate::entities::scenario::Scenario;

/// Summary statistics for one tracked quantity across simulations.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryStat {
    pub name: String,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl SummaryStat {
    fn from_samples(name: &str, samples: &[f64]) -> SummaryStat {
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        SummaryStat {
            name: name.to_string(),
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
        }
    }
}

/// Monte Carlo results: per-category and per-step unit cost statistics
/// plus the grand total distribution.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    pub simulations: u32,

    /// One entry per cost category, in breakdown order
    pub categories: Vec<SummaryStat>,

    /// One entry per process step (allocated totals), in process order
    pub steps: Vec<SummaryStat>,

    /// Grand per-unit total
    pub total: SummaryStat,

    /// Lower percentile of the grand total (2.5% for a 95% interval)
    pub total_p2_5: f64,

    /// Upper percentile of the grand total (97.5% for a 95% interval)
    pub total_p97_5: f64,
}

const CATEGORY_NAMES: [&str; 7] = [
    "Material",
    "Equipment",
    "Labor",
    "Facility",
    "Utilities",
    "Consumables",
    "Overhead",
];

/// Run `simulations` independent aggregations, each with every declared
/// uncertain input resampled from its distribution.
///
/// Each simulation works on a fresh copy of the scenario, so step caches
/// are never shared between draws and the input snapshot is untouched.
pub fn simulate(scenario: &Scenario, simulations: u32) -> Result<SimulationSummary, CostError> {
    if simulations == 0 {
        return Err(CostError::NoSimulations);
    }
    for entry in &scenario.uncertainty {
        if scenario.step(&entry.step).is_none() {
            return Err(CostError::UnknownStep(entry.step.clone()));
        }
    }

    let mut rng = rand::rng();
    let step_names: Vec<String> = scenario.process.iter().map(|s| s.name.clone()).collect();

    let mut category_samples: Vec<Vec<f64>> = vec![Vec::with_capacity(simulations as usize); 7];
    let mut step_samples: Vec<Vec<f64>> =
        vec![Vec::with_capacity(simulations as usize); step_names.len()];
    let mut totals: Vec<f64> = Vec::with_capacity(simulations as usize);

    for _ in 0..simulations {
        let mut draw = scenario.clone();
        for entry in &scenario.uncertainty {
            let value = entry.distribution.sample(&mut rng);
            // steps were validated above
            if let Some(step) = draw.step_mut(&entry.step) {
                step.set_param(entry.target, value);
            }
        }

        let bd = aggregate(&mut draw)?;
        let by_category = [
            bd.material,
            bd.equipment,
            bd.labor,
            bd.facility,
            bd.utility,
            bd.consumables,
            bd.overhead,
        ];
        for (samples, value) in category_samples.iter_mut().zip(by_category) {
            samples.push(value);
        }
        for (samples, (_, total)) in step_samples.iter_mut().zip(&bd.step_totals) {
            samples.push(*total);
        }
        totals.push(bd.total);
    }

    let categories = CATEGORY_NAMES
        .iter()
        .zip(&category_samples)
        .map(|(name, samples)| SummaryStat::from_samples(name, samples))
        .collect();
    let steps = step_names
        .iter()
        .zip(&step_samples)
        .map(|(name, samples)| SummaryStat::from_samples(name, samples))
        .collect();
    let total = SummaryStat::from_samples("Total", &totals);

    let mut sorted = totals;
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let p2_5_idx = (simulations as f64 * 0.025) as usize;
    let p97_5_idx = (simulations as f64 * 0.975) as usize;
    let total_p2_5 = sorted.get(p2_5_idx).copied().unwrap_or(total.min);
    let total_p97_5 = sorted.get(p97_5_idx).copied().unwrap_or(total.max);

    Ok(SimulationSummary {
        simulations,
        categories,
        steps,
        total,
        total_p2_5,
        total_p97_5,
    })
}
