//! Engine error type

use thiserror::Error;

/// Fatal conditions raised during cost aggregation and analysis.
///
/// These are configuration errors in the sense of the cost model: the
/// arithmetic is always defined once the inputs pass these checks, so
/// there is nothing to retry and partial results are not salvageable.
#[derive(Debug, Error)]
pub enum CostError {
    #[error("process collection is empty")]
    EmptyProcess,

    #[error("annual production volume must be positive (got {0})")]
    InvalidVolume(f64),

    #[error("step '{step}': part acceptance rate must be in (0, 1] (got {rate})")]
    AcceptanceRate { step: String, rate: f64 },

    #[error("step '{step}' uses the part-based material policy but has no part bound")]
    MissingPart { step: String },

    #[error("every process step has zero direct cost; overhead cannot be distributed")]
    NothingToDistribute,

    #[error("step '{step}' has no computed cost; run aggregation first")]
    MissingStepCost { step: String },

    #[error("no process step named '{0}'")]
    UnknownStep(String),

    #[error("sweep range is invalid: min {min} must be >= 1 and <= max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("sensitivity interval must be positive")]
    InvalidInterval,

    #[error("simulation count must be at least 1")]
    NoSimulations,

    #[error("csv output failed: {0}")]
    Csv(#[from] csv::Error),
}
