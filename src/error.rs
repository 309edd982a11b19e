// src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlanningError>;

#[derive(Debug, Error)]
pub enum PlanningError {
    #[error("demand sequence is empty")]
    EmptyDemand,

    #[error("invalid demand in period {period}: {value}")]
    InvalidDemand { period: usize, value: f64 },

    #[error("invalid parameter `{name}`: {value} (must be finite and non-negative)")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("reorder interval must be at least one period")]
    InvalidReorderInterval,

    #[error("got {ledgers} ledgers but {approaches} approach names")]
    ApproachMismatch { ledgers: usize, approaches: usize },

    #[error("malformed demand value {field:?} on line {line}")]
    MalformedDemand { line: u64, field: String },

    #[error("invalid demand distribution: {0}")]
    InvalidDistribution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML parse error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Rejects negative, NaN and infinite scalar parameters.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PlanningError::InvalidParameter { name, value })
    }
}

/// Rejects an empty demand series and any negative or non-finite entry.
pub(crate) fn validate_demand(demand: &[f64]) -> Result<()> {
    if demand.is_empty() {
        return Err(PlanningError::EmptyDemand);
    }
    match demand
        .iter()
        .enumerate()
        .find(|(_, d)| !d.is_finite() || **d < 0.0)
    {
        Some((period, &value)) => Err(PlanningError::InvalidDemand { period, value }),
        None => Ok(()),
    }
}
