// src/planning/config.rs

use crate::error::{ensure_non_negative, Result};
use crate::io::demand::DemandSource;
use crate::strategy::heuristic::Heuristic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Cost rates shared by every heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostParameters {
    /// Flat cost of one production run.
    pub setup_cost: f64,
    /// Cost of carrying one unit to the end of a period.
    pub holding_cost: f64,
}

impl CostParameters {
    pub fn new(setup_cost: f64, holding_cost: f64) -> Self {
        Self {
            setup_cost,
            holding_cost,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("setup_cost", self.setup_cost)?;
        ensure_non_negative("holding_cost", self.holding_cost)
    }
}

impl Default for CostParameters {
    fn default() -> Self {
        Self {
            setup_cost: 500.0,
            holding_cost: 1.0,
        }
    }
}

/// Everything a planning run needs, loadable from TOML:
///
/// ```toml
/// period_label = "Month"
/// output_dir = "output"
///
/// [costs]
/// setup_cost = 50.0
/// holding_cost = 1.0
///
/// [demand]
/// kind = "constant"
/// periods = 4
/// value = 10.0
///
/// [[heuristics]]
/// type = "periodic_order_quantity"
/// interval = 2
/// ```
///
/// Missing keys fall back to [`PlanningConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// Header of the period column in exported ledgers.
    pub period_label: String,
    pub output_dir: PathBuf,
    pub costs: CostParameters,
    pub demand: DemandSource,
    pub heuristics: Vec<Heuristic>,
}

impl PlanningConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.costs.validate()?;
        Ok(config)
    }
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            period_label: "Month".to_string(),
            output_dir: PathBuf::from("output"),
            costs: CostParameters::default(),
            demand: DemandSource::Explicit {
                values: vec![
                    200.0, 150.0, 100.0, 50.0, 50.0, 100.0, 150.0, 200.0, 200.0, 250.0, 300.0,
                    250.0,
                ],
            },
            heuristics: vec![
                Heuristic::OneTimeRun {
                    total_production: None,
                },
                Heuristic::LotForLot,
                Heuristic::FixedOrderQuantity { quantity: 500.0 },
                Heuristic::PeriodicOrderQuantity { interval: 3 },
            ],
        }
    }
}
