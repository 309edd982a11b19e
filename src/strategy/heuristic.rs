// src/strategy/heuristic.rs

use crate::error::{ensure_non_negative, PlanningError, Result};
use crate::strategy::implementations::{
    FixedOrderQuantityPolicy, LotForLotPolicy, OneTimeRunPolicy, PeriodicOrderQuantityPolicy,
};
use crate::strategy::traits::ProductionPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The lot-sizing heuristics this crate knows about, with their parameters.
///
/// Deserializes from a `type`-tagged table, e.g.
/// `{ type = "fixed_order_quantity", quantity = 150.0 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Heuristic {
    /// Everything produced in period 0. Without a quantity the whole
    /// horizon's demand is produced.
    OneTimeRun {
        #[serde(default)]
        total_production: Option<f64>,
    },
    LotForLot,
    FixedOrderQuantity { quantity: f64 },
    /// Orders every `interval` periods.
    PeriodicOrderQuantity { interval: usize },
}

impl Heuristic {
    /// Label used for the approach in comparison tables.
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::OneTimeRun { .. } => "One Time Run",
            Heuristic::LotForLot => "Lot for Lot",
            Heuristic::FixedOrderQuantity { .. } => "Fixed Order Quantity",
            Heuristic::PeriodicOrderQuantity { .. } => "Periodic Order Quantity",
        }
    }

    /// File-name stem for exported artifacts.
    pub fn slug(&self) -> &'static str {
        match self {
            Heuristic::OneTimeRun { .. } => "one_time_run",
            Heuristic::LotForLot => "lot_for_lot",
            Heuristic::FixedOrderQuantity { .. } => "fixed_order_quantity",
            Heuristic::PeriodicOrderQuantity { .. } => "periodic_order_quantity",
        }
    }

    /// Checks the parameters and builds the matching decision rule.
    pub fn policy(&self, demand: &[f64]) -> Result<Box<dyn ProductionPolicy>> {
        let policy: Box<dyn ProductionPolicy> = match *self {
            Heuristic::OneTimeRun { total_production } => {
                let total = total_production.unwrap_or_else(|| demand.iter().sum());
                ensure_non_negative("total_production", total)?;
                Box::new(OneTimeRunPolicy::new(total))
            }
            Heuristic::LotForLot => Box::new(LotForLotPolicy::new()),
            Heuristic::FixedOrderQuantity { quantity } => {
                ensure_non_negative("fixed_order_quantity", quantity)?;
                Box::new(FixedOrderQuantityPolicy::new(quantity))
            }
            Heuristic::PeriodicOrderQuantity { interval } => {
                if interval == 0 {
                    return Err(PlanningError::InvalidReorderInterval);
                }
                Box::new(PeriodicOrderQuantityPolicy::new(interval))
            }
        };
        Ok(policy)
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::OneTimeRun {
                total_production: Some(total),
            } => write!(f, "{} (P={})", self.name(), total),
            Heuristic::FixedOrderQuantity { quantity } => {
                write!(f, "{} (Q={})", self.name(), quantity)
            }
            Heuristic::PeriodicOrderQuantity { interval } => {
                write!(f, "{} (R={})", self.name(), interval)
            }
            _ => f.write_str(self.name()),
        }
    }
}
