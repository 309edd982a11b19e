//! Classical lot-sizing heuristics over a fixed planning horizon.
//!
//! Each heuristic turns a period demand forecast into a [`Ledger`] of
//! production, inventory on hand and costs. Ledgers from several heuristics
//! can then be compared side by side with [`compare_approaches`].

pub mod error;
pub mod logging;

pub mod io {
    pub mod demand;
    pub mod reporting;
}

pub mod model {
    pub mod comparison;
    pub mod ledger;
}

pub mod planning {
    pub mod comparison;
    pub mod config;
    pub mod engine;
    pub mod scenario;
}

pub mod strategy {
    pub mod heuristic;
    pub mod implementations;
    pub mod traits;
}

pub use error::{PlanningError, Result};
pub use io::demand::DemandSource;
pub use model::comparison::{ComparisonRow, ComparisonTable, InventoryTurns};
pub use model::ledger::{Ledger, LedgerRow, LedgerTotals};
pub use planning::comparison::{compare_approaches, compare_ledgers};
pub use planning::config::{CostParameters, PlanningConfig};
pub use planning::engine::{
    build_ledger, fixed_order_quantity_plan, lot_for_lot_plan, one_time_run_plan,
    periodic_order_quantity_plan, plan,
};
pub use planning::scenario::{PlanningScenario, ScenarioReport};
pub use strategy::heuristic::Heuristic;
