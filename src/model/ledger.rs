// src/model/ledger.rs

use serde::Serialize;

/// One period of a production plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerRow {
    /// One-based period number, as shown to planners.
    pub period: usize,
    pub forecast: f64,
    pub production: f64,
    /// Ending inventory on hand.
    pub ioh: f64,
    pub holding_cost: f64,
    pub setup_cost: f64,
    pub total_cost: f64,
}

/// Column-wise sums over every period of a ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LedgerTotals {
    pub forecast: f64,
    pub production: f64,
    pub ioh: f64,
    pub holding_cost: f64,
    pub setup_cost: f64,
    pub total_cost: f64,
}

impl LedgerTotals {
    fn accumulate(mut self, row: &LedgerRow) -> Self {
        self.forecast += row.forecast;
        self.production += row.production;
        self.ioh += row.ioh;
        self.holding_cost += row.holding_cost;
        self.setup_cost += row.setup_cost;
        self.total_cost += row.total_cost;
        self
    }
}

/// A complete production plan: one row per period plus the totals row.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    approach: String,
    rows: Vec<LedgerRow>,
    totals: LedgerTotals,
}

impl Ledger {
    pub fn new(approach: impl Into<String>, rows: Vec<LedgerRow>) -> Self {
        let totals = rows.iter().fold(LedgerTotals::default(), LedgerTotals::accumulate);
        Self {
            approach: approach.into(),
            rows,
            totals,
        }
    }

    /// Name of the heuristic that produced this plan.
    pub fn approach(&self) -> &str {
        &self.approach
    }

    pub fn rows(&self) -> &[LedgerRow] {
        &self.rows
    }

    pub fn totals(&self) -> &LedgerTotals {
        &self.totals
    }

    pub fn periods(&self) -> usize {
        self.rows.len()
    }

    pub fn production(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.production).collect()
    }

    pub fn ioh(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.ioh).collect()
    }

    /// Mean ending inventory per period, unrounded.
    pub fn average_ioh(&self) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        self.totals.ioh / self.rows.len() as f64
    }
}
