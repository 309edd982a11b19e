// src/model/comparison.rs

use serde::{Serialize, Serializer};
use std::fmt;

/// Total demand divided by average inventory on hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InventoryTurns {
    Finite(f64),
    /// Average inventory was zero, so turns have no finite value.
    Undefined,
}

impl InventoryTurns {
    pub fn value(&self) -> Option<f64> {
        match self {
            InventoryTurns::Finite(turns) => Some(*turns),
            InventoryTurns::Undefined => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, InventoryTurns::Undefined)
    }
}

impl fmt::Display for InventoryTurns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryTurns::Finite(turns) => write!(f, "{:.1}", turns),
            InventoryTurns::Undefined => f.write_str("undefined"),
        }
    }
}

// Undefined turns become an empty CSV cell.
impl Serialize for InventoryTurns {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

/// Summary metrics for one approach.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    #[serde(rename = "Approach")]
    pub approach: String,
    #[serde(rename = "Inventory Costs")]
    pub inventory_cost: f64,
    #[serde(rename = "Set-Up Costs")]
    pub setup_cost: f64,
    #[serde(rename = "Total Costs")]
    pub total_cost: f64,
    /// Average IOH per period, rounded to one decimal. The CSV header says
    /// "Monthly" whatever the period label of the ledgers is.
    #[serde(rename = "Avg Monthly IOH")]
    pub avg_ioh: f64,
    #[serde(rename = "Inventory Turns")]
    pub inventory_turns: InventoryTurns,
}

/// Comparison rows in the order the approaches were supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonTable {
    rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn new(rows: Vec<ComparisonRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    pub fn get(&self, approach: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.approach == approach)
    }

    /// Approach with the lowest total cost. Ties go to the earlier row.
    pub fn cheapest(&self) -> Option<&ComparisonRow> {
        self.rows.iter().fold(None, |best: Option<&ComparisonRow>, row| match best {
            Some(b) if b.total_cost <= row.total_cost => Some(b),
            _ => Some(row),
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for ComparisonTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<26} {:>12} {:>12} {:>12} {:>10} {:>10}",
            "Approach", "Inventory", "Set-Up", "Total", "Avg IOH", "Turns"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<26} {:>12.2} {:>12.2} {:>12.2} {:>10.1} {:>10}",
                row.approach,
                row.inventory_cost,
                row.setup_cost,
                row.total_cost,
                row.avg_ioh,
                row.inventory_turns.to_string()
            )?;
        }
        Ok(())
    }
}
