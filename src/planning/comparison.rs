// src/planning/comparison.rs

use crate::error::{ensure_non_negative, PlanningError, Result};
use crate::model::comparison::{ComparisonRow, ComparisonTable, InventoryTurns};
use crate::model::ledger::Ledger;

/// Rounds the exact binary value to one decimal place, ties to even.
///
/// `{:.1}` formats from the exact decimal expansion, so 7.85 (stored as
/// 7.8499...) becomes 7.8 and the true tie 7.25 becomes 7.2.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

fn comparison_row(approach: &str, ledger: &Ledger, total_demand: f64) -> ComparisonRow {
    let totals = ledger.totals();
    let avg_ioh = round_to_tenth(ledger.average_ioh());

    // Turns are taken against the rounded average.
    let inventory_turns = if avg_ioh == 0.0 {
        InventoryTurns::Undefined
    } else {
        InventoryTurns::Finite(round_to_tenth(total_demand / avg_ioh))
    };

    ComparisonRow {
        approach: approach.to_string(),
        inventory_cost: totals.holding_cost,
        setup_cost: totals.setup_cost,
        total_cost: totals.total_cost,
        avg_ioh,
        inventory_turns,
    }
}

/// Summarizes each ledger under the approach name at the same position.
pub fn compare_approaches<S: AsRef<str>>(
    total_demand: f64,
    ledgers: &[Ledger],
    approaches: &[S],
) -> Result<ComparisonTable> {
    if ledgers.len() != approaches.len() {
        return Err(PlanningError::ApproachMismatch {
            ledgers: ledgers.len(),
            approaches: approaches.len(),
        });
    }
    ensure_non_negative("total_demand", total_demand)?;

    let rows = ledgers
        .iter()
        .zip(approaches)
        .map(|(ledger, approach)| comparison_row(approach.as_ref(), ledger, total_demand))
        .collect();
    Ok(ComparisonTable::new(rows))
}

/// Like [`compare_approaches`], summing `demand` and naming each row after
/// the heuristic that built the ledger.
pub fn compare_ledgers(demand: &[f64], ledgers: &[Ledger]) -> Result<ComparisonTable> {
    let approaches: Vec<&str> = ledgers.iter().map(Ledger::approach).collect();
    compare_approaches(demand.iter().sum(), ledgers, &approaches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round_to_tenth(7.5), 7.5);
        assert_eq!(round_to_tenth(2.6666), 2.7);
        assert_eq!(round_to_tenth(0.04), 0.0);
    }

    #[test]
    fn exact_ties_round_to_even() {
        assert_eq!(round_to_tenth(7.25), 7.2);
        assert_eq!(round_to_tenth(0.25), 0.2);
        assert_eq!(round_to_tenth(7.75), 7.8);
    }

    #[test]
    fn decimal_lookalike_ties_follow_binary_value() {
        // 7.85 is stored just below 7.85.
        assert_eq!(round_to_tenth(7.85), 7.8);
        assert_eq!(round_to_tenth(-7.85), -7.8);
    }

    #[test]
    fn mismatched_names_are_rejected() {
        let result = compare_approaches(10.0, &[], &["Lot for Lot"]);
        assert!(matches!(
            result,
            Err(PlanningError::ApproachMismatch {
                ledgers: 0,
                approaches: 1
            })
        ));
    }
}
