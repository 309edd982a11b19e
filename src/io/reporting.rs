// src/io/reporting.rs

use crate::error::Result;
use crate::model::comparison::ComparisonTable;
use crate::model::ledger::Ledger;
use crate::planning::scenario::ScenarioReport;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

const LEDGER_COLUMNS: [&str; 6] = [
    "Forecast",
    "Production",
    "IOH",
    "Holding Cost",
    "Set-Up Costs",
    "Total Cost",
];

/// Writes a ledger as CSV, one row per period followed by a `Total` row.
///
/// The first column is headed by `period_label` (e.g. "Month").
pub fn write_ledger<W: Write>(writer: W, ledger: &Ledger, period_label: &str) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec![period_label];
    header.extend(LEDGER_COLUMNS);
    wtr.write_record(&header)?;

    for row in ledger.rows() {
        wtr.write_record(&[
            row.period.to_string(),
            row.forecast.to_string(),
            row.production.to_string(),
            row.ioh.to_string(),
            row.holding_cost.to_string(),
            row.setup_cost.to_string(),
            row.total_cost.to_string(),
        ])?;
    }

    let totals = ledger.totals();
    wtr.write_record(&[
        "Total".to_string(),
        totals.forecast.to_string(),
        totals.production.to_string(),
        totals.ioh.to_string(),
        totals.holding_cost.to_string(),
        totals.setup_cost.to_string(),
        totals.total_cost.to_string(),
    ])?;

    wtr.flush()?;
    Ok(())
}

pub fn write_ledger_csv(path: impl AsRef<Path>, ledger: &Ledger, period_label: &str) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_ledger(file, ledger, period_label)?;

    info!(
        approach = ledger.approach(),
        rows = ledger.periods() + 1,
        path = %path.display(),
        "exported production plan"
    );
    Ok(())
}

/// Writes the comparison table as CSV. Undefined inventory turns are left
/// empty.
pub fn write_comparison<W: Write>(writer: W, table: &ComparisonTable) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in table.rows() {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_comparison_csv(path: impl AsRef<Path>, table: &ComparisonTable) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_comparison(file, table)?;

    info!(rows = table.len(), path = %path.display(), "exported comparison");
    Ok(())
}

/// Writes every plan of a scenario plus `comparison.csv` into `output_dir`,
/// creating it if needed. Returns the written paths in order.
///
/// Plans are named `<heuristic>_production_plan.csv`; a repeated heuristic
/// gets a numeric suffix.
pub fn export_scenario(
    output_dir: impl AsRef<Path>,
    report: &ScenarioReport,
    period_label: &str,
) -> Result<Vec<PathBuf>> {
    let output_dir = output_dir.as_ref();
    std::fs::create_dir_all(output_dir)?;

    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut written = Vec::with_capacity(report.plans.len() + 1);

    for (heuristic, ledger) in &report.plans {
        let count = seen.entry(heuristic.slug()).or_insert(0);
        *count += 1;
        let file_name = if *count == 1 {
            format!("{}_production_plan.csv", heuristic.slug())
        } else {
            format!("{}_{}_production_plan.csv", heuristic.slug(), count)
        };

        let path = output_dir.join(file_name);
        write_ledger_csv(&path, ledger, period_label)?;
        written.push(path);
    }

    let comparison_path = output_dir.join("comparison.csv");
    write_comparison_csv(&comparison_path, &report.comparison)?;
    written.push(comparison_path);

    Ok(written)
}
