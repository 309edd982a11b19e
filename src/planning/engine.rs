// src/planning/engine.rs

use crate::error::{validate_demand, Result};
use crate::model::ledger::{Ledger, LedgerRow};
use crate::planning::config::CostParameters;
use crate::strategy::heuristic::Heuristic;
use crate::strategy::traits::{PeriodContext, ProductionPolicy};
use tracing::debug;

/// Walks the horizon once, asking `policy` for each period's production and
/// rolling inventory forward:
///
/// `IOH[0] = production[0] - demand[0]`,
/// `IOH[t] = IOH[t-1] + production[t] - demand[t]`.
///
/// Holding cost is charged on ending inventory, setup cost on every run.
pub fn build_ledger(
    approach: &str,
    policy: &mut dyn ProductionPolicy,
    costs: &CostParameters,
    demand: &[f64],
) -> Result<Ledger> {
    validate_demand(demand)?;
    costs.validate()?;

    let clamp = policy.clamps_inventory();
    let mut rows = Vec::with_capacity(demand.len());
    let mut previous_ioh: Option<f64> = None;

    for (period, &forecast) in demand.iter().enumerate() {
        let ctx = PeriodContext {
            period,
            demand,
            previous_ioh,
        };
        let decision = policy.decide(&ctx);
        let production = decision.quantity();

        let mut ioh = previous_ioh.unwrap_or(0.0) + production - forecast;
        if clamp && ioh < 0.0 {
            // Shortage is dropped, not backordered.
            ioh = 0.0;
        }

        let holding_cost = ioh * costs.holding_cost;
        let setup_cost = if decision.is_run() {
            costs.setup_cost
        } else {
            0.0
        };

        rows.push(LedgerRow {
            period: period + 1,
            forecast,
            production,
            ioh,
            holding_cost,
            setup_cost,
            total_cost: holding_cost + setup_cost,
        });
        previous_ioh = Some(ioh);
    }

    let ledger = Ledger::new(approach, rows);
    debug!(
        approach,
        periods = ledger.periods(),
        total_cost = ledger.totals().total_cost,
        "built production plan"
    );
    Ok(ledger)
}

/// Builds the ledger for any supported heuristic.
pub fn plan(heuristic: &Heuristic, costs: &CostParameters, demand: &[f64]) -> Result<Ledger> {
    validate_demand(demand)?;
    let mut policy = heuristic.policy(demand)?;
    build_ledger(heuristic.name(), policy.as_mut(), costs, demand)
}

/// All of `total_production` in the first period, no replenishment after.
pub fn one_time_run_plan(
    total_production: f64,
    costs: &CostParameters,
    demand: &[f64],
) -> Result<Ledger> {
    plan(
        &Heuristic::OneTimeRun {
            total_production: Some(total_production),
        },
        costs,
        demand,
    )
}

/// Production equals demand in every period; setup is charged every period.
pub fn lot_for_lot_plan(costs: &CostParameters, demand: &[f64]) -> Result<Ledger> {
    plan(&Heuristic::LotForLot, costs, demand)
}

/// Orders `quantity` whenever carried inventory cannot cover the period's
/// demand. Inventory is floored at zero.
pub fn fixed_order_quantity_plan(
    quantity: f64,
    costs: &CostParameters,
    demand: &[f64],
) -> Result<Ledger> {
    plan(&Heuristic::FixedOrderQuantity { quantity }, costs, demand)
}

/// Orders every `interval` periods enough to cover the next `interval`
/// periods of demand.
pub fn periodic_order_quantity_plan(
    interval: usize,
    costs: &CostParameters,
    demand: &[f64],
) -> Result<Ledger> {
    plan(&Heuristic::PeriodicOrderQuantity { interval }, costs, demand)
}
