// src/strategy/traits.rs

use std::fmt::Debug;

/// What a policy sees when it decides a single period.
#[derive(Debug, Clone, Copy)]
pub struct PeriodContext<'a> {
    /// Zero-based index into the planning horizon.
    pub period: usize,
    /// The whole demand forecast, so window-based policies can look ahead.
    pub demand: &'a [f64],
    /// Ending inventory of the previous period, after any clamping.
    /// `None` in the first period.
    pub previous_ioh: Option<f64>,
}

impl<'a> PeriodContext<'a> {
    pub fn current_demand(&self) -> f64 {
        self.demand[self.period]
    }

    pub fn is_first_period(&self) -> bool {
        self.period == 0
    }
}

/// Outcome of a policy for one period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProductionDecision {
    /// A production run takes place and the setup cost is charged, whatever
    /// the quantity.
    Run(f64),
    /// Nothing is produced and no setup is charged.
    Idle,
}

impl ProductionDecision {
    pub fn quantity(&self) -> f64 {
        match self {
            ProductionDecision::Run(quantity) => *quantity,
            ProductionDecision::Idle => 0.0,
        }
    }

    pub fn is_run(&self) -> bool {
        matches!(self, ProductionDecision::Run(_))
    }
}

/// Decision rule of a lot-sizing heuristic.
///
/// The ledger builder walks the horizon in order and asks the policy once per
/// period; everything else (inventory rollforward, costs, totals) is shared.
pub trait ProductionPolicy: Debug + Send + Sync {
    /// Decides whether to run production in `ctx.period` and how much.
    fn decide(&mut self, ctx: &PeriodContext) -> ProductionDecision;

    /// Whether ending inventory is floored at zero. A floored shortage is
    /// dropped, not carried forward as a backorder.
    fn clamps_inventory(&self) -> bool {
        false
    }
}
