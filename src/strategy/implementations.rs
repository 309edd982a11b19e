// src/strategy/implementations.rs

use crate::strategy::traits::{PeriodContext, ProductionDecision, ProductionPolicy};

// =========================================================================
// 1. One Time Run
// =========================================================================

/// Produces the whole quantity in the first period and never again.
///
/// Inventory is not floored: if `total_production` does not cover the
/// horizon, later periods show a negative balance.
#[derive(Debug, Clone)]
pub struct OneTimeRunPolicy {
    total_production: f64,
}

impl OneTimeRunPolicy {
    pub fn new(total_production: f64) -> Self {
        Self { total_production }
    }
}

impl ProductionPolicy for OneTimeRunPolicy {
    fn decide(&mut self, ctx: &PeriodContext) -> ProductionDecision {
        if ctx.is_first_period() {
            ProductionDecision::Run(self.total_production)
        } else {
            ProductionDecision::Idle
        }
    }
}

// =========================================================================
// 2. Lot for Lot
// =========================================================================

/// Produces exactly the period's demand, every period.
///
/// Setup is charged every period, including periods with zero demand.
#[derive(Debug, Clone, Default)]
pub struct LotForLotPolicy;

impl LotForLotPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl ProductionPolicy for LotForLotPolicy {
    fn decide(&mut self, ctx: &PeriodContext) -> ProductionDecision {
        ProductionDecision::Run(ctx.current_demand())
    }
}

// =========================================================================
// 3. Fixed Order Quantity
// =========================================================================

/// Orders a fixed quantity whenever the carried inventory cannot cover the
/// period's demand. Always orders in the first period.
#[derive(Debug, Clone)]
pub struct FixedOrderQuantityPolicy {
    quantity: f64,
}

impl FixedOrderQuantityPolicy {
    pub fn new(quantity: f64) -> Self {
        Self { quantity }
    }
}

impl ProductionPolicy for FixedOrderQuantityPolicy {
    fn decide(&mut self, ctx: &PeriodContext) -> ProductionDecision {
        match ctx.previous_ioh {
            Some(ioh) if ctx.current_demand() <= ioh => ProductionDecision::Idle,
            _ => ProductionDecision::Run(self.quantity),
        }
    }

    fn clamps_inventory(&self) -> bool {
        true
    }
}

// =========================================================================
// 4. Periodic Order Quantity
// =========================================================================

/// Orders every `interval` periods, covering exactly the demand of the next
/// `interval` periods (or up to the end of the horizon).
#[derive(Debug, Clone)]
pub struct PeriodicOrderQuantityPolicy {
    interval: usize,
}

impl PeriodicOrderQuantityPolicy {
    /// `interval` must be at least 1; [`crate::Heuristic::policy`] checks it.
    pub fn new(interval: usize) -> Self {
        Self { interval }
    }
}

impl ProductionPolicy for PeriodicOrderQuantityPolicy {
    fn decide(&mut self, ctx: &PeriodContext) -> ProductionDecision {
        if ctx.period % self.interval != 0 {
            return ProductionDecision::Idle;
        }
        let end = (ctx.period + self.interval).min(ctx.demand.len());
        ProductionDecision::Run(ctx.demand[ctx.period..end].iter().sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMAND: [f64; 5] = [10.0, 20.0, 0.0, 5.0, 7.0];

    fn ctx(period: usize, previous_ioh: Option<f64>) -> PeriodContext<'static> {
        PeriodContext {
            period,
            demand: &DEMAND,
            previous_ioh,
        }
    }

    #[test]
    fn one_time_run_only_produces_first() {
        let mut policy = OneTimeRunPolicy::new(42.0);
        assert_eq!(policy.decide(&ctx(0, None)), ProductionDecision::Run(42.0));
        assert_eq!(policy.decide(&ctx(3, Some(1.0))), ProductionDecision::Idle);
    }

    #[test]
    fn lot_for_lot_runs_even_with_zero_demand() {
        let mut policy = LotForLotPolicy::new();
        assert_eq!(policy.decide(&ctx(2, Some(0.0))), ProductionDecision::Run(0.0));
    }

    #[test]
    fn fixed_quantity_reorders_only_when_short() {
        let mut policy = FixedOrderQuantityPolicy::new(15.0);
        assert_eq!(policy.decide(&ctx(0, None)), ProductionDecision::Run(15.0));
        // demand 20 > carried 5
        assert_eq!(policy.decide(&ctx(1, Some(5.0))), ProductionDecision::Run(15.0));
        // demand 5 == carried 5 is covered
        assert_eq!(policy.decide(&ctx(3, Some(5.0))), ProductionDecision::Idle);
        assert!(policy.clamps_inventory());
    }

    #[test]
    fn periodic_quantity_sums_window_and_clips_at_horizon() {
        let mut policy = PeriodicOrderQuantityPolicy::new(2);
        assert_eq!(policy.decide(&ctx(0, None)), ProductionDecision::Run(30.0));
        assert_eq!(policy.decide(&ctx(1, Some(20.0))), ProductionDecision::Idle);
        assert_eq!(policy.decide(&ctx(2, Some(0.0))), ProductionDecision::Run(5.0));
        assert_eq!(policy.decide(&ctx(4, Some(0.0))), ProductionDecision::Run(7.0));
        assert!(!policy.clamps_inventory());
    }
}
