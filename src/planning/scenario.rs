// src/planning/scenario.rs

use crate::error::{validate_demand, Result};
use crate::model::comparison::ComparisonTable;
use crate::model::ledger::Ledger;
use crate::planning::comparison::compare_approaches;
use crate::planning::config::{CostParameters, PlanningConfig};
use crate::planning::engine::plan;
use crate::strategy::heuristic::Heuristic;
use tracing::info;

/// A set of heuristics to run over one demand forecast.
#[derive(Debug, Clone)]
pub struct PlanningScenario {
    pub demand: Vec<f64>,
    pub costs: CostParameters,
    pub heuristics: Vec<Heuristic>,
}

/// Plans in heuristic order, plus their comparison.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub plans: Vec<(Heuristic, Ledger)>,
    pub comparison: ComparisonTable,
}

impl ScenarioReport {
    pub fn ledger(&self, heuristic: &Heuristic) -> Option<&Ledger> {
        self.plans
            .iter()
            .find(|(h, _)| h == heuristic)
            .map(|(_, ledger)| ledger)
    }
}

impl PlanningScenario {
    pub fn new(demand: Vec<f64>, costs: CostParameters, heuristics: Vec<Heuristic>) -> Self {
        Self {
            demand,
            costs,
            heuristics,
        }
    }

    /// Resolves the configured demand source.
    pub fn from_config(config: &PlanningConfig) -> Result<Self> {
        let demand = config.demand.resolve()?;
        Ok(Self::new(demand, config.costs, config.heuristics.clone()))
    }

    pub fn total_demand(&self) -> f64 {
        self.demand.iter().sum()
    }

    /// Builds every plan and compares them. Comparison rows are labelled
    /// with the heuristic and its parameters, so two variants of the same
    /// heuristic stay distinguishable.
    pub fn run(&self) -> Result<ScenarioReport> {
        validate_demand(&self.demand)?;
        self.costs.validate()?;

        let mut plans = Vec::with_capacity(self.heuristics.len());
        for heuristic in &self.heuristics {
            let ledger = plan(heuristic, &self.costs, &self.demand)?;
            info!(
                heuristic = %heuristic,
                total_cost = ledger.totals().total_cost,
                "planned"
            );
            plans.push((heuristic.clone(), ledger));
        }

        let ledgers: Vec<Ledger> = plans.iter().map(|(_, ledger)| ledger.clone()).collect();
        let labels: Vec<String> = self.heuristics.iter().map(Heuristic::to_string).collect();
        let comparison = compare_approaches(self.total_demand(), &ledgers, &labels)?;

        Ok(ScenarioReport { plans, comparison })
    }
}
