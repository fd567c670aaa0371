//! Full-run orchestration: validate → match → enumerate → score → optimize.
//!
//! Each stage fully consumes its predecessor's output before the next starts;
//! there is no feedback loop. An unmatched material is flagged unresolved and
//! excluded from aggregation — it never aborts the run and never contributes
//! a zero-cost baseline. Strategy weights are validated before any matching
//! work so configuration problems fail fast.
//!
//! Dropping the returned future cancels outstanding judge calls; every
//! artifact is created per stage from owned inputs, so no partial state
//! leaks.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::alternatives::find_alternatives;
use crate::config::PolicyConfig;
use crate::error::{Result, ValidationError};
use crate::judge::Judge;
use crate::matcher::match_spec;
use crate::optimizer::optimize;
use crate::scorer::score_all;
use crate::types::{
    Alternative, CostCatalogEntry, MaterialSpec, RunMetrics, Selection, Strategy,
};

/// A material the matcher could not resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnresolvedMaterial {
    /// The unmatched material
    pub material_id: String,
    /// Why it could not be resolved
    pub reason: String,
}

/// One strategy's selection and aggregated metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyOutcome {
    /// The strategy that was applied
    pub strategy: Strategy,
    /// Chosen rank per material
    pub selection: Selection,
    /// Category and overall aggregates
    pub metrics: RunMetrics,
}

/// The structured result of a complete run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// One outcome per configured strategy, in configuration order
    pub outcomes: Vec<StrategyOutcome>,
    /// Materials excluded from aggregation, ordered by id
    pub unresolved: Vec<UnresolvedMaterial>,
    /// Σ baseline total cost over resolved materials, USD
    pub baseline_total_cost: f64,
    /// Number of resolved materials
    pub resolved_count: usize,
}

/// The assembled decision pipeline.
pub struct Pipeline {
    policy: PolicyConfig,
    strategies: Vec<Strategy>,
}

impl Pipeline {
    /// Build a pipeline, failing fast on malformed policy or strategies.
    pub fn new(policy: PolicyConfig, strategies: Vec<Strategy>) -> Result<Self> {
        policy.validate()?;
        for strategy in &strategies {
            strategy.validate()?;
        }
        Ok(Self { policy, strategies })
    }

    /// A pipeline over the four built-in strategies.
    pub fn with_builtin_strategies(policy: PolicyConfig) -> Result<Self> {
        Self::new(policy, Strategy::builtin())
    }

    /// The configured strategies, in run order.
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Run the full pipeline over validated input collections.
    pub async fn run(
        &self,
        specs: &[MaterialSpec],
        catalog: &[CostCatalogEntry],
        judge: Arc<dyn Judge>,
    ) -> Result<RunReport> {
        validate_inputs(specs, catalog)?;
        info!(
            materials = specs.len(),
            catalog_entries = catalog.len(),
            "inputs validated"
        );

        // Stage 1: resolve baselines.
        let mut alternatives: Vec<Alternative> = Vec::new();
        let mut unresolved: Vec<UnresolvedMaterial> = Vec::new();
        let mut baseline_total_cost = 0.0;
        let mut resolved_count = 0usize;

        for spec in specs {
            match match_spec(spec, catalog, &self.policy.matching) {
                Ok((matched, baseline_entry)) => {
                    baseline_total_cost += matched.baseline_total_cost;
                    resolved_count += 1;
                    // Stage 2: enumerate substitutes for the resolved baseline.
                    alternatives.extend(find_alternatives(
                        spec,
                        &matched,
                        baseline_entry,
                        catalog,
                        &self.policy.alternatives,
                    ));
                }
                Err(err) => {
                    warn!(material = %spec.id, %err, "material left unresolved");
                    unresolved.push(UnresolvedMaterial {
                        material_id: spec.id.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }
        unresolved.sort_by(|a, b| a.material_id.cmp(&b.material_id));
        info!(
            resolved = resolved_count,
            unresolved = unresolved.len(),
            baseline_total = baseline_total_cost,
            "baselines matched"
        );

        // Stage 3: score every ranked alternative.
        let scores = score_all(&alternatives, judge, &self.policy).await?;
        info!(scores = scores.len(), "alternatives scored");

        // Stage 4: optimize each strategy over the shared, finalized scores.
        let mut outcomes = Vec::with_capacity(self.strategies.len());
        for strategy in &self.strategies {
            let (selection, metrics) = optimize(strategy, &alternatives, &scores, specs)?;
            info!(
                strategy = %strategy.name,
                savings = metrics.overall.total_savings,
                savings_pct = metrics.overall.savings_pct,
                "strategy optimized"
            );
            outcomes.push(StrategyOutcome {
                strategy: strategy.clone(),
                selection,
                metrics,
            });
        }

        Ok(RunReport {
            outcomes,
            unresolved,
            baseline_total_cost,
            resolved_count,
        })
    }
}

/// Reject malformed or duplicated input records with a descriptive error.
fn validate_inputs(
    specs: &[MaterialSpec],
    catalog: &[CostCatalogEntry],
) -> std::result::Result<(), ValidationError> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for spec in specs {
        spec.validate()?;
        if !seen.insert(&spec.id) {
            return Err(ValidationError::DuplicateMaterial {
                id: spec.id.clone(),
            });
        }
    }
    for entry in catalog {
        entry.validate()?;
    }
    Ok(())
}

/// Retrieve one strategy's selection/metrics pair from a report.
impl RunReport {
    /// The outcome for a named strategy, if it was configured.
    pub fn outcome(&self, strategy_name: &str) -> Option<&StrategyOutcome> {
        self.outcomes
            .iter()
            .find(|o| o.strategy.name == strategy_name)
    }

    /// Selection for a named strategy.
    pub fn selection(&self, strategy_name: &str) -> Option<&Selection> {
        self.outcome(strategy_name).map(|o| &o.selection)
    }

    /// Metrics for a named strategy.
    pub fn metrics(&self, strategy_name: &str) -> Option<&RunMetrics> {
        self.outcome(strategy_name).map(|o| &o.metrics)
    }
}
