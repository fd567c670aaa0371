//! Selection and aggregation under a weighting strategy.
//!
//! For each material the optimizer computes the weighted score of every rank
//! and selects the maximum. Ties prefer rank 0 — never switch away from the
//! original without a strict improvement — then the lowest rank. Metrics are
//! aggregated per category and overall; average scores are quantity-weighted
//! means (see DESIGN.md for the averaging decision), and the overall cost
//! totals are the exact sums of the per-category totals.
//!
//! The optimizer fails fast, before any selection: the strategy's weights
//! must sum to 1 and every material must carry a complete score set.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::ConfigError;
use crate::types::{
    Alternative, Category, CategoryMetrics, MaterialSpec, RunMetrics, Score, SelectedRank,
    Selection, Strategy,
};

/// Two weighted scores within this distance are a tie.
const SCORE_EPSILON: f64 = 1e-9;

/// Run one strategy over the finalized score set.
///
/// # Errors
///
/// - [`ConfigError::InvalidWeights`] when the strategy is malformed
/// - [`ConfigError::IncompleteScores`] when a rank lacks a score
/// - [`ConfigError::MissingSpec`] when a material has no spec record
pub fn optimize(
    strategy: &Strategy,
    alternatives: &[Alternative],
    scores: &[Score],
    specs: &[MaterialSpec],
) -> Result<(Selection, RunMetrics), ConfigError> {
    strategy.validate()?;

    let quantities: BTreeMap<&str, u32> = specs
        .iter()
        .map(|spec| (spec.id.as_str(), spec.quantity))
        .collect();

    let mut score_index: BTreeMap<(&str, u8), &Score> = BTreeMap::new();
    for score in scores {
        score_index.insert((score.material_id.as_str(), score.rank), score);
    }

    let mut by_material: BTreeMap<&str, Vec<&Alternative>> = BTreeMap::new();
    for alt in alternatives {
        by_material.entry(&alt.material_id).or_default().push(alt);
    }

    // Fail fast on score gaps before producing any selection.
    for (material_id, ranked) in &by_material {
        for alt in ranked {
            if !score_index.contains_key(&(*material_id, alt.rank)) {
                return Err(ConfigError::IncompleteScores {
                    material_id: material_id.to_string(),
                    rank: alt.rank,
                });
            }
        }
    }

    let mut choices: BTreeMap<String, SelectedRank> = BTreeMap::new();
    let mut per_category: BTreeMap<Category, Accumulator> = BTreeMap::new();
    let mut overall_scores = Accumulator::default();

    for (material_id, ranked) in &by_material {
        let quantity = *quantities
            .get(material_id)
            .ok_or_else(|| ConfigError::MissingSpec {
                material_id: material_id.to_string(),
            })?;

        let mut ranked: Vec<&Alternative> = ranked.clone();
        ranked.sort_by_key(|alt| alt.rank);

        // Rank 0 leads, so starting from it and only replacing on a strict
        // improvement implements both tie-break rules.
        let mut chosen = ranked[0];
        let mut chosen_weighted =
            strategy.weights.weighted_score(score_index[&(*material_id, chosen.rank)]);
        for alt in ranked.iter().skip(1) {
            let weighted = strategy.weights.weighted_score(score_index[&(*material_id, alt.rank)]);
            if weighted > chosen_weighted + SCORE_EPSILON {
                chosen = *alt;
                chosen_weighted = weighted;
            }
        }

        choices.insert(
            material_id.to_string(),
            SelectedRank {
                rank: chosen.rank,
                weighted_score: chosen_weighted,
            },
        );

        let baseline = ranked[0];
        let score = score_index[&(*material_id, chosen.rank)];
        let entry = per_category.entry(chosen.category).or_default();
        entry.add(baseline, chosen, score, quantity);
        overall_scores.add(baseline, chosen, score, quantity);
    }

    let per_category_metrics: BTreeMap<Category, CategoryMetrics> = per_category
        .iter()
        .map(|(category, acc)| (*category, acc.finish()))
        .collect();

    // Overall cost totals are the sums of the category totals, so category
    // savings add up to the overall savings exactly.
    let mut overall = overall_scores.finish();
    overall.total_original_cost = per_category_metrics
        .values()
        .map(|m| m.total_original_cost)
        .sum();
    overall.total_selected_cost = per_category_metrics
        .values()
        .map(|m| m.total_selected_cost)
        .sum();
    overall.total_savings = per_category_metrics.values().map(|m| m.total_savings).sum();
    overall.savings_pct = if overall.total_original_cost > 0.0 {
        overall.total_savings / overall.total_original_cost * 100.0
    } else {
        0.0
    };

    debug!(
        strategy = %strategy.name,
        materials = choices.len(),
        savings = overall.total_savings,
        "optimized selection"
    );

    Ok((
        Selection {
            strategy: strategy.name.clone(),
            choices,
        },
        RunMetrics {
            per_category: per_category_metrics,
            overall,
        },
    ))
}

/// Running totals for one category (or the whole run).
#[derive(Debug, Default)]
struct Accumulator {
    original_cost: f64,
    selected_cost: f64,
    functional_weighted: f64,
    design_weighted: f64,
    cost_weighted: f64,
    quantity_sum: f64,
    count: usize,
}

impl Accumulator {
    fn add(&mut self, baseline: &Alternative, chosen: &Alternative, score: &Score, quantity: u32) {
        let quantity = f64::from(quantity);
        self.original_cost += baseline.alt_total_cost;
        self.selected_cost += chosen.alt_total_cost;
        self.functional_weighted += f64::from(score.functional) * quantity;
        self.design_weighted += f64::from(score.design) * quantity;
        self.cost_weighted += f64::from(score.cost) * quantity;
        self.quantity_sum += quantity;
        self.count += 1;
    }

    fn finish(&self) -> CategoryMetrics {
        let savings = self.original_cost - self.selected_cost;
        CategoryMetrics {
            total_original_cost: self.original_cost,
            total_selected_cost: self.selected_cost,
            total_savings: savings,
            savings_pct: if self.original_cost > 0.0 {
                savings / self.original_cost * 100.0
            } else {
                0.0
            },
            avg_functional_score: self.weighted_avg(self.functional_weighted),
            avg_design_score: self.weighted_avg(self.design_weighted),
            avg_cost_score: self.weighted_avg(self.cost_weighted),
            material_count: self.count,
        }
    }

    fn weighted_avg(&self, weighted_sum: f64) -> f64 {
        if self.quantity_sum > 0.0 {
            weighted_sum / self.quantity_sum
        } else {
            0.0
        }
    }
}
