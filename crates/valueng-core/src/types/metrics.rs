//! Optimizer output: per-strategy selections and aggregated metrics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::material::Category;

/// The chosen rank for one material under a strategy, with the winning
/// weighted score retained for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectedRank {
    /// Winning rank (0 = keep the original)
    pub rank: u8,
    /// The weighted score that won
    pub weighted_score: f64,
}

/// Per-strategy selection: `material_id → chosen rank`.
///
/// Computed fresh per strategy run; not persisted across strategies. The map
/// is ordered so serialized selections are byte-stable across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// The strategy that produced this selection
    pub strategy: String,
    /// Chosen rank per material, ordered by material id
    pub choices: BTreeMap<String, SelectedRank>,
}

/// Aggregated cost/quality statistics for one category (or the whole run).
///
/// Average scores are quantity-weighted means over the selected materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMetrics {
    /// Σ baseline total cost over selected materials, USD
    pub total_original_cost: f64,
    /// Σ selected-alternative total cost, USD
    pub total_selected_cost: f64,
    /// `total_original_cost - total_selected_cost`, USD
    pub total_savings: f64,
    /// Savings as a percentage of the original cost (0 when original is 0)
    pub savings_pct: f64,
    /// Quantity-weighted mean functional score of the selections
    pub avg_functional_score: f64,
    /// Quantity-weighted mean design score of the selections
    pub avg_design_score: f64,
    /// Quantity-weighted mean cost score of the selections
    pub avg_cost_score: f64,
    /// Number of materials aggregated
    pub material_count: usize,
}

impl CategoryMetrics {
    /// Metrics over an empty selection.
    pub fn empty() -> Self {
        Self {
            total_original_cost: 0.0,
            total_selected_cost: 0.0,
            total_savings: 0.0,
            savings_pct: 0.0,
            avg_functional_score: 0.0,
            avg_design_score: 0.0,
            avg_cost_score: 0.0,
            material_count: 0,
        }
    }
}

/// Full metrics for one strategy run: per category plus overall.
///
/// The overall totals are the exact sums of the per-category totals, so
/// category savings always add up to the overall savings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Metrics per category, in aggregation order
    pub per_category: BTreeMap<Category, CategoryMetrics>,
    /// Metrics over every selected material
    pub overall: CategoryMetrics,
}
