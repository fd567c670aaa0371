//! Pipeline decision records: baseline matches and ranked substitutes.

use serde::{Deserialize, Serialize};

use super::catalog::CostCatalogEntry;
use super::material::{Category, MaterialSpec};

/// The resolved baseline catalog entry and cost for a material spec.
///
/// One per spec; created by the matcher, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The material this match resolves
    pub material_id: String,
    /// The chosen baseline catalog code
    pub catalog_code: String,
    /// Baseline installed cost per unit, USD
    pub baseline_unit_cost: f64,
    /// Baseline cost across the project: `unit_cost × quantity`
    pub baseline_total_cost: f64,
}

impl MatchResult {
    /// Build a match result from a spec and its winning catalog entry.
    pub fn new(spec: &MaterialSpec, entry: &CostCatalogEntry) -> Self {
        Self {
            material_id: spec.id.clone(),
            catalog_code: entry.code.clone(),
            baseline_unit_cost: entry.unit_total_cost,
            baseline_total_cost: entry.unit_total_cost * f64::from(spec.quantity),
        }
    }
}

/// A ranked candidate substitute for a matched material.
///
/// Rank 0 is always the original (baseline) with zero reduction; ranks 1..=3
/// are strictly cheaper substitutes in ascending cost order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// The material this substitute applies to
    pub material_id: String,
    /// Material category, carried for aggregation
    pub category: Category,
    /// 0 = original; 1..=3 = substitutes by ascending cost
    pub rank: u8,
    /// Catalog code of the substitute (baseline code at rank 0)
    pub catalog_code: String,
    /// Human-readable description, used in judge prompts
    pub description: String,
    /// Substitute installed cost per unit, USD
    pub alt_unit_cost: f64,
    /// Substitute cost across the project: `unit_cost × quantity`
    pub alt_total_cost: f64,
    /// Cost reduction vs. the baseline, percent (0 at rank 0)
    pub cost_reduction_pct: f64,
}

impl Alternative {
    /// The baseline record at rank 0.
    pub fn baseline(spec: &MaterialSpec, matched: &MatchResult, description: String) -> Self {
        Self {
            material_id: spec.id.clone(),
            category: spec.category,
            rank: 0,
            catalog_code: matched.catalog_code.clone(),
            description,
            alt_unit_cost: matched.baseline_unit_cost,
            alt_total_cost: matched.baseline_total_cost,
            cost_reduction_pct: 0.0,
        }
    }

    /// A substitute at the given rank.
    pub fn substitute(
        spec: &MaterialSpec,
        matched: &MatchResult,
        rank: u8,
        catalog_code: String,
        description: String,
        alt_unit_cost: f64,
    ) -> Self {
        let reduction = (matched.baseline_unit_cost - alt_unit_cost)
            / matched.baseline_unit_cost
            * 100.0;
        Self {
            material_id: spec.id.clone(),
            category: spec.category,
            rank,
            catalog_code,
            description,
            alt_unit_cost,
            alt_total_cost: alt_unit_cost * f64::from(spec.quantity),
            cost_reduction_pct: reduction,
        }
    }

    /// Whether this is the rank-0 original.
    #[inline]
    pub fn is_baseline(&self) -> bool {
        self.rank == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Dimensions};

    fn spec() -> MaterialSpec {
        MaterialSpec {
            id: "W2".to_string(),
            category: Category::Window,
            dimensions: Some(Dimensions::new(71.0, 62.0)),
            material_type: "wood".to_string(),
            style: "casement".to_string(),
            quantity: 10,
        }
    }

    fn matched() -> MatchResult {
        MatchResult {
            material_id: "W2".to_string(),
            catalog_code: "WIN-0180".to_string(),
            baseline_unit_cost: 1715.0,
            baseline_total_cost: 17150.0,
        }
    }

    #[test]
    fn baseline_total_is_unit_times_quantity() {
        let entry = CostCatalogEntry {
            code: "WIN-0180".to_string(),
            category: Category::Window,
            dimensions: Some(Dimensions::new(71.0, 62.0)),
            material_type: "Wood".to_string(),
            style: "casement".to_string(),
            unit_material_cost: 1430.0,
            unit_labor_cost: 285.0,
            unit_total_cost: 1715.0,
        };
        let m = MatchResult::new(&spec(), &entry);
        assert_eq!(m.baseline_total_cost, 17150.0);
    }

    #[test]
    fn rank0_has_zero_reduction() {
        let alt = Alternative::baseline(&spec(), &matched(), "Wood casement".to_string());
        assert!(alt.is_baseline());
        assert_eq!(alt.cost_reduction_pct, 0.0);
        assert_eq!(alt.alt_total_cost, matched().baseline_total_cost);
    }

    #[test]
    fn substitute_reduction_percentage() {
        let alt = Alternative::substitute(
            &spec(),
            &matched(),
            1,
            "WIN-0210".to_string(),
            "Aluminum casement".to_string(),
            1335.0,
        );
        // (1715 - 1335) / 1715 = 22.157%
        assert!((alt.cost_reduction_pct - 22.157).abs() < 0.01);
        assert_eq!(alt.alt_total_cost, 13350.0);
        assert!(alt.alt_total_cost < matched().baseline_total_cost);
    }
}
