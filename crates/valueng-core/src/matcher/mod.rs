//! Baseline matching: resolve each material spec to its best-fit catalog
//! entry.
//!
//! Candidates are filtered to the spec's category, then scored by a weighted
//! penalty: the relative dimension/area deviation plus fixed surcharges when
//! `material_type`/`style` differ. The lowest penalty wins; ties break to the
//! lowest unit cost, then lexical code order, so matching is fully
//! deterministic.
//!
//! Unpriced entries (non-positive total cost) are never matchable — an empty
//! candidate set raises [`MatchError::NoMatchFound`] instead of producing a
//! zero-cost baseline.

use tracing::debug;

use crate::config::MatchPolicy;
use crate::error::MatchError;
use crate::types::{Category, CostCatalogEntry, MatchResult, MaterialSpec};

/// Case-insensitive categorical similarity.
///
/// The schedules and the cost database spell attributes differently
/// (`wood` / `Wood` / `WD solid core`), so equality is containment in either
/// direction after lowercasing.
pub(crate) fn attribute_matches(spec_value: &str, entry_value: &str) -> bool {
    let spec_value = spec_value.trim().to_lowercase();
    let entry_value = entry_value.trim().to_lowercase();
    if spec_value.is_empty() || entry_value.is_empty() {
        return false;
    }
    spec_value.contains(&entry_value) || entry_value.contains(&spec_value)
}

/// Relative deviation between the spec and a candidate entry.
///
/// Windows compare by area; doors compare by width. Appliances have no
/// dimensional component. Missing dimensions on either side count as the
/// policy's `dimensionless_deviation`.
fn dimension_deviation(spec: &MaterialSpec, entry: &CostCatalogEntry, policy: &MatchPolicy) -> f64 {
    if !spec.category.requires_dimensions() {
        return 0.0;
    }
    let (spec_dims, entry_dims) = match (spec.dimensions, entry.dimensions) {
        (Some(s), Some(e)) => (s, e),
        _ => return policy.dimensionless_deviation,
    };
    match spec.category {
        Category::Window => {
            let target = spec_dims.area_sqft();
            (entry_dims.area_sqft() - target).abs() / target
        }
        Category::ExteriorDoor | Category::InteriorDoor => {
            (entry_dims.width_in - spec_dims.width_in).abs() / spec_dims.width_in
        }
        Category::Appliance => 0.0,
    }
}

/// The full penalty of one candidate.
fn penalty(spec: &MaterialSpec, entry: &CostCatalogEntry, policy: &MatchPolicy) -> f64 {
    let mut penalty = dimension_deviation(spec, entry, policy);
    if !attribute_matches(&spec.material_type, &entry.material_type) {
        penalty += policy.material_mismatch_penalty;
    }
    if !attribute_matches(&spec.style, &entry.style) {
        penalty += policy.style_mismatch_penalty;
    }
    penalty
}

/// Resolve a spec to its best-fit catalog entry.
///
/// # Errors
///
/// [`MatchError::NoMatchFound`] when no priced entry exists in the spec's
/// category. The caller surfaces this per material; it never aborts a run.
pub fn match_spec<'a>(
    spec: &MaterialSpec,
    catalog: &'a [CostCatalogEntry],
    policy: &MatchPolicy,
) -> Result<(MatchResult, &'a CostCatalogEntry), MatchError> {
    let mut best: Option<(f64, &CostCatalogEntry)> = None;

    for entry in catalog {
        if entry.category != spec.category || !entry.is_priced() {
            continue;
        }
        let candidate_penalty = penalty(spec, entry, policy);
        let better = match best {
            None => true,
            Some((best_penalty, best_entry)) => {
                match candidate_penalty.total_cmp(&best_penalty) {
                    std::cmp::Ordering::Less => true,
                    std::cmp::Ordering::Greater => false,
                    std::cmp::Ordering::Equal => {
                        match entry.unit_total_cost.total_cmp(&best_entry.unit_total_cost) {
                            std::cmp::Ordering::Less => true,
                            std::cmp::Ordering::Greater => false,
                            std::cmp::Ordering::Equal => entry.code < best_entry.code,
                        }
                    }
                }
            }
        };
        if better {
            best = Some((candidate_penalty, entry));
        }
    }

    match best {
        Some((penalty, entry)) => {
            debug!(
                material = %spec.id,
                code = %entry.code,
                penalty,
                unit_cost = entry.unit_total_cost,
                "matched baseline"
            );
            Ok((MatchResult::new(spec, entry), entry))
        }
        None => Err(MatchError::NoMatchFound {
            material_id: spec.id.clone(),
            category: spec.category,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dimensions;

    fn window_spec() -> MaterialSpec {
        MaterialSpec {
            id: "W2".to_string(),
            category: Category::Window,
            dimensions: Some(Dimensions::new(71.0, 62.0)),
            material_type: "wood".to_string(),
            style: "casement".to_string(),
            quantity: 4,
        }
    }

    fn window_entry(code: &str, material: &str, style: &str, dims: (f64, f64), cost: f64) -> CostCatalogEntry {
        CostCatalogEntry {
            code: code.to_string(),
            category: Category::Window,
            dimensions: Some(Dimensions::new(dims.0, dims.1)),
            material_type: material.to_string(),
            style: style.to_string(),
            unit_material_cost: cost * 0.8,
            unit_labor_cost: cost * 0.2,
            unit_total_cost: cost,
        }
    }

    #[test]
    fn exact_attribute_match_beats_closer_dimensions() {
        let catalog = vec![
            // same dims but wrong material and style
            window_entry("WIN-01", "Vinyl", "sliding", (71.0, 62.0), 900.0),
            // slightly off dims, exact attributes
            window_entry("WIN-02", "Wood", "casement", (68.0, 60.0), 1715.0),
        ];
        let (result, _) = match_spec(&window_spec(), &catalog, &MatchPolicy::default()).unwrap();
        assert_eq!(result.catalog_code, "WIN-02");
    }

    #[test]
    fn ties_break_to_cheaper_then_lexical() {
        let catalog = vec![
            window_entry("WIN-B", "Wood", "casement", (71.0, 62.0), 1500.0),
            window_entry("WIN-A", "Wood", "casement", (71.0, 62.0), 1500.0),
            window_entry("WIN-C", "Wood", "casement", (71.0, 62.0), 1400.0),
        ];
        let (result, _) = match_spec(&window_spec(), &catalog, &MatchPolicy::default()).unwrap();
        // cheapest wins; among equal-cost entries the lexically-lowest code
        assert_eq!(result.catalog_code, "WIN-C");

        let catalog = vec![
            window_entry("WIN-B", "Wood", "casement", (71.0, 62.0), 1500.0),
            window_entry("WIN-A", "Wood", "casement", (71.0, 62.0), 1500.0),
        ];
        let (result, _) = match_spec(&window_spec(), &catalog, &MatchPolicy::default()).unwrap();
        assert_eq!(result.catalog_code, "WIN-A");
    }

    #[test]
    fn empty_category_raises_no_match() {
        let catalog = vec![window_entry("WIN-01", "Wood", "casement", (71.0, 62.0), 1715.0)];
        let spec = MaterialSpec {
            category: Category::InteriorDoor,
            ..window_spec()
        };
        let err = match_spec(&spec, &catalog, &MatchPolicy::default()).unwrap_err();
        assert_eq!(
            err,
            MatchError::NoMatchFound {
                material_id: "W2".to_string(),
                category: Category::InteriorDoor,
            }
        );
    }

    #[test]
    fn unpriced_entries_are_never_matched() {
        // A $0 refrigerator row must not become a baseline.
        let mut zero_cost = window_entry("WIN-00", "Wood", "casement", (71.0, 62.0), 0.0);
        zero_cost.unit_material_cost = 0.0;
        zero_cost.unit_labor_cost = 0.0;
        let catalog = vec![zero_cost];
        let err = match_spec(&window_spec(), &catalog, &MatchPolicy::default()).unwrap_err();
        assert!(matches!(err, MatchError::NoMatchFound { .. }));
    }

    #[test]
    fn baseline_costs_scale_by_quantity() {
        let catalog = vec![window_entry("WIN-01", "Wood", "casement", (71.0, 62.0), 1715.0)];
        let (result, _) = match_spec(&window_spec(), &catalog, &MatchPolicy::default()).unwrap();
        assert_eq!(result.baseline_unit_cost, 1715.0);
        assert_eq!(result.baseline_total_cost, 1715.0 * 4.0);
    }

    #[test]
    fn attribute_similarity_is_containment() {
        assert!(attribute_matches("wood", "Wood solid core"));
        assert!(attribute_matches("WD solid core wood", "wood"));
        assert!(!attribute_matches("wood", "metal"));
        assert!(!attribute_matches("", "wood"));
    }
}
