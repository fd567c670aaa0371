//! Substitute enumeration: up to 3 strictly-cheaper candidates per material.
//!
//! Category-specific filters, all requiring a candidate strictly cheaper than
//! the baseline:
//!
//! - Windows: same style, area within ±30% of the baseline area
//! - Exterior doors: height > 7 ft, similar material, fixed width
//! - Interior doors: same material, width within ±6 in of the spec
//! - Appliances: one synthetic substitute at 90% of the baseline (no lookup)
//!
//! Survivors are sorted ascending by unit cost (lexical code on ties) and
//! assigned ranks 1..=3. Returning fewer than 3 is not an error. Rank 0 — the
//! baseline itself — always leads the returned set.

use tracing::debug;

use crate::config::AlternativePolicy;
use crate::matcher::attribute_matches;
use crate::types::{Alternative, Category, CostCatalogEntry, MatchResult, MaterialSpec};

use crate::config::constants::substitution::APPLIANCE_DISCOUNT_CODE;

/// Whether a catalog entry passes the category-specific substitution rule.
fn passes_category_rule(
    spec: &MaterialSpec,
    baseline: &CostCatalogEntry,
    candidate: &CostCatalogEntry,
    policy: &AlternativePolicy,
) -> bool {
    match spec.category {
        Category::Window => {
            let (Some(base_dims), Some(cand_dims)) = (baseline.dimensions, candidate.dimensions)
            else {
                return false;
            };
            if !attribute_matches(&baseline.style, &candidate.style) {
                return false;
            }
            let base_area = base_dims.area_sqft();
            let deviation_pct = (cand_dims.area_sqft() - base_area).abs() / base_area * 100.0;
            deviation_pct <= policy.window_area_tolerance_pct
        }
        Category::ExteriorDoor => {
            let (Some(base_dims), Some(cand_dims)) = (baseline.dimensions, candidate.dimensions)
            else {
                return false;
            };
            cand_dims.height_in > policy.exterior_door_min_height_in
                && attribute_matches(&spec.material_type, &candidate.material_type)
                && (cand_dims.width_in - base_dims.width_in).abs()
                    <= policy.exterior_door_width_epsilon_in
        }
        Category::InteriorDoor => {
            let (Some(spec_dims), Some(cand_dims)) = (spec.dimensions, candidate.dimensions)
            else {
                return false;
            };
            attribute_matches(&spec.material_type, &candidate.material_type)
                && (cand_dims.width_in - spec_dims.width_in).abs()
                    <= policy.interior_door_width_tolerance_in
        }
        // Appliances never reach the catalog scan.
        Category::Appliance => false,
    }
}

/// Enumerate the ranked alternatives for one matched material.
///
/// The result always starts with the rank-0 baseline, followed by 0..=3
/// strictly-cheaper substitutes.
pub fn find_alternatives(
    spec: &MaterialSpec,
    matched: &MatchResult,
    baseline_entry: &CostCatalogEntry,
    catalog: &[CostCatalogEntry],
    policy: &AlternativePolicy,
) -> Vec<Alternative> {
    let mut ranked = vec![Alternative::baseline(
        spec,
        matched,
        baseline_entry.description(),
    )];

    if spec.category == Category::Appliance {
        // The single negotiated-discount substitute; no catalog lookup.
        let discounted = matched.baseline_unit_cost * (1.0 - policy.appliance_discount);
        ranked.push(Alternative::substitute(
            spec,
            matched,
            1,
            APPLIANCE_DISCOUNT_CODE.to_string(),
            format!(
                "{} ({}% discount)",
                baseline_entry.description(),
                (policy.appliance_discount * 100.0).round()
            ),
            discounted,
        ));
        return ranked;
    }

    let mut candidates: Vec<&CostCatalogEntry> = catalog
        .iter()
        .filter(|entry| {
            entry.category == spec.category
                && entry.code != matched.catalog_code
                && entry.is_priced()
                && entry.unit_total_cost < matched.baseline_unit_cost
                && passes_category_rule(spec, baseline_entry, entry, policy)
        })
        .collect();

    candidates.sort_by(|a, b| {
        a.unit_total_cost
            .total_cmp(&b.unit_total_cost)
            .then_with(|| a.code.cmp(&b.code))
    });

    for (index, entry) in candidates.iter().take(policy.max_alternatives).enumerate() {
        ranked.push(Alternative::substitute(
            spec,
            matched,
            (index + 1) as u8,
            entry.code.clone(),
            entry.description(),
            entry.unit_total_cost,
        ));
    }

    debug!(
        material = %spec.id,
        substitutes = ranked.len() - 1,
        "enumerated alternatives"
    );
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AlternativePolicy;
    use crate::types::Dimensions;

    fn entry(
        code: &str,
        category: Category,
        material: &str,
        style: &str,
        dims: Option<(f64, f64)>,
        cost: f64,
    ) -> CostCatalogEntry {
        CostCatalogEntry {
            code: code.to_string(),
            category,
            dimensions: dims.map(|(w, h)| Dimensions::new(w, h)),
            material_type: material.to_string(),
            style: style.to_string(),
            unit_material_cost: cost * 0.8,
            unit_labor_cost: cost * 0.2,
            unit_total_cost: cost,
        }
    }

    fn window_fixture() -> (MaterialSpec, MatchResult, CostCatalogEntry) {
        let spec = MaterialSpec {
            id: "W2".to_string(),
            category: Category::Window,
            dimensions: Some(Dimensions::new(71.0, 62.0)),
            material_type: "wood".to_string(),
            style: "casement".to_string(),
            quantity: 2,
        };
        let baseline = entry(
            "WIN-0180",
            Category::Window,
            "Wood",
            "casement",
            Some((71.0, 62.0)),
            1715.0,
        );
        let matched = MatchResult::new(&spec, &baseline);
        (spec, matched, baseline)
    }

    #[test]
    fn windows_require_same_style_and_area_band() {
        let (spec, matched, baseline) = window_fixture();
        let catalog = vec![
            baseline.clone(),
            // qualifying: casement, area within 30%, cheaper
            entry("WIN-0210", Category::Window, "Aluminum", "casement", Some((53.0, 63.0)), 1335.0),
            // wrong style
            entry("WIN-0300", Category::Window, "Vinyl", "sliding", Some((60.0, 60.0)), 900.0),
            // area out of band (tiny)
            entry("WIN-0400", Category::Window, "Wood", "casement", Some((24.0, 24.0)), 500.0),
            // more expensive than baseline
            entry("WIN-0500", Category::Window, "Wood", "casement", Some((71.0, 62.0)), 1800.0),
        ];
        let alts = find_alternatives(&spec, &matched, &baseline, &catalog, &AlternativePolicy::default());
        assert_eq!(alts.len(), 2);
        assert!(alts[0].is_baseline());
        assert_eq!(alts[1].catalog_code, "WIN-0210");
        assert!((alts[1].cost_reduction_pct - 22.157).abs() < 0.01);
    }

    #[test]
    fn equal_cost_candidates_are_excluded() {
        let (spec, matched, baseline) = window_fixture();
        let catalog = vec![
            baseline.clone(),
            entry("WIN-0600", Category::Window, "Wood", "casement", Some((71.0, 62.0)), 1715.0),
        ];
        let alts = find_alternatives(&spec, &matched, &baseline, &catalog, &AlternativePolicy::default());
        assert_eq!(alts.len(), 1, "never regress to an equal-or-pricier option");
    }

    #[test]
    fn substitutes_sorted_ascending_and_capped_at_three() {
        let (spec, matched, baseline) = window_fixture();
        let mut catalog = vec![baseline.clone()];
        for (code, cost) in [
            ("WIN-D", 1500.0),
            ("WIN-C", 1200.0),
            ("WIN-B", 1200.0),
            ("WIN-A", 1400.0),
            ("WIN-E", 1600.0),
        ] {
            catalog.push(entry(code, Category::Window, "Wood", "casement", Some((71.0, 62.0)), cost));
        }
        let alts = find_alternatives(&spec, &matched, &baseline, &catalog, &AlternativePolicy::default());
        let ranked: Vec<(&str, u8)> = alts[1..]
            .iter()
            .map(|a| (a.catalog_code.as_str(), a.rank))
            .collect();
        // ascending cost, lexical code on the 1200 tie, capped at 3
        assert_eq!(ranked, vec![("WIN-B", 1), ("WIN-C", 2), ("WIN-A", 3)]);
        let costs: Vec<f64> = alts[1..].iter().map(|a| a.alt_unit_cost).collect();
        assert!(costs.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn exterior_doors_need_tall_openings_and_fixed_width() {
        let spec = MaterialSpec {
            id: "D9".to_string(),
            category: Category::ExteriorDoor,
            dimensions: Some(Dimensions::new(72.0, 96.0)),
            material_type: "glass".to_string(),
            style: "sliding".to_string(),
            quantity: 1,
        };
        let baseline = entry(
            "EXT-0100",
            Category::ExteriorDoor,
            "Aluminum glass",
            "sliding",
            Some((72.0, 96.0)),
            2400.0,
        );
        let matched = MatchResult::new(&spec, &baseline);
        let catalog = vec![
            baseline.clone(),
            // qualifying: tall, same width, glass
            entry("EXT-0200", Category::ExteriorDoor, "Wood glass", "sliding", Some((72.0, 90.0)), 2000.0),
            // too short (7 ft exactly is not taller than 7 ft)
            entry("EXT-0300", Category::ExteriorDoor, "Aluminum glass", "sliding", Some((72.0, 84.0)), 1500.0),
            // wrong width
            entry("EXT-0400", Category::ExteriorDoor, "Aluminum glass", "sliding", Some((60.0, 96.0)), 1400.0),
            // dissimilar material
            entry("EXT-0500", Category::ExteriorDoor, "Steel", "swinging", Some((72.0, 96.0)), 1300.0),
        ];
        let alts = find_alternatives(&spec, &matched, &baseline, &catalog, &AlternativePolicy::default());
        assert_eq!(alts.len(), 2);
        assert_eq!(alts[1].catalog_code, "EXT-0200");
    }

    #[test]
    fn interior_doors_match_material_and_width_band() {
        let spec = MaterialSpec {
            id: "Door1".to_string(),
            category: Category::InteriorDoor,
            dimensions: Some(Dimensions::new(36.0, 84.0)),
            material_type: "wood".to_string(),
            style: "solid core".to_string(),
            quantity: 8,
        };
        let baseline = entry(
            "INT-0100",
            Category::InteriorDoor,
            "Wood",
            "solid core",
            Some((36.0, 84.0)),
            1231.0,
        );
        let matched = MatchResult::new(&spec, &baseline);
        let catalog = vec![
            baseline.clone(),
            // qualifying: wood, width within 6 in
            entry("INT-0200", Category::InteriorDoor, "Wood", "hollow core", Some((34.0, 84.0)), 795.0),
            // width out of band
            entry("INT-0300", Category::InteriorDoor, "Wood", "hollow core", Some((28.0, 84.0)), 600.0),
            // wrong material
            entry("INT-0400", Category::InteriorDoor, "Metal", "hollow core", Some((36.0, 84.0)), 700.0),
        ];
        let alts = find_alternatives(&spec, &matched, &baseline, &catalog, &AlternativePolicy::default());
        assert_eq!(alts.len(), 2);
        assert_eq!(alts[1].catalog_code, "INT-0200");
        assert!((alts[1].cost_reduction_pct - 35.42).abs() < 0.01);
    }

    #[test]
    fn appliances_get_one_synthetic_discount() {
        let spec = MaterialSpec {
            id: "Refrigerator".to_string(),
            category: Category::Appliance,
            dimensions: None,
            material_type: "Refrigerator, no frost".to_string(),
            style: String::new(),
            quantity: 40,
        };
        let baseline = entry(
            "APP-0100",
            Category::Appliance,
            "Refrigerator, no frost",
            "",
            None,
            635.0,
        );
        let matched = MatchResult::new(&spec, &baseline);
        // catalog noise must be ignored for appliances
        let catalog = vec![
            baseline.clone(),
            entry("APP-0200", Category::Appliance, "Refrigerator", "", None, 300.0),
        ];
        let alts = find_alternatives(&spec, &matched, &baseline, &catalog, &AlternativePolicy::default());
        assert_eq!(alts.len(), 2);
        assert_eq!(alts[1].catalog_code, "REDUCED");
        assert!((alts[1].alt_unit_cost - 571.5).abs() < 1e-9);
        assert!((alts[1].cost_reduction_pct - 10.0).abs() < 1e-9);
        assert_eq!(alts[1].alt_total_cost, 571.5 * 40.0);
    }

    #[test]
    fn no_candidates_is_not_an_error() {
        let (spec, matched, baseline) = window_fixture();
        let alts = find_alternatives(&spec, &matched, &baseline, &[baseline.clone()], &AlternativePolicy::default());
        assert_eq!(alts.len(), 1);
        assert!(alts[0].is_baseline());
    }
}
