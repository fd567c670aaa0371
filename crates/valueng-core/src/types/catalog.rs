//! Priced reference records from the external cost database.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::material::{Category, Dimensions};

/// A priced reference record, loaded once per run.
///
/// Immutable reference data. Entries with a non-positive `unit_total_cost` are
/// kept through validation (the source tables contain unpriced rows) but are
/// never matchable — the matcher excludes them so a $0 baseline can never be
/// produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostCatalogEntry {
    /// Cost-database line code, e.g. `08 52 10.40 0180`
    pub code: String,
    /// Material category this entry prices
    pub category: Category,
    /// Unit dimensions; absent for appliances
    pub dimensions: Option<Dimensions>,
    /// Material of construction
    pub material_type: String,
    /// Style or operating type
    pub style: String,
    /// Material cost per unit, USD
    pub unit_material_cost: f64,
    /// Installation labor cost per unit, USD
    pub unit_labor_cost: f64,
    /// Total installed cost per unit, USD
    pub unit_total_cost: f64,
}

impl CostCatalogEntry {
    /// Validate the entry at pipeline entry.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fail = |reason: &str| ValidationError::InvalidCatalogEntry {
            code: self.code.clone(),
            reason: reason.to_string(),
        };

        if self.code.trim().is_empty() {
            return Err(fail("code must not be empty"));
        }
        for (name, cost) in [
            ("unit_material_cost", self.unit_material_cost),
            ("unit_labor_cost", self.unit_labor_cost),
            ("unit_total_cost", self.unit_total_cost),
        ] {
            if !cost.is_finite() || cost < 0.0 {
                return Err(fail(&format!("{name} must be finite and non-negative")));
            }
        }
        if let Some(dims) = self.dimensions {
            if !dims.is_valid() {
                return Err(fail("dimensions must be finite and positive"));
            }
        }
        Ok(())
    }

    /// Whether the entry carries a usable price.
    #[inline]
    pub fn is_priced(&self) -> bool {
        self.unit_total_cost > 0.0
    }

    /// Human-readable description, used in judge prompts and exports.
    ///
    /// Renders as `"<material> <style> <W x H>"`, e.g.
    /// `Wood casement 5'-11" x 5'-2"`.
    pub fn description(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(3);
        if !self.material_type.trim().is_empty() {
            parts.push(self.material_type.trim().to_string());
        }
        if !self.style.trim().is_empty() {
            parts.push(self.style.trim().to_string());
        }
        if let Some(dims) = self.dimensions {
            parts.push(dims.display_feet_inches());
        }
        parts.join(" ")
    }
}
