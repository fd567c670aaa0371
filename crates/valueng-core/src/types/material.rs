//! Material categories, typed dimensions, and project material specs.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Material category.
///
/// Category-specific matching and substitution rules dispatch over this enum
/// rather than over loosely-typed strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Window units (casement, sliding, fixed, ...)
    Window,
    /// Exterior doors (balcony / sliding glass)
    ExteriorDoor,
    /// Interior doors
    InteriorDoor,
    /// Kitchen and laundry appliances
    Appliance,
}

impl Category {
    /// All categories, in aggregation order.
    pub const fn all() -> [Category; 4] {
        [
            Category::Window,
            Category::ExteriorDoor,
            Category::InteriorDoor,
            Category::Appliance,
        ]
    }

    /// Whether specs of this category must carry dimensions.
    ///
    /// Appliances are matched by description only; everything else is matched
    /// and substituted by dimensional similarity.
    pub const fn requires_dimensions(&self) -> bool {
        !matches!(self, Category::Appliance)
    }

    /// Human-readable label used in summaries and exports.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Window => "Windows",
            Category::ExteriorDoor => "Exterior Doors",
            Category::InteriorDoor => "Interior Doors",
            Category::Appliance => "Appliances",
        }
    }
}

/// Typed dimensions in inches.
///
/// Produced once by the ingestion boundary from string-encoded dimensions
/// (e.g. `5'-11" x 5'-2"`); the core never re-parses strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in inches
    pub width_in: f64,
    /// Height in inches
    pub height_in: f64,
}

impl Dimensions {
    /// Create dimensions from width and height in inches.
    pub const fn new(width_in: f64, height_in: f64) -> Self {
        Self { width_in, height_in }
    }

    /// Area in square feet.
    #[inline]
    pub fn area_sqft(&self) -> f64 {
        (self.width_in * self.height_in) / 144.0
    }

    /// Whether both extents are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width_in.is_finite()
            && self.height_in.is_finite()
            && self.width_in > 0.0
            && self.height_in > 0.0
    }

    /// Render as feet-and-inches, e.g. `5'-11" x 5'-2"`.
    ///
    /// Used when composing catalog descriptions for judge prompts.
    pub fn display_feet_inches(&self) -> String {
        format!(
            "{} x {}",
            format_feet_inches(self.width_in),
            format_feet_inches(self.height_in)
        )
    }
}

fn format_feet_inches(total_in: f64) -> String {
    let total = total_in.round() as i64;
    format!("{}'-{}\"", total / 12, total % 12)
}

/// The original project requirement for one material type.
///
/// Immutable; created once from normalized input by the out-of-scope ingestion
/// layer (schedule parsing, unit cleanup, unit-count aggregation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Project-unique identifier (schedule mark), e.g. `W2` or `Door1`
    pub id: String,
    /// Material category
    pub category: Category,
    /// Unit dimensions; absent for appliances
    pub dimensions: Option<Dimensions>,
    /// Material of construction, e.g. `wood`, `vinyl`, `metal`
    pub material_type: String,
    /// Style or operating type, e.g. `casement`, `hollow core`
    pub style: String,
    /// Installed unit count across the project
    pub quantity: u32,
}

impl MaterialSpec {
    /// Validate the spec at pipeline entry.
    ///
    /// Rejects empty ids, zero quantities, and missing or degenerate
    /// dimensions for dimensioned categories.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fail = |reason: &str| ValidationError::InvalidMaterial {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.trim().is_empty() {
            return Err(fail("id must not be empty"));
        }
        if self.quantity == 0 {
            return Err(fail("quantity must be at least 1"));
        }
        match self.dimensions {
            Some(dims) if !dims.is_valid() => {
                Err(fail("dimensions must be finite and positive"))
            }
            None if self.category.requires_dimensions() => {
                Err(fail("dimensions are required for this category"))
            }
            _ => Ok(()),
        }
    }
}
