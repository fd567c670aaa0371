//! Centralized policy defaults.
//!
//! Every threshold the pipeline applies is named here rather than hard-coded
//! at its point of use, for:
//!
//! 1. Single source of truth
//! 2. Easy policy updates without touching stage logic
//! 3. Test consistency
//!
//! The runtime values live in [`PolicyConfig`](super::PolicyConfig); these are
//! its defaults.

/// Substitution-rule defaults.
pub mod substitution {
    /// Maximum substitutes kept per material (ranks 1..=3).
    pub const MAX_ALTERNATIVES: usize = 3;

    /// Windows: candidate area must be within ±30% of the baseline area.
    pub const WINDOW_AREA_TOLERANCE_PCT: f64 = 30.0;

    /// Exterior doors: candidate height must exceed 7 ft.
    pub const EXTERIOR_DOOR_MIN_HEIGHT_IN: f64 = 84.0;

    /// Exterior doors: width is fixed; candidates may deviate at most this
    /// much from the baseline width.
    pub const EXTERIOR_DOOR_WIDTH_EPSILON_IN: f64 = 0.5;

    /// Interior doors: candidate width must be within ±6 in of the spec.
    pub const INTERIOR_DOOR_WIDTH_TOLERANCE_IN: f64 = 6.0;

    /// Appliances: the single synthetic substitute is priced at
    /// `baseline × (1 - APPLIANCE_DISCOUNT)`.
    pub const APPLIANCE_DISCOUNT: f64 = 0.10;

    /// Synthetic catalog code assigned to the appliance discount substitute.
    pub const APPLIANCE_DISCOUNT_CODE: &str = "REDUCED";
}

/// Matcher penalty defaults.
///
/// A candidate's penalty is its relative dimension/area deviation plus fixed
/// surcharges when its categorical attributes differ from the spec. An exact
/// `material_type`/`style` match earns its bonus by avoiding the surcharge.
pub mod matching {
    /// Added when the candidate's material type does not match the spec's.
    pub const MATERIAL_MISMATCH_PENALTY: f64 = 0.5;

    /// Added when the candidate's style does not match the spec's.
    pub const STYLE_MISMATCH_PENALTY: f64 = 0.25;

    /// Deviation assumed when either side lacks dimensions in a dimensioned
    /// category (equivalent to a 100% relative deviation).
    pub const DIMENSIONLESS_DEVIATION: f64 = 1.0;
}

/// Cost-score table defaults.
///
/// A monotonic non-decreasing step function of the reduction percentage,
/// bounded to `[1, 5]`:
///
/// ```text
/// ≥30% → 5, ≥20% → 4, ≥15% → 3, ≥10% → 2, ≥5% → 1, below 5% → 1
/// ```
///
/// Reductions below the lowest band score 1 — never higher than the reduction
/// actually warrants.
pub mod cost_score {
    /// `(minimum reduction %, score)` bands, highest band first.
    pub const BANDS: [(f64, u8); 5] = [(30.0, 5), (20.0, 4), (15.0, 3), (10.0, 2), (5.0, 1)];

    /// Score for reductions below every band.
    pub const FLOOR_SCORE: u8 = 1;
}

/// Fixed appliance scores.
///
/// Appliances bypass the judge entirely: the discount substitute is the same
/// unit at a negotiated price, so function and design are fully preserved and
/// the 10% reduction lands in the ≥10% cost band.
pub mod appliance {
    /// Functional score of the discount substitute.
    pub const FUNCTIONAL: u8 = 5;

    /// Design score of the discount substitute.
    pub const DESIGN: u8 = 5;

    /// Cost score of the discount substitute (10% bucket).
    pub const COST: u8 = 2;
}

/// Judge dispatch defaults.
pub mod dispatch {
    /// Maximum concurrent judge calls.
    pub const MAX_CONCURRENCY: usize = 4;

    /// Per-call deadline in milliseconds.
    pub const CALL_TIMEOUT_MS: u64 = 30_000;
}
