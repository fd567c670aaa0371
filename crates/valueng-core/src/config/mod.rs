//! Policy configuration for the pipeline stages.
//!
//! All tolerances and thresholds flow in through [`PolicyConfig`] rather than
//! being hard-coded in the stages, so the pipeline stays testable against
//! varied policy tables. [`constants`] holds the default values.

pub mod constants;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Matcher penalty weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchPolicy {
    /// Surcharge when the candidate's material type differs from the spec's
    pub material_mismatch_penalty: f64,
    /// Surcharge when the candidate's style differs from the spec's
    pub style_mismatch_penalty: f64,
    /// Deviation assumed when dimensions are missing in a dimensioned category
    pub dimensionless_deviation: f64,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            material_mismatch_penalty: constants::matching::MATERIAL_MISMATCH_PENALTY,
            style_mismatch_penalty: constants::matching::STYLE_MISMATCH_PENALTY,
            dimensionless_deviation: constants::matching::DIMENSIONLESS_DEVIATION,
        }
    }
}

/// Substitution-rule tolerances for the alternatives engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlternativePolicy {
    /// Substitutes kept per material (ranks 1..=N)
    pub max_alternatives: usize,
    /// Windows: allowed area deviation from the baseline, percent
    pub window_area_tolerance_pct: f64,
    /// Exterior doors: minimum candidate height, inches
    pub exterior_door_min_height_in: f64,
    /// Exterior doors: allowed width deviation from the baseline, inches
    pub exterior_door_width_epsilon_in: f64,
    /// Interior doors: allowed width deviation from the spec, inches
    pub interior_door_width_tolerance_in: f64,
    /// Appliances: discount applied to the synthetic substitute
    pub appliance_discount: f64,
}

impl Default for AlternativePolicy {
    fn default() -> Self {
        use constants::substitution as s;
        Self {
            max_alternatives: s::MAX_ALTERNATIVES,
            window_area_tolerance_pct: s::WINDOW_AREA_TOLERANCE_PCT,
            exterior_door_min_height_in: s::EXTERIOR_DOOR_MIN_HEIGHT_IN,
            exterior_door_width_epsilon_in: s::EXTERIOR_DOOR_WIDTH_EPSILON_IN,
            interior_door_width_tolerance_in: s::INTERIOR_DOOR_WIDTH_TOLERANCE_IN,
            appliance_discount: s::APPLIANCE_DISCOUNT,
        }
    }
}

/// The reduction-percentage-to-score table.
///
/// Bands are `(minimum reduction %, score)` pairs ordered highest first; a
/// reduction scores the first band it reaches, or `floor_score` below all
/// bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostScorePolicy {
    /// Score bands, highest minimum first
    pub bands: Vec<(f64, u8)>,
    /// Score for reductions below every band
    pub floor_score: u8,
}

impl Default for CostScorePolicy {
    fn default() -> Self {
        Self {
            bands: constants::cost_score::BANDS.to_vec(),
            floor_score: constants::cost_score::FLOOR_SCORE,
        }
    }
}

impl CostScorePolicy {
    /// Map a reduction percentage to its cost score.
    pub fn score(&self, reduction_pct: f64) -> u8 {
        for &(min_pct, score) in &self.bands {
            if reduction_pct >= min_pct {
                return score;
            }
        }
        self.floor_score
    }

    /// Validate that the table is a monotonic non-decreasing step function
    /// bounded to `[1, 5]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut prev: Option<(f64, u8)> = None;
        for &(min_pct, score) in &self.bands {
            if !(1..=5).contains(&score) {
                return Err(ConfigError::InvalidPolicy(format!(
                    "cost score {score} outside 1..=5"
                )));
            }
            if !min_pct.is_finite() || min_pct < 0.0 {
                return Err(ConfigError::InvalidPolicy(format!(
                    "cost band threshold {min_pct} must be finite and non-negative"
                )));
            }
            if let Some((prev_pct, prev_score)) = prev {
                if min_pct >= prev_pct || score > prev_score {
                    return Err(ConfigError::InvalidPolicy(
                        "cost bands must descend in threshold and score".to_string(),
                    ));
                }
            }
            prev = Some((min_pct, score));
        }
        if !(1..=5).contains(&self.floor_score) {
            return Err(ConfigError::InvalidPolicy(format!(
                "floor score {} outside 1..=5",
                self.floor_score
            )));
        }
        if let Some((_, last_score)) = prev {
            if self.floor_score > last_score {
                return Err(ConfigError::InvalidPolicy(
                    "floor score must not exceed the lowest band".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Concurrency bounds for judge dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeDispatchPolicy {
    /// Maximum judge calls in flight at once
    pub max_concurrency: usize,
    /// Per-call deadline, milliseconds
    pub call_timeout_ms: u64,
}

impl Default for JudgeDispatchPolicy {
    fn default() -> Self {
        Self {
            max_concurrency: constants::dispatch::MAX_CONCURRENCY,
            call_timeout_ms: constants::dispatch::CALL_TIMEOUT_MS,
        }
    }
}

/// The complete policy table passed into the pipeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Matcher penalty weights
    pub matching: MatchPolicy,
    /// Substitution-rule tolerances
    pub alternatives: AlternativePolicy,
    /// Reduction-to-score table
    pub cost_score: CostScorePolicy,
    /// Judge dispatch bounds
    pub dispatch: JudgeDispatchPolicy,
}

impl PolicyConfig {
    /// Validate the internally-constrained sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cost_score.validate()?;
        if self.alternatives.max_alternatives == 0 {
            return Err(ConfigError::InvalidPolicy(
                "max_alternatives must be at least 1".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.alternatives.appliance_discount) {
            return Err(ConfigError::InvalidPolicy(
                "appliance_discount must be in [0, 1)".to_string(),
            ));
        }
        if self.dispatch.max_concurrency == 0 {
            return Err(ConfigError::InvalidPolicy(
                "max_concurrency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
