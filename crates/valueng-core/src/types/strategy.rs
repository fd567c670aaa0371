//! Weighting strategies for selecting among scored alternatives.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::score::Score;

/// Tolerance when checking that criteria weights sum to 1.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// A weight vector over the three criteria.
///
/// # Constraint
///
/// Weights must sum to 1.0; [`CriteriaWeights::validate`] enforces this before
/// any optimization begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriteriaWeights {
    /// Weight on the functional criterion
    pub functional: f64,
    /// Weight on the design criterion
    pub design: f64,
    /// Weight on the cost criterion
    pub cost: f64,
}

impl CriteriaWeights {
    /// Create a weight vector.
    pub const fn new(functional: f64, design: f64, cost: f64) -> Self {
        Self {
            functional,
            design,
            cost,
        }
    }

    /// Sum of the three weights.
    #[inline]
    pub fn sum(&self) -> f64 {
        self.functional + self.design + self.cost
    }

    /// The weighted score of one evaluated alternative.
    #[inline]
    pub fn weighted_score(&self, score: &Score) -> f64 {
        self.functional * f64::from(score.functional)
            + self.design * f64::from(score.design)
            + self.cost * f64::from(score.cost)
    }
}

/// A named weighting of the three criteria.
///
/// # Built-in strategies
///
/// - `functional-only`: (1, 0, 0)
/// - `design-only`: (0, 1, 0)
/// - `cost-only`: (0, 0, 1)
/// - `balanced`: (1/3, 1/3, 1/3)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    /// Strategy name, stable across exports
    pub name: String,
    /// The weight vector applied to every scored alternative
    pub weights: CriteriaWeights,
}

impl Strategy {
    /// Prioritize faithfulness to the original's function.
    pub fn functional_only() -> Self {
        Self {
            name: "functional-only".to_string(),
            weights: CriteriaWeights::new(1.0, 0.0, 0.0),
        }
    }

    /// Prioritize faithfulness to the original's design intent.
    pub fn design_only() -> Self {
        Self {
            name: "design-only".to_string(),
            weights: CriteriaWeights::new(0.0, 1.0, 0.0),
        }
    }

    /// Prioritize cost reduction.
    pub fn cost_only() -> Self {
        Self {
            name: "cost-only".to_string(),
            weights: CriteriaWeights::new(0.0, 0.0, 1.0),
        }
    }

    /// Equal weight to all three criteria.
    pub fn balanced() -> Self {
        Self {
            name: "balanced".to_string(),
            weights: CriteriaWeights::new(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0),
        }
    }

    /// The four built-in strategies, in reporting order.
    pub fn builtin() -> Vec<Strategy> {
        vec![
            Self::functional_only(),
            Self::cost_only(),
            Self::design_only(),
            Self::balanced(),
        ]
    }

    /// Look up a built-in strategy by name.
    pub fn by_name(name: &str) -> Result<Strategy, ConfigError> {
        Self::builtin()
            .into_iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ConfigError::UnknownStrategy(name.to_string()))
    }

    /// Validate that the weights sum to 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights {
                name: self.name.clone(),
                sum,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_strategies_are_valid() {
        for strategy in Strategy::builtin() {
            assert!(
                strategy.validate().is_ok(),
                "strategy {} should validate",
                strategy.name
            );
        }
    }

    #[test]
    fn invalid_weights_rejected() {
        let s = Strategy {
            name: "lopsided".to_string(),
            weights: CriteriaWeights::new(0.5, 0.5, 0.5),
        };
        match s.validate() {
            Err(ConfigError::InvalidWeights { sum, .. }) => {
                assert!((sum - 1.5).abs() < 1e-9);
            }
            other => panic!("expected InvalidWeights, got {other:?}"),
        }
    }

    #[test]
    fn balanced_weighted_score_equals_simple_mean() {
        let balanced = Strategy::balanced();
        let score = Score::substitute("D1", 1, crate::types::Assessment::fixed(3, 3), 5);
        let weighted = balanced.weights.weighted_score(&score);
        let mean = (3.0 + 3.0 + 5.0) / 3.0;
        assert!((weighted - mean).abs() < 1e-9);
    }

    #[test]
    fn by_name_resolves_builtins() {
        assert_eq!(Strategy::by_name("cost-only").unwrap(), Strategy::cost_only());
        assert!(matches!(
            Strategy::by_name("cheapest"),
            Err(ConfigError::UnknownStrategy(_))
        ));
    }
}
