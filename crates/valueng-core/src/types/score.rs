//! Three-criterion evaluation records.

use serde::{Deserialize, Serialize};

use crate::error::JudgeError;

/// A judge's functional/design verdict for one substitute.
///
/// Both values are in `[1, 5]`, 5 meaning most faithful to the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    /// Faithfulness to the original's function (ventilation, security, ...)
    pub functional: u8,
    /// Faithfulness to the original's design intent
    pub design: u8,
}

impl Assessment {
    /// Create an assessment, rejecting out-of-range values.
    pub fn new(functional: i64, design: i64) -> Result<Self, JudgeError> {
        if !(1..=5).contains(&functional) || !(1..=5).contains(&design) {
            return Err(JudgeError::OutOfRange { functional, design });
        }
        Ok(Self {
            functional: functional as u8,
            design: design as u8,
        })
    }

    /// An assessment known to be in range at compile time.
    pub(crate) const fn fixed(functional: u8, design: u8) -> Self {
        Self { functional, design }
    }
}

/// The full three-criterion score of one ranked alternative.
///
/// Rank 0 is always `(5, 5, 1)`: fully faithful, no cost benefit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// The material this score belongs to
    pub material_id: String,
    /// The rank it evaluates (0 = original)
    pub rank: u8,
    /// Functional criterion, 1..=5
    pub functional: u8,
    /// Design criterion, 1..=5
    pub design: u8,
    /// Cost criterion, 1..=5, from the reduction-percentage table
    pub cost: u8,
}

impl Score {
    /// The fixed score of every rank-0 original: `(5, 5, 1)`.
    pub fn baseline(material_id: impl Into<String>) -> Self {
        Self {
            material_id: material_id.into(),
            rank: 0,
            functional: 5,
            design: 5,
            cost: 1,
        }
    }

    /// Score for a substitute from a judge assessment and cost bucket.
    pub fn substitute(
        material_id: impl Into<String>,
        rank: u8,
        assessment: Assessment,
        cost: u8,
    ) -> Self {
        Self {
            material_id: material_id.into(),
            rank,
            functional: assessment.functional,
            design: assessment.design,
            cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_rejects_out_of_range() {
        assert!(Assessment::new(0, 3).is_err());
        assert!(Assessment::new(3, 6).is_err());
        assert!(Assessment::new(-1, 2).is_err());
        assert!(Assessment::new(1, 5).is_ok());
    }

    #[test]
    fn baseline_score_is_5_5_1() {
        let s = Score::baseline("W2");
        assert_eq!((s.functional, s.design, s.cost), (5, 5, 1));
        assert_eq!(s.rank, 0);
    }

    #[test]
    fn substitute_score_carries_assessment() {
        let a = Assessment::new(4, 3).unwrap();
        let s = Score::substitute("W2", 1, a, 4);
        assert_eq!((s.functional, s.design, s.cost), (4, 3, 4));
    }
}
