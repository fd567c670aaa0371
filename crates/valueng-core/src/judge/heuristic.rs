//! Deterministic fallback judge.
//!
//! Scores functional/design deviation from categorical keyword overlap
//! between the two descriptions. Used whenever the remote judge is
//! unavailable or fails; also the always-on backend for offline runs.

use async_trait::async_trait;

use crate::error::JudgeError;
use crate::types::Assessment;

use super::Judge;

/// Window operating types recognized in descriptions.
const WINDOW_STYLES: [&str; 6] = [
    "casement",
    "sliding",
    "fixed",
    "picture",
    "awning",
    "double hung",
];

/// Construction materials recognized in descriptions.
const MATERIALS: [&str; 6] = ["wood", "vinyl", "aluminum", "metal", "glass", "fiberglass"];

/// Deterministic keyword-similarity judge.
///
/// The verdict is a pure function of the two descriptions:
///
/// - same window style and same material → (5, 5)
/// - same window style, different material → (4, 3)
/// - no style signal, same material → (4, 4)
/// - otherwise → (3, 3)
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicJudge;

impl HeuristicJudge {
    /// Create a heuristic judge.
    pub fn new() -> Self {
        Self
    }

    /// Synchronous assessment, shared by the trait impl and by the scorer's
    /// local fallback path.
    pub fn assess_descriptions(original: &str, alternative: &str) -> Assessment {
        let original = original.to_lowercase();
        let alternative = alternative.to_lowercase();

        let shared_style = WINDOW_STYLES
            .iter()
            .any(|style| original.contains(style) && alternative.contains(style));
        let style_signal = WINDOW_STYLES
            .iter()
            .any(|style| original.contains(style) || alternative.contains(style));
        let shared_material = MATERIALS
            .iter()
            .any(|material| original.contains(material) && alternative.contains(material));

        match (style_signal, shared_style, shared_material) {
            (_, true, true) => Assessment { functional: 5, design: 5 },
            (_, true, false) => Assessment { functional: 4, design: 3 },
            (false, _, true) => Assessment { functional: 4, design: 4 },
            _ => Assessment { functional: 3, design: 3 },
        }
    }
}

#[async_trait]
impl Judge for HeuristicJudge {
    async fn assess(&self, original: &str, alternative: &str) -> Result<Assessment, JudgeError> {
        Ok(Self::assess_descriptions(original, alternative))
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
