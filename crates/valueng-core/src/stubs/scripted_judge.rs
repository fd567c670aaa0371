//! Fixed-output judges for deterministic tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::JudgeError;
use crate::judge::Judge;
use crate::types::Assessment;

/// A judge that replays scripted verdicts.
///
/// Pairs registered with [`ScriptedJudge::on`] return their scripted
/// assessment; everything else returns the default. Call counts are tracked
/// so tests can assert cache hits and bypass rules.
pub struct ScriptedJudge {
    default: Assessment,
    scripted: RwLock<HashMap<(String, String), Assessment>>,
    calls: AtomicUsize,
}

impl ScriptedJudge {
    /// A judge answering every pair with the same verdict.
    pub fn always(functional: u8, design: u8) -> Self {
        Self {
            default: Assessment { functional, design },
            scripted: RwLock::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Script a verdict for one description pair.
    pub fn on(self, original: &str, alternative: &str, functional: u8, design: u8) -> Self {
        self.scripted.write().insert(
            (original.to_string(), alternative.to_string()),
            Assessment { functional, design },
        );
        self
    }

    /// Number of assessments served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Judge for ScriptedJudge {
    async fn assess(&self, original: &str, alternative: &str) -> Result<Assessment, JudgeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = (original.to_string(), alternative.to_string());
        Ok(self
            .scripted
            .read()
            .get(&key)
            .copied()
            .unwrap_or(self.default))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// A judge that always fails, for exercising fallback paths.
pub struct FailingJudge;

#[async_trait]
impl Judge for FailingJudge {
    async fn assess(&self, _original: &str, _alternative: &str) -> Result<Assessment, JudgeError> {
        Err(JudgeError::Unavailable("scripted failure".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_pairs_override_the_default() {
        let judge = ScriptedJudge::always(3, 3).on("a", "b", 5, 4);
        let scripted = judge.assess("a", "b").await.unwrap();
        assert_eq!((scripted.functional, scripted.design), (5, 4));
        let fallback = judge.assess("a", "c").await.unwrap();
        assert_eq!((fallback.functional, fallback.design), (3, 3));
        assert_eq!(judge.calls(), 2);
    }

    #[tokio::test]
    async fn failing_judge_always_errors() {
        assert!(FailingJudge.assess("a", "b").await.is_err());
    }
}
