//! The judge capability seam.
//!
//! Functional/design deviation is assessed by a [`Judge`]: either a remote
//! natural-language evaluation (the `valueng-judge` crate) or the in-crate
//! deterministic [`HeuristicJudge`] fallback. The scorer only depends on the
//! trait, so tests inject fixed-output stubs.

mod heuristic;

use async_trait::async_trait;

use crate::error::JudgeError;
use crate::types::Assessment;

pub use heuristic::HeuristicJudge;

/// Assesses how faithfully a substitute preserves the original's function and
/// design intent.
///
/// # Contract
///
/// `assess` must be a pure function of the two descriptions — cacheable and
/// safely retryable. Implementations must not keep per-call mutable state
/// that changes the verdict for a repeated pair.
#[async_trait]
pub trait Judge: Send + Sync {
    /// Compare the original and substitute descriptions, returning
    /// functional/design scores in `[1, 5]`.
    async fn assess(&self, original: &str, alternative: &str) -> Result<Assessment, JudgeError>;

    /// Backend name, used in logs.
    fn name(&self) -> &'static str;
}
