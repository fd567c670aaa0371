//! Top-level unified error type for the valueng library.

use thiserror::Error;

use super::sub_errors::{ConfigError, JudgeError, MatchError, ScoreError, ValidationError};

// ============================================================================
// TOP-LEVEL UNIFIED ERROR TYPE
// ============================================================================

/// Top-level unified error type for the valueng library.
///
/// All crate errors are convertible to this type via `From` implementations.
///
/// # Recoverability
///
/// - Recoverable: judge failures (the scorer falls back to the heuristic) and
///   per-material `NoMatchFound` (the material is flagged unresolved)
/// - Non-recoverable: configuration and validation errors, which fail the run
///   before any selection is produced
#[derive(Debug, Error)]
pub enum ValuengError {
    /// Matching error.
    #[error("match error: {0}")]
    Match(#[from] MatchError),

    /// Scoring error.
    #[error("score error: {0}")]
    Score(#[from] ScoreError),

    /// Judge error.
    #[error("judge error: {0}")]
    Judge(#[from] JudgeError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input validation error.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Internal error indicating a bug.
    ///
    /// These indicate invariant violations and should be investigated.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ValuengError {
    /// Whether the error is recoverable within a run.
    ///
    /// Recoverable errors degrade a single material or a single judge call;
    /// non-recoverable errors abort the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Match(_) | Self::Judge(_))
    }
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ValuengError>;
