//! Sub-error types for valueng-core.
//!
//! Each error type covers a specific domain of failures.

use thiserror::Error;

use crate::types::Category;

// ============================================================================
// MATCH ERROR
// ============================================================================

/// Matching-related errors.
///
/// Raised by the matcher when a spec cannot be resolved to a baseline catalog
/// entry. A `NoMatchFound` flags the material as unresolved for the run; it
/// never aborts the whole pipeline and never degrades to a zero-cost
/// placeholder.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MatchError {
    /// No catalog candidate satisfies the category filters.
    ///
    /// # When This Occurs
    ///
    /// - The catalog holds no entry for the spec's category
    /// - Every entry in the category carries a non-positive total cost
    ///   (unpriced rows are never matchable)
    #[error("no catalog match for material '{material_id}' (category {category:?})")]
    NoMatchFound {
        /// The material that could not be resolved
        material_id: String,
        /// Its category
        category: Category,
    },
}

// ============================================================================
// SCORE ERROR
// ============================================================================

/// Scoring-related errors.
///
/// The scorer recovers from judge failures internally, so these variants only
/// cover invariant violations and runtime faults of the dispatch machinery.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// An alternative set is missing its rank-0 baseline entry.
    #[error("material '{material_id}' has no rank-0 baseline alternative")]
    MissingBaseline {
        /// The material whose alternatives are malformed
        material_id: String,
    },

    /// A concurrent judge dispatch task failed to complete.
    #[error("judge dispatch task failed: {0}")]
    DispatchFailed(String),
}

// ============================================================================
// JUDGE ERROR
// ============================================================================

/// Judge-related errors.
///
/// All variants are recoverable: the scorer falls back to the deterministic
/// heuristic rather than propagating them to the caller.
#[derive(Debug, Error)]
pub enum JudgeError {
    /// No judge backend is configured (e.g. missing API credentials).
    #[error("judge unavailable: {0}")]
    Unavailable(String),

    /// Transport-level failure talking to the remote judge.
    #[error("judge transport error: {0}")]
    Http(String),

    /// The judge call exceeded its deadline.
    #[error("judge call timed out after {elapsed_ms}ms")]
    Timeout {
        /// Elapsed time before the deadline fired
        elapsed_ms: u64,
    },

    /// The judge response could not be parsed into an assessment.
    #[error("malformed judge response: {0}")]
    MalformedResponse(String),

    /// The judge returned scores outside the 1..=5 range.
    #[error("judge scores out of range: functional={functional}, design={design}")]
    OutOfRange {
        /// Reported functional score
        functional: i64,
        /// Reported design score
        design: i64,
    },
}

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// Configuration errors.
///
/// These fail fast, before any optimization begins.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A strategy's criteria weights do not sum to 1.
    #[error("strategy '{name}' weights sum to {sum}, expected 1.0")]
    InvalidWeights {
        /// The offending strategy
        name: String,
        /// Actual weight sum
        sum: f64,
    },

    /// A material reached the optimizer without a complete score set.
    #[error("material '{material_id}' is missing a score for rank {rank}")]
    IncompleteScores {
        /// The material with a score gap
        material_id: String,
        /// The rank lacking a score
        rank: u8,
    },

    /// A scored material has no spec record to aggregate against.
    #[error("material '{material_id}' has no spec record for aggregation")]
    MissingSpec {
        /// The material without a spec
        material_id: String,
    },

    /// A policy table is internally inconsistent.
    #[error("invalid policy: {0}")]
    InvalidPolicy(String),

    /// A requested strategy name is not defined.
    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Input validation errors.
///
/// Raised at pipeline entry when a normalized input record is malformed.
/// The ingestion layer is expected to deliver clean collections; these are
/// descriptive rejections, not recovery points.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// A material spec failed validation.
    #[error("invalid material '{id}': {reason}")]
    InvalidMaterial {
        /// Spec id
        id: String,
        /// What was wrong with it
        reason: String,
    },

    /// A catalog entry failed validation.
    #[error("invalid catalog entry '{code}': {reason}")]
    InvalidCatalogEntry {
        /// Catalog code
        code: String,
        /// What was wrong with it
        reason: String,
    },

    /// Two material specs share an id.
    #[error("duplicate material id '{id}'")]
    DuplicateMaterial {
        /// The repeated id
        id: String,
    },
}
