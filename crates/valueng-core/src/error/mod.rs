//! Error types for valueng-core.
//!
//! This module defines the central error types used throughout the value
//! engineering pipeline:
//!
//! - [`ValuengError`]: top-level unified error for all crate errors
//! - Sub-error types: [`MatchError`], [`ScoreError`], [`JudgeError`],
//!   [`ConfigError`], [`ValidationError`]
//!
//! Library code never panics on bad input; every stage returns `Result` and
//! propagates with the `?` operator. Judge failures are recoverable — the
//! scorer falls back to the deterministic heuristic — and are never surfaced
//! from a pipeline run.

mod sub_errors;
mod unified;

#[cfg(test)]
mod tests;

pub use sub_errors::{ConfigError, JudgeError, MatchError, ScoreError, ValidationError};
pub use unified::{Result, ValuengError};
