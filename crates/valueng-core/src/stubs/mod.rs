//! Test-oriented judge implementations.
//!
//! Full trait implementations with fixed behavior, suitable for unit and
//! integration tests that need deterministic scoring or forced failures.
//! Production runs use [`HeuristicJudge`](crate::judge::HeuristicJudge) or
//! the remote judge crate.

mod scripted_judge;

pub use scripted_judge::{FailingJudge, ScriptedJudge};
