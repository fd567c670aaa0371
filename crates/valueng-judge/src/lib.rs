//! Remote LLM judge for the value engineering pipeline.
//!
//! Implements the [`Judge`](valueng_core::judge::Judge) capability with a
//! messages-API call: the original and substitute descriptions are rendered
//! into an evaluation rubric, and the model answers with functional/design
//! scores in `[1, 5]`.
//!
//! # Resilience
//!
//! [`ResilientJudge`] wraps the remote backend with a per-call deadline,
//! bounded retries with exponential backoff, and a deterministic fallback.
//! Assessments are memoized by description pair — the judge contract is a
//! pure function of the two descriptions, so repeated pairs are served from
//! cache.
//!
//! Missing credentials never block startup: [`JudgeConfig::from_env`] simply
//! reports the remote backend unavailable and callers run heuristic-only.

mod config;
mod prompt;
mod remote;
mod resilient;

pub use config::JudgeConfig;
pub use prompt::EvaluationPromptBuilder;
pub use remote::RemoteJudge;
pub use resilient::ResilientJudge;
