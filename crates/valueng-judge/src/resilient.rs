//! Retry, timeout, and fallback wrapper around a primary judge.

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::time::timeout;
use tracing::{debug, warn};

use valueng_core::error::JudgeError;
use valueng_core::judge::Judge;
use valueng_core::types::Assessment;

use crate::config::JudgeConfig;

/// A judge that retries a primary backend and falls back when it stays down.
///
/// Per call: a deadline around the primary, then bounded retries with
/// exponential backoff, then the fallback judge. Because the judge contract
/// is a pure function of the description pair, verdicts are memoized — a
/// repeated pair never re-enters the primary.
pub struct ResilientJudge<P, F> {
    primary: P,
    fallback: F,
    config: JudgeConfig,
    cache: DashMap<(String, String), Assessment>,
}

impl<P: Judge, F: Judge> ResilientJudge<P, F> {
    /// Wrap a primary judge with retries and a fallback.
    pub fn new(primary: P, fallback: F, config: JudgeConfig) -> Self {
        Self {
            primary,
            fallback,
            config,
            cache: DashMap::new(),
        }
    }

    /// Number of memoized verdicts.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    async fn assess_primary(&self, original: &str, alternative: &str) -> Result<Assessment, JudgeError> {
        let deadline = self.config.timeout();
        let mut attempt = 0u32;
        loop {
            match timeout(deadline, self.primary.assess(original, alternative)).await {
                Ok(Ok(assessment)) => return Ok(assessment),
                Ok(Err(err)) if attempt < self.config.max_retries => {
                    let delay = self.config.backoff_delay(attempt);
                    debug!(judge = self.primary.name(), %err, attempt, ?delay, "retrying judge call");
                    tokio::time::sleep(delay).await;
                }
                Ok(Err(err)) => return Err(err),
                Err(_) if attempt < self.config.max_retries => {
                    let delay = self.config.backoff_delay(attempt);
                    debug!(judge = self.primary.name(), attempt, ?delay, "judge call timed out, retrying");
                    tokio::time::sleep(delay).await;
                }
                Err(_) => {
                    return Err(JudgeError::Timeout {
                        elapsed_ms: deadline.as_millis() as u64,
                    })
                }
            }
            attempt += 1;
        }
    }
}

#[async_trait]
impl<P: Judge, F: Judge> Judge for ResilientJudge<P, F> {
    async fn assess(&self, original: &str, alternative: &str) -> Result<Assessment, JudgeError> {
        let key = (original.to_string(), alternative.to_string());
        if let Some(cached) = self.cache.get(&key) {
            return Ok(*cached);
        }

        let assessment = match self.assess_primary(original, alternative).await {
            Ok(assessment) => assessment,
            Err(err) => {
                warn!(
                    primary = self.primary.name(),
                    fallback = self.fallback.name(),
                    %err,
                    "primary judge exhausted, falling back"
                );
                self.fallback.assess(original, alternative).await?
            }
        };

        self.cache.insert(key, assessment);
        Ok(assessment)
    }

    fn name(&self) -> &'static str {
        "resilient"
    }
}
