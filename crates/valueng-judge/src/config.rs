//! Remote judge configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Default messages endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";

/// Default evaluation model.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Configuration for the remote judge.
///
/// A missing API key means the remote backend is unavailable; callers fall
/// back to the deterministic heuristic and never block startup on
/// credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeConfig {
    /// API key; `None` disables the remote backend
    #[serde(skip_serializing, default)]
    pub api_key: Option<String>,
    /// Messages endpoint URL
    pub endpoint: String,
    /// Model identifier
    pub model: String,
    /// Token cap for the (tiny) JSON answer
    pub max_tokens: u32,
    /// Per-request deadline, milliseconds
    pub timeout_ms: u64,
    /// Retries before falling back (attempts = retries + 1)
    pub max_retries: u32,
    /// Base backoff delay, doubled per retry, milliseconds
    pub backoff_base_ms: u64,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 128,
            timeout_ms: 30_000,
            max_retries: 2,
            backoff_base_ms: 250,
        }
    }
}

impl JudgeConfig {
    /// Build a configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty()),
            ..Self::default()
        }
    }

    /// Whether the remote backend can be used at all.
    pub fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    /// Per-request deadline.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Backoff delay for the given retry attempt (0-based).
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.backoff_base_ms.saturating_mul(1 << attempt.min(16)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_means_unavailable() {
        let config = JudgeConfig::default();
        assert!(!config.is_available());
    }

    #[test]
    fn backoff_doubles_per_attempt() {
        let config = JudgeConfig::default();
        assert_eq!(config.backoff_delay(0), Duration::from_millis(250));
        assert_eq!(config.backoff_delay(1), Duration::from_millis(500));
        assert_eq!(config.backoff_delay(2), Duration::from_millis(1000));
    }

    #[test]
    fn api_key_is_never_serialized() {
        let config = JudgeConfig {
            api_key: Some("secret".to_string()),
            ..JudgeConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
