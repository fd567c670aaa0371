//! Messages-API judge backend.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use valueng_core::error::JudgeError;
use valueng_core::judge::Judge;
use valueng_core::types::Assessment;

use crate::config::JudgeConfig;
use crate::prompt::EvaluationPromptBuilder;

/// API version header value.
const API_VERSION: &str = "2023-06-01";

/// A judge backed by a remote messages API.
///
/// Each call renders the evaluation prompt, posts a single user message, and
/// parses a strict `{"functional": X, "design": Y}` answer. Out-of-range or
/// unparsable answers are judge failures, which the caller recovers from.
#[derive(Debug)]
pub struct RemoteJudge {
    client: reqwest::Client,
    config: JudgeConfig,
    prompt: EvaluationPromptBuilder,
}

impl RemoteJudge {
    /// Build a remote judge.
    ///
    /// # Errors
    ///
    /// [`JudgeError::Unavailable`] when the configuration carries no API key,
    /// or when the HTTP client cannot be constructed.
    pub fn new(config: JudgeConfig) -> Result<Self, JudgeError> {
        if !config.is_available() {
            return Err(JudgeError::Unavailable(format!(
                "no API key in {}",
                crate::config::API_KEY_ENV
            )));
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|err| JudgeError::Unavailable(err.to_string()))?;
        Ok(Self {
            client,
            config,
            prompt: EvaluationPromptBuilder::new(),
        })
    }

    async fn post_evaluation(&self, prompt: String) -> Result<String, JudgeError> {
        // new() guarantees the key exists.
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| JudgeError::Unavailable("API key missing".to_string()))?;

        let body = json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "messages": [{"role": "user", "content": prompt}],
        });

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(JudgeError::Http(format!("status {status}: {detail}")));
        }

        let message: MessageResponse = response
            .json()
            .await
            .map_err(|err| JudgeError::MalformedResponse(err.to_string()))?;
        message
            .content
            .into_iter()
            .find_map(|block| block.text)
            .ok_or_else(|| JudgeError::MalformedResponse("no text content block".to_string()))
    }
}

fn classify_transport_error(err: reqwest::Error) -> JudgeError {
    if err.is_timeout() {
        JudgeError::Timeout { elapsed_ms: 0 }
    } else {
        JudgeError::Http(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Parse the model's answer into an assessment.
///
/// Tolerates a fenced ```json block around the object; everything else must
/// be the strict `{"functional": X, "design": Y}` shape with in-range
/// integers.
pub(crate) fn parse_assessment(answer: &str) -> Result<Assessment, JudgeError> {
    let trimmed = answer.trim();
    let body = if trimmed.contains("```") {
        trimmed
            .split("```")
            .nth(1)
            .map(|block| block.trim_start_matches("json").trim())
            .unwrap_or(trimmed)
    } else {
        trimmed
    };

    #[derive(Deserialize)]
    struct RawScores {
        functional: i64,
        design: i64,
    }

    let raw: RawScores = serde_json::from_str(body)
        .map_err(|err| JudgeError::MalformedResponse(format!("{err}: {body}")))?;
    Assessment::new(raw.functional, raw.design)
}

#[async_trait]
impl Judge for RemoteJudge {
    async fn assess(&self, original: &str, alternative: &str) -> Result<Assessment, JudgeError> {
        let prompt = self.prompt.build(original, alternative);
        let answer = self.post_evaluation(prompt).await?;
        let assessment = parse_assessment(&answer)?;
        debug!(
            functional = assessment.functional,
            design = assessment.design,
            "remote assessment"
        );
        Ok(assessment)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
