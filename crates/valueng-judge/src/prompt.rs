//! Evaluation prompt templates.
//!
//! Renders the original and substitute descriptions into a fixed rubric and
//! instructs the model to answer with a bare JSON object, keeping parsing
//! strict and the call cacheable.

/// Builder for evaluation prompts.
#[derive(Debug, Clone)]
pub struct EvaluationPromptBuilder {
    /// Maximum description length (characters) before truncation.
    max_content_length: usize,
}

impl Default for EvaluationPromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationPromptBuilder {
    /// Create a prompt builder with default settings.
    pub fn new() -> Self {
        Self {
            max_content_length: 500,
        }
    }

    /// Set the maximum description length.
    pub fn with_max_content_length(mut self, length: usize) -> Self {
        self.max_content_length = length;
        self
    }

    /// Build the evaluation prompt for one description pair.
    ///
    /// The prompt is a pure function of the two descriptions, so responses
    /// are cacheable and calls are safely retryable.
    pub fn build(&self, original: &str, alternative: &str) -> String {
        let original = self.truncate_content(original);
        let alternative = self.truncate_content(alternative);

        format!(
            r#"You are evaluating a substitute building material for a construction project.

Original: {original}
Alternative: {alternative}

Evaluate the alternative on two criteria:

1. Functional deviation (1-5 scale):
   - 5: Same or better functionality (ventilation, light, security, insulation)
   - 4: Very similar functionality with minor differences
   - 3: Moderate functional differences
   - 2: Significant functional differences
   - 1: Major functional compromises

2. Design deviation (1-5 scale):
   - 5: Same or better design aesthetic and intent
   - 4: Very similar design with minor aesthetic differences
   - 3: Moderate design differences but acceptable
   - 2: Significant design compromises
   - 1: Major design intent deviation

Respond ONLY with a JSON object in this format:
{{"functional": X, "design": Y}}

Where X and Y are integers from 1 to 5."#
        )
    }

    /// Truncate a description to the maximum length on a word boundary.
    fn truncate_content(&self, content: &str) -> String {
        if content.len() <= self.max_content_length {
            return content.to_string();
        }
        let truncated = &content[..self.max_content_length];
        match truncated.rfind(' ') {
            Some(last_space) => format!("{}...", &truncated[..last_space]),
            None => format!("{truncated}..."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_both_descriptions_and_rubric() {
        let builder = EvaluationPromptBuilder::new();
        let prompt = builder.build("Wood casement 5'-11\" x 5'-2\"", "Aluminum casement");
        assert!(prompt.contains("Wood casement"));
        assert!(prompt.contains("Aluminum casement"));
        assert!(prompt.contains("Functional deviation"));
        assert!(prompt.contains("\"functional\": X"));
    }

    #[test]
    fn identical_inputs_build_identical_prompts() {
        let builder = EvaluationPromptBuilder::new();
        assert_eq!(builder.build("a", "b"), builder.build("a", "b"));
    }

    #[test]
    fn long_content_truncates_on_word_boundary() {
        let builder = EvaluationPromptBuilder::new().with_max_content_length(20);
        let long = "solid core wood flush door with fire rating";
        let prompt = builder.build(long, "short");
        assert!(!prompt.contains("fire rating"));
        assert!(prompt.contains("..."));
    }
}
