//! Likelihood scoring. Asks the model how much a text resembles a resume.
//! Purely advisory; any failure yields `DEFAULT_LIKELIHOOD`.

use tracing::warn;

use crate::generation::prompts::{fill, LIKELIHOOD_PROMPT_TEMPLATE};
use crate::llm_client::prompts::NUMBER_ONLY_INSTRUCTION;
use crate::llm_client::{SamplingParams, TextGenerator};

/// Score reported when the model call fails or its answer is not a number.
pub const DEFAULT_LIKELIHOOD: u8 = 50;

/// Short output, near-deterministic.
pub const EVALUATION_PARAMS: SamplingParams = SamplingParams {
    max_output_tokens: 10,
    temperature: 0.1,
};

pub async fn evaluate_likelihood(llm: &dyn TextGenerator, resume_text: &str) -> u8 {
    let prompt = fill(
        LIKELIHOOD_PROMPT_TEMPLATE,
        &[
            ("number_only", NUMBER_ONLY_INSTRUCTION),
            ("resume_text", resume_text),
        ],
    );

    match llm.generate_text(&prompt, EVALUATION_PARAMS).await {
        Ok(raw) => parse_likelihood(&raw).unwrap_or_else(|| {
            warn!("LLM returned non-numeric likelihood: {raw:?}");
            DEFAULT_LIKELIHOOD
        }),
        Err(e) => {
            warn!("Likelihood evaluation failed: {e}");
            DEFAULT_LIKELIHOOD
        }
    }
}

/// Parses the leading integer of `raw` (optional sign, then digits; anything
/// after the digits is ignored) and clamps it to 0..=100.
pub fn parse_likelihood(raw: &str) -> Option<u8> {
    let text = raw.trim();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value = digits[..end]
        .bytes()
        .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(u64::from(d - b'0')));

    if negative {
        Some(0)
    } else {
        Some(value.min(100) as u8)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;

    struct FixedReply(Option<&'static str>);

    #[async_trait]
    impl TextGenerator for FixedReply {
        async fn generate_text(
            &self,
            prompt: &str,
            params: SamplingParams,
        ) -> Result<String, LlmError> {
            assert!(prompt.contains("Output ONLY the numerical percentage"));
            assert_eq!(params, EVALUATION_PARAMS);
            self.0.map(str::to_string).ok_or(LlmError::EmptyContent)
        }
    }

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_likelihood("85"), Some(85));
        assert_eq!(parse_likelihood("  72\n"), Some(72));
        assert_eq!(parse_likelihood("0"), Some(0));
    }

    #[test]
    fn test_parse_clamps_out_of_range() {
        assert_eq!(parse_likelihood("105"), Some(100));
        assert_eq!(parse_likelihood("-7"), Some(0));
        assert_eq!(parse_likelihood("99999999999999999999999"), Some(100));
    }

    #[test]
    fn test_parse_ignores_trailing_text() {
        assert_eq!(parse_likelihood("90%"), Some(90));
        assert_eq!(parse_likelihood("88 out of 100"), Some(88));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_likelihood("abc"), None);
        assert_eq!(parse_likelihood(""), None);
        assert_eq!(parse_likelihood("-"), None);
        assert_eq!(parse_likelihood("Score: 80"), None);
    }

    #[tokio::test]
    async fn test_evaluate_clamps_model_answer() {
        assert_eq!(evaluate_likelihood(&FixedReply(Some("105")), "# Jo").await, 100);
    }

    #[tokio::test]
    async fn test_evaluate_defaults_on_garbage() {
        assert_eq!(evaluate_likelihood(&FixedReply(Some("abc")), "# Jo").await, 50);
    }

    #[tokio::test]
    async fn test_evaluate_defaults_on_failure() {
        assert_eq!(
            evaluate_likelihood(&FixedReply(None), "# Jo").await,
            DEFAULT_LIKELIHOOD
        );
    }
}
