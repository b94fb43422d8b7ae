//! Lenient parsing of the backend's free-form judgment.
//!
//! The upstream source is an uncontrolled external system, so every field
//! is optional and defaultable; field presence is never trusted.

use crate::{ExtractError, Result};
use serde::Deserialize;

/// One candidate entity reported by the backend, positionless.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractedEntity {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub reason: String,
}

/// The backend's full judgment: candidate entities plus a holistic risk
/// verdict. `Default` doubles as the all-empty shape for absent fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractorOutcome {
    #[serde(default)]
    pub entities: Vec<ExtractedEntity>,
    #[serde(default)]
    pub risk_level: String,
    #[serde(default)]
    pub risk_summary: String,
}

impl ExtractorOutcome {
    /// Degraded outcome returned whenever the backend path fails.
    pub fn degraded(cause: impl std::fmt::Display) -> Self {
        ExtractorOutcome {
            entities: Vec::new(),
            risk_level: "error".to_owned(),
            risk_summary: format!("Language-model analysis failed: {cause}"),
        }
    }
}

/// Strip optional markdown code fences from a response.
pub fn strip_code_fences(response: &str) -> &str {
    response
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

/// Parse the raw response text into an outcome.
pub fn parse_outcome(raw: &str) -> Result<ExtractorOutcome> {
    serde_json::from_str(strip_code_fences(raw))
        .map_err(|e| ExtractError::Parse(format!("unparseable backend response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_plain_fences() {
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_strip_json_fences() {
        assert_eq!(strip_code_fences("```json\n{}\n```"), "{}");
    }

    #[test]
    fn test_unfenced_passthrough() {
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn test_parse_full_outcome() {
        let raw = r#"```json
        {
          "entities": [
            {"text": "Secret99", "label": "PASSWORD", "severity": "critical", "reason": "credential"}
          ],
          "risk_level": "CRITICAL - DO NOT SEND",
          "risk_summary": "A password is present."
        }
        ```"#;
        let outcome = parse_outcome(raw).unwrap();
        assert_eq!(outcome.entities.len(), 1);
        assert_eq!(outcome.entities[0].label.as_deref(), Some("PASSWORD"));
        assert_eq!(outcome.risk_level, "CRITICAL - DO NOT SEND");
    }

    #[test]
    fn test_missing_fields_default() {
        let outcome = parse_outcome(r#"{"entities": [{"text": "x"}]}"#).unwrap();
        assert_eq!(outcome.risk_level, "");
        assert!(outcome.entities[0].label.is_none());
        assert!(outcome.entities[0].severity.is_none());
    }

    #[test]
    fn test_malformed_is_a_parse_error() {
        assert!(matches!(
            parse_outcome("the model rambled instead of answering"),
            Err(ExtractError::Parse(_))
        ));
    }

    #[test]
    fn test_degraded_outcome_shape() {
        let outcome = ExtractorOutcome::degraded("timed out");
        assert!(outcome.entities.is_empty());
        assert_eq!(outcome.risk_level, "error");
        assert!(outcome.risk_summary.contains("timed out"));
    }
}
