//! Extractor backend client.
//!
//! [`ExtractorHandle`] is the adapter boundary: whatever happens underneath
//! (network failure, timeout, backend error, unparseable output), `analyze`
//! returns an [`ExtractorOutcome`], degraded if need be, and never an
//! error. The HTTP backend targets a messages-style completion endpoint;
//! pointing the base URL at a locally hosted inference service or a remote
//! API is a configuration choice, not a code path.

use crate::prompt::{user_prompt, SYSTEM_PROMPT};
use crate::response::parse_outcome;
use crate::{ExtractError, ExtractorOutcome, Result};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_TOKENS: u32 = 2000;

/// Backend connection settings.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl ExtractorConfig {
    /// Read the backend settings from the environment. Returns `None` when
    /// no backend is configured at all (the caller then runs rule-only).
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("MAILGUARD_EXTRACTOR_URL").ok();
        let api_key = std::env::var("MAILGUARD_EXTRACTOR_API_KEY").ok();
        if base_url.is_none() && api_key.is_none() {
            return None;
        }

        let timeout_secs = std::env::var("MAILGUARD_EXTRACTOR_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Some(ExtractorConfig {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            api_key: api_key.unwrap_or_default(),
            model: std::env::var("MAILGUARD_EXTRACTOR_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_owned()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Seam between the adapter and the transport. The HTTP implementation is
/// the production backend; tests inject canned or failing ones.
#[async_trait::async_trait]
pub trait ExtractorBackend: Send + Sync {
    /// Run one completion and return the raw response text.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Messages-endpoint backend over reqwest.
pub struct HttpExtractorBackend {
    http: reqwest::Client,
    config: ExtractorConfig,
}

impl HttpExtractorBackend {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ExtractError::Config(e.to_string()))?;
        Ok(HttpExtractorBackend { http, config })
    }
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[async_trait::async_trait]
impl ExtractorBackend for HttpExtractorBackend {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let body = json!({
            "model": self.config.model,
            "max_tokens": MAX_TOKENS,
            "system": system,
            "messages": [{"role": "user", "content": user}],
        });

        let mut request = self
            .http
            .post(format!("{}/v1/messages", self.config.base_url))
            .header("anthropic-version", "2023-06-01")
            .json(&body);
        if !self.config.api_key.is_empty() {
            request = request.header("x-api-key", &self.config.api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ExtractError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ExtractError::Api(format!("{status}: {error_text}")));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ExtractError::Parse(e.to_string()))?;

        let text: String = parsed
            .content
            .into_iter()
            .map(|block| block.text)
            .collect();
        if text.is_empty() {
            return Err(ExtractError::Api("empty response from backend".to_owned()));
        }
        Ok(text)
    }
}

/// The adapter handle shared across requests.
pub struct ExtractorHandle {
    backend: Box<dyn ExtractorBackend>,
}

impl ExtractorHandle {
    /// Build the production handle over the HTTP backend.
    pub fn from_config(config: ExtractorConfig) -> Result<Self> {
        debug!(base_url = %config.base_url, model = %config.model, "extractor configured");
        Ok(ExtractorHandle {
            backend: Box::new(HttpExtractorBackend::new(config)?),
        })
    }

    /// Build a handle over any backend (used by tests).
    pub fn with_backend(backend: Box<dyn ExtractorBackend>) -> Self {
        ExtractorHandle { backend }
    }

    /// Analyze one email text.
    ///
    /// Single attempt, no retries; every failure degrades to an outcome
    /// carrying the cause in its summary.
    pub async fn analyze(&self, text: &str) -> ExtractorOutcome {
        match self.backend.complete(SYSTEM_PROMPT, &user_prompt(text)).await {
            Ok(raw) => match parse_outcome(&raw) {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(error = %e, "backend answered with unparseable output");
                    ExtractorOutcome::degraded(e)
                }
            },
            Err(e) => {
                warn!(error = %e, "backend call failed");
                ExtractorOutcome::degraded(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedBackend(&'static str);

    #[async_trait::async_trait]
    impl ExtractorBackend for CannedBackend {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
            Ok(self.0.to_owned())
        }
    }

    struct FailingBackend;

    #[async_trait::async_trait]
    impl ExtractorBackend for FailingBackend {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
            Err(ExtractError::Network("operation timed out".to_owned()))
        }
    }

    #[tokio::test]
    async fn test_analyze_parses_fenced_json() {
        let handle = ExtractorHandle::with_backend(Box::new(CannedBackend(
            "```json\n{\"entities\":[{\"text\":\"Secret99\",\"label\":\"PASSWORD\"}],\"risk_level\":\"CRITICAL - DO NOT SEND\",\"risk_summary\":\"password\"}\n```",
        )));
        let outcome = handle.analyze("whatever").await;
        assert_eq!(outcome.entities.len(), 1);
        assert_eq!(outcome.risk_level, "CRITICAL - DO NOT SEND");
    }

    #[tokio::test]
    async fn test_timeout_degrades() {
        let handle = ExtractorHandle::with_backend(Box::new(FailingBackend));
        let outcome = handle.analyze("whatever").await;
        assert!(outcome.entities.is_empty());
        assert_eq!(outcome.risk_level, "error");
        assert!(outcome.risk_summary.contains("timed out"));
    }

    #[tokio::test]
    async fn test_rambling_output_degrades() {
        let handle =
            ExtractorHandle::with_backend(Box::new(CannedBackend("I cannot help with that.")));
        let outcome = handle.analyze("whatever").await;
        assert_eq!(outcome.risk_level, "error");
        assert!(outcome.risk_summary.contains("Language-model analysis failed"));
    }
}
