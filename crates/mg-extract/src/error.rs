//! Error types for the extractor adapter.
//!
//! These never cross the adapter boundary: `ExtractorHandle::analyze` folds
//! them into a degraded outcome. They exist so the backend seam can report
//! what went wrong with enough precision for the risk summary.

use thiserror::Error;

/// Result type for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Extractor adapter errors.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Configuration error (missing API key, invalid settings)
    #[error("configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("network error: {0}")]
    Network(String),

    /// Backend error (non-2xx response, backend-reported failure)
    #[error("backend error: {0}")]
    Api(String),

    /// Parse error (invalid JSON, unexpected response shape)
    #[error("parse error: {0}")]
    Parse(String),
}
