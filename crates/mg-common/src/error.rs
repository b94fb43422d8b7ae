//! Error types shared across Mailguard crates.

use thiserror::Error;

/// Result type alias for Mailguard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the glue layers (configuration, attachment
/// handling, I/O). The detection core is infallible and the extractor
/// adapter degrades internally, so neither surfaces here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unsupported attachment format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("no {format} text extractor is configured in this build")]
    ExtractionUnavailable { format: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_format() {
        let err = Error::UnsupportedFormat {
            extension: "exe".into(),
        };
        assert!(err.to_string().contains("exe"));

        let err = Error::ExtractionUnavailable { format: "PDF" };
        assert!(err.to_string().contains("PDF"));
    }
}
