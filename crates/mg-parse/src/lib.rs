//! Attachment text extraction.
//!
//! The scanner only ever sees flattened text; turning binary document
//! formats into text is the job of an external collaborator injected
//! through [`DocumentExtractor`]. This crate handles extension routing and
//! plain-text decoding itself, and reports anything it cannot flatten so
//! the caller can substitute a user-visible message instead of aborting
//! the analysis of the textual portion.

use mg_common::{Error, Result};
use tracing::debug;

/// File extensions the pipeline accepts, collaborator formats included.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "pdf", "docx", "xlsx", "xls"];

/// Seam for binary document formats (PDF, Word, Excel).
pub trait DocumentExtractor: Send + Sync {
    /// Extract flattened text from `content`, known to be of `format`.
    fn extract(&self, format: &'static str, content: &[u8]) -> Result<String>;
}

/// Default collaborator for builds without a document-extraction service:
/// every request reports the format as unavailable.
#[derive(Debug, Default)]
pub struct UnconfiguredExtractor;

impl DocumentExtractor for UnconfiguredExtractor {
    fn extract(&self, format: &'static str, _content: &[u8]) -> Result<String> {
        Err(Error::ExtractionUnavailable { format })
    }
}

/// Lowercased extension of `filename`, without the dot.
pub fn extension_of(filename: &str) -> Option<String> {
    filename.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

pub fn is_supported(filename: &str) -> bool {
    extension_of(filename)
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Extract the text of one attachment.
///
/// Plain text is decoded here (lossily, so undecodable bytes never abort a
/// scan); collaborator formats are delegated; anything else is an
/// `UnsupportedFormat` error for the caller to surface.
pub fn extract_text(
    filename: &str,
    content: &[u8],
    extractor: &dyn DocumentExtractor,
) -> Result<String> {
    let extension = extension_of(filename).unwrap_or_default();
    debug!(filename, bytes = content.len(), "extracting attachment text");

    match extension.as_str() {
        "txt" => Ok(String::from_utf8_lossy(content).into_owned()),
        "pdf" => extractor.extract("PDF", content),
        "docx" => extractor.extract("Word", content),
        "xlsx" | "xls" => extractor.extract("Excel", content),
        _ => Err(Error::UnsupportedFormat { extension }),
    }
}
