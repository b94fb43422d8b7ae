//! Mailguard language-model extractor adapter and fusion engine.
//!
//! The adapter sends the email text to a free-text analysis backend (a
//! locally hosted inference service or a remote language-model API, selected
//! by base URL) and parses its structured judgment. The backend is an
//! uncontrolled external system: every field of its output is optional,
//! responses may arrive wrapped in code fences, and any failure (network,
//! timeout, HTTP status, malformed JSON) degrades to an empty outcome with
//! an `"error"` risk level instead of propagating.
//!
//! The fusion engine merges the positioned detector output with the
//! extractor's unpositioned candidates, deduplicating by normalized text.

pub mod client;
pub mod error;
pub mod fusion;
pub mod prompt;
pub mod response;

pub use client::{ExtractorBackend, ExtractorConfig, ExtractorHandle, HttpExtractorBackend};
pub use error::{ExtractError, Result};
pub use fusion::merge;
pub use response::{strip_code_fences, ExtractedEntity, ExtractorOutcome};
