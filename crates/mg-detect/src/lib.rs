//! Mailguard detection core.
//!
//! This crate provides the span-based detection engine that scans outgoing
//! email text for sensitive data before transmission:
//!
//! - **Pattern rules**: an ordered table of pre-compiled matchers for
//!   credentials, structured secrets, financial identifiers, network
//!   markers, and generic PII. Declaration order is the claim priority.
//! - **Span ledger**: interval accumulation with an explicit claim step;
//!   the first rule to claim a region wins, rejected matches are dropped.
//! - **Named-entity recognition**: a pluggable [`NameRecognizer`] seam with
//!   a shipped lexical recognizer, run after the pattern rules so pattern
//!   spans always take precedence.
//! - **Risk assessment**: a pure fold of entity severities into one verdict.
//! - **Masking**: right-to-left replacement of detected spans with
//!   label-specific placeholders.
//!
//! # Example
//!
//! ```
//! use mg_detect::{mask, SpanDetector};
//!
//! let detector = SpanDetector::new();
//! let entities = detector.detect("password: Secret99");
//! assert_eq!(entities.len(), 1);
//! assert_eq!(mask("password: Secret99", &entities), "[PASSWORD]");
//! ```

pub mod detector;
pub mod language;
pub mod mask;
pub mod ner;
pub mod risk;
pub mod rules;
pub mod spans;

pub use detector::SpanDetector;
pub use language::{detect_language, Language};
pub use mask::mask;
pub use ner::{LexiconRecognizer, NameRecognizer, RecognizedSpan};
pub use risk::{assess, RULE_ONLY_SUMMARY};
pub use rules::{rule_set, Rule};
pub use spans::SpanLedger;
