//! Rule-only risk assessment.
//!
//! Used when the language-model extractor is unavailable; the fusion engine
//! otherwise takes the extractor's judgment as authoritative.

use mg_common::{Entity, RiskLevel};

/// Fixed summary attached to verdicts produced without the extractor.
pub const RULE_ONLY_SUMMARY: &str =
    "Rule-based analysis only; the language-model reviewer was not consulted.";

/// Derive the overall risk verdict from the severities present.
///
/// Empty set means no risk; otherwise the maximum severity wins, however
/// many lower-severity entities accompany it.
pub fn assess(entities: &[Entity]) -> RiskLevel {
    match entities.iter().map(|e| e.severity).max() {
        Some(severity) => RiskLevel::from_severity(severity),
        None => RiskLevel::None,
    }
}
