//! Fusion of positioned detections with the extractor's judgment.
//!
//! Positioned entities are kept verbatim and always win deduplication:
//! an extractor candidate whose normalized text matches one of them is a
//! duplicate sighting, not new information. Extractor candidates that
//! survive are appended without a position and never displace spans.

use crate::{ExtractedEntity, ExtractorOutcome};
use mg_common::{AnalysisReport, Entity, Label, Severity};
use std::collections::HashSet;

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Merge the span detector's output with the extractor outcome.
///
/// The extractor is authoritative for `risk_level` and `risk_summary` when
/// present; absent values fall back to `"none"` and the empty string.
pub fn merge(positioned: Vec<Entity>, outcome: ExtractorOutcome) -> AnalysisReport {
    let mut seen: HashSet<String> = positioned.iter().map(|e| normalize(&e.text)).collect();
    let mut entities = positioned;

    for candidate in outcome.entities {
        let key = normalize(&candidate.text);
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        entities.push(promote(candidate));
    }

    let risk_level = if outcome.risk_level.is_empty() {
        "none".to_owned()
    } else {
        outcome.risk_level
    };
    AnalysisReport::new(entities, risk_level, outcome.risk_summary)
}

/// Lift an extractor candidate into a full entity with defaults applied.
fn promote(candidate: ExtractedEntity) -> Entity {
    let label = candidate
        .label
        .as_deref()
        .map(Label::from)
        .unwrap_or(Label::Sensitive);
    let severity = candidate
        .severity
        .as_deref()
        .and_then(Severity::parse_str)
        .unwrap_or(Severity::Medium);
    Entity::unpositioned(candidate.text, label, severity, candidate.reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mg_common::{Source, UNKNOWN_POSITION};

    fn positioned(text: &str) -> Entity {
        Entity::positioned(text, Label::Password, 0, text.len(), Source::Pattern)
    }

    fn extracted(text: &str) -> ExtractedEntity {
        ExtractedEntity {
            text: text.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_dedup_is_case_and_whitespace_insensitive() {
        let outcome = ExtractorOutcome {
            entities: vec![extracted(" Secret123 ")],
            ..Default::default()
        };
        let report = merge(vec![positioned("secret123")], outcome);
        assert_eq!(report.count, 1);
    }

    #[test]
    fn test_novel_candidates_appended_unpositioned() {
        let outcome = ExtractorOutcome {
            entities: vec![ExtractedEntity {
                text: "12 rue des Lilas, Paris".to_owned(),
                label: Some("ADDRESS".to_owned()),
                severity: Some("high".to_owned()),
                reason: "full postal address".to_owned(),
            }],
            risk_level: "HIGH - SENDING DISCOURAGED".to_owned(),
            risk_summary: "An address is disclosed.".to_owned(),
        };
        let report = merge(vec![positioned("hunter2")], outcome);
        assert_eq!(report.count, 2);

        let appended = &report.entities[1];
        assert_eq!(appended.start, UNKNOWN_POSITION);
        assert_eq!(appended.end, UNKNOWN_POSITION);
        assert_eq!(appended.source, Source::LanguageModel);
        assert_eq!(appended.label, Label::Other("ADDRESS".to_owned()));
        assert_eq!(appended.severity, Severity::High);
        assert_eq!(appended.reason, "full postal address");
    }

    #[test]
    fn test_defaults_for_sparse_candidates() {
        let outcome = ExtractorOutcome {
            entities: vec![extracted("something odd")],
            ..Default::default()
        };
        let report = merge(Vec::new(), outcome);
        assert_eq!(report.entities[0].label, Label::Sensitive);
        assert_eq!(report.entities[0].severity, Severity::Medium);
    }

    #[test]
    fn test_empty_candidate_text_dropped() {
        let outcome = ExtractorOutcome {
            entities: vec![extracted(""), extracted("   ")],
            ..Default::default()
        };
        let report = merge(Vec::new(), outcome);
        assert_eq!(report.count, 0);
    }

    #[test]
    fn test_extractor_is_authoritative_for_risk() {
        let outcome = ExtractorOutcome {
            entities: Vec::new(),
            risk_level: "LOW - CAUTION".to_owned(),
            risk_summary: "Just an email address.".to_owned(),
        };
        let report = merge(vec![positioned("hunter2")], outcome);
        assert_eq!(report.risk_level, "LOW - CAUTION");
        assert_eq!(report.risk_summary, "Just an email address.");
    }

    #[test]
    fn test_absent_risk_fields_fall_back() {
        let report = merge(vec![positioned("hunter2")], ExtractorOutcome::default());
        assert_eq!(report.risk_level, "none");
        assert_eq!(report.risk_summary, "");
    }

    #[test]
    fn test_degraded_outcome_flows_through() {
        let report = merge(
            vec![positioned("hunter2")],
            ExtractorOutcome::degraded("connection refused"),
        );
        assert_eq!(report.count, 1);
        assert_eq!(report.risk_level, "error");
        assert!(report.risk_summary.contains("connection refused"));
    }

    #[test]
    fn test_positioned_entities_kept_verbatim() {
        let original = positioned("hunter2");
        let report = merge(vec![original.clone()], ExtractorOutcome::default());
        assert_eq!(report.entities[0], original);
    }

    #[test]
    fn test_duplicate_extractor_candidates_collapse() {
        let outcome = ExtractorOutcome {
            entities: vec![extracted("Jean Dupont"), extracted("jean dupont")],
            ..Default::default()
        };
        let report = merge(Vec::new(), outcome);
        assert_eq!(report.count, 1);
    }
}
