//! Masking engine.
//!
//! Replaces detected spans with label-specific placeholders, processing
//! entities right-to-left so earlier replacements never invalidate offsets
//! still to be applied. Entities without a known position cannot be masked
//! and are skipped.

use mg_common::Entity;

/// Replace every positioned entity span in `text` with its placeholder.
///
/// Spans that do not address `text` (out of bounds or off a character
/// boundary) are skipped rather than panicking.
pub fn mask(text: &str, entities: &[Entity]) -> String {
    let mut positioned: Vec<&Entity> = entities.iter().filter(|e| e.is_positioned()).collect();
    positioned.sort_by(|a, b| b.start.cmp(&a.start));

    let mut result = text.to_string();
    for entity in positioned {
        let (start, end) = (entity.start as usize, entity.end as usize);
        if end > result.len()
            || !result.is_char_boundary(start)
            || !result.is_char_boundary(end)
        {
            continue;
        }
        result.replace_range(start..end, &entity.label.placeholder());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpanDetector;
    use mg_common::{Label, Severity};

    #[test]
    fn test_mask_password_scenario() {
        let text = "password: Secret99";
        let entities = SpanDetector::new().detect(text);
        assert_eq!(entities.len(), 1);
        assert_eq!(mask(text, &entities), "[PASSWORD]");
    }

    #[test]
    fn test_surrounding_text_untouched() {
        let text = "Bonjour, mon IBAN est FR76 1234 5678 9012 3456 7890 123 merci";
        let entities = SpanDetector::new().detect(text);
        let masked = mask(text, &entities);
        assert!(masked.starts_with("Bonjour, mon IBAN est "));
        assert!(masked.contains("[IBAN]"));
        assert!(!masked.contains("FR76"));
    }

    #[test]
    fn test_clean_text_unchanged() {
        let text = "rien de sensible ici";
        let entities = SpanDetector::new().detect(text);
        assert_eq!(mask(text, &entities), text);
    }

    #[test]
    fn test_multiple_replacements_keep_offsets() {
        let text = "login: admin et mot de passe: hunter2";
        let entities = SpanDetector::new().detect(text);
        let masked = mask(text, &entities);
        assert_eq!(masked, "[IDENTIFIER] et [PASSWORD]");
    }

    #[test]
    fn test_unpositioned_entities_skipped() {
        let text = "contenu banal";
        let entities = vec![Entity::unpositioned(
            "something",
            Label::Sensitive,
            Severity::Medium,
            "",
        )];
        assert_eq!(mask(text, &entities), text);
    }

    #[test]
    fn test_stale_span_skipped_without_panic() {
        let text = "court";
        let entities = vec![Entity::positioned("xxxx", Label::Email, 2, 40, Default::default())];
        assert_eq!(mask(text, &entities), text);
    }
}
