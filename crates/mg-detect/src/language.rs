//! Dominant-language detection for recognizer selection.
//!
//! Two-class classifier over function-word hits. French is the default for
//! empty input, ties, and anything the scorer cannot place; detection never
//! fails.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Languages the recognizer is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Fr,
    En,
}

static FR_STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "le", "la", "les", "de", "des", "du", "un", "une", "et", "est", "que", "qui", "pour",
        "dans", "sur", "avec", "pas", "vous", "nous", "je", "il", "elle", "au", "aux", "ce",
        "cette", "mais", "ou", "où", "voici", "bonjour", "merci", "être", "son", "ses", "par",
        "plus", "tout", "comme", "si", "mon", "ton", "leur", "demain", "très",
    ]
    .into_iter()
    .collect()
});

static EN_STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "is", "are", "was", "to", "of", "in", "on", "for", "with",
        "you", "we", "it", "this", "that", "not", "be", "here", "hello", "thanks", "please",
        "your", "my", "from", "at", "as", "by", "have", "has", "will", "can", "our", "all",
        "tomorrow", "meeting",
    ]
    .into_iter()
    .collect()
});

/// Detect the dominant language of `text`.
pub fn detect_language(text: &str) -> Language {
    let mut fr = 0usize;
    let mut en = 0usize;

    for word in text.split(|c: char| !c.is_alphabetic()) {
        if word.is_empty() {
            continue;
        }
        let lower = word.to_lowercase();
        if FR_STOPWORDS.contains(lower.as_str()) {
            fr += 1;
        }
        if EN_STOPWORDS.contains(lower.as_str()) {
            en += 1;
        }
    }

    if en > fr {
        Language::En
    } else {
        Language::Fr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_french_text() {
        let text = "Bonjour, voici les accès au serveur pour la réunion de demain.";
        assert_eq!(detect_language(text), Language::Fr);
    }

    #[test]
    fn test_english_text() {
        let text = "Hello, here are the credentials for the server we discussed.";
        assert_eq!(detect_language(text), Language::En);
    }

    #[test]
    fn test_defaults_to_french() {
        assert_eq!(detect_language(""), Language::Fr);
        assert_eq!(detect_language("xyzzy 12345 @@@@"), Language::Fr);
    }
}
