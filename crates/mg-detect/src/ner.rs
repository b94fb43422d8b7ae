//! Named-entity recognition seam.
//!
//! The span detector does not know which recognizer backs it: anything
//! implementing [`NameRecognizer`] can be injected at construction. The
//! shipped [`LexiconRecognizer`] finds person names through two lexical
//! triggers per language: an honorific followed by capitalized words
//! ("M. Dupont", "Dr Smith") and a known first name opening a capitalized
//! sequence ("Jean Dupont"). Recognizers emit their native category names;
//! mapping to domain labels happens in the detector.

use crate::Language;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Maximum following words merged into one name span.
const MAX_NAME_WORDS: usize = 3;

/// A recognizer-native entity span, before label mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedSpan {
    pub text: String,
    /// Recognizer-native category name (e.g. "PER", "PERSON").
    pub category: &'static str,
    pub start: usize,
    pub end: usize,
}

/// Pluggable named-entity recognizer, selected per detected language.
pub trait NameRecognizer: Send + Sync {
    fn recognize(&self, text: &str, language: Language) -> Vec<RecognizedSpan>;
}

static FR_HONORIFICS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "m", "mme", "mlle", "monsieur", "madame", "mademoiselle", "dr", "docteur", "me",
        "maître", "maitre", "prof", "professeur",
    ]
    .into_iter()
    .collect()
});

static EN_HONORIFICS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["mr", "mrs", "ms", "miss", "dr", "prof", "sir", "madam"]
        .into_iter()
        .collect()
});

static FR_FIRST_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "jean", "marie", "pierre", "paul", "jacques", "sophie", "claire", "lucas", "emma",
        "louis", "camille", "hugo", "léa", "nicolas", "julie", "thomas", "antoine",
        "isabelle", "françois", "catherine", "michel", "nathalie", "philippe", "anne",
        "laurent", "céline", "olivier", "valérie", "julien", "christine",
    ]
    .into_iter()
    .collect()
});

static EN_FIRST_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "john", "mary", "james", "patricia", "robert", "jennifer", "michael", "linda",
        "david", "sarah", "william", "jessica", "richard", "emily", "joseph", "susan",
        "charles", "karen", "peter", "alice", "thomas", "margaret", "george", "helen",
        "edward", "laura", "henry", "anna", "jack", "olivia",
    ]
    .into_iter()
    .collect()
});

/// Lexicon-driven person-name recognizer.
///
/// Emits "PER" for French and "PERSON" for English, mirroring the category
/// vocabulary of statistical models so a model-backed recognizer can swap in
/// without touching the detector's category map.
#[derive(Debug, Default)]
pub struct LexiconRecognizer;

impl LexiconRecognizer {
    pub fn new() -> Self {
        LexiconRecognizer
    }
}

impl NameRecognizer for LexiconRecognizer {
    fn recognize(&self, text: &str, language: Language) -> Vec<RecognizedSpan> {
        let (honorifics, first_names, category) = match language {
            Language::Fr => (&*FR_HONORIFICS, &*FR_FIRST_NAMES, "PER"),
            Language::En => (&*EN_HONORIFICS, &*EN_FIRST_NAMES, "PERSON"),
        };

        let words = word_spans(text);
        let mut spans = Vec::new();
        let mut i = 0;

        while i < words.len() {
            let (ws, we) = words[i];
            let word = &text[ws..we];
            if !is_capitalized(word) {
                i += 1;
                continue;
            }
            let lower = word.to_lowercase();
            let is_honorific = honorifics.contains(lower.as_str());
            // Composed names ("Jean-Pierre") trigger on their leading segment.
            let lead = lower.split('-').next().unwrap_or_default();
            let is_trigger_name = first_names.contains(lead);
            if !is_honorific && !is_trigger_name {
                i += 1;
                continue;
            }

            // Extend over following capitalized words.
            let mut j = i + 1;
            while j < words.len() && j <= i + MAX_NAME_WORDS {
                let (s, e) = words[j];
                let w = &text[s..e];
                if is_capitalized(w) && !honorifics.contains(w.to_lowercase().as_str()) {
                    j += 1;
                } else {
                    break;
                }
            }

            if j > i + 1 {
                // Honorifics are a trigger, not part of the name.
                let start = if is_honorific { words[i + 1].0 } else { ws };
                let end = words[j - 1].1;
                spans.push(RecognizedSpan {
                    text: text[start..end].to_string(),
                    category,
                    start,
                    end,
                });
                i = j;
            } else if is_trigger_name {
                // A bare known first name still identifies a person.
                spans.push(RecognizedSpan {
                    text: word.to_string(),
                    category,
                    start: ws,
                    end: we,
                });
                i += 1;
            } else {
                i += 1;
            }
        }

        spans
    }
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().map(char::is_uppercase).unwrap_or(false)
}

/// Byte spans of alphabetic words (hyphens and apostrophes included, for
/// composed names like "Jean-Pierre").
fn word_spans(text: &str) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        if c.is_alphabetic() || c == '-' || c == '\'' {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            out.push((s, i));
        }
    }
    if let Some(s) = start {
        out.push((s, text.len()));
    }
    out
}
