//! Pattern rule set for sensitive-data detection.
//!
//! Each rule pairs a label with a pre-compiled matcher. The table order is
//! the claim priority: earlier rules claim a span first, and later rules
//! (and the recognizer) never displace an accepted span. The private-URL
//! rule is declared before the bare private-IP rule so a private address
//! inside a URL is reported as the URL, not the address.
//!
//! Credential keyword sets cover the deployment languages (French and
//! English). Matchers tolerate up to three intermediate words between the
//! keyword and the separator ("le mot de passe est: ...").

use mg_common::Label;
use once_cell::sync::Lazy;
use regex::Regex;

/// A static detection rule. Severity comes from the label table in
/// `mg-common`, not from the rule.
pub struct Rule {
    pub label: Label,
    pub pattern: Lazy<Regex>,
}

static RULES: [Rule; 17] = [
    // --- Credential markers ---
    Rule {
        label: Label::Password,
        pattern: Lazy::new(|| {
            Regex::new(
                r"(?i)(?:mot\s*de\s*passe|password|mdp|pwd|pass)(?:\s+\w+){0,3}\s*[:=]\s*\S+",
            )
            .unwrap()
        }),
    },
    Rule {
        label: Label::Identifier,
        pattern: Lazy::new(|| {
            Regex::new(
                r"(?i)(?:login|identifiant|username|user|utilisateur)(?:\s+\w+){0,3}\s*[:=]\s*\S+",
            )
            .unwrap()
        }),
    },
    Rule {
        label: Label::PinCode,
        pattern: Lazy::new(|| {
            Regex::new(r"(?i)code\s*(?:pin|secret|acc[eè]s|confidentiel)(?:\s+\w+){0,3}\s*[:=]\s*\S+")
                .unwrap()
        }),
    },
    // --- API keys & tokens ---
    Rule {
        label: Label::ApiKey,
        pattern: Lazy::new(|| {
            Regex::new(
                r"(?i)(?:api[_\s-]?key|api[_\s-]?secret|token|secret[_\s-]?key|access[_\s-]?key)\s*[:=]\s*\S+",
            )
            .unwrap()
        }),
    },
    Rule {
        label: Label::AwsKey,
        pattern: Lazy::new(|| Regex::new(r"(?:AKIA|ASIA)[A-Z0-9]{16}").unwrap()),
    },
    Rule {
        label: Label::GenericKey,
        pattern: Lazy::new(|| {
            Regex::new(r"(?i)(?:sk|pk|rk)[_-](?:live|test|prod)[_-][a-zA-Z0-9]{20,}").unwrap()
        }),
    },
    Rule {
        label: Label::JwtToken,
        pattern: Lazy::new(|| {
            Regex::new(r"eyJ[a-zA-Z0-9_-]{10,}\.eyJ[a-zA-Z0-9_-]{10,}\.[a-zA-Z0-9_-]+").unwrap()
        }),
    },
    // --- Financial identifiers ---
    Rule {
        label: Label::CreditCard,
        pattern: Lazy::new(|| {
            Regex::new(
                r"\b(?:4\d{3}|5[1-5]\d{2}|3[47]\d{2}|6(?:011|5\d{2}))[\s.-]?\d{4}[\s.-]?\d{4}[\s.-]?\d{1,4}\b",
            )
            .unwrap()
        }),
    },
    Rule {
        label: Label::Cvv,
        pattern: Lazy::new(|| {
            Regex::new(r"(?i)(?:cvv|cvc|csv|code\s*s[eé]curit[eé])\s*[:=]\s*\d{3,4}").unwrap()
        }),
    },
    Rule {
        label: Label::Iban,
        pattern: Lazy::new(|| {
            Regex::new(r"\b[A-Z]{2}\d{2}\s?\d{4}\s?\d{4}\s?\d{4}\s?\d{4}\s?\d{0,4}\b").unwrap()
        }),
    },
    // --- Personal identifiers ---
    Rule {
        label: Label::SocialSecurity,
        pattern: Lazy::new(|| {
            Regex::new(r"[12]\s?\d{2}\s?\d{2}\s?\d{2}\s?\d{3}\s?\d{3}\s?\d{2}").unwrap()
        }),
    },
    Rule {
        label: Label::Email,
        pattern: Lazy::new(|| {
            Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap()
        }),
    },
    Rule {
        label: Label::Phone,
        pattern: Lazy::new(|| {
            Regex::new(
                r"(?:\+33[\s.-]?|0)[1-9](?:[\s.-]?\d{2}){4}|(?:\+\d{1,3}[\s.-]?)?\(?\d{2,4}\)?[\s.-]?\d{3,4}[\s.-]?\d{3,4}",
            )
            .unwrap()
        }),
    },
    // --- Network & infrastructure ---
    Rule {
        label: Label::PrivateUrl,
        pattern: Lazy::new(|| {
            Regex::new(
                r"https?://(?:localhost|127\.0\.0\.1|10\.\d+\.\d+\.\d+|192\.168\.\d+\.\d+|172\.(?:1[6-9]|2\d|3[01])\.\d+\.\d+)\S*",
            )
            .unwrap()
        }),
    },
    Rule {
        label: Label::PrivateIp,
        pattern: Lazy::new(|| {
            Regex::new(
                r"\b(?:10\.\d{1,3}\.\d{1,3}\.\d{1,3}|192\.168\.\d{1,3}\.\d{1,3}|172\.(?:1[6-9]|2\d|3[01])\.\d{1,3}\.\d{1,3})\b",
            )
            .unwrap()
        }),
    },
    Rule {
        label: Label::ConnectionString,
        pattern: Lazy::new(|| {
            Regex::new(r"(?i)(?:mongodb|postgres|mysql|redis|amqp|jdbc)://\S+").unwrap()
        }),
    },
    // --- Confidential amounts ---
    Rule {
        label: Label::Salary,
        pattern: Lazy::new(|| {
            Regex::new(
                r"(?i)(?:salaire|r[eé]mun[eé]ration|paie|salary)\s*[:=]?\s*\d[\d\s.,]*\s*(?:€|euros?|EUR)?",
            )
            .unwrap()
        }),
    },
];

/// The process-wide rule table, in claim-priority order.
pub fn rule_set() -> &'static [Rule] {
    &RULES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        for rule in rule_set() {
            // Forcing the Lazy init is the fail-fast check for malformed patterns.
            assert!(rule.pattern.as_str().len() > 1, "{} has no pattern", rule.label);
        }
    }

    #[test]
    fn test_private_url_declared_before_private_ip() {
        let url_idx = rule_set()
            .iter()
            .position(|r| r.label == Label::PrivateUrl)
            .unwrap();
        let ip_idx = rule_set()
            .iter()
            .position(|r| r.label == Label::PrivateIp)
            .unwrap();
        assert!(url_idx < ip_idx);
    }

    #[test]
    fn test_password_keyword_with_intermediate_words() {
        let rule = &rule_set()[0];
        for text in [
            "mdp: secret123",
            "mon mdp est le suivant: admin123$",
            "le mot de passe est: abc123",
            "voici le mdp du compte: xyz789",
            "password= Secret99",
        ] {
            assert!(rule.pattern.is_match(text), "no match in: {text}");
        }
    }

    #[test]
    fn test_card_rule_requires_issuer_prefix() {
        let rule = rule_set()
            .iter()
            .find(|r| r.label == Label::CreditCard)
            .unwrap();
        assert!(rule.pattern.is_match("4111 1111 1111 1111"));
        assert!(!rule.pattern.is_match("9999 9999 9999 9999"));
    }
}
