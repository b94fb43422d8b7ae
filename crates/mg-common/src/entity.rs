//! Entity spans, labels, severities, and provenance.
//!
//! A detected entity is an occurrence of sensitive data in the scanned text.
//! Labels form a closed-ish vocabulary: every category the pattern rules or
//! the recognizer can emit is a named variant, and anything else (typically
//! invented by the language-model extractor) is carried as `Other` without
//! losing its wire form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel offset for entities whose exact position in the source text is
/// unknown (reported by the language-model extractor without a span).
pub const UNKNOWN_POSITION: i64 = -1;

/// Ordinal sensitivity level. `Critical` outranks `High` outranks `Medium`
/// outranks `Low`; the ordering drives the overall risk verdict.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Parse the canonical lowercase spelling. Anything else is `None`;
    /// callers decide their own default.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Some(Severity::Critical),
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where an entity came from. Informational only; fusion never treats any
/// source as more trustworthy than another beyond the positioned/unpositioned
/// distinction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
    schemars::JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    #[default]
    Pattern,
    Recognizer,
    LanguageModel,
}

/// Category tag for a detected entity.
///
/// Wire form is SCREAMING_SNAKE_CASE (`"PRIVATE_URL"`). Unknown wire values
/// round-trip through `Other` so extractor-invented categories survive
/// serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    Password,
    Identifier,
    PinCode,
    ApiKey,
    AwsKey,
    GenericKey,
    JwtToken,
    CreditCard,
    Cvv,
    Iban,
    SocialSecurity,
    Salary,
    Email,
    Phone,
    Name,
    PrivateUrl,
    PrivateIp,
    ConnectionString,
    /// Generic fallback for extractor entities with no usable category.
    Sensitive,
    /// Any category outside the known vocabulary, stored normalized.
    Other(String),
}

impl Label {
    pub fn as_str(&self) -> &str {
        match self {
            Label::Password => "PASSWORD",
            Label::Identifier => "IDENTIFIER",
            Label::PinCode => "PIN_CODE",
            Label::ApiKey => "API_KEY",
            Label::AwsKey => "AWS_KEY",
            Label::GenericKey => "GENERIC_KEY",
            Label::JwtToken => "JWT_TOKEN",
            Label::CreditCard => "CREDIT_CARD",
            Label::Cvv => "CVV",
            Label::Iban => "IBAN",
            Label::SocialSecurity => "SOCIAL_SECURITY_NUMBER",
            Label::Salary => "SALARY",
            Label::Email => "EMAIL",
            Label::Phone => "PHONE",
            Label::Name => "NAME",
            Label::PrivateUrl => "PRIVATE_URL",
            Label::PrivateIp => "PRIVATE_IP",
            Label::ConnectionString => "CONNECTION_STRING",
            Label::Sensitive => "SENSITIVE",
            Label::Other(s) => s,
        }
    }

    /// Fixed label-to-severity table. Unknown labels default to low.
    pub fn severity(&self) -> Severity {
        match self {
            Label::Password
            | Label::Identifier
            | Label::PinCode
            | Label::ApiKey
            | Label::AwsKey
            | Label::GenericKey
            | Label::JwtToken
            | Label::ConnectionString
            | Label::CreditCard
            | Label::Cvv => Severity::Critical,

            Label::Iban | Label::SocialSecurity | Label::Salary => Severity::High,

            Label::PrivateUrl | Label::PrivateIp => Severity::Medium,

            Label::Email
            | Label::Phone
            | Label::Name
            | Label::Sensitive
            | Label::Other(_) => Severity::Low,
        }
    }

    /// Fixed label-to-placeholder table used by the masking engine. Labels
    /// outside the table get a placeholder derived from their wire form.
    pub fn placeholder(&self) -> String {
        match self {
            Label::Other(s) => format!("[{}]", s),
            _ => format!("[{}]", self.as_str()),
        }
    }
}

impl From<&str> for Label {
    fn from(raw: &str) -> Self {
        let normalized = raw.trim().to_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "PASSWORD" => Label::Password,
            "IDENTIFIER" => Label::Identifier,
            "PIN_CODE" => Label::PinCode,
            "API_KEY" => Label::ApiKey,
            "AWS_KEY" => Label::AwsKey,
            "GENERIC_KEY" => Label::GenericKey,
            "JWT_TOKEN" => Label::JwtToken,
            "CREDIT_CARD" => Label::CreditCard,
            "CVV" => Label::Cvv,
            "IBAN" => Label::Iban,
            "SOCIAL_SECURITY_NUMBER" => Label::SocialSecurity,
            "SALARY" => Label::Salary,
            "EMAIL" => Label::Email,
            "PHONE" => Label::Phone,
            "NAME" => Label::Name,
            "PRIVATE_URL" => Label::PrivateUrl,
            "PRIVATE_IP" => Label::PrivateIp,
            "CONNECTION_STRING" => Label::ConnectionString,
            "SENSITIVE" | "" => Label::Sensitive,
            _ => Label::Other(normalized),
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Label::from(s.as_str()))
    }
}

impl schemars::JsonSchema for Label {
    fn schema_name() -> String {
        "Label".to_owned()
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        gen.subschema_for::<String>()
    }
}

/// A detected occurrence of sensitive data.
///
/// `start`/`end` are half-open byte offsets into the UTF-8 source text, or
/// `UNKNOWN_POSITION` for both when the entity came from free-text extraction
/// without an exact span. Entities are created fresh per detection call and
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct Entity {
    pub text: String,
    pub label: Label,
    pub start: i64,
    pub end: i64,
    pub severity: Severity,
    #[serde(default)]
    pub source: Source,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,
}

impl Entity {
    /// Build a positioned entity; severity comes from the label table.
    pub fn positioned(
        text: impl Into<String>,
        label: Label,
        start: usize,
        end: usize,
        source: Source,
    ) -> Self {
        let severity = label.severity();
        Entity {
            text: text.into(),
            label,
            start: start as i64,
            end: end as i64,
            severity,
            source,
            reason: String::new(),
        }
    }

    /// Build an entity without a known position (language-model sourced).
    pub fn unpositioned(
        text: impl Into<String>,
        label: Label,
        severity: Severity,
        reason: impl Into<String>,
    ) -> Self {
        Entity {
            text: text.into(),
            label,
            start: UNKNOWN_POSITION,
            end: UNKNOWN_POSITION,
            severity,
            source: Source::LanguageModel,
            reason: reason.into(),
        }
    }

    /// Whether this entity carries a usable span into the source text.
    pub fn is_positioned(&self) -> bool {
        self.start >= 0 && self.end > self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn test_severity_parse_canonical_only() {
        assert_eq!(Severity::parse_str("critical"), Some(Severity::Critical));
        assert_eq!(Severity::parse_str(" HIGH "), Some(Severity::High));
        assert_eq!(Severity::parse_str("élevé"), None);
        assert_eq!(Severity::parse_str(""), None);
    }

    #[test]
    fn test_label_round_trip() {
        for label in [
            Label::Password,
            Label::SocialSecurity,
            Label::PrivateUrl,
            Label::Sensitive,
        ] {
            assert_eq!(Label::from(label.as_str()), label);
        }
    }

    #[test]
    fn test_label_normalizes_wire_form() {
        assert_eq!(Label::from("private url"), Label::PrivateUrl);
        assert_eq!(Label::from("api-key"), Label::ApiKey);
        assert_eq!(
            Label::from("crypto wallet"),
            Label::Other("CRYPTO_WALLET".to_owned())
        );
    }

    #[test]
    fn test_unknown_label_defaults_low() {
        assert_eq!(Label::Other("MEDICAL".into()).severity(), Severity::Low);
    }

    #[test]
    fn test_placeholder_derived_for_unknown() {
        assert_eq!(Label::Password.placeholder(), "[PASSWORD]");
        assert_eq!(
            Label::Other("CRYPTO_WALLET".into()).placeholder(),
            "[CRYPTO_WALLET]"
        );
    }

    #[test]
    fn test_entity_positioning() {
        let e = Entity::positioned("secret", Label::Password, 4, 10, Source::Pattern);
        assert!(e.is_positioned());
        assert_eq!(e.severity, Severity::Critical);

        let u = Entity::unpositioned("secret", Label::Sensitive, Severity::Medium, "why");
        assert!(!u.is_positioned());
        assert_eq!(u.start, UNKNOWN_POSITION);
    }

    #[test]
    fn test_label_serde_through_json() {
        let e = Entity::positioned("a@b.fr", Label::Email, 0, 6, Source::Pattern);
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains(r#""label":"EMAIL""#));
        assert!(json.contains(r#""severity":"low""#));
        assert!(json.contains(r#""source":"pattern""#));
        let back: Entity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
