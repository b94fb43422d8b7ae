//! Overall risk levels and their human verdicts.

use crate::Severity;
use serde::{Deserialize, Serialize};

/// Single ordinal summarizing the maximum severity across all detected
/// entities, plus the degraded `Error` state reported when the
/// language-model extractor fails.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    None,
    Low,
    Medium,
    High,
    Critical,
    Error,
}

impl RiskLevel {
    /// Human verdict label shown to the sender.
    pub fn verdict(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "CRITICAL - DO NOT SEND",
            RiskLevel::High => "HIGH - SENDING DISCOURAGED",
            RiskLevel::Medium => "MEDIUM - REVIEW BEFORE SENDING",
            RiskLevel::Low => "LOW - CAUTION",
            RiskLevel::None => "none",
            RiskLevel::Error => "error",
        }
    }

    /// Risk level corresponding to a single severity.
    pub fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::Critical => RiskLevel::Critical,
            Severity::High => RiskLevel::High,
            Severity::Medium => RiskLevel::Medium,
            Severity::Low => RiskLevel::Low,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.verdict())
    }
}
