//! Pipeline output types consumed by the HTTP and report layers.

use crate::Entity;
use serde::{Deserialize, Serialize};

/// Result of a full analysis pass: the merged entity set plus the overall
/// risk fields. `risk_level` is a free-form verdict string: either the
/// extractor's judgment verbatim, or the rule-only assessor verdict.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AnalysisReport {
    pub entities: Vec<Entity>,
    pub count: usize,
    pub risk_level: String,
    pub risk_summary: String,
}

impl AnalysisReport {
    pub fn new(entities: Vec<Entity>, risk_level: String, risk_summary: String) -> Self {
        AnalysisReport {
            count: entities.len(),
            entities,
            risk_level,
            risk_summary,
        }
    }
}

/// Result of an anonymization pass.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct MaskedReport {
    pub original: String,
    pub anonymized: String,
    pub entities: Vec<Entity>,
    pub risk_level: String,
    pub risk_summary: String,
}
