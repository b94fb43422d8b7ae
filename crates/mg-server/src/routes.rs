//! Request handlers.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use mg_common::{AnalysisReport, Entity, MaskedReport};
use mg_detect::{assess, mask, RULE_ONLY_SUMMARY};
use mg_extract::merge;

use crate::app::AppState;

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

/// Problem response for malformed requests.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequest>,
) -> Json<AnalysisReport> {
    Json(run_analysis(&state, &req.text).await)
}

pub async fn analyze_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, ApiError> {
    let mut parts: Vec<String> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("text") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("invalid text field: {e}")))?;
                if !text.is_empty() {
                    parts.push(text);
                }
            }
            Some("file") => {
                let filename = field.file_name().unwrap_or("attachment").to_owned();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("invalid file field: {e}")))?;
                match mg_parse::extract_text(&filename, &data, state.documents.as_ref()) {
                    Ok(text) => parts.push(text),
                    Err(err) => {
                        // The attachment is reported in place of its text;
                        // the textual portion is still analyzed.
                        warn!(filename = %filename, error = %err, "attachment not extracted");
                        parts.push(format!("[{filename}: {err}]"));
                    }
                }
            }
            _ => {}
        }
    }

    let combined = parts.join("\n");
    Ok(Json(run_analysis(&state, &combined).await))
}

pub async fn anonymize(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequest>,
) -> Json<MaskedReport> {
    let entities = state.detector.detect(&req.text);
    let anonymized = mask(&req.text, &entities);
    let risk_level = assess(&entities).verdict().to_owned();
    Json(MaskedReport {
        original: req.text,
        anonymized,
        entities,
        risk_level,
        risk_summary: RULE_ONLY_SUMMARY.to_owned(),
    })
}

pub async fn export_report(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequest>,
) -> impl IntoResponse {
    let entities = state.detector.detect(&req.text);
    let html = mg_report::generate(&entities);
    (
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"mailguard_report.html\"",
            ),
        ],
        html,
    )
}

/// Shared analysis pipeline: detect, then fuse with the extractor's
/// judgment when one is configured, else fall back to the rule-only
/// assessor.
async fn run_analysis(state: &AppState, text: &str) -> AnalysisReport {
    let entities = state.detector.detect(text);
    match &state.extractor {
        Some(handle) => {
            let outcome = handle.analyze(text).await;
            merge(entities, outcome)
        }
        None => rule_only_report(entities),
    }
}

fn rule_only_report(entities: Vec<Entity>) -> AnalysisReport {
    let risk_level = assess(&entities).verdict().to_owned();
    AnalysisReport::new(entities, risk_level, RULE_ONLY_SUMMARY.to_owned())
}
