//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use mg_detect::SpanDetector;
use mg_extract::{ExtractorConfig, ExtractorHandle};
use mg_parse::{DocumentExtractor, UnconfiguredExtractor};

use crate::routes::{analyze, analyze_file, anonymize, export_report, health};

/// Shared application state, constructed once at startup.
///
/// Holds the process-wide handles the design keeps explicit rather than
/// hidden in module state: the detector (with its recognizer) and the
/// optional extractor client.
pub struct AppState {
    pub detector: SpanDetector,
    pub extractor: Option<ExtractorHandle>,
    pub documents: Box<dyn DocumentExtractor>,
}

/// Build the shared state from the optional extractor configuration.
pub fn build_state(extractor_config: Option<ExtractorConfig>) -> mg_common::Result<Arc<AppState>> {
    let extractor = match extractor_config {
        Some(config) => Some(
            ExtractorHandle::from_config(config)
                .map_err(|e| mg_common::Error::Config(e.to_string()))?,
        ),
        None => None,
    };

    Ok(Arc::new(AppState {
        detector: SpanDetector::new(),
        extractor,
        documents: Box::new(UnconfiguredExtractor),
    }))
}

/// Build the router over the shared state.
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .route("/analyze/file", post(analyze_file))
        .route("/anonymize", post(anonymize))
        .route("/report", post(export_report))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
