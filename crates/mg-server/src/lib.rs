//! Mailguard HTTP API.
//!
//! Thin glue over the detection pipeline: every endpoint flattens its input
//! to one text blob, runs the detector (and the extractor when configured),
//! and returns the pipeline's own output types as JSON or HTML.

pub mod app;
pub mod routes;

pub use app::{build_app, build_state, AppState};
