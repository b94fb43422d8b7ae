//! HTML report generator for pre-send analysis.
//!
//! Produces a self-contained HTML document summarizing one analysis pass:
//! the overall verdict, entity counts per severity and per label, and the
//! remediation recommendation for every label found. The report never
//! embeds the matched sensitive text itself.

pub mod generator;
pub mod recommendations;

pub use generator::{generate, ReportGenerator};
pub use recommendations::recommendation_for;
