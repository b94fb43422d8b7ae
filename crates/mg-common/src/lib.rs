//! Mailguard shared types and errors.
//!
//! This crate provides the vocabulary shared across mg-* crates:
//! - Entity labels with their fixed severity and placeholder tables
//! - Severity ordinals and overall risk levels
//! - The `Entity` span type produced by every detection source
//! - Pipeline output types consumed by the HTTP and report layers
//! - Common error types

pub mod entity;
pub mod error;
pub mod output;
pub mod risk;

pub use entity::{Entity, Label, Severity, Source, UNKNOWN_POSITION};
pub use error::{Error, Result};
pub use output::{AnalysisReport, MaskedReport};
pub use risk::RiskLevel;
