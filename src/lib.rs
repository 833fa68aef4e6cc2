//! Pipeline Diagnostics - stage timing and failure classification for the
//! script generation pipeline
//!
//! This crate provides a per-run stage profiler and a heuristic failure
//! classifier with localized user-facing messages. The pipeline
//! orchestrator drives one `StageProfiler` per run at each phase boundary
//! and hands caught failures to `detect_error_kind`; logging, metrics, and
//! UI layers consume the resulting reports and messages.

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Main functionality modules
pub mod analysis;
pub mod i18n;
pub mod profiler;
pub mod renderers;

// Re-export main types for convenience
pub use analysis::detect_error_kind;
pub use config::{DiagnosticsConfig, DiagnosticsConfigBuilder};
pub use error::{DiagnosticsError, Result};
pub use i18n::{localized_message, message_for};
pub use profiler::{Stage, StageProfiler};
pub use renderers::{CliRenderer, JsonRenderer, ReportRenderer};
pub use types::{
    ErrorKind, FailureDetails, Locale, NormalizedFailure, ProfileReport, StageSummary,
};
