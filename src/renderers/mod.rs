//! Report renderers for different output formats
//!
//! This module renders profiler reports in different formats while keeping
//! the core business logic separate from presentation concerns. Renderers
//! only format fields the report already computed; they carry no contract
//! of their own.

use crate::types::ProfileReport;

/// Simple trait for rendering a profiler report in a specific format
pub trait ReportRenderer {
    /// Render the report to a string in the specific format
    fn render(&self, report: &ProfileReport) -> String;
}

// Sub-modules
pub mod cli;
pub mod json;

// Re-exports for convenience
pub use cli::CliRenderer;
pub use json::JsonRenderer;
