use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for diagnostics operations
pub type Result<T> = std::result::Result<T, DiagnosticsError>;

/// Error types for the diagnostics configuration surface
///
/// Profiling, classification, and message lookup are total over their
/// inputs and never return these; only file-backed configuration can fail.
#[derive(Debug, Error)]
pub enum DiagnosticsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl DiagnosticsError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
