//! Runtime configuration for the diagnostics surfaces
//!
//! Hosts configure the default message locale and presentation toggles
//! here; the profiler and classifier themselves need no configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DiagnosticsError, Result};
use crate::types::Locale;

/// Configuration for report rendering and message localization
///
/// All fields are optional in the TOML file; `resolved_*` accessors apply
/// the defaults (`en`, emojis on, pretty JSON).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Default locale tag for user-facing messages ("ar", "en", "fr")
    pub locale: Option<String>,
    /// Whether console output includes emoji chrome
    pub use_emojis: Option<bool>,
    /// Whether JSON report output is pretty-printed
    pub pretty_json: Option<bool>,
}

impl DiagnosticsConfig {
    /// Create a new config builder
    pub fn builder() -> DiagnosticsConfigBuilder {
        DiagnosticsConfigBuilder::new()
    }

    /// Load configuration from a diagnostics.toml file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|_| DiagnosticsError::ConfigNotFound {
                path: path.as_ref().to_path_buf(),
            })?;

        let config: DiagnosticsConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration with enhanced error context and validation
    pub fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(DiagnosticsError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref).map_err(DiagnosticsError::Io)?;

        let config: DiagnosticsConfig = toml::from_str(&content).map_err(|e| {
            DiagnosticsError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject locale tags outside the supported set
    ///
    /// Runtime lookups degrade unsupported tags to English; a configured
    /// default is held to a stricter standard and rejected instead, so a
    /// typo in an operator file surfaces at startup.
    pub fn validate(&self) -> Result<()> {
        if let Some(tag) = &self.locale {
            if !matches!(tag.as_str(), "ar" | "en" | "fr") {
                return Err(DiagnosticsError::invalid_config(format!(
                    "Unsupported locale '{tag}'; expected one of: ar, en, fr"
                )));
            }
        }
        Ok(())
    }

    /// Default message locale, unsupported tags degraded to English
    pub fn resolved_locale(&self) -> Locale {
        Locale::resolve(self.locale.as_deref())
    }

    /// Whether console output includes emoji chrome (default: true)
    pub fn resolved_use_emojis(&self) -> bool {
        self.use_emojis.unwrap_or(true)
    }

    /// Whether JSON report output is pretty-printed (default: true)
    pub fn resolved_pretty_json(&self) -> bool {
        self.pretty_json.unwrap_or(true)
    }
}

/// Builder for DiagnosticsConfig to improve API ergonomics
pub struct DiagnosticsConfigBuilder {
    config: DiagnosticsConfig,
}

impl DiagnosticsConfigBuilder {
    /// Create a new config builder
    pub fn new() -> Self {
        Self {
            config: DiagnosticsConfig::default(),
        }
    }

    /// Set the default message locale tag
    #[must_use]
    pub fn locale<S: Into<String>>(mut self, tag: S) -> Self {
        self.config.locale = Some(tag.into());
        self
    }

    /// Toggle emoji chrome in console output
    #[must_use]
    pub fn use_emojis(mut self, enabled: bool) -> Self {
        self.config.use_emojis = Some(enabled);
        self
    }

    /// Toggle pretty-printing of JSON report output
    #[must_use]
    pub fn pretty_json(mut self, enabled: bool) -> Self {
        self.config.pretty_json = Some(enabled);
        self
    }

    /// Build, validating the assembled configuration
    pub fn build(self) -> Result<DiagnosticsConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for DiagnosticsConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
