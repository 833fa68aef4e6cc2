//! Shared data model for pipeline diagnostics
//!
//! Types exchanged between the stage profiler, the failure classifier,
//! and the logging/metrics layers that consume their output.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed taxonomy of failures the generation pipeline can surface
///
/// Serialized as SCREAMING_SNAKE_CASE tags so metrics and log consumers
/// see the same symbolic values the request layer uses. Several members
/// (`ResearchNoResults`, `TopicTooShort`/`TopicTooLong`, `InvalidLanguage`,
/// `InvalidDuration`, `DailyLimitReached`, `NoCredits`) have messages but
/// no automatic detector predicate; they are assigned directly by callers
/// that already know what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NoInternet,
    Timeout,
    ServerError,
    ResearchNoResults,
    ResearchFailed,
    HookGenerationFailed,
    ScriptGenerationFailed,
    TopicTooShort,
    TopicTooLong,
    InvalidLanguage,
    InvalidDuration,
    DailyLimitReached,
    NoCredits,
    ApiKeyInvalid,
    RateLimited,
    UnknownError,
}

impl ErrorKind {
    /// Symbolic tag used in logs, metrics, and wire payloads
    pub fn as_tag(&self) -> &'static str {
        match self {
            ErrorKind::NoInternet => "NO_INTERNET",
            ErrorKind::Timeout => "TIMEOUT",
            ErrorKind::ServerError => "SERVER_ERROR",
            ErrorKind::ResearchNoResults => "RESEARCH_NO_RESULTS",
            ErrorKind::ResearchFailed => "RESEARCH_FAILED",
            ErrorKind::HookGenerationFailed => "HOOK_GENERATION_FAILED",
            ErrorKind::ScriptGenerationFailed => "SCRIPT_GENERATION_FAILED",
            ErrorKind::TopicTooShort => "TOPIC_TOO_SHORT",
            ErrorKind::TopicTooLong => "TOPIC_TOO_LONG",
            ErrorKind::InvalidLanguage => "INVALID_LANGUAGE",
            ErrorKind::InvalidDuration => "INVALID_DURATION",
            ErrorKind::DailyLimitReached => "DAILY_LIMIT_REACHED",
            ErrorKind::NoCredits => "NO_CREDITS",
            ErrorKind::ApiKeyInvalid => "API_KEY_INVALID",
            ErrorKind::RateLimited => "RATE_LIMITED",
            ErrorKind::UnknownError => "UNKNOWN_ERROR",
        }
    }

    /// Parse a symbolic tag back into a kind
    ///
    /// Returns `None` for unrecognized tags; message lookup substitutes
    /// `UnknownError` at that point rather than failing.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "NO_INTERNET" => Some(ErrorKind::NoInternet),
            "TIMEOUT" => Some(ErrorKind::Timeout),
            "SERVER_ERROR" => Some(ErrorKind::ServerError),
            "RESEARCH_NO_RESULTS" => Some(ErrorKind::ResearchNoResults),
            "RESEARCH_FAILED" => Some(ErrorKind::ResearchFailed),
            "HOOK_GENERATION_FAILED" => Some(ErrorKind::HookGenerationFailed),
            "SCRIPT_GENERATION_FAILED" => Some(ErrorKind::ScriptGenerationFailed),
            "TOPIC_TOO_SHORT" => Some(ErrorKind::TopicTooShort),
            "TOPIC_TOO_LONG" => Some(ErrorKind::TopicTooLong),
            "INVALID_LANGUAGE" => Some(ErrorKind::InvalidLanguage),
            "INVALID_DURATION" => Some(ErrorKind::InvalidDuration),
            "DAILY_LIMIT_REACHED" => Some(ErrorKind::DailyLimitReached),
            "NO_CREDITS" => Some(ErrorKind::NoCredits),
            "API_KEY_INVALID" => Some(ErrorKind::ApiKeyInvalid),
            "RATE_LIMITED" => Some(ErrorKind::RateLimited),
            "UNKNOWN_ERROR" => Some(ErrorKind::UnknownError),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Locales with a full user-facing message set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ar,
    #[default]
    En,
    Fr,
}

impl Locale {
    /// Lowercase language tag as seen in requests and config
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// Validate a requested locale tag, substituting English for anything
    /// unsupported or absent
    pub fn resolve(tag: Option<&str>) -> Locale {
        match tag {
            Some("ar") => Locale::Ar,
            Some("en") => Locale::En,
            Some("fr") => Locale::Fr,
            _ => Locale::En,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Raw failure description handed over by the pipeline orchestrator
///
/// Every field is optional; upstream payloads carry the HTTP status under
/// either `status` or `statusCode`. The classifier only reads this record,
/// it never mutates or retains it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, rename = "statusCode", skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl FailureDetails {
    /// Create a failure description carrying only a message
    pub fn from_message<S: Into<String>>(message: S) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Create a failure description carrying only an HTTP status
    pub fn from_status(status: u16) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Collapse the optional fields into the view classification matches on
    ///
    /// Absent text degrades to the empty string and an absent status to 0;
    /// `status` wins over `statusCode` when both are present.
    pub fn normalized(&self) -> NormalizedFailure {
        NormalizedFailure {
            message: self.message.as_deref().unwrap_or("").to_lowercase(),
            code: self.code.as_deref().unwrap_or("").to_lowercase(),
            status: self.status.or(self.status_code).unwrap_or(0),
        }
    }
}

/// Lower-cased, defaulted view of a `FailureDetails`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFailure {
    pub message: String,
    pub code: String,
    pub status: u16,
}

/// One closed or skipped stage as it appears in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSummary {
    pub name: String,
    pub duration_ms: u64,
    /// Duration in seconds, rendered with two decimals for log consumers
    pub duration_s: String,
    pub skipped: bool,
}

/// Read-only snapshot of a profiler at a point in time
///
/// `stages` preserves the order in which stages were closed or skipped.
/// `total_ms` covers construction to snapshot regardless of stage
/// bookkeeping, so an in-flight stage is reflected here even when it is
/// absent from `stages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileReport {
    /// Correlates this run's report with host logs
    pub run_id: Uuid,
    pub stages: Vec<StageSummary>,
    pub total_ms: u64,
    pub total_s: String,
    /// Name of the stage with the strictly greatest duration, first wins
    /// on ties; `"none"` when no stage was recorded
    pub slowest: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_tag_round_trip() {
        let kinds = [
            ErrorKind::NoInternet,
            ErrorKind::Timeout,
            ErrorKind::ServerError,
            ErrorKind::ResearchNoResults,
            ErrorKind::ResearchFailed,
            ErrorKind::HookGenerationFailed,
            ErrorKind::ScriptGenerationFailed,
            ErrorKind::TopicTooShort,
            ErrorKind::TopicTooLong,
            ErrorKind::InvalidLanguage,
            ErrorKind::InvalidDuration,
            ErrorKind::DailyLimitReached,
            ErrorKind::NoCredits,
            ErrorKind::ApiKeyInvalid,
            ErrorKind::RateLimited,
            ErrorKind::UnknownError,
        ];

        for kind in kinds {
            assert_eq!(ErrorKind::from_tag(kind.as_tag()), Some(kind));
        }

        assert_eq!(ErrorKind::from_tag("NOT_A_REAL_KIND"), None);
    }

    #[test]
    fn test_error_kind_serde_tags() {
        let json = serde_json::to_string(&ErrorKind::ApiKeyInvalid).unwrap();
        assert_eq!(json, "\"API_KEY_INVALID\"");

        let kind: ErrorKind = serde_json::from_str("\"HOOK_GENERATION_FAILED\"").unwrap();
        assert_eq!(kind, ErrorKind::HookGenerationFailed);
    }

    #[test]
    fn test_locale_resolution() {
        assert_eq!(Locale::resolve(Some("ar")), Locale::Ar);
        assert_eq!(Locale::resolve(Some("en")), Locale::En);
        assert_eq!(Locale::resolve(Some("fr")), Locale::Fr);
        assert_eq!(Locale::resolve(Some("de")), Locale::En);
        assert_eq!(Locale::resolve(Some("")), Locale::En);
        assert_eq!(Locale::resolve(None), Locale::En);
    }

    #[test]
    fn test_normalization_defaults_and_lowercasing() {
        let empty = FailureDetails::default().normalized();
        assert_eq!(empty.message, "");
        assert_eq!(empty.code, "");
        assert_eq!(empty.status, 0);

        let failure = FailureDetails {
            message: Some("Request TIMEOUT".to_string()),
            code: Some("ETIMEDOUT".to_string()),
            status: None,
            status_code: Some(504),
        };
        let normalized = failure.normalized();
        assert_eq!(normalized.message, "request timeout");
        assert_eq!(normalized.code, "etimedout");
        assert_eq!(normalized.status, 504);
    }

    #[test]
    fn test_status_wins_over_status_code() {
        let failure = FailureDetails {
            status: Some(429),
            status_code: Some(500),
            ..FailureDetails::default()
        };
        assert_eq!(failure.normalized().status, 429);
    }

    #[test]
    fn test_failure_details_deserializes_status_code_alias() {
        let failure: FailureDetails =
            serde_json::from_str(r#"{"message": "boom", "statusCode": 503}"#).unwrap();
        assert_eq!(failure.message.as_deref(), Some("boom"));
        assert_eq!(failure.status, None);
        assert_eq!(failure.status_code, Some(503));
        assert_eq!(failure.normalized().status, 503);
    }
}
