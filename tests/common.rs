//! Shared test utilities for pipeline-diagnostics integration tests

use pipeline_diagnostics::FailureDetails;

/// Build a failure description from optional parts
pub fn failure(message: Option<&str>, code: Option<&str>, status: Option<u16>) -> FailureDetails {
    FailureDetails {
        message: message.map(str::to_string),
        code: code.map(str::to_string),
        status,
        status_code: None,
    }
}

/// Failure description carrying only a message
pub fn failure_with_message(message: &str) -> FailureDetails {
    failure(Some(message), None, None)
}

/// Failure description carrying only a client error code
pub fn failure_with_code(code: &str) -> FailureDetails {
    failure(None, Some(code), None)
}

/// Failure description carrying only an HTTP status
pub fn failure_with_status(status: u16) -> FailureDetails {
    failure(None, None, Some(status))
}
