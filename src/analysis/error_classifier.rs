//! Pure business logic for failure classification
//! No presentation concerns - returns a symbolic error kind only

use crate::types::{ErrorKind, FailureDetails};

/// Map a raw failure description onto the closed error taxonomy
///
/// The first match in a strictly ordered predicate chain wins; earlier
/// predicates shadow later ones whenever a description matches several
/// patterns (a timed-out request that also carries status 429 classifies
/// as a timeout, not as rate limiting). Matching is case-insensitive over
/// the message and code, and total over the input: an empty or malformed
/// description falls through to `UnknownError`.
pub fn detect_error_kind(failure: &FailureDetails) -> ErrorKind {
    let normalized = failure.normalized();
    let message = normalized.message.as_str();
    let code = normalized.code.as_str();
    let status = normalized.status;

    // Connectivity outranks everything: DNS and refused-connection codes
    // from the HTTP client, or network wording in the message.
    if code.contains("enotfound")
        || code.contains("econnrefused")
        || message.contains("network")
        || message.contains("connection refused")
    {
        return ErrorKind::NoInternet;
    }

    if code.contains("etimedout") || code.contains("timeout") || message.contains("timeout") {
        return ErrorKind::Timeout;
    }

    if status == 429 || message.contains("rate limit") || message.contains("too many") {
        return ErrorKind::RateLimited;
    }

    if status == 401
        || status == 403
        || message.contains("unauthorized")
        || message.contains("forbidden")
    {
        return ErrorKind::ApiKeyInvalid;
    }

    if status >= 500 || message.contains("server error") {
        return ErrorKind::ServerError;
    }

    // Pipeline-phase failures are recognized last; transport-level causes
    // above take precedence over where in the pipeline they surfaced.
    if message.contains("research") && (message.contains("fail") || message.contains("no result"))
    {
        return ErrorKind::ResearchFailed;
    }

    if message.contains("hook") && (message.contains("fail") || message.contains("error")) {
        return ErrorKind::HookGenerationFailed;
    }

    if message.contains("script") && (message.contains("fail") || message.contains("error")) {
        return ErrorKind::ScriptGenerationFailed;
    }

    ErrorKind::UnknownError
}
