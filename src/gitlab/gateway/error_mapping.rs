//! Error mapping helpers for the GraphQL transport.

use reqwest::StatusCode;

use crate::gitlab::error::ExtractionError;

/// Checks if an HTTP status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

pub(super) fn map_reqwest_error(operation: &str, error: &reqwest::Error) -> ExtractionError {
    if error.is_decode() {
        return ExtractionError::Decode {
            message: format!("{operation} failed: {error}"),
        };
    }

    ExtractionError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> ExtractionError {
    let message = maybe_message.unwrap_or_else(|| "unknown error".to_owned());
    if is_auth_failure(status) {
        ExtractionError::Authentication {
            message: format!("{operation} failed: GitLab returned {status} {message}"),
        }
    } else {
        ExtractionError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}

/// Pulls a human-readable message out of a GitLab error body.
///
/// GitLab answers REST-style failures with `{"message": ...}` or
/// `{"error": ...}` and GraphQL failures with `{"errors": [{"message": ...}]}`.
pub(super) fn extract_gitlab_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };

    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
        .or_else(|| {
            value
                .get("errors")
                .and_then(serde_json::Value::as_array)
                .and_then(|errors| errors.first())
                .and_then(|first| first.get("message"))
                .and_then(serde_json::Value::as_str)
                .map(ToOwned::to_owned)
        })
}
