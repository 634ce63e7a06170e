//! Error types exposed by the GitLab extraction layer.

use thiserror::Error;

/// Errors surfaced while configuring a run or talking to the GitLab API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractionError {
    /// The bearer credential was missing or blank.
    #[error("GitLab access token is required (set GITLAB_ACCESS_TOKEN or pass --token)")]
    MissingToken,

    /// Configuration could not be loaded or was incomplete.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The GraphQL endpoint URL could not be parsed.
    #[error("GraphQL endpoint URL is invalid: {0}")]
    InvalidUrl(String),

    /// Invalid pagination parameters.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },

    /// The token was rejected by GitLab.
    #[error("GitLab rejected the token: {message}")]
    Authentication {
        /// Status and body returned with the 401/403 response.
        message: String,
    },

    /// GitLab answered with a non-success status or an unusable payload.
    #[error("GitLab API error: {message}")]
    Api {
        /// Description of the failure.
        message: String,
    },

    /// The response carried a GraphQL `errors` array.
    #[error("GraphQL error in {operation}: {}", messages.join("; "))]
    GraphQl {
        /// Name of the query that failed.
        operation: String,
        /// Messages reported by the server, in response order.
        messages: Vec<String>,
    },

    /// Networking failed while calling GitLab.
    #[error("network error talking to GitLab: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The response body was not the JSON shape the query expects.
    #[error("malformed GitLab response: {message}")]
    Decode {
        /// Deserialisation error detail.
        message: String,
    },

    /// Writing output failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl From<std::io::Error> for ExtractionError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
