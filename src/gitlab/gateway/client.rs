//! Authenticated GraphQL client over `reqwest`.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::error;
use url::Url;

use crate::gitlab::error::ExtractionError;
use crate::gitlab::locator::AccessToken;

use super::error_mapping::{extract_gitlab_message, map_http_error, map_reqwest_error};

/// Default GraphQL endpoint of gitlab.com.
pub const DEFAULT_GRAPHQL_URL: &str = "https://gitlab.com/api/graphql";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    operation_name: &'a str,
    variables: &'a V,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<D> {
    data: Option<D>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

/// GraphQL client bound to one endpoint and one bearer token.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    http: Client,
    endpoint: Url,
    token: AccessToken,
}

impl GraphQlClient {
    /// Builds a client for the given token and GraphQL endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::InvalidUrl`] when `endpoint` cannot be
    /// parsed, or [`ExtractionError::Network`] when the HTTP client cannot be
    /// constructed.
    pub fn new(token: &AccessToken, endpoint: &str) -> Result<Self, ExtractionError> {
        let parsed =
            Url::parse(endpoint).map_err(|error| ExtractionError::InvalidUrl(error.to_string()))?;
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|error| map_reqwest_error("build client", &error))?;

        Ok(Self {
            http,
            endpoint: parsed,
            token: token.clone(),
        })
    }

    /// Executes one GraphQL operation and decodes its `data` member.
    ///
    /// # Errors
    ///
    /// - [`ExtractionError::Network`] when the request cannot be sent.
    /// - [`ExtractionError::Authentication`] on HTTP 401/403.
    /// - [`ExtractionError::Api`] on any other non-success status, or when a
    ///   successful response carries no `data`.
    /// - [`ExtractionError::Decode`] when the body is not the expected JSON.
    /// - [`ExtractionError::GraphQl`] when the response lists GraphQL errors.
    pub async fn query<V, D>(
        &self,
        operation: &str,
        document: &str,
        variables: &V,
    ) -> Result<D, ExtractionError>
    where
        V: Serialize + Sync,
        D: DeserializeOwned,
    {
        let request = GraphQlRequest {
            query: document,
            operation_name: operation,
            variables,
        };

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(self.token.value())
            .json(&request)
            .send()
            .await
            .map_err(|error| map_reqwest_error(operation, &error))
            .inspect_err(|failure| error!(operation, %failure, "GitLab request failed"))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| map_reqwest_error(operation, &error))?;

        if !status.is_success() {
            let failure = map_http_error(operation, status, extract_gitlab_message(&body));
            error!(operation, %status, %failure, "GitLab rejected the request");
            return Err(failure);
        }

        let decoded: GraphQlResponse<D> =
            serde_json::from_str(&body).map_err(|error| ExtractionError::Decode {
                message: format!("{operation} response: {error}"),
            })?;

        if !decoded.errors.is_empty() {
            let messages: Vec<String> = decoded
                .errors
                .into_iter()
                .map(|entry| entry.message)
                .collect();
            for message in &messages {
                error!(operation, message = message.as_str(), "GraphQL error");
            }
            return Err(ExtractionError::GraphQl {
                operation: operation.to_owned(),
                messages,
            });
        }

        decoded.data.ok_or_else(|| ExtractionError::Api {
            message: format!("{operation} response carried no data"),
        })
    }
}
