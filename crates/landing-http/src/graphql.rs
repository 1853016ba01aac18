//! GraphQL client over the REST adapter.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::HttpError;
use crate::request::{Headers, Method, RequestOptions};
use crate::rest::RestClient;
use crate::signal::AbortSignal;

/// Outgoing GraphQL envelope.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<V = Value> {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<V>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

/// One entry of a GraphQL `errors` list.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GraphQlErrorEntry {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<Value>>,
}

/// Incoming GraphQL envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlErrorEntry>>,
}

/// Options for a GraphQL query. The method is always `POST`.
#[derive(Debug, Clone, Default)]
pub struct GraphQlOptions {
    pub headers: Option<Headers>,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
    pub tags: Vec<String>,
    pub revalidate: Option<u64>,
    pub signal: Option<AbortSignal>,
    pub operation_name: Option<String>,
}

impl GraphQlOptions {
    /// Set the GraphQL endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(key.into(), value.into());
        self
    }

    /// Add a bearer token authorization header.
    pub fn with_bearer_auth(self, token: impl AsRef<str>) -> Self {
        self.with_header("Authorization", format!("Bearer {}", token.as_ref()))
    }

    /// Set the revalidation interval in seconds.
    pub fn with_revalidate(mut self, seconds: u64) -> Self {
        self.revalidate = Some(seconds);
        self
    }

    /// Set a timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a cache tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Attach a cancellation signal.
    pub fn with_signal(mut self, signal: AbortSignal) -> Self {
        self.signal = Some(signal);
        self
    }

    /// Name the operation to run from a multi-operation document.
    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }
}

/// GraphQL client sharing the REST client's adapter.
#[derive(Clone, Default)]
pub struct GraphQlClient {
    rest: RestClient,
}

impl GraphQlClient {
    /// Create a client backed by the `reqwest` adapter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client over an existing REST client.
    pub fn with_rest(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Run `document` and return its `data`.
    ///
    /// Fails with the first entry's message when the response carries a
    /// non-empty `errors` list.
    pub async fn query<T, V>(
        &self,
        document: &str,
        variables: Option<V>,
        options: GraphQlOptions,
    ) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        V: Serialize,
    {
        let GraphQlOptions {
            headers,
            base_url,
            timeout,
            tags,
            revalidate,
            signal,
            operation_name,
        } = options;

        let envelope = GraphQlRequest {
            query: document.to_string(),
            variables,
            operation_name,
        };
        let body =
            serde_json::to_value(&envelope).map_err(|e| HttpError::Encode(e.to_string()))?;

        let request = RequestOptions {
            method: Method::Post,
            body: Some(body),
            headers,
            base_url,
            timeout,
            tags,
            revalidate,
            signal,
        };

        // Errors win over partial data, so `data` is only decoded once the
        // envelope has been checked.
        let response: GraphQlResponse<Value> = self.rest.request("", request).await?;
        let data = unwrap_envelope(response)?;
        serde_json::from_value(data).map_err(|e| HttpError::Decode(e.to_string()))
    }
}

/// Split a GraphQL envelope into its data or its first error.
pub fn unwrap_envelope<T>(response: GraphQlResponse<T>) -> Result<T, HttpError> {
    if let Some(first) = response.errors.and_then(|errors| errors.into_iter().next()) {
        return Err(HttpError::GraphQl {
            message: first.message,
        });
    }

    response.data.ok_or_else(|| HttpError::GraphQl {
        message: "GraphQL response contained no data".to_string(),
    })
}
