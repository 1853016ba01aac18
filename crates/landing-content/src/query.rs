//! Query-layer boundary between the CMS and the page.
//!
//! Every section caller goes through [`ContentClient::query_section`], which
//! never fails: errors are logged with the caller's label and turned into
//! [`QueryResult::Failure`].

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use landing_http::{GraphQlClient, GraphQlOptions, HttpError};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::config::ContentConfig;

/// Message used when a query fails without an error value.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Outcome of a query-layer call.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult<T> {
    /// The query returned data.
    Success(T),
    /// The query failed; the message has already been logged.
    Failure(String),
}

impl<T> QueryResult<T> {
    /// Whether the query succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The data, present only on success.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// The error message, present only on failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }

    /// Take the data, discarding the error message.
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Map the success value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryResult<U> {
        match self {
            Self::Success(data) => QueryResult::Success(f(data)),
            Self::Failure(message) => QueryResult::Failure(message),
        }
    }
}

impl<T> From<QueryResult<T>> for Result<T, String> {
    fn from(result: QueryResult<T>) -> Self {
        match result {
            QueryResult::Success(data) => Ok(data),
            QueryResult::Failure(message) => Err(message),
        }
    }
}

/// Run `fut` behind the query-layer error boundary.
///
/// - `Ok(data)` becomes [`QueryResult::Success`].
/// - `Err(e)` is logged under `label` and becomes `Failure(e.to_string())`.
/// - A panic inside `fut` is caught, logged under `label`, and becomes
///   `Failure("Unknown error")`.
pub async fn guard<T, E, F>(label: &str, fut: F) -> QueryResult<T>
where
    F: Future<Output = Result<T, E>>,
    E: std::error::Error,
{
    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(Ok(data)) => QueryResult::Success(data),
        Ok(Err(error)) => {
            let message = error.to_string();
            tracing::error!(section = label, "{label}: {message}");
            QueryResult::Failure(message)
        }
        Err(payload) => {
            tracing::error!(
                section = label,
                "{label}: {}",
                panic_message(payload.as_ref())
            );
            QueryResult::Failure(UNKNOWN_ERROR.to_string())
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-error panic payload")
}

/// GraphQL access to the content source.
#[derive(Clone)]
pub struct ContentClient {
    graphql: GraphQlClient,
    config: ContentConfig,
}

impl ContentClient {
    /// Create a client backed by the default `reqwest` transport.
    pub fn new(config: ContentConfig) -> Self {
        Self::with_graphql(GraphQlClient::new(), config)
    }

    /// Create a client over an existing GraphQL client.
    pub fn with_graphql(graphql: GraphQlClient, config: ContentConfig) -> Self {
        Self { graphql, config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Options shared by every section query.
    pub fn query_options(&self) -> GraphQlOptions {
        let mut options = GraphQlOptions::default()
            .with_base_url(self.config.endpoint.clone())
            .with_bearer_auth(&self.config.api_token)
            .with_revalidate(self.config.revalidate);
        options.timeout = self.config.timeout();
        options
    }

    /// Run `document` with empty variables, without the error boundary.
    pub async fn query<T: DeserializeOwned>(&self, document: &str) -> Result<T, HttpError> {
        self.graphql
            .query(document, Some(json!({})), self.query_options())
            .await
    }

    /// Run `document` behind the error boundary, logging failures under `label`.
    pub async fn query_section<T: DeserializeOwned>(
        &self,
        label: &str,
        document: &str,
    ) -> QueryResult<T> {
        guard(label, self.query(document)).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Stub transport for query-layer tests.

    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use landing_http::{
        FetchInit, FetchRestAdapter, GraphQlClient, HttpError, Response, RestClient,
    };

    use super::ContentClient;
    use crate::config::ContentConfig;

    /// What the stub transport does when called.
    #[derive(Clone)]
    pub enum Reply {
        Json(u16, serde_json::Value),
        Fail(HttpError),
        Panic(&'static str),
    }

    #[derive(Clone)]
    pub struct StubFetch {
        reply: Reply,
        pub seen: Arc<Mutex<Vec<(String, FetchInit)>>>,
    }

    #[async_trait]
    impl landing_http::Fetch for StubFetch {
        async fn fetch(&self, url: &str, init: FetchInit) -> Result<Response, HttpError> {
            self.seen.lock().unwrap().push((url.to_string(), init));
            match &self.reply {
                Reply::Json(status, body) => Ok(Response::new(*status, "", body.to_string())),
                Reply::Fail(error) => Err(error.clone()),
                Reply::Panic(message) => panic!("{}", message),
            }
        }
    }

    /// A client whose transport always answers with `reply`.
    pub fn client(reply: Reply) -> (ContentClient, StubFetch) {
        let fetch = StubFetch {
            reply,
            seen: Arc::default(),
        };
        let rest = RestClient::with_adapter(Arc::new(FetchRestAdapter::with_fetch(fetch.clone())));
        let client = ContentClient::with_graphql(
            GraphQlClient::with_rest(rest),
            ContentConfig::new("test-token"),
        );
        (client, fetch)
    }
}

#[cfg(test)]
mod tests {
    use landing_http::HttpError;
    use serde_json::{json, Value};
    use tracing_test::traced_test;

    use super::testing::{client, Reply};
    use super::*;

    #[test]
    fn test_query_result_accessors() {
        let ok: QueryResult<u8> = QueryResult::Success(1);
        assert!(ok.is_success());
        assert_eq!(ok.data(), Some(&1));
        assert_eq!(ok.error(), None);

        let failed: QueryResult<u8> = QueryResult::Failure("boom".to_string());
        assert!(!failed.is_success());
        assert_eq!(failed.data(), None);
        assert_eq!(failed.error(), Some("boom"));
        assert_eq!(Result::from(failed), Err::<u8, _>("boom".to_string()));
    }

    #[tokio::test]
    async fn test_query_options_carry_credentials_and_revalidate() {
        let (client, fetch) = client(Reply::Json(200, json!({"data": {}})));
        let result: QueryResult<Value> = client.query_section("label", "{ x }").await;
        assert!(result.is_success());

        let seen = fetch.seen.lock().unwrap();
        let (url, init) = &seen[0];
        assert_eq!(url, "https://graphql.datocms.com/");
        assert_eq!(init.headers["Authorization"], "Bearer test-token");
        assert_eq!(init.next.as_ref().unwrap().revalidate, Some(300));
        assert!(init.signal.is_none());

        let sent: Value = serde_json::from_str(init.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, json!({"query": "{ x }", "variables": {}}));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_guard_error_is_logged_and_converted() {
        let result: QueryResult<()> = guard(
            "Error fetching footer data",
            async { Err(HttpError::Network("boom".to_string())) },
        )
        .await;

        assert_eq!(result, QueryResult::Failure("boom".to_string()));
        assert!(logs_contain("Error fetching footer data"));
        assert!(logs_contain("boom"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_guard_panic_becomes_unknown_error() {
        let result: QueryResult<()> = guard("Error fetching header data", async {
            if true {
                panic!("boom");
            }
            Ok::<(), HttpError>(())
        })
        .await;

        assert_eq!(result, QueryResult::Failure("Unknown error".to_string()));
        assert!(logs_contain("Error fetching header data"));
    }

    #[tokio::test]
    async fn test_query_section_transport_panic_is_contained() {
        let (client, _) = client(Reply::Panic("transport exploded"));
        let result: QueryResult<Value> = client.query_section("label", "{ x }").await;
        assert_eq!(result.error(), Some(UNKNOWN_ERROR));
    }
}
