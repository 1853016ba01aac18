//! Typed REST client with verb-shaped helpers.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::adapter::{FetchRestAdapter, HttpAdapter};
use crate::error::HttpError;
use crate::request::{Method, RequestOptions};
use crate::utils::{build_url, resolve_base_url};

/// REST client over an [`HttpAdapter`].
///
/// Paths are resolved against `options.base_url` (or the default base URL).
///
/// # Example
///
/// ```rust,ignore
/// use landing_http::{RestClient, RequestOptions};
///
/// let client = RestClient::new();
/// let user: User = client.get("users/1", RequestOptions::default()).await?;
/// let created: User = client
///     .post("users", Some(&NewUser { name: "Ada".into() }), RequestOptions::default())
///     .await?;
/// ```
#[derive(Clone)]
pub struct RestClient {
    adapter: Arc<dyn HttpAdapter>,
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RestClient {
    /// Create a client backed by the `reqwest` adapter.
    pub fn new() -> Self {
        Self::with_adapter(Arc::new(FetchRestAdapter::new()))
    }

    /// Create a client over a custom adapter.
    pub fn with_adapter(adapter: Arc<dyn HttpAdapter>) -> Self {
        Self { adapter }
    }

    /// The adapter requests are delegated to.
    pub fn adapter(&self) -> &Arc<dyn HttpAdapter> {
        &self.adapter
    }

    /// Send a request for `path` and decode the JSON payload.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, HttpError> {
        let value = self.request_value(path, options).await?;
        serde_json::from_value(value).map_err(|e| HttpError::Decode(e.to_string()))
    }

    /// Send a request for `path` and return the raw JSON payload.
    pub async fn request_value(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Value, HttpError> {
        let url = build_url(&resolve_base_url(options.base_url.as_deref()), path);
        self.adapter.request(&url, options).await
    }

    /// `GET path`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, HttpError> {
        self.request(path, with_method(options, Method::Get, None))
            .await
    }

    /// `POST path` with an optional JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<T, HttpError> {
        let body = encode_body(body)?;
        self.request(path, with_method(options, Method::Post, body))
            .await
    }

    /// `PUT path` with an optional JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<T, HttpError> {
        let body = encode_body(body)?;
        self.request(path, with_method(options, Method::Put, body))
            .await
    }

    /// `PATCH path` with an optional JSON body.
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<T, HttpError> {
        let body = encode_body(body)?;
        self.request(path, with_method(options, Method::Patch, body))
            .await
    }

    /// `DELETE path`. A body left in `options` is dropped.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, HttpError> {
        self.request(path, with_method(options, Method::Delete, None))
            .await
    }
}

fn with_method(mut options: RequestOptions, method: Method, body: Option<Value>) -> RequestOptions {
    options.method = method;
    options.body = body;
    options
}

fn encode_body<B: Serialize + ?Sized>(body: Option<&B>) -> Result<Option<Value>, HttpError> {
    body.map(serde_json::to_value)
        .transpose()
        .map_err(|e| HttpError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use serde::{Deserialize, Serialize};
    use serde_json::{json, Value};

    use super::RestClient;
    use crate::adapter::testing::RecordingFetch;
    use crate::adapter::FetchRestAdapter;
    use crate::error::HttpError;
    use crate::request::{Method, RequestOptions};

    fn client(fetch: RecordingFetch) -> (RestClient, Arc<FetchRestAdapter<RecordingFetch>>) {
        let adapter = Arc::new(FetchRestAdapter::with_fetch(fetch));
        (RestClient::with_adapter(adapter.clone()), adapter)
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct User {
        id: u32,
        name: String,
        email: String,
    }

    #[tokio::test]
    async fn test_request_resolves_default_base_url() {
        let (client, adapter) = client(RecordingFetch::new());
        let options = RequestOptions::new(Method::Post)
            .with_body(json!({"name": ""}))
            .with_header("X-Test", "")
            .with_base_url("")
            .with_timeout(Duration::from_secs(5))
            .with_tag("")
            .with_revalidate(300);

        let _: Value = client.request("users", options).await.unwrap();

        let call = adapter.fetch().last_call();
        assert_eq!(call.url, "http://localhost:3001/api/users");
        assert_eq!(call.init.method, Method::Post);
        assert!(call.init.body.is_some());
        assert_eq!(call.init.headers["X-Test"], "");
        assert_eq!(call.init.next.unwrap().revalidate, Some(300));
    }

    #[tokio::test]
    async fn test_request_uses_base_url_override() {
        let (client, adapter) = client(RecordingFetch::new());
        let _: Value = client
            .get("/users", RequestOptions::default().with_base_url("http://test/"))
            .await
            .unwrap();
        assert_eq!(adapter.fetch().last_call().url, "http://test/users");
    }

    #[tokio::test]
    async fn test_request_propagates_adapter_errors() {
        let (client, _) = client(RecordingFetch::new().respond(Err(HttpError::Network(String::new()))));
        let err = client
            .request::<Value>("users", RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err, HttpError::Network(String::new()));
    }

    #[tokio::test]
    async fn test_get_decodes_typed_payload() {
        let user = json!({"id": 1, "name": "", "email": ""});
        let (client, adapter) = client(RecordingFetch::new().respond_json(200, user));

        let result: User = client.get("users/1", RequestOptions::default()).await.unwrap();
        assert_eq!(
            result,
            User {
                id: 1,
                name: String::new(),
                email: String::new(),
            }
        );
        assert_eq!(adapter.fetch().last_call().init.method, Method::Get);
    }

    #[tokio::test]
    async fn test_post_put_patch_send_body() {
        let body = json!({"name": "", "email": ""});

        for method in [Method::Post, Method::Put, Method::Patch] {
            let (client, adapter) = client(RecordingFetch::new());
            let _: Value = match method {
                Method::Post => client.post("users", Some(&body), RequestOptions::default()).await,
                Method::Put => client.put("users/123", Some(&body), RequestOptions::default()).await,
                _ => client.patch("users/123", Some(&body), RequestOptions::default()).await,
            }
            .unwrap();

            let call = adapter.fetch().last_call();
            assert_eq!(call.init.method, method);
            let sent: Value = serde_json::from_str(call.init.body.as_deref().unwrap()).unwrap();
            assert_eq!(sent, body);
        }
    }

    #[tokio::test]
    async fn test_post_without_body() {
        let (client, adapter) = client(RecordingFetch::new());
        let _: Value = client
            .post::<_, Value>("users", None, RequestOptions::default())
            .await
            .unwrap();
        assert!(adapter.fetch().last_call().init.body.is_none());
    }

    #[tokio::test]
    async fn test_delete_never_forwards_body() {
        let (client, adapter) = client(RecordingFetch::new().respond_json(200, json!({"success": true})));
        let options = RequestOptions::default().with_body(json!({"should": ""}));

        let result: Value = client.delete("users/123", options).await.unwrap();
        assert_eq!(result, json!({"success": true}));

        let call = adapter.fetch().last_call();
        assert_eq!(call.url, "http://localhost:3001/api/users/123");
        assert_eq!(call.init.method, Method::Delete);
        assert!(call.init.body.is_none());
    }

    #[tokio::test]
    async fn test_decode_failure() {
        let (client, _) = client(RecordingFetch::new().respond_json(200, json!({"id": "x"})));
        let err = client
            .get::<User>("users/1", RequestOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, HttpError::Decode(_)));
    }
}
