//! Network primitive behind the adapter.
//!
//! [`Fetch`] decouples the adapter from any specific HTTP implementation.
//! [`ReqwestFetch`] is the production transport; tests substitute their own.

use std::future::Future;

use async_trait::async_trait;

use crate::error::HttpError;
use crate::request::{Headers, Method};
use crate::response::Response;
use crate::signal::AbortSignal;

/// Caching metadata for the hosting framework's data cache.
///
/// Passed through verbatim; the transport does not interpret it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheHints {
    /// Cache tags used for targeted invalidation.
    pub tags: Vec<String>,
    /// Revalidation interval in seconds.
    pub revalidate: Option<u64>,
}

/// A fully prepared request, ready for the network.
#[derive(Debug, Clone, Default)]
pub struct FetchInit {
    /// HTTP method.
    pub method: Method,
    /// Merged headers.
    pub headers: Headers,
    /// Serialized JSON body; always `None` for `GET` and `DELETE`.
    pub body: Option<String>,
    /// Cancellation signal for the call.
    pub signal: Option<AbortSignal>,
    /// Caching metadata, present only when tags or a revalidate interval were given.
    pub next: Option<CacheHints>,
}

/// The platform network primitive.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Issue one request and return the raw response.
    ///
    /// Fails only for transport-level problems (connection, DNS, abort);
    /// non-2xx statuses are returned as responses.
    async fn fetch(&self, url: &str, init: FetchInit) -> Result<Response, HttpError>;
}

/// [`Fetch`] backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetch {
    client: reqwest::Client,
}

impl ReqwestFetch {
    /// Create a transport with a default `reqwest` client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport from an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetch for ReqwestFetch {
    async fn fetch(&self, url: &str, init: FetchInit) -> Result<Response, HttpError> {
        let FetchInit {
            method,
            headers,
            body,
            signal,
            next,
        } = init;

        if let Some(hints) = &next {
            tracing::trace!(url, tags = ?hints.tags, revalidate = ?hints.revalidate, "cache hints");
        }

        let mut builder = self.client.request(method.into(), url);
        for (key, value) in &headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = with_signal(signal.as_ref(), builder.send()).await??;

        let status = response.status();
        let response_headers: Headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.to_string(), v.to_str().ok()?.to_string())))
            .collect();
        let bytes = with_signal(signal.as_ref(), response.bytes()).await??;

        Ok(Response {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers: response_headers,
            body: bytes.to_vec(),
        })
    }
}

/// Run `fut` unless `signal` fires first.
async fn with_signal<F: Future>(
    signal: Option<&AbortSignal>,
    fut: F,
) -> Result<F::Output, HttpError> {
    match signal {
        None => Ok(fut.await),
        Some(signal) => {
            if let Some(reason) = signal.reason() {
                return Err(HttpError::Aborted(reason));
            }
            tokio::select! {
                reason = signal.aborted() => Err(HttpError::Aborted(reason)),
                output = fut => Ok(output),
            }
        }
    }
}
