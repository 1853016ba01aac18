//! Transport adapter: turns [`RequestOptions`] into a network call.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::HttpError;
use crate::request::RequestOptions;
use crate::signal::combine_signals;
use crate::transport::{CacheHints, Fetch, FetchInit, ReqwestFetch};
use crate::utils::{create_headers, create_timeout_signal, process_response};

/// Uniform request contract shared by every transport.
#[async_trait]
pub trait HttpAdapter: Send + Sync {
    /// Send a request to an absolute URL and return the JSON payload.
    async fn request(&self, url: &str, options: RequestOptions) -> Result<Value, HttpError>;
}

/// Adapter over a [`Fetch`] implementation.
///
/// Stateless; a single instance can be shared by any number of clients.
#[derive(Debug, Clone, Default)]
pub struct FetchRestAdapter<F = ReqwestFetch> {
    fetch: F,
}

impl FetchRestAdapter<ReqwestFetch> {
    /// Create an adapter backed by `reqwest`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: Fetch> FetchRestAdapter<F> {
    /// Create an adapter over a custom transport.
    pub fn with_fetch(fetch: F) -> Self {
        Self { fetch }
    }

    /// The underlying transport.
    pub fn fetch(&self) -> &F {
        &self.fetch
    }

    /// Build the network-level request for `options`.
    pub fn prepare(&self, options: RequestOptions) -> Result<FetchInit, HttpError> {
        let RequestOptions {
            method,
            body,
            headers,
            timeout,
            tags,
            revalidate,
            signal,
            ..
        } = options;

        let headers = create_headers(headers.as_ref());

        let signal = if timeout.is_some() {
            combine_signals([create_timeout_signal(timeout), signal])
        } else {
            signal
        };

        let body = match body {
            Some(body) if method.carries_body() => Some(
                serde_json::to_string(&body).map_err(|e| HttpError::Encode(e.to_string()))?,
            ),
            _ => None,
        };

        let next = (!tags.is_empty() || revalidate.is_some())
            .then_some(CacheHints { tags, revalidate });

        Ok(FetchInit {
            method,
            headers,
            body,
            signal,
            next,
        })
    }
}

#[async_trait]
impl<F: Fetch> HttpAdapter for FetchRestAdapter<F> {
    async fn request(&self, url: &str, options: RequestOptions) -> Result<Value, HttpError> {
        let init = self.prepare(options)?;
        let method = init.method;

        tracing::debug!(%method, url, "sending request");
        let response = self.fetch.fetch(url, init).await.inspect_err(|e| {
            tracing::debug!(%method, url, error = %e, "request failed before a response");
        })?;
        tracing::debug!(%method, url, status = response.status, "received response");

        process_response(response)
    }
}
