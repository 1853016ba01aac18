//! HTTP client core for the landing site.
//!
//! Layers, bottom up:
//! - [`utils`] - base-URL resolution, header merging, timeout signals, URL
//!   building and response normalization
//! - [`signal`] - one-way cancellation signals and [`combine_signals`]
//! - [`transport`] - the [`Fetch`] network primitive and its `reqwest` implementation
//! - [`adapter`] - [`FetchRestAdapter`], which turns [`RequestOptions`] into a fetch
//! - [`RestClient`] and [`GraphQlClient`] - typed convenience layers
//!
//! # Example
//!
//! ```rust,ignore
//! use landing_http::{GraphQlClient, GraphQlOptions};
//!
//! let client = GraphQlClient::new();
//! let data: FooterData = client
//!     .query(
//!         FOOTER_QUERY,
//!         None::<serde_json::Value>,
//!         GraphQlOptions::default()
//!             .with_base_url("https://graphql.datocms.com/")
//!             .with_bearer_auth(token)
//!             .with_revalidate(300),
//!     )
//!     .await?;
//! ```

pub mod adapter;
mod error;
pub mod graphql;
mod request;
mod response;
pub mod rest;
pub mod signal;
pub mod transport;
pub mod utils;

pub use adapter::{FetchRestAdapter, HttpAdapter};
pub use error::HttpError;
pub use graphql::{GraphQlClient, GraphQlOptions, GraphQlRequest, GraphQlResponse};
pub use request::{Headers, Method, RequestOptions};
pub use response::Response;
pub use rest::RestClient;
pub use signal::{combine_signals, AbortController, AbortReason, AbortSignal, ListenerId};
pub use transport::{CacheHints, Fetch, FetchInit, ReqwestFetch};
pub use utils::{
    build_url, create_headers, create_timeout_signal, process_response, resolve_base_url,
    DEFAULT_BASE_URL,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        AbortController, AbortSignal, GraphQlClient, GraphQlOptions, HttpError, Method,
        RequestOptions, RestClient,
    };
}
