//! Content source configuration.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// GraphQL endpoint of the content source.
pub const DEFAULT_ENDPOINT: &str = "https://graphql.datocms.com/";

/// Environment variable holding the content source token.
pub const TOKEN_ENV_VAR: &str = "DATOCMS_API_TOKEN";

/// How long fetched content may be served before revalidation (5 minutes).
pub const DEFAULT_REVALIDATE_SECS: u64 = 300;

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),
}

/// Connection settings for the content source.
#[derive(Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// GraphQL endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Bearer token sent with every query.
    #[serde(default)]
    pub api_token: String,

    /// Revalidation window in seconds.
    #[serde(default = "default_revalidate")]
    pub revalidate: u64,

    /// Optional per-query timeout in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_revalidate() -> u64 {
    DEFAULT_REVALIDATE_SECS
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_token: String::new(),
            revalidate: DEFAULT_REVALIDATE_SECS,
            timeout_ms: None,
        }
    }
}

impl ContentConfig {
    /// Create a configuration for the default endpoint with the given token.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            ..Self::default()
        }
    }

    /// Read the token from [`TOKEN_ENV_VAR`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingVar(TOKEN_ENV_VAR))?;
        Ok(Self::new(token))
    }

    /// Point at a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set a per-query timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// The per-query timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

impl fmt::Debug for ContentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.api_token.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("ContentConfig")
            .field("endpoint", &self.endpoint)
            .field("api_token", &token)
            .field("revalidate", &self.revalidate)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
