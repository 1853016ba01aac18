//! Content Security Policy with a per-response script nonce.

use crate::config::SiteConfig;

/// Header carrying the policy.
pub const CSP_HEADER: &str = "Content-Security-Policy";

/// Meta tag name under which the nonce is exposed to the page.
pub const NONCE_META_NAME: &str = "csp-nonce";

/// A policy bound to one freshly generated nonce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSecurityPolicy {
    nonce: String,
}

impl ContentSecurityPolicy {
    /// Generate a policy with a random nonce (16 bytes, base64).
    pub fn generate() -> Self {
        use base64::{engine::general_purpose::STANDARD, Engine};
        use rand::Rng;

        let bytes: [u8; 16] = rand::thread_rng().gen();
        Self::with_nonce(STANDARD.encode(bytes))
    }

    /// A policy for `config`, or `None` in development.
    pub fn for_site(config: &SiteConfig) -> Option<Self> {
        (!config.is_dev()).then(Self::generate)
    }

    pub fn with_nonce(nonce: impl Into<String>) -> Self {
        Self {
            nonce: nonce.into(),
        }
    }

    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// The policy as a single-line header value.
    pub fn header_value(&self) -> String {
        [
            "default-src 'self'".to_string(),
            format!("script-src 'self' 'nonce-{}' 'strict-dynamic'", self.nonce),
            "style-src 'self' 'unsafe-inline'".to_string(),
            "img-src 'self' blob: data:".to_string(),
            "font-src 'self' data:".to_string(),
            "connect-src 'self'".to_string(),
            "object-src 'none'".to_string(),
            "base-uri 'self'".to_string(),
            "form-action 'self'".to_string(),
            "frame-src 'self' js2ios:".to_string(),
            "frame-ancestors 'none'".to_string(),
            "upgrade-insecure-requests".to_string(),
        ]
        .join("; ")
            + ";"
    }

    /// The `(name, value)` pair to set on the response.
    pub fn header(&self) -> (&'static str, String) {
        (CSP_HEADER, self.header_value())
    }
}
