//! Raw HTTP response as handed over by a transport.

use crate::request::Headers;

/// An HTTP response.
#[derive(Debug, Clone, Default)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The reason phrase; may be empty.
    pub status_text: String,
    /// The response headers.
    pub headers: Headers,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            headers: Headers::new(),
            body: body.into(),
        }
    }

    /// Add a header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the raw response body.
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Get a header value.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_is_success() {
        assert!(Response::new(200, "OK", "").is_success());
        assert!(Response::new(204, "", "").is_success());
        assert!(Response::new(299, "", "").is_success());
        assert!(!Response::new(199, "", "").is_success());
        assert!(!Response::new(304, "", "").is_success());
        assert!(!Response::new(500, "", "").is_success());
    }

    #[test]
    fn test_response_header_case_insensitive() {
        let resp = Response::new(200, "OK", "").with_header("Content-Type", "text/html");
        assert_eq!(resp.header("content-type"), Some("text/html"));
        assert_eq!(resp.header("CONTENT-TYPE"), Some("text/html"));
        assert_eq!(resp.header("X-Missing"), None);
    }

    #[test]
    fn test_response_bytes() {
        let resp = Response::new(200, "OK", vec![1, 2, 3]);
        assert_eq!(resp.bytes(), &[1, 2, 3]);
    }
}
