//! HTTP client error types.

use thiserror::Error;

use crate::signal::AbortReason;

/// Errors that can occur when making HTTP or GraphQL requests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// Non-2xx response, normalized by [`process_response`](crate::process_response).
    #[error("{message}")]
    Status {
        message: String,
        status: u16,
        code: Option<String>,
    },

    /// The GraphQL response carried an `errors` list.
    #[error("{message}")]
    GraphQl { message: String },

    /// The request signal fired before the call settled.
    #[error("{0}")]
    Aborted(AbortReason),

    /// DNS, connection or body-read failure.
    #[error("{0}")]
    Network(String),

    /// Failed to serialize the request body.
    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// Failed to decode the response payload into the requested type.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl HttpError {
    /// HTTP status code, for errors produced from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Application error code reported by the server, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Status { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Whether the request was cancelled (explicitly or by timeout).
    pub fn is_abort(&self) -> bool {
        matches!(self, Self::Aborted(_))
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(e: reqwest::Error) -> Self {
        HttpError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_displays_message_only() {
        let err = HttpError::Status {
            message: "Not Found".to_string(),
            status: 404,
            code: Some("missing".to_string()),
        };
        assert_eq!(err.to_string(), "Not Found");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.code(), Some("missing"));
    }

    #[test]
    fn test_non_status_errors_have_no_status() {
        let err = HttpError::GraphQl {
            message: "bad query".to_string(),
        };
        assert_eq!(err.to_string(), "bad query");
        assert_eq!(err.status(), None);
        assert_eq!(err.code(), None);
        assert!(!err.is_abort());
    }

    #[test]
    fn test_abort_errors() {
        let err = HttpError::Aborted(AbortReason::TimedOut);
        assert!(err.is_abort());
        assert_eq!(err.to_string(), "The operation timed out");
    }
}
