//! Request utilities shared by every transport and client.

use std::time::Duration;

use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;

use crate::error::HttpError;
use crate::request::Headers;
use crate::response::Response;
use crate::signal::{AbortController, AbortReason, AbortSignal};

/// Base URL used when a request does not provide one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// Message used when neither the body nor the status line explains a failure.
pub const DEFAULT_ERROR_MESSAGE: &str = "Request failed";

/// Pick the request base URL, falling back to [`DEFAULT_BASE_URL`].
pub fn resolve_base_url(candidate: Option<&str>) -> String {
    match candidate {
        Some(base) if !base.is_empty() => base.to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

/// Default JSON headers merged with caller-supplied ones.
///
/// A custom header replaces a default one with the same name, compared
/// case-insensitively.
pub fn create_headers(custom: Option<&Headers>) -> Headers {
    let mut headers = Headers::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());

    if let Some(custom) = custom {
        for (key, value) in custom {
            headers.retain(|existing, _| !existing.eq_ignore_ascii_case(key));
            headers.insert(key.clone(), value.clone());
        }
    }

    headers
}

/// A signal that aborts with [`AbortReason::TimedOut`] after `timeout`.
///
/// Returns `None` for a missing or zero timeout. The timer only holds a
/// weak reference to the signal and stops as soon as the last handle to
/// the signal is dropped.
///
/// # Panics
///
/// Panics when called outside of a Tokio runtime.
pub fn create_timeout_signal(timeout: Option<Duration>) -> Option<AbortSignal> {
    let timeout = timeout.filter(|t| !t.is_zero())?;

    let signal = AbortController::new().signal();
    let handle = signal.downgrade();
    let stop = CancellationToken::new();
    let stopped = stop.clone();
    tokio::spawn(async move {
        tokio::select! {
            _ = tokio::time::sleep(timeout) => handle.abort(AbortReason::TimedOut),
            _ = stopped.cancelled() => {}
        }
    });
    signal.attach_timer(stop);

    Some(signal)
}

/// Join a base URL and a path with exactly one `/`.
pub fn build_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Normalize a raw response into a JSON payload or an [`HttpError`].
///
/// A successful response whose body is not valid JSON yields `{}`. For a
/// failed response the error message is the body's `message`, then the
/// status text, then [`DEFAULT_ERROR_MESSAGE`].
pub fn process_response(response: Response) -> Result<Value, HttpError> {
    let body = parse_json_or_empty(&response.body);

    if response.is_success() {
        return Ok(body);
    }

    let message = body
        .get("message")
        .and_then(scalar_text)
        .filter(|m| !m.is_empty())
        .or_else(|| Some(response.status_text.clone()).filter(|s| !s.is_empty()))
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
    let code = body.get("code").and_then(scalar_text);

    Err(HttpError::Status {
        message,
        status: response.status,
        code,
    })
}

fn parse_json_or_empty(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Text of a scalar JSON value; numbers and booleans are stringified.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
