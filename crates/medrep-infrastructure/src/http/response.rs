//! HTTP Response Utilities
//!
//! Status mapping and body parsing shared by every gateway.

use medrep_domain::error::{Error, Result};
use reqwest::{Response, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// A success with an empty body yields [`Value::Null`]. Failures map to
    /// `Unauthorized` (401), `Forbidden` (403), `Rejected` (other 4xx),
    /// `Server` (5xx) or `Network` (anything else).
    pub async fn check_and_parse(response: Response) -> Result<Value> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::network_with_source("Failed to read response body", e))?;

        if !status.is_success() {
            return Err(Self::status_error(status, &body));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body)
            .map_err(|e| Error::invalid_response(format!("Response is not JSON: {e}")))
    }

    /// Domain error for a non-success status and its body
    pub fn status_error(status: StatusCode, body: &str) -> Error {
        let message = Self::error_message(status, body);
        let code = status.as_u16();
        match code {
            401 => Error::Unauthorized { message },
            403 => Error::Forbidden { message },
            400..=499 => Error::Rejected {
                status: code,
                message,
            },
            500..=599 => Error::Server {
                status: code,
                message,
            },
            _ => Error::network(format!("Unexpected status {code}: {message}")),
        }
    }

    /// Message reported by the backend, falling back to the status reason
    ///
    /// Looks at `detail`, `message` and `error` in that order. A `detail`
    /// list (field validation failures) contributes its first `msg`.
    pub fn error_message(status: StatusCode, body: &str) -> String {
        let reported = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| {
                ["detail", "message", "error"]
                    .iter()
                    .find_map(|key| message_of(json.get(key)?))
            });

        reported.unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        })
    }

    /// Domain error for a request that never produced a response
    pub fn transport_error(err: reqwest::Error, timeout: Duration) -> Error {
        if err.is_timeout() {
            Error::network_with_source(
                format!("Request timed out after {}s", timeout.as_secs()),
                err,
            )
        } else {
            Error::network_with_source("HTTP request failed", err)
        }
    }
}

fn message_of(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(Value::as_str))
            .map(ToString::to_string),
        _ => None,
    }
}
