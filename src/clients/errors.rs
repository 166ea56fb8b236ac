//! HTTP-specific error types for the LinkedIn API client.
//!
//! This module contains error types for HTTP operations, including API
//! errors reported by LinkedIn and request validation failures.
//!
//! # Error Handling
//!
//! - [`ApiError`]: A response with status 400 or above, parsed from the body
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use linkedin_api::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Api(e)) => println!("LinkedIn said no: {e}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::InvalidUrl { url, .. }) => println!("Bad URL: {url}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Placeholder used for fields that could not be recovered from a non-JSON error body.
pub const UNKNOWN: &str = "unknown";

/// Error returned when LinkedIn answers with a status of 400 or above.
///
/// LinkedIn reports failures as a JSON document:
///
/// ```json
/// {
///   "errorCode": 0,
///   "message": "Access to posting messages denied.",
///   "requestId": "KPA3JXNBAJ",
///   "status": 403,
///   "timestamp": 1346269248747
/// }
/// ```
///
/// The OAuth endpoints answer with URL-encoded pairs instead
/// (`oauth_problem=signature_invalid`). In that case the pairs become the
/// message, `code` and `status` are [`UNKNOWN`], and the timestamp is the
/// time the error was observed.
///
/// # Example
///
/// ```rust
/// use linkedin_api::clients::ApiError;
///
/// let body = r#"{"errorCode":0,"message":"Access to posting messages denied.","status":403,"timestamp":1346269248747}"#;
/// let error = ApiError::from_response(403, body, None);
///
/// assert_eq!(error.code, "0");
/// assert_eq!(error.status, "403");
/// assert!(error.to_string().contains("Access to posting messages denied."));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("LinkedIn request failed at {timestamp} with status {status}. The error code was {code} and message is \"{message}\".")]
pub struct ApiError {
    /// The vendor error code (`errorCode`), or `"unknown"`.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// The status reported in the body, or `"unknown"`.
    pub status: String,
    /// When the error happened, as reported by LinkedIn or observed locally.
    pub timestamp: String,
    /// LinkedIn request id, from the body or the `x-li-request-id` header.
    pub request_id: Option<String>,
    /// The HTTP status code of the response.
    pub http_status: u16,
}

/// The JSON error document returned by the REST endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    error_code: Value,
    message: Value,
    status: Value,
    timestamp: Value,
    #[serde(default)]
    request_id: Option<Value>,
}

impl ApiError {
    /// Builds an error from a failed response.
    ///
    /// The body is parsed as LinkedIn's JSON error document first. When that
    /// fails it is treated as URL-encoded pairs and a best-effort error is
    /// synthesized.
    #[must_use]
    pub fn from_response(http_status: u16, body: &str, request_id: Option<&str>) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => Self {
                code: render_value(&parsed.error_code),
                message: render_value(&parsed.message),
                status: render_value(&parsed.status),
                timestamp: render_value(&parsed.timestamp),
                request_id: parsed
                    .request_id
                    .filter(|id| !id.is_null())
                    .map(|id| render_value(&id))
                    .or_else(|| request_id.map(String::from)),
                http_status,
            },
            Err(_) => Self::synthesized(http_status, body, request_id),
        }
    }

    fn synthesized(http_status: u16, body: &str, request_id: Option<&str>) -> Self {
        let pairs: BTreeMap<String, String> = url::form_urlencoded::parse(body.trim().as_bytes())
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        Self {
            code: UNKNOWN.to_string(),
            message: format!("{pairs:?}"),
            status: UNKNOWN.to_string(),
            timestamp: chrono::Utc::now()
                .format("%Y-%m-%d %H:%M:%S%.6f")
                .to_string(),
            request_id: request_id.map(String::from),
            http_status,
        }
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
///
/// # Example
///
/// ```rust
/// use linkedin_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::BodyNotAllowed {
///     method: "GET".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot send a body with GET.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A body was attached to a method that does not carry one.
    #[error("Cannot send a body with {method}.")]
    BodyNotAllowed {
        /// The HTTP method that cannot carry a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// LinkedIn returned a status of 400 or above.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The request URL could not be parsed for signing.
    #[error("Invalid request URL '{url}': {source}")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
