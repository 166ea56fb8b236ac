//! HTTP response type for the LinkedIn API client.
//!
//! LinkedIn answers in three shapes: JSON for reads, URL-encoded pairs for
//! the OAuth token endpoints, and plain strings for writes and the email
//! endpoint. [`HttpResponse`] keeps the raw body and offers a decoder for
//! each shape.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// An HTTP response from the LinkedIn API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-case name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `x-li-request-id` header value, if present.
    ///
    /// LinkedIn support asks for this id when investigating failed calls.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-li-request-id")
    }

    /// Deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Parses the body as URL-encoded key/value pairs.
    ///
    /// Later duplicates of a key win. Pairs with an empty value are kept.
    #[must_use]
    pub fn form_pairs(&self) -> HashMap<String, String> {
        url::form_urlencoded::parse(self.body.trim().as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }
}
