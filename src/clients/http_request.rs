//! HTTP request types for the LinkedIn API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests that [`HttpClient`](crate::clients::HttpClient)
//! signs and sends.

use std::collections::HashMap;
use std::fmt;

use crate::auth::OAuthToken;
use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the LinkedIn API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for reads.
    Get,
    /// HTTP POST method for token exchanges and new mailbox items, shares and comments.
    Post,
    /// HTTP PUT method for replacing the current status.
    Put,
}

impl HttpMethod {
    /// Returns the upper-case method name used in the OAuth signature base string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// XML content type (`application/xml`), used by every write endpoint.
    Xml,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Xml => "application/xml",
        }
    }
}

/// An HTTP request to be signed and sent to the LinkedIn API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use linkedin_api::clients::{HttpRequest, HttpMethod, DataType};
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "https://api.linkedin.com/v1/people/~")
///     .query_param("count", "10")
///     .build()
///     .unwrap();
///
/// let put_request = HttpRequest::builder(HttpMethod::Put, "https://api.linkedin.com/v1/people/~/current-status")
///     .body("<current-status>Hello</current-status>")
///     .body_type(DataType::Xml)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL, without a query string.
    pub url: String,
    /// Query parameters in the order they were added. Keys may repeat.
    pub query: Vec<(String, String)>,
    /// The request body, if any.
    pub body: Option<String>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// The user token the request is signed with, if any.
    pub token: Option<OAuthToken>,
    /// Extra protocol parameters such as `oauth_verifier` or `oauth_callback`.
    pub oauth_params: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `body` is `Some` but `body_type` is `None`
    /// - `http_method` is `Get` and `body` is `Some`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        if self.http_method == HttpMethod::Get && self.body.is_some() {
            return Err(InvalidHttpRequestError::BodyNotAllowed {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    query: Vec<(String, String)>,
    body: Option<String>,
    body_type: Option<DataType>,
    extra_headers: Option<HashMap<String, String>>,
    token: Option<OAuthToken>,
    oauth_params: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            query: Vec::new(),
            body: None,
            body_type: None,
            extra_headers: None,
            token: None,
            oauth_params: Vec::new(),
        }
    }

    /// Sets the request body.
    ///
    /// When setting a body, you must also set the body type via [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the content type of the request body.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Appends query parameters, keeping their order.
    #[must_use]
    pub fn query<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Signs the request with a user token.
    #[must_use]
    pub fn token(mut self, token: &OAuthToken) -> Self {
        self.token = Some(token.clone());
        self
    }

    /// Adds a protocol parameter that is signed along with the standard ones.
    #[must_use]
    pub fn oauth_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.oauth_params.push((key.into(), value.into()));
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            url: self.url,
            query: self.query,
            body: self.body,
            body_type: self.body_type,
            extra_headers: self.extra_headers,
            token: self.token,
            oauth_params: self.oauth_params,
        };
        request.verify()?;
        Ok(request)
    }
}
