//! HTTP client for LinkedIn API communication.
//!
//! This module provides the [`HttpClient`] type, which signs each request
//! with OAuth 1.0a and sends it to LinkedIn.

use std::collections::HashMap;

use crate::auth::oauth::signature::percent_encode;
use crate::auth::oauth::OAuthSigner;
use crate::clients::errors::{ApiError, HttpError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::LinkedInConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Response format requested on every call.
const RESPONSE_FORMAT: (&str, &str) = ("format", "json");

/// HTTP client for making signed requests to the LinkedIn API.
///
/// The client handles:
/// - Default headers including User-Agent and `Accept: application/json`
/// - Forcing `format=json` on every call
/// - OAuth 1.0a signing, in the query string for GET and in the
///   `Authorization` header otherwise
/// - Turning responses with a status of 400 or above into [`ApiError`]
///
/// Nothing is retried.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use linkedin_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "https://api.linkedin.com/v1/people/~")
///     .token(&access_token)
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Signs every request with the consumer credentials.
    signer: OAuthSigner,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client signing with the credentials in `config`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use linkedin_api::{ConsumerKey, ConsumerSecret, LinkedInConfig};
    /// use linkedin_api::clients::HttpClient;
    ///
    /// let config = LinkedInConfig::builder()
    ///     .consumer_key(ConsumerKey::new("key").unwrap())
    ///     .consumer_secret(ConsumerSecret::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// assert_eq!(client.default_headers().get("Accept").unwrap(), "application/json");
    /// ```
    #[must_use]
    pub fn new(config: &LinkedInConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}LinkedIn API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            signer: OAuthSigner::from_config(config),
            default_headers,
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Signs and sends an HTTP request to the LinkedIn API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The URL is not absolute (`InvalidUrl`)
    /// - A network error occurs (`Network`)
    /// - LinkedIn answers with a status of 400 or above (`Api`)
    ///
    /// A status of 400 or above is an error even when the body is empty.
    /// Such a response yields an [`ApiError`] whose `code` and `status` are
    /// `"unknown"`; the empty body is never handed back as a success.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let mut query: Vec<(String, String)> = request
            .query
            .iter()
            .filter(|(key, _)| key != RESPONSE_FORMAT.0)
            .cloned()
            .collect();
        query.push((RESPONSE_FORMAT.0.to_string(), RESPONSE_FORMAT.1.to_string()));
        let request = HttpRequest { query, ..request };

        let oauth = self
            .signer
            .sign(&request)
            .map_err(|source| HttpError::InvalidUrl {
                url: request.url.clone(),
                source,
            })?;

        // Merge headers
        let mut headers = self.default_headers.clone();
        let mut url_query = request.query.clone();
        if request.http_method == HttpMethod::Get {
            url_query.extend(oauth.pairs().iter().cloned());
        } else {
            headers.insert("Authorization".to_string(), oauth.to_header());
        }
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let url = append_query(&request.url, &url_query);

        tracing::debug!(
            method = %request.http_method,
            url = %request.url,
            "Sending signed request to LinkedIn"
        );

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        tracing::debug!(status = code, url = %request.url, "Received LinkedIn response");

        let response = HttpResponse::new(code, res_headers, body);
        if code >= 400 {
            return Err(ApiError::from_response(code, &response.body, response.request_id()).into());
        }

        Ok(response)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Appends RFC 3986 encoded pairs to `url`, keeping any query it already has.
fn append_query(url: &str, pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        return url.to_string();
    }

    let encoded = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", percent_encode(key), percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConsumerKey, ConsumerSecret};

    fn config(prefix: Option<&str>) -> LinkedInConfig {
        let mut builder = LinkedInConfig::builder()
            .consumer_key(ConsumerKey::new("key").unwrap())
            .consumer_secret(ConsumerSecret::new("secret").unwrap());
        if let Some(prefix) = prefix {
            builder = builder.user_agent_prefix(prefix);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_user_agent_without_prefix() {
        let client = HttpClient::new(&config(None));
        let user_agent = client.default_headers().get("User-Agent").unwrap();

        assert!(user_agent.starts_with(&format!("LinkedIn API Library v{SDK_VERSION}")));
        assert!(user_agent.contains("| Rust "));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let client = HttpClient::new(&config(Some("MyApp/1.0")));
        let user_agent = client.default_headers().get("User-Agent").unwrap();

        assert!(user_agent.starts_with("MyApp/1.0 | LinkedIn API Library v"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&config(None));
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_append_query_encodes_pairs() {
        let pairs = vec![
            ("scope".to_string(), "r_basicprofile rw_nus".to_string()),
            ("format".to_string(), "json".to_string()),
        ];
        assert_eq!(
            append_query("https://api.linkedin.com/uas/oauth/requestToken", &pairs),
            "https://api.linkedin.com/uas/oauth/requestToken?scope=r_basicprofile%20rw_nus&format=json"
        );
    }

    #[test]
    fn test_append_query_extends_existing_query() {
        let pairs = vec![("format".to_string(), "json".to_string())];
        assert_eq!(
            append_query("https://api.linkedin.com/v1/people/~?a=1", &pairs),
            "https://api.linkedin.com/v1/people/~?a=1&format=json"
        );
        assert_eq!(append_query("https://x.test/p", &[]), "https://x.test/p");
    }

    #[test]
    fn test_http_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
