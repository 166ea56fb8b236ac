//! The LinkedIn resource client.
//!
//! This module provides [`LinkedInClient`], with one async method per
//! LinkedIn operation, and [`RequestOptions`] for passing extra query
//! parameters and headers to the reads.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::api::documents::{comment_xml, message_xml, status_xml, Invitation, Share};
use crate::api::endpoints::{
    comment_feed_path, ACCESS_TOKEN_PATH, AUTHORIZE_PATH, CONNECTIONS_PATH, CURRENT_STATUS_PATH,
    EMAIL_PATH, MAILBOX_PATH, NETWORK_UPDATES_PATH, PROFILE_PATH, REQUEST_TOKEN_PATH,
    SHARES_PATH,
};
use crate::api::errors::LinkedInError;
use crate::api::network_updates::NetworkUpdatesQuery;
use crate::api::selectors::field_selectors;
use crate::auth::oauth::signature::percent_encode;
use crate::auth::{OAuthToken, Scope, TokenResponse};
use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ConsumerKey, ConsumerSecret, LinkedInConfig};
use crate::error::ConfigError;

/// A JSON object as returned by the read endpoints.
pub type JsonObject = Map<String, Value>;

/// Body LinkedIn returns from the email endpoint when no address is available.
const NULL_EMAIL: &str = "null";

/// Extra query parameters and headers for a read.
///
/// # Example
///
/// ```rust
/// use linkedin_api::RequestOptions;
///
/// let options = RequestOptions::new()
///     .query_param("count", "25")
///     .query_param("start", "50")
///     .header("Accept-Language", "es-ES");
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    query: Vec<(String, String)>,
    headers: HashMap<String, String>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Returns the query parameters, in the order added.
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Returns the headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

/// Client for LinkedIn's v1 REST API.
///
/// Holds only the immutable configuration and the HTTP client; member
/// tokens are passed to each call.
///
/// # Thread Safety
///
/// `LinkedInClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use linkedin_api::{LinkedInClient, OAuthToken, RequestOptions};
///
/// let client = LinkedInClient::from_credentials("consumer-key", "consumer-secret")?;
/// let token = OAuthToken::new("member-token", "member-secret");
///
/// let profile = client
///     .get_user_profile(&token, &["first-name", "headline"], &RequestOptions::default())
///     .await?;
/// println!("{}", profile["headline"]);
/// ```
#[derive(Debug)]
pub struct LinkedInClient {
    config: LinkedInConfig,
    http_client: HttpClient,
}

// Verify LinkedInClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LinkedInClient>();
};

impl LinkedInClient {
    /// Creates a client from a configuration.
    #[must_use]
    pub fn new(config: LinkedInConfig) -> Self {
        let http_client = HttpClient::new(&config);
        Self {
            config,
            http_client,
        }
    }

    /// Creates a client for `https://api.linkedin.com` from raw credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the key or secret is empty.
    pub fn from_credentials(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = LinkedInConfig::builder()
            .consumer_key(ConsumerKey::new(consumer_key)?)
            .consumer_secret(ConsumerSecret::new(consumer_secret)?)
            .build()?;
        Ok(Self::new(config))
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &LinkedInConfig {
        &self.config
    }

    /// Returns the underlying HTTP client, for endpoints without a dedicated method.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    fn url(&self, path: &str) -> String {
        self.config.api_base().join(path)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, LinkedInError> {
        Ok(self.http_client.request(request).await?)
    }

    async fn get_json(
        &self,
        url: String,
        token: &OAuthToken,
        options: &RequestOptions,
    ) -> Result<JsonObject, LinkedInError> {
        let request = HttpRequest::builder(HttpMethod::Get, url)
            .query(options.query.iter().cloned())
            .extra_headers(options.headers.clone())
            .token(token)
            .build()
            .map_err(HttpError::from)?;
        let response = self.send(request).await?;
        Ok(response.json()?)
    }

    async fn send_xml(
        &self,
        method: HttpMethod,
        url: String,
        token: &OAuthToken,
        xml: String,
    ) -> Result<String, LinkedInError> {
        let request = HttpRequest::builder(method, url)
            .body(xml)
            .body_type(DataType::Xml)
            .token(token)
            .build()
            .map_err(HttpError::from)?;
        let response = self.send(request).await?;
        Ok(response.body)
    }

    /// Obtains a request token, the first leg of the OAuth flow.
    ///
    /// `scopes` are sent space-separated in the order given; an empty slice
    /// sends no `scope` parameter. The config's callback URL, if any, is
    /// sent as `oauth_callback`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkedInError::Http`] if the request fails.
    pub async fn get_request_token(&self, scopes: &[Scope]) -> Result<TokenResponse, LinkedInError> {
        let mut builder = HttpRequest::builder(HttpMethod::Post, self.url(REQUEST_TOKEN_PATH));
        if !scopes.is_empty() {
            builder = builder.query_param("scope", Scope::join(scopes));
        }
        if let Some(callback) = self.config.callback_url() {
            builder = builder.oauth_param("oauth_callback", callback);
        }

        let request = builder.build().map_err(HttpError::from)?;
        let response = self.send(request).await?;
        Ok(TokenResponse::parse(&response.body))
    }

    /// Returns the page the member must visit to authorize `request_token`.
    ///
    /// ```rust
    /// use linkedin_api::{LinkedInClient, OAuthToken};
    ///
    /// let client = LinkedInClient::from_credentials("key", "secret").unwrap();
    /// let url = client.authorization_url(&OAuthToken::new("94ab03c4", "unused"));
    /// assert_eq!(url, "https://api.linkedin.com/uas/oauth/authorize?oauth_token=94ab03c4");
    /// ```
    #[must_use]
    pub fn authorization_url(&self, request_token: &OAuthToken) -> String {
        format!(
            "{}?oauth_token={}",
            self.url(AUTHORIZE_PATH),
            percent_encode(&request_token.token)
        )
    }

    /// Exchanges an authorized request token and its verifier for an access token.
    ///
    /// Exactly one POST is made. The response pairs are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`LinkedInError::Http`] if the request fails.
    pub async fn get_access_token(
        &self,
        request_token: &OAuthToken,
        verifier: &str,
    ) -> Result<TokenResponse, LinkedInError> {
        let request = HttpRequest::builder(HttpMethod::Post, self.url(ACCESS_TOKEN_PATH))
            .token(request_token)
            .oauth_param("oauth_verifier", verifier)
            .build()
            .map_err(HttpError::from)?;
        let response = self.send(request).await?;
        Ok(TokenResponse::parse(&response.body))
    }

    /// Fetches the member's profile, restricted to `selectors` if any are given.
    ///
    /// # Errors
    ///
    /// Returns [`LinkedInError::Http`] if the request fails and
    /// [`LinkedInError::Deserialize`] if the body is not a JSON object.
    pub async fn get_user_profile<S: AsRef<str> + Sync>(
        &self,
        token: &OAuthToken,
        selectors: &[S],
        options: &RequestOptions,
    ) -> Result<JsonObject, LinkedInError> {
        let url = format!("{}{}", self.url(PROFILE_PATH), field_selectors(selectors));
        self.get_json(url, token, options).await
    }

    /// Fetches the member's connections, restricted to `selectors` if any are given.
    ///
    /// Paging goes through `count` and `start` in `options`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkedInError::Http`] if the request fails and
    /// [`LinkedInError::Deserialize`] if the body is not a JSON object.
    pub async fn get_user_connections<S: AsRef<str> + Sync>(
        &self,
        token: &OAuthToken,
        selectors: &[S],
        options: &RequestOptions,
    ) -> Result<JsonObject, LinkedInError> {
        let url = format!("{}{}", self.url(CONNECTIONS_PATH), field_selectors(selectors));
        self.get_json(url, token, options).await
    }

    /// Fetches the member's primary email address.
    ///
    /// Requires the `r_emailaddress` scope. LinkedIn answers with the bare
    /// word `null` when no address is available, which becomes `None`; any
    /// other body is returned as is.
    ///
    /// # Errors
    ///
    /// Returns [`LinkedInError::Http`] if the request fails.
    pub async fn get_email_address(
        &self,
        token: &OAuthToken,
        options: &RequestOptions,
    ) -> Result<Option<String>, LinkedInError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.url(EMAIL_PATH))
            .query(options.query.iter().cloned())
            .extra_headers(options.headers.clone())
            .token(token)
            .build()
            .map_err(HttpError::from)?;
        let response = self.send(request).await?;

        if response.body == NULL_EMAIL {
            Ok(None)
        } else {
            Ok(Some(response.body))
        }
    }

    /// Fetches the member's network updates.
    ///
    /// Update type codes are validated when the query is built, so an
    /// invalid code never reaches this call.
    ///
    /// # Errors
    ///
    /// Returns [`LinkedInError::Http`] if the request fails and
    /// [`LinkedInError::Deserialize`] if the body is not a JSON object.
    pub async fn get_network_updates(
        &self,
        token: &OAuthToken,
        query: &NetworkUpdatesQuery,
    ) -> Result<JsonObject, LinkedInError> {
        let options = RequestOptions {
            query: query.to_query(),
            headers: HashMap::new(),
        };
        self.get_json(self.url(NETWORK_UPDATES_PATH), token, &options)
            .await
    }

    /// Fetches the comments on a network update.
    ///
    /// # Errors
    ///
    /// Returns [`LinkedInError::Http`] if the request fails and
    /// [`LinkedInError::Deserialize`] if the body is not a JSON object.
    pub async fn get_comment_feed(
        &self,
        token: &OAuthToken,
        network_key: &str,
        options: &RequestOptions,
    ) -> Result<JsonObject, LinkedInError> {
        self.get_json(self.url(&comment_feed_path(network_key)), token, options)
            .await
    }

    /// Sends a message to one or more members by id.
    ///
    /// # Errors
    ///
    /// Returns [`LinkedInError::Validation`] if `recipients` is empty, before
    /// any request is made, and [`LinkedInError::Http`] if the request fails.
    pub async fn send_message<S: AsRef<str> + Sync>(
        &self,
        token: &OAuthToken,
        recipients: &[S],
        subject: &str,
        body: &str,
    ) -> Result<String, LinkedInError> {
        let xml = message_xml(recipients, subject, body)?;
        self.send_xml(HttpMethod::Post, self.url(MAILBOX_PATH), token, xml)
            .await
    }

    /// Sends an invitation to connect.
    ///
    /// # Errors
    ///
    /// Returns [`LinkedInError::Http`] if the request fails.
    pub async fn send_invitation(
        &self,
        token: &OAuthToken,
        invitation: &Invitation,
    ) -> Result<String, LinkedInError> {
        self.send_xml(
            HttpMethod::Post,
            self.url(MAILBOX_PATH),
            token,
            invitation.to_xml(),
        )
        .await
    }

    /// Replaces the member's current status.
    ///
    /// # Errors
    ///
    /// Returns [`LinkedInError::Http`] if the request fails.
    pub async fn set_status_update(
        &self,
        token: &OAuthToken,
        status: &str,
    ) -> Result<String, LinkedInError> {
        self.send_xml(
            HttpMethod::Put,
            self.url(CURRENT_STATUS_PATH),
            token,
            status_xml(status),
        )
        .await
    }

    /// Posts a share.
    ///
    /// # Errors
    ///
    /// Returns [`LinkedInError::Http`] if the request fails.
    pub async fn share(&self, token: &OAuthToken, share: &Share) -> Result<String, LinkedInError> {
        self.send_xml(HttpMethod::Post, self.url(SHARES_PATH), token, share.to_xml())
            .await
    }

    /// Comments on a network update.
    ///
    /// # Errors
    ///
    /// Returns [`LinkedInError::Http`] if the request fails.
    pub async fn submit_comment(
        &self,
        token: &OAuthToken,
        network_key: &str,
        comment: &str,
    ) -> Result<String, LinkedInError> {
        self.send_xml(
            HttpMethod::Post,
            self.url(&comment_feed_path(network_key)),
            token,
            comment_xml(comment),
        )
        .await
    }
}
