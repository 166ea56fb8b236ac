//! Configuration types for the LinkedIn API client.
//!
//! This module provides the configuration used to construct a
//! [`LinkedInClient`](crate::LinkedInClient).
//!
//! # Overview
//!
//! - [`LinkedInConfig`]: Immutable client settings, chiefly the consumer credentials
//! - [`LinkedInConfigBuilder`]: A builder for constructing [`LinkedInConfig`] instances
//! - [`ConsumerKey`]: A validated consumer key newtype
//! - [`ConsumerSecret`]: A validated consumer secret newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use linkedin_api::{LinkedInConfig, ConsumerKey, ConsumerSecret};
//!
//! let config = LinkedInConfig::builder()
//!     .consumer_key(ConsumerKey::new("my-api-key").unwrap())
//!     .consumer_secret(ConsumerSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_base().as_ref(), "https://api.linkedin.com");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, ConsumerKey, ConsumerSecret};

use crate::error::ConfigError;

/// Configuration for the LinkedIn API client.
///
/// The consumer credentials identify the calling application and sign every
/// request. They are set once here and never change afterwards; per-user
/// access tokens are passed to each call instead.
///
/// # Thread Safety
///
/// `LinkedInConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use linkedin_api::{LinkedInConfig, ConsumerKey, ConsumerSecret, BaseUrl};
///
/// let config = LinkedInConfig::builder()
///     .consumer_key(ConsumerKey::new("key").unwrap())
///     .consumer_secret(ConsumerSecret::new("secret").unwrap())
///     .api_base(BaseUrl::new("http://localhost:8080").unwrap())
///     .callback_url("https://myapp.example.com/linkedin/callback")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.callback_url(), Some("https://myapp.example.com/linkedin/callback"));
/// ```
#[derive(Clone, Debug)]
pub struct LinkedInConfig {
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
    api_base: BaseUrl,
    callback_url: Option<String>,
    user_agent_prefix: Option<String>,
}

impl LinkedInConfig {
    /// Creates a new builder for constructing a `LinkedInConfig`.
    #[must_use]
    pub fn builder() -> LinkedInConfigBuilder {
        LinkedInConfigBuilder::new()
    }

    /// Returns the consumer key.
    #[must_use]
    pub const fn consumer_key(&self) -> &ConsumerKey {
        &self.consumer_key
    }

    /// Returns the consumer secret.
    #[must_use]
    pub const fn consumer_secret(&self) -> &ConsumerSecret {
        &self.consumer_secret
    }

    /// Returns the base URL that endpoint paths are joined onto.
    #[must_use]
    pub const fn api_base(&self) -> &BaseUrl {
        &self.api_base
    }

    /// Returns the OAuth callback URL sent with request-token calls, if configured.
    #[must_use]
    pub fn callback_url(&self) -> Option<&str> {
        self.callback_url.as_deref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify LinkedInConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LinkedInConfig>();
};

/// Builder for constructing [`LinkedInConfig`] instances.
///
/// Required fields are `consumer_key` and `consumer_secret`.
///
/// # Defaults
///
/// - `api_base`: `https://api.linkedin.com`
/// - `callback_url`: `None` (no `oauth_callback` is sent)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct LinkedInConfigBuilder {
    consumer_key: Option<ConsumerKey>,
    consumer_secret: Option<ConsumerSecret>,
    api_base: Option<BaseUrl>,
    callback_url: Option<String>,
    user_agent_prefix: Option<String>,
}

impl LinkedInConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the consumer key (required).
    #[must_use]
    pub fn consumer_key(mut self, key: ConsumerKey) -> Self {
        self.consumer_key = Some(key);
        self
    }

    /// Sets the consumer secret (required).
    #[must_use]
    pub fn consumer_secret(mut self, secret: ConsumerSecret) -> Self {
        self.consumer_secret = Some(secret);
        self
    }

    /// Overrides the API base URL, e.g. to go through a proxy.
    #[must_use]
    pub fn api_base(mut self, base: BaseUrl) -> Self {
        self.api_base = Some(base);
        self
    }

    /// Sets the callback URL the user is sent back to after authorizing.
    #[must_use]
    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`LinkedInConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `consumer_key` or
    /// `consumer_secret` are not set.
    pub fn build(self) -> Result<LinkedInConfig, ConfigError> {
        let consumer_key = self
            .consumer_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_key",
            })?;
        let consumer_secret = self
            .consumer_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_secret",
            })?;

        Ok(LinkedInConfig {
            consumer_key,
            consumer_secret,
            api_base: self.api_base.unwrap_or_default(),
            callback_url: self.callback_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
