//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use url::Url;

/// A validated LinkedIn consumer (API) key.
///
/// This newtype ensures the key is non-empty and provides type safety
/// to prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use linkedin_api::ConsumerKey;
///
/// let key = ConsumerKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumerKey(String);

impl ConsumerKey {
    /// Creates a new validated consumer key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyConsumerKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ConsumerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated LinkedIn consumer secret.
///
/// This newtype ensures the secret is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use linkedin_api::ConsumerSecret;
///
/// let secret = ConsumerSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ConsumerSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ConsumerSecret(String);

impl ConsumerSecret {
    /// Creates a new validated consumer secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyConsumerSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ConsumerSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ConsumerSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConsumerSecret(*****)")
    }
}

/// A validated base URL that all endpoint paths are appended to.
///
/// Only absolute `http`/`https` URLs with a host are accepted. A trailing
/// slash is removed so that paths such as `/v1/people/~` can be appended
/// directly.
///
/// # Example
///
/// ```rust
/// use linkedin_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.linkedin.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.linkedin.com");
/// assert_eq!(url.host_name(), "api.linkedin.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    host: String,
}

impl BaseUrl {
    /// The production LinkedIn API host.
    pub const LINKEDIN: &'static str = "https://api.linkedin.com";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL cannot be parsed,
    /// is not `http`/`https`, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/').to_string();

        let parsed = Url::parse(&trimmed).map_err(|_| ConfigError::InvalidBaseUrl {
            url: url.clone(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let host = match parsed.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return Err(ConfigError::InvalidBaseUrl { url }),
        };

        Ok(Self { url: trimmed, host })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.url.split("://").next().unwrap_or_default()
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.host
    }

    /// Joins an absolute endpoint path onto this base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: Self::LINKEDIN.to_string(),
            host: "api.linkedin.com".to_string(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumer_key_rejects_empty_string() {
        let result = ConsumerKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptyConsumerKey)));
    }

    #[test]
    fn test_consumer_secret_rejects_empty_string() {
        let result = ConsumerSecret::new("");
        assert!(matches!(result, Err(ConfigError::EmptyConsumerSecret)));
    }

    #[test]
    fn test_consumer_secret_masks_value_in_debug() {
        let secret = ConsumerSecret::new("super-secret-key").unwrap();
        let debug_output = format!("{:?}", secret);
        assert_eq!(debug_output, "ConsumerSecret(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_base_url_default_is_linkedin() {
        let url = BaseUrl::default();
        assert_eq!(url.as_ref(), "https://api.linkedin.com");
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "api.linkedin.com");
    }

    #[test]
    fn test_base_url_validates_format() {
        let url = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1");

        let url = BaseUrl::new("https://proxy.example.com/linkedin/").unwrap();
        assert_eq!(url.as_ref(), "https://proxy.example.com/linkedin");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("api.linkedin.com").is_err());
        assert!(BaseUrl::new("ftp://api.linkedin.com").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("").is_err());
    }

    #[test]
    fn test_base_url_join_appends_path() {
        let url = BaseUrl::new("https://api.linkedin.com/").unwrap();
        assert_eq!(url.join("/v1/people/~"), "https://api.linkedin.com/v1/people/~");
    }

    #[test]
    fn test_base_url_deserializes_with_validation() {
        let url: BaseUrl = serde_json::from_str(r#""https://api.linkedin.com""#).unwrap();
        assert_eq!(url, BaseUrl::default());

        let result: Result<BaseUrl, _> = serde_json::from_str(r#""not a url""#);
        assert!(result.is_err());
    }
}
