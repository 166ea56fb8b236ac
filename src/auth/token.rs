//! OAuth 1.0a token types.
//!
//! - [`OAuthToken`]: a token/secret pair used to sign user-scoped calls
//! - [`TokenResponse`]: the URL-encoded answer of the request-token and
//!   access-token endpoints, parsed into a map

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::LinkedInError;

/// Key of the token in OAuth token responses.
pub const OAUTH_TOKEN: &str = "oauth_token";
/// Key of the token secret in OAuth token responses.
pub const OAUTH_TOKEN_SECRET: &str = "oauth_token_secret";

/// An OAuth 1.0a token and its secret.
///
/// The same shape is used for the temporary request token and for the
/// long-lived access token that identifies an authorized member. The client
/// never stores tokens; callers pass one to every user-scoped call.
///
/// Serializes with the protocol field names so a stored token response can
/// be read back directly.
///
/// # Example
///
/// ```rust
/// use linkedin_api::OAuthToken;
///
/// let token = OAuthToken::new("ef0bfbcc-1144", "76310eea-fd89");
/// assert_eq!(token.token, "ef0bfbcc-1144");
/// assert_eq!(format!("{token:?}"), r#"OAuthToken { token: "ef0bfbcc-1144", secret: "*****" }"#);
///
/// let json = serde_json::to_string(&token).unwrap();
/// assert_eq!(json, r#"{"oauth_token":"ef0bfbcc-1144","oauth_token_secret":"76310eea-fd89"}"#);
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthToken {
    /// The public token value (`oauth_token`).
    #[serde(rename = "oauth_token")]
    pub token: String,
    /// The token secret (`oauth_token_secret`), used in the signing key.
    #[serde(rename = "oauth_token_secret")]
    pub secret: String,
}

impl OAuthToken {
    /// Creates a token from its two halves.
    #[must_use]
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for OAuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthToken")
            .field("token", &self.token)
            .field("secret", &"*****")
            .finish()
    }
}

/// The key/value answer of an OAuth token endpoint.
///
/// The map is returned to the caller unchanged; the accessors below are
/// conveniences over the well-known keys.
///
/// # Example
///
/// ```rust
/// use linkedin_api::TokenResponse;
///
/// let response = TokenResponse::parse(
///     "oauth_token=abc&oauth_token_secret=def&oauth_callback_confirmed=true&oauth_expires_in=599",
/// );
/// assert_eq!(response.token(), Some("abc"));
/// assert!(response.callback_confirmed());
/// assert_eq!(response.expires_in(), Some(599));
/// assert_eq!(response.to_token().unwrap().secret, "def");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenResponse(HashMap<String, String>);

impl TokenResponse {
    /// Parses a URL-encoded body such as `oauth_token=a&oauth_token_secret=b`.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        url::form_urlencoded::parse(body.trim().as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `oauth_token`, if present.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.get(OAUTH_TOKEN)
    }

    /// Returns `oauth_token_secret`, if present.
    #[must_use]
    pub fn token_secret(&self) -> Option<&str> {
        self.get(OAUTH_TOKEN_SECRET)
    }

    /// Returns `true` when `oauth_callback_confirmed` is `true`.
    #[must_use]
    pub fn callback_confirmed(&self) -> bool {
        self.get("oauth_callback_confirmed") == Some("true")
    }

    /// Returns `oauth_expires_in` in seconds, if present and numeric.
    #[must_use]
    pub fn expires_in(&self) -> Option<u64> {
        self.get("oauth_expires_in")?.parse().ok()
    }

    /// Returns the `xoauth_request_auth_url` LinkedIn sends with request tokens.
    #[must_use]
    pub fn request_auth_url(&self) -> Option<&str> {
        self.get("xoauth_request_auth_url")
    }

    /// Builds an [`OAuthToken`] when both the token and its secret are present.
    #[must_use]
    pub fn to_token(&self) -> Option<OAuthToken> {
        Some(OAuthToken::new(self.token()?, self.token_secret()?))
    }

    /// Returns the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &HashMap<String, String> {
        &self.0
    }

    /// Consumes the response and returns the underlying map.
    #[must_use]
    pub fn into_map(self) -> HashMap<String, String> {
        self.0
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the response carried no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, String>> for TokenResponse {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl TryFrom<&TokenResponse> for OAuthToken {
    type Error = LinkedInError;

    fn try_from(response: &TokenResponse) -> Result<Self, Self::Error> {
        let token = response
            .token()
            .ok_or(LinkedInError::InvalidTokenResponse { key: OAUTH_TOKEN })?;
        let secret = response
            .token_secret()
            .ok_or(LinkedInError::InvalidTokenResponse {
                key: OAUTH_TOKEN_SECRET,
            })?;
        Ok(Self::new(token, secret))
    }
}

impl FromIterator<(String, String)> for TokenResponse {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in &self.0 {
            if key == OAUTH_TOKEN_SECRET {
                map.entry(key, &"*****");
            } else {
                map.entry(key, value);
            }
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCESS_TOKEN_BODY: &str = "oauth_token=ef0bfbcc-1144-4c5d-a73b-b40c26605da2\
        &oauth_token_secret=76310eea-fd89-4c44-a9db-0ee61de2c527\
        &oauth_expires_in=0&oauth_authorization_expires_in=0";

    #[test]
    fn test_parse_access_token_response() {
        let response = TokenResponse::parse(ACCESS_TOKEN_BODY);

        assert_eq!(response.len(), 4);
        assert_eq!(response.token(), Some("ef0bfbcc-1144-4c5d-a73b-b40c26605da2"));
        assert_eq!(
            response.token_secret(),
            Some("76310eea-fd89-4c44-a9db-0ee61de2c527")
        );
        assert_eq!(response.expires_in(), Some(0));
        assert_eq!(response.get("oauth_authorization_expires_in"), Some("0"));
    }

    #[test]
    fn test_parse_decodes_request_auth_url() {
        let response = TokenResponse::parse(
            "oauth_token=9f63bba2&oauth_token_secret=b437f289&oauth_callback_confirmed=true\
             &xoauth_request_auth_url=https%3A%2F%2Fapi.linkedin.com%2Fuas%2Foauth%2Fauthorize",
        );

        assert!(response.callback_confirmed());
        assert_eq!(
            response.request_auth_url(),
            Some("https://api.linkedin.com/uas/oauth/authorize")
        );
    }

    #[test]
    fn test_to_token_requires_both_halves() {
        assert!(TokenResponse::parse("oauth_token=only").to_token().is_none());
        assert!(TokenResponse::parse("oauth_token_secret=only").to_token().is_none());
        assert_eq!(
            TokenResponse::parse("oauth_token=a&oauth_token_secret=b").to_token(),
            Some(OAuthToken::new("a", "b"))
        );
    }

    #[test]
    fn test_try_from_names_missing_key() {
        let error = OAuthToken::try_from(&TokenResponse::parse("oauth_token=a")).unwrap_err();
        assert!(matches!(
            error,
            LinkedInError::InvalidTokenResponse { key } if key == OAUTH_TOKEN_SECRET
        ));

        let token = OAuthToken::try_from(&TokenResponse::parse(ACCESS_TOKEN_BODY)).unwrap();
        assert_eq!(token.token, "ef0bfbcc-1144-4c5d-a73b-b40c26605da2");
    }

    #[test]
    fn test_empty_body_parses_to_empty_response() {
        let response = TokenResponse::parse("");
        assert!(response.is_empty());
        assert!(!response.callback_confirmed());
    }

    #[test]
    fn test_debug_masks_secrets() {
        let token = OAuthToken::new("visible", "hidden-secret");
        assert!(!format!("{token:?}").contains("hidden-secret"));

        let response = TokenResponse::parse(ACCESS_TOKEN_BODY);
        let debug_output = format!("{response:?}");
        assert!(!debug_output.contains("76310eea"));
        assert!(debug_output.contains("ef0bfbcc"));
    }

    #[test]
    fn test_token_deserializes_from_protocol_names() {
        let token: OAuthToken =
            serde_json::from_str(r#"{"oauth_token":"t","oauth_token_secret":"s"}"#).unwrap();
        assert_eq!(token, OAuthToken::new("t", "s"));
    }
}
