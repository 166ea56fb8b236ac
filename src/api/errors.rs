//! Error types for the LinkedIn resource methods.
//!
//! # Error Handling
//!
//! - [`ValidationError`]: Input rejected locally, before any network call
//! - [`LinkedInError::Http`]: Wraps transport errors and [`ApiError`]s
//! - [`LinkedInError::Deserialize`]: A read returned a body that is not a JSON object
//! - [`LinkedInError::InvalidTokenResponse`]: A token response lacks a required key
//!
//! # Example
//!
//! ```rust,ignore
//! use linkedin_api::{LinkedInError, ValidationError};
//!
//! match client.get_user_profile(&token, &[], &RequestOptions::default()).await {
//!     Ok(profile) => println!("Hello {}", profile["firstName"]),
//!     Err(LinkedInError::Validation(e)) => println!("Bad input: {e}"),
//!     Err(e) => match e.api_error() {
//!         Some(api) => println!("LinkedIn said {} ({})", api.message, api.http_status),
//!         None => println!("Request failed: {e}"),
//!     },
//! }
//! ```

use crate::clients::{ApiError, HttpError};
use thiserror::Error;

/// Input rejected before any request is sent.
///
/// # Example
///
/// ```rust
/// use linkedin_api::ValidationError;
///
/// let error = ValidationError::InvalidNetworkUpdateCode { code: "XXXX".to_string() };
/// assert_eq!(error.to_string(), "Code XXXX not a valid update code");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A network update type code outside the ten known codes.
    #[error("Code {code} not a valid update code")]
    InvalidNetworkUpdateCode {
        /// The rejected code.
        code: String,
    },

    /// A string that is not a LinkedIn permission scope.
    #[error("'{scope}' is not a valid LinkedIn scope")]
    InvalidScope {
        /// The rejected scope.
        scope: String,
    },

    /// A message without recipients.
    #[error("A message needs at least one recipient")]
    EmptyRecipients,
}

/// Error type returned by every [`LinkedInClient`](crate::LinkedInClient) method.
#[derive(Debug, Error)]
pub enum LinkedInError {
    /// Input was rejected before any network call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request failed in transport or LinkedIn answered with an error.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A read returned a body that is not the expected JSON.
    #[error("Failed to parse LinkedIn response: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// A token response is missing `oauth_token` or `oauth_token_secret`.
    #[error("Token response is missing '{key}'")]
    InvalidTokenResponse {
        /// The missing key.
        key: &'static str,
    },
}

impl LinkedInError {
    /// Returns the [`ApiError`] if LinkedIn rejected the call.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Http(HttpError::Api(error)) => Some(error),
            _ => None,
        }
    }
}

impl From<ApiError> for LinkedInError {
    fn from(error: ApiError) -> Self {
        Self::Http(HttpError::Api(error))
    }
}

// Verify LinkedInError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LinkedInError>();
};
