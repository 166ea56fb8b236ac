//! OAuth 1.0a for LinkedIn.
//!
//! LinkedIn's v1 API authenticates with three-legged OAuth 1.0a:
//!
//! 1. **Request token**: the application obtains a temporary token with
//!    [`LinkedInClient::get_request_token`](crate::LinkedInClient::get_request_token).
//! 2. **Authorization**: the member is sent to
//!    [`LinkedInClient::authorization_url`](crate::LinkedInClient::authorization_url)
//!    and comes back with an `oauth_verifier`.
//! 3. **Access token**: the request token and verifier are exchanged with
//!    [`LinkedInClient::get_access_token`](crate::LinkedInClient::get_access_token).
//!
//! Every request along the way, and every API call afterwards, is signed by
//! [`OAuthSigner`] with HMAC-SHA1.
//!
//! # Example
//!
//! ```rust,ignore
//! use linkedin_api::{LinkedInClient, Scope};
//!
//! let request_token = client
//!     .get_request_token(&[Scope::BasicProfile, Scope::EmailAddress])
//!     .await?
//!     .to_token()
//!     .expect("request token");
//!
//! // Redirect the member here and wait for the callback.
//! let url = client.authorization_url(&request_token);
//!
//! let access = client.get_access_token(&request_token, &verifier).await?;
//! ```

pub mod signature;

pub use signature::{OAuthParameters, OAuthSigner};
