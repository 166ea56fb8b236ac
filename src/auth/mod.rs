//! Authentication types for the LinkedIn API client.
//!
//! - [`OAuthToken`]: a token/secret pair, either a request token or a
//!   member's access token
//! - [`TokenResponse`]: the parsed answer of the OAuth token endpoints
//! - [`Scope`]: member permissions requested with a request token
//! - [`oauth`]: OAuth 1.0a request signing
//!
//! Tokens are never stored by the client. Persisting an access token
//! between calls is the caller's job; [`OAuthToken`] serializes with the
//! protocol field names for that purpose.

pub mod oauth;
mod scopes;
mod token;

pub use scopes::Scope;
pub use token::{OAuthToken, TokenResponse, OAUTH_TOKEN, OAUTH_TOKEN_SECRET};
