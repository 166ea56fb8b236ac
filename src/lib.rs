//! # LinkedIn API Rust Client
//!
//! An async client for LinkedIn's v1 REST API, signing every call with
//! OAuth 1.0a (HMAC-SHA1).
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`LinkedInConfig`] and [`LinkedInConfigBuilder`]
//! - Validated newtypes for the consumer credentials and the API base URL
//! - The three-legged OAuth 1.0a flow: request token, authorization URL, access token
//! - One async method per resource on [`LinkedInClient`]: profile,
//!   connections, email, network updates, comments, status, shares,
//!   messages and invitations
//! - Typed errors carrying LinkedIn's error code, message, status and timestamp
//!
//! ## Quick Start
//!
//! ```rust
//! use linkedin_api::{ConsumerKey, ConsumerSecret, LinkedInClient, LinkedInConfig};
//!
//! let config = LinkedInConfig::builder()
//!     .consumer_key(ConsumerKey::new("your-consumer-key").unwrap())
//!     .consumer_secret(ConsumerSecret::new("your-consumer-secret").unwrap())
//!     .callback_url("https://your-app.example.com/linkedin/callback")
//!     .build()
//!     .unwrap();
//!
//! let client = LinkedInClient::new(config);
//! ```
//!
//! ## OAuth Authentication
//!
//! ```rust,ignore
//! use linkedin_api::{OAuthToken, Scope};
//!
//! // Step 1: Obtain a request token
//! let response = client
//!     .get_request_token(&[Scope::BasicProfile, Scope::EmailAddress])
//!     .await?;
//! let request_token = OAuthToken::try_from(&response)?;
//!
//! // Step 2: Send the member to LinkedIn
//! let url = client.authorization_url(&request_token);
//!
//! // Step 3: Exchange the verifier from the callback for an access token
//! let response = client.get_access_token(&request_token, &verifier).await?;
//! let access_token = OAuthToken::try_from(&response)?;
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use linkedin_api::{NetworkUpdatesQuery, RequestOptions, Share, SubmittedLink};
//!
//! let profile = client
//!     .get_user_profile(&access_token, &["first-name", "last-name"], &RequestOptions::default())
//!     .await?;
//!
//! let updates = client
//!     .get_network_updates(&access_token, &NetworkUpdatesQuery::from_codes(["STAT"])?.count(10))
//!     .await?;
//!
//! let share = Share::new("Worth a read", "Title", "Description")
//!     .with_link(SubmittedLink::new("https://example.com/article"));
//! client.share(&access_token, &share).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and input types validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No token storage**: Member tokens are passed to every call

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use api::{
    Invitation, InvitationRecipient, JsonObject, LinkedInClient, LinkedInError,
    NetworkUpdateType, NetworkUpdatesQuery, RequestOptions, Share, SubmittedLink, TimeBound,
    ValidationError,
};
pub use auth::{OAuthToken, Scope, TokenResponse};
pub use config::{BaseUrl, ConsumerKey, ConsumerSecret, LinkedInConfig, LinkedInConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidHttpRequestError,
};
