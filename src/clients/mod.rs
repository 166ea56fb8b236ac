//! HTTP client types for LinkedIn API communication.
//!
//! This module provides the signed transport layer underneath
//! [`LinkedInClient`](crate::LinkedInClient). Most callers never use it
//! directly; it is public for endpoints the resource methods do not cover.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client that signs and sends requests
//! - [`HttpRequest`]: A request to be signed and sent
//! - [`HttpResponse`]: The status, headers and raw body of a response
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT)
//! - [`DataType`]: Content types for request bodies
//! - [`ApiError`]: The error LinkedIn reports for statuses of 400 or above
//!
//! # Example
//!
//! ```rust,ignore
//! use linkedin_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(
//!     HttpMethod::Get,
//!     "https://api.linkedin.com/v1/people/~/group-memberships",
//! )
//! .token(&access_token)
//! .build()
//! .unwrap();
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ApiError, HttpError, InvalidHttpRequestError, UNKNOWN};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
