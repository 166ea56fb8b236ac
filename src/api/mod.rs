//! LinkedIn resource methods.
//!
//! This module provides [`LinkedInClient`] and the typed inputs its methods
//! take:
//!
//! - [`NetworkUpdatesQuery`], [`NetworkUpdateType`] and [`TimeBound`] for
//!   the updates stream
//! - [`Invitation`], [`InvitationRecipient`], [`Share`] and
//!   [`SubmittedLink`] for the write endpoints
//! - [`field_selectors`] and [`to_selector`] for restricting the fields of
//!   a read
//!
//! Reads return the decoded JSON object, writes return the raw response
//! body, and the OAuth token endpoints return a
//! [`TokenResponse`](crate::TokenResponse).

mod client;
pub mod documents;
pub mod endpoints;
mod errors;
mod network_updates;
mod selectors;

pub use client::{JsonObject, LinkedInClient, RequestOptions};
pub use documents::{Invitation, InvitationRecipient, Share, SubmittedLink};
pub use errors::{LinkedInError, ValidationError};
pub use network_updates::{
    NetworkUpdateType, NetworkUpdatesQuery, TimeBound, VALID_NETWORK_UPDATE_CODES,
};
pub use selectors::{field_selectors, to_selector};
