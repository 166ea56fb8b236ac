//! LinkedIn endpoint paths, relative to the configured API base.

/// OAuth request-token endpoint.
pub const REQUEST_TOKEN_PATH: &str = "/uas/oauth/requestToken";
/// Page the member is sent to for authorizing a request token.
pub const AUTHORIZE_PATH: &str = "/uas/oauth/authorize";
/// OAuth access-token endpoint.
pub const ACCESS_TOKEN_PATH: &str = "/uas/oauth/accessToken";

/// The current member's profile.
pub const PROFILE_PATH: &str = "/v1/people/~";
/// The current member's connections.
pub const CONNECTIONS_PATH: &str = "/v1/people/~/connections";
/// The current member's primary email address.
pub const EMAIL_PATH: &str = "/v1/people/~/email-address";
/// Messages and invitations.
pub const MAILBOX_PATH: &str = "/v1/people/~/mailbox";
/// The network updates stream.
pub const NETWORK_UPDATES_PATH: &str = "/v1/people/~/network";
/// The current member's status.
pub const CURRENT_STATUS_PATH: &str = "/v1/people/~/current-status";
/// Shares posted by the current member.
pub const SHARES_PATH: &str = "/v1/people/~/shares";

/// Comments on the network update identified by `network_key`.
///
/// The key is inserted as given.
#[must_use]
pub fn comment_feed_path(network_key: &str) -> String {
    format!("/v1/people/~/network/updates/key={network_key}/update-comments")
}
