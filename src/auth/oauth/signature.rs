//! OAuth 1.0a HMAC-SHA1 request signing.
//!
//! Every LinkedIn call is signed with the consumer secret and, for
//! user-scoped calls, the secret of the member's token. The signature covers
//! the HTTP method, the normalized URL and every query and protocol
//! parameter, sorted after percent-encoding.
//!
//! # Example
//!
//! ```rust
//! use linkedin_api::auth::oauth::signature::{compute_signature, signing_key};
//!
//! let key = signing_key("consumer-secret", Some("token-secret"));
//! assert_eq!(key, "consumer-secret&token-secret");
//!
//! let signature = compute_signature("GET&https%3A%2F%2Fapi.linkedin.com%2Fv1%2Fpeople%2F~&", &key);
//! assert_eq!(signature.len(), 28); // SHA-1 produces 20 bytes = 28 base64 chars
//! ```

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::{Digest, Sha1};
use url::Url;

use crate::clients::HttpRequest;
use crate::config::{ConsumerKey, ConsumerSecret, LinkedInConfig};

type HmacSha1 = Hmac<Sha1>;

/// The only signature method LinkedIn accepts.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// The protocol version sent in `oauth_version`.
pub const OAUTH_VERSION: &str = "1.0";

/// Percent-encodes a string as RFC 3986 requires for OAuth.
///
/// Only unreserved characters (`A-Z a-z 0-9 - . _ ~`) are left as is; a
/// space becomes `%20`, never `+`.
///
/// ```rust
/// use linkedin_api::auth::oauth::signature::percent_encode;
///
/// assert_eq!(percent_encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
/// assert_eq!(percent_encode("~a-b_c.d"), "~a-b_c.d");
/// ```
#[must_use]
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Normalizes a URL for the signature base string.
///
/// The result is the scheme and authority, lower-cased with default ports
/// dropped, followed by the path. Query and fragment are excluded.
///
/// # Errors
///
/// Returns the parse error if `url` is not an absolute URL.
pub fn normalize_url(url: &str) -> Result<String, url::ParseError> {
    let parsed = Url::parse(url)?;
    Ok(format!(
        "{}{}",
        parsed.origin().ascii_serialization(),
        parsed.path()
    ))
}

/// Builds the signature base string `METHOD&url&params`.
///
/// `params` are raw (unencoded) pairs; duplicates are allowed and kept.
/// Pairs are encoded, then sorted by key and by value.
#[must_use]
pub fn signature_base_string(
    method: &str,
    normalized_url: &str,
    params: &[(String, String)],
) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(key, value)| (percent_encode(key), percent_encode(value)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(normalized_url),
        percent_encode(&param_string)
    )
}

/// Builds the HMAC key `consumer_secret&token_secret`.
///
/// Without a token the key still ends with `&`.
#[must_use]
pub fn signing_key(consumer_secret: &str, token_secret: Option<&str>) -> String {
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret.unwrap_or_default())
    )
}

/// Computes the base64-encoded HMAC-SHA1 of `base_string`.
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(base_string: &str, key: &str) -> String {
    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(base_string.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Computes `oauth_body_hash`: the base64-encoded SHA-1 of the body.
///
/// ```rust
/// use linkedin_api::auth::oauth::signature::body_hash;
///
/// assert_eq!(body_hash(b""), "2jmj7l5rSw0yVb/vlWAYkK/YBwk=");
/// ```
#[must_use]
pub fn body_hash(body: &[u8]) -> String {
    STANDARD.encode(Sha1::digest(body))
}

/// Generates a fresh random nonce.
#[must_use]
pub fn generate_nonce() -> String {
    let bytes: [u8; 16] = rand::random();
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Returns the current Unix time in seconds, as sent in `oauth_timestamp`.
#[must_use]
pub fn timestamp() -> String {
    chrono::Utc::now().timestamp().to_string()
}

/// The protocol parameters of a signed request, `oauth_signature` included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OAuthParameters(Vec<(String, String)>);

impl OAuthParameters {
    /// Returns the value of a protocol parameter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the parameters as raw pairs, in signing order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// Returns the `oauth_signature` value.
    #[must_use]
    pub fn signature(&self) -> &str {
        self.get("oauth_signature").unwrap_or_default()
    }

    /// Renders the `Authorization` header value: `OAuth k="v", ...`.
    #[must_use]
    pub fn to_header(&self) -> String {
        let fields = self
            .0
            .iter()
            .map(|(key, value)| format!("{}=\"{}\"", percent_encode(key), percent_encode(value)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("OAuth {fields}")
    }
}

/// Signs requests with the application's consumer credentials.
///
/// # Example
///
/// ```rust
/// use linkedin_api::auth::oauth::signature::OAuthSigner;
/// use linkedin_api::clients::{HttpMethod, HttpRequest};
/// use linkedin_api::{ConsumerKey, ConsumerSecret, OAuthToken};
///
/// let signer = OAuthSigner::new(
///     ConsumerKey::new("key").unwrap(),
///     ConsumerSecret::new("secret").unwrap(),
/// );
/// let request = HttpRequest::builder(HttpMethod::Get, "https://api.linkedin.com/v1/people/~")
///     .token(&OAuthToken::new("token", "token-secret"))
///     .build()
///     .unwrap();
///
/// let params = signer.sign(&request).unwrap();
/// assert_eq!(params.get("oauth_token"), Some("token"));
/// assert_eq!(params.get("oauth_signature_method"), Some("HMAC-SHA1"));
/// ```
#[derive(Clone, Debug)]
pub struct OAuthSigner {
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
}

impl OAuthSigner {
    /// Creates a signer for the given consumer credentials.
    #[must_use]
    pub const fn new(consumer_key: ConsumerKey, consumer_secret: ConsumerSecret) -> Self {
        Self {
            consumer_key,
            consumer_secret,
        }
    }

    /// Creates a signer from the credentials held by `config`.
    #[must_use]
    pub fn from_config(config: &LinkedInConfig) -> Self {
        Self::new(
            config.consumer_key().clone(),
            config.consumer_secret().clone(),
        )
    }

    /// Signs `request` with a fresh nonce and the current time.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the request URL is not absolute.
    pub fn sign(&self, request: &HttpRequest) -> Result<OAuthParameters, url::ParseError> {
        self.sign_with(request, &generate_nonce(), &timestamp())
    }

    /// Signs `request` with a caller-chosen nonce and timestamp.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the request URL is not absolute.
    pub fn sign_with(
        &self,
        request: &HttpRequest,
        nonce: &str,
        timestamp: &str,
    ) -> Result<OAuthParameters, url::ParseError> {
        let parsed = Url::parse(&request.url)?;
        let normalized = normalize_url(&request.url)?;

        let mut oauth: Vec<(String, String)> = vec![
            ("oauth_consumer_key".into(), self.consumer_key.as_ref().into()),
            ("oauth_nonce".into(), nonce.into()),
            ("oauth_signature_method".into(), SIGNATURE_METHOD.into()),
            ("oauth_timestamp".into(), timestamp.into()),
            ("oauth_version".into(), OAUTH_VERSION.into()),
            (
                "oauth_body_hash".into(),
                body_hash(request.body.as_deref().unwrap_or_default().as_bytes()),
            ),
        ];
        if let Some(token) = &request.token {
            oauth.push(("oauth_token".into(), token.token.clone()));
        }
        oauth.extend(request.oauth_params.iter().cloned());

        let mut params: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        params.extend(request.query.iter().cloned());
        params.extend(oauth.iter().cloned());

        let base_string =
            signature_base_string(request.http_method.as_str(), &normalized, &params);
        let key = signing_key(
            self.consumer_secret.as_ref(),
            request.token.as_ref().map(|token| token.secret.as_str()),
        );

        oauth.push(("oauth_signature".into(), compute_signature(&base_string, &key)));
        Ok(OAuthParameters(oauth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::OAuthToken;
    use crate::clients::{DataType, HttpMethod};

    // Published OAuth 1.0a example request for the Twitter status update endpoint.
    const CONSUMER_SECRET: &str = "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw";
    const TOKEN_SECRET: &str = "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE";
    const EXPECTED_BASE_STRING: &str = "POST&https%3A%2F%2Fapi.twitter.com%2F1.1%2Fstatuses%2Fupdate.json&include_entities%3Dtrue%26oauth_consumer_key%3Dxvz1evFS4wEEPTGEFPHBog%26oauth_nonce%3DkYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1318622958%26oauth_token%3D370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb%26oauth_version%3D1.0%26status%3DHello%2520Ladies%2520%252B%2520Gentlemen%252C%2520a%2520signed%2520OAuth%2520request%2521";

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    fn reference_params() -> Vec<(String, String)> {
        vec![
            pair("status", "Hello Ladies + Gentlemen, a signed OAuth request!"),
            pair("include_entities", "true"),
            pair("oauth_consumer_key", "xvz1evFS4wEEPTGEFPHBog"),
            pair("oauth_nonce", "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg"),
            pair("oauth_signature_method", "HMAC-SHA1"),
            pair("oauth_timestamp", "1318622958"),
            pair("oauth_token", "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb"),
            pair("oauth_version", "1.0"),
        ]
    }

    fn signer() -> OAuthSigner {
        OAuthSigner::new(
            ConsumerKey::new("consumer-key").unwrap(),
            ConsumerSecret::new("consumer-secret").unwrap(),
        )
    }

    #[test]
    fn test_base_string_matches_reference_vector() {
        let base = signature_base_string(
            "post",
            "https://api.twitter.com/1.1/statuses/update.json",
            &reference_params(),
        );
        assert_eq!(base, EXPECTED_BASE_STRING);
    }

    #[test]
    fn test_signature_matches_reference_vector() {
        let key = signing_key(CONSUMER_SECRET, Some(TOKEN_SECRET));
        assert_eq!(
            compute_signature(EXPECTED_BASE_STRING, &key),
            "hCtSmYh+iHYCEqBWrE7C7hYmtUk="
        );
    }

    #[test]
    fn test_compute_signature_known_hmac_sha1() {
        assert_eq!(
            compute_signature("The quick brown fox jumps over the lazy dog", "key"),
            "3nybhbi3iqa8ino29wqQcBydtNk="
        );
    }

    #[test]
    fn test_signing_key_without_token_ends_with_ampersand() {
        assert_eq!(signing_key("secret", None), "secret&");
        assert_eq!(signing_key("a b", Some("c&d")), "a%20b&c%26d");
    }

    #[test]
    fn test_percent_encode_reserved_characters() {
        assert_eq!(percent_encode("a b"), "a%20b");
        assert_eq!(percent_encode("a+b"), "a%2Bb");
        assert_eq!(percent_encode("r_basicprofile rw_nus"), "r_basicprofile%20rw_nus");
        assert_eq!(percent_encode("~(first-name)"), "~%28first-name%29");
    }

    #[test]
    fn test_normalize_url_drops_default_port_and_query() {
        assert_eq!(
            normalize_url("HTTPS://API.LinkedIn.com:443/v1/people/~?format=json").unwrap(),
            "https://api.linkedin.com/v1/people/~"
        );
        assert_eq!(
            normalize_url("http://127.0.0.1:8080/uas/oauth/requestToken").unwrap(),
            "http://127.0.0.1:8080/uas/oauth/requestToken"
        );
        assert!(normalize_url("/v1/people/~").is_err());
    }

    #[test]
    fn test_body_hash_of_xml_body() {
        assert_eq!(body_hash(b""), "2jmj7l5rSw0yVb/vlWAYkK/YBwk=");
        assert_eq!(
            body_hash(
                br#"<?xml version="1.0" encoding="UTF-8"?><current-status>Hi</current-status>"#
            ),
            "CGIUo/zSoq7oDivbasL81c1LpGw="
        );
    }

    #[test]
    fn test_nonces_are_unique() {
        let first = generate_nonce();
        let second = generate_nonce();
        assert_ne!(first, second);
        assert!(first
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_sign_with_is_deterministic_and_verifiable() {
        let token = OAuthToken::new("member-token", "member-secret");
        let request = HttpRequest::builder(HttpMethod::Get, "https://api.linkedin.com/v1/people/~")
            .query_param("format", "json")
            .token(&token)
            .build()
            .unwrap();

        let params = signer().sign_with(&request, "nonce", "1700000000").unwrap();
        let again = signer().sign_with(&request, "nonce", "1700000000").unwrap();
        assert_eq!(params, again);

        let mut signed: Vec<(String, String)> = vec![pair("format", "json")];
        signed.extend(
            params
                .pairs()
                .iter()
                .filter(|(key, _)| key != "oauth_signature")
                .cloned(),
        );
        let base = signature_base_string("GET", "https://api.linkedin.com/v1/people/~", &signed);
        let expected = compute_signature(&base, "consumer-secret&member-secret");
        assert_eq!(params.signature(), expected);
    }

    #[test]
    fn test_sign_includes_protocol_parameters() {
        let request = HttpRequest::builder(
            HttpMethod::Put,
            "https://api.linkedin.com/v1/people/~/current-status",
        )
        .body(r#"<?xml version="1.0" encoding="UTF-8"?><current-status>Hi</current-status>"#)
        .body_type(DataType::Xml)
        .token(&OAuthToken::new("t", "s"))
        .build()
        .unwrap();

        let params = signer().sign_with(&request, "abc", "1").unwrap();

        assert_eq!(params.get("oauth_consumer_key"), Some("consumer-key"));
        assert_eq!(params.get("oauth_nonce"), Some("abc"));
        assert_eq!(params.get("oauth_timestamp"), Some("1"));
        assert_eq!(params.get("oauth_version"), Some("1.0"));
        assert_eq!(params.get("oauth_token"), Some("t"));
        assert_eq!(params.get("oauth_body_hash"), Some("CGIUo/zSoq7oDivbasL81c1LpGw="));
        assert!(!params.signature().is_empty());
    }

    #[test]
    fn test_token_less_request_has_no_oauth_token() {
        let request = HttpRequest::builder(
            HttpMethod::Post,
            "https://api.linkedin.com/uas/oauth/requestToken",
        )
        .oauth_param("oauth_callback", "https://example.com/cb")
        .build()
        .unwrap();

        let params = signer().sign(&request).unwrap();
        assert!(params.get("oauth_token").is_none());
        assert_eq!(params.get("oauth_callback"), Some("https://example.com/cb"));
    }

    #[test]
    fn test_authorization_header_format() {
        let params = OAuthParameters(vec![
            pair("oauth_consumer_key", "key"),
            pair("oauth_signature", "a+b/c="),
        ]);
        assert_eq!(
            params.to_header(),
            r#"OAuth oauth_consumer_key="key", oauth_signature="a%2Bb%2Fc%3D""#
        );
    }

    #[test]
    fn test_changing_token_secret_changes_signature() {
        let build = |secret: &str| {
            HttpRequest::builder(HttpMethod::Get, "https://api.linkedin.com/v1/people/~")
                .token(&OAuthToken::new("t", secret))
                .build()
                .unwrap()
        };
        let first = signer().sign_with(&build("one"), "n", "1").unwrap();
        let second = signer().sign_with(&build("two"), "n", "1").unwrap();
        assert_ne!(first.signature(), second.signature());
    }
}
