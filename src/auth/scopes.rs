//! Member permission scopes requested with a request token.

use crate::api::ValidationError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A LinkedIn member permission.
///
/// Scopes only take effect for API keys registered for the newer
/// permissions dialog; older keys ignore them.
///
/// # Example
///
/// ```rust
/// use linkedin_api::Scope;
///
/// let scope: Scope = "r_emailaddress".parse().unwrap();
/// assert_eq!(scope, Scope::EmailAddress);
/// assert_eq!(Scope::join(&[Scope::BasicProfile, Scope::EmailAddress]), "r_basicprofile r_emailaddress");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    /// `r_basicprofile`
    BasicProfile,
    /// `r_contactinfo`
    ContactInfo,
    /// `r_network`
    Connections,
    /// `r_emailaddress`
    EmailAddress,
    /// `r_fullprofile`
    FullProfile,
    /// `rw_groups`
    Groups,
    /// `w_messages`
    Messages,
    /// `rw_nus`
    NetworkUpdates,
    /// A scope this crate does not know about, sent verbatim.
    Custom(String),
}

impl Scope {
    /// Every scope with a dedicated variant.
    pub const KNOWN: [Self; 8] = [
        Self::BasicProfile,
        Self::ContactInfo,
        Self::Connections,
        Self::EmailAddress,
        Self::FullProfile,
        Self::Groups,
        Self::Messages,
        Self::NetworkUpdates,
    ];

    /// Returns the wire name of the scope.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::BasicProfile => "r_basicprofile",
            Self::ContactInfo => "r_contactinfo",
            Self::Connections => "r_network",
            Self::EmailAddress => "r_emailaddress",
            Self::FullProfile => "r_fullprofile",
            Self::Groups => "rw_groups",
            Self::Messages => "w_messages",
            Self::NetworkUpdates => "rw_nus",
            Self::Custom(name) => name,
        }
    }

    /// Joins scopes with single spaces, in the order given.
    #[must_use]
    pub fn join(scopes: &[Self]) -> String {
        scopes
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = ValidationError;

    /// Parses a wire name. Unknown names that look like scopes
    /// (`r_`, `w_` or `rw_` prefix) become [`Scope::Custom`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(known) = Self::KNOWN.iter().find(|scope| scope.as_str() == s) {
            return Ok(known.clone());
        }

        let looks_like_scope = ["r_", "w_", "rw_"]
            .iter()
            .any(|prefix| s.len() > prefix.len() && s.starts_with(prefix));
        if looks_like_scope && !s.contains(char::is_whitespace) {
            Ok(Self::Custom(s.to_string()))
        } else {
            Err(ValidationError::InvalidScope {
                scope: s.to_string(),
            })
        }
    }
}

impl Serialize for Scope {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Scope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_scopes_round_trip_through_wire_names() {
        for scope in Scope::KNOWN {
            let parsed: Scope = scope.as_str().parse().unwrap();
            assert_eq!(parsed, scope);
        }
    }

    #[test]
    fn test_join_keeps_caller_order() {
        let scopes = [Scope::NetworkUpdates, Scope::BasicProfile, Scope::Messages];
        assert_eq!(Scope::join(&scopes), "rw_nus r_basicprofile w_messages");
        assert_eq!(Scope::join(&[]), "");
    }

    #[test]
    fn test_unknown_scope_with_prefix_is_custom() {
        let scope: Scope = "rw_company_admin".parse().unwrap();
        assert_eq!(scope, Scope::Custom("rw_company_admin".to_string()));
        assert_eq!(scope.to_string(), "rw_company_admin");
    }

    #[test]
    fn test_garbage_scope_is_rejected() {
        assert!(matches!(
            "profile".parse::<Scope>(),
            Err(ValidationError::InvalidScope { scope }) if scope == "profile"
        ));
        assert!("r_".parse::<Scope>().is_err());
        assert!("r_a b".parse::<Scope>().is_err());
    }

    #[test]
    fn test_scope_serializes_as_string() {
        let json = serde_json::to_string(&Scope::EmailAddress).unwrap();
        assert_eq!(json, r#""r_emailaddress""#);
        let scope: Scope = serde_json::from_str(r#""rw_groups""#).unwrap();
        assert_eq!(scope, Scope::Groups);
    }
}
