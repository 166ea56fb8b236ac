//! Query parameters for the network updates stream.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::api::ValidationError;

/// The ten update type codes LinkedIn accepts in the `type` parameter.
pub const VALID_NETWORK_UPDATE_CODES: [&str; 10] = [
    "ANSW", "APPS", "CONN", "JOBS", "JGRP", "PICT", "RECU", "PRFU", "QSTN", "STAT",
];

/// A kind of network update.
///
/// # Example
///
/// ```rust
/// use linkedin_api::NetworkUpdateType;
///
/// let update: NetworkUpdateType = "STAT".parse().unwrap();
/// assert_eq!(update, NetworkUpdateType::Status);
/// assert!("XXXX".parse::<NetworkUpdateType>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NetworkUpdateType {
    /// `ANSW`: answers to questions.
    Answers,
    /// `APPS`: application updates.
    Applications,
    /// `CONN`: new connections.
    Connections,
    /// `JOBS`: job postings.
    Jobs,
    /// `JGRP`: groups joined.
    JoinedGroups,
    /// `PICT`: profile picture changes.
    PictureChanges,
    /// `RECU`: recommendations.
    Recommendations,
    /// `PRFU`: profile changes.
    ProfileUpdates,
    /// `QSTN`: questions asked.
    Questions,
    /// `STAT`: status updates.
    Status,
}

impl NetworkUpdateType {
    /// Every update type, in the order of [`VALID_NETWORK_UPDATE_CODES`].
    pub const ALL: [Self; 10] = [
        Self::Answers,
        Self::Applications,
        Self::Connections,
        Self::Jobs,
        Self::JoinedGroups,
        Self::PictureChanges,
        Self::Recommendations,
        Self::ProfileUpdates,
        Self::Questions,
        Self::Status,
    ];

    /// Returns the four-letter code sent to LinkedIn.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Answers => "ANSW",
            Self::Applications => "APPS",
            Self::Connections => "CONN",
            Self::Jobs => "JOBS",
            Self::JoinedGroups => "JGRP",
            Self::PictureChanges => "PICT",
            Self::Recommendations => "RECU",
            Self::ProfileUpdates => "PRFU",
            Self::Questions => "QSTN",
            Self::Status => "STAT",
        }
    }
}

impl fmt::Display for NetworkUpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkUpdateType {
    type Err = ValidationError;

    /// Codes are matched exactly; `stat` is not `STAT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|update| update.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidNetworkUpdateCode {
                code: s.to_string(),
            })
    }
}

/// A `before` or `after` bound on the updates stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimeBound {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// A value passed through as is.
    Text(String),
    /// A point in time, sent as milliseconds since the Unix epoch.
    DateTime(DateTime<Utc>),
}

impl TimeBound {
    /// Renders the bound as a query value.
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use linkedin_api::TimeBound;
    ///
    /// let moment = Utc.with_ymd_and_hms(2012, 8, 29, 19, 40, 48).unwrap();
    /// assert_eq!(TimeBound::from(moment).to_query_value(), "1346269248000");
    /// assert_eq!(TimeBound::from(1346269248747_i64).to_query_value(), "1346269248747");
    /// ```
    #[must_use]
    pub fn to_query_value(&self) -> String {
        match self {
            Self::Millis(millis) => millis.to_string(),
            Self::Text(text) => text.clone(),
            Self::DateTime(moment) => moment.timestamp_millis().to_string(),
        }
    }
}

impl From<i64> for TimeBound {
    fn from(millis: i64) -> Self {
        Self::Millis(millis)
    }
}

impl From<String> for TimeBound {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for TimeBound {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimeBound {
    fn from(moment: DateTime<Tz>) -> Self {
        Self::DateTime(moment.with_timezone(&Utc))
    }
}

/// Naive date-times are taken to be UTC.
impl From<NaiveDateTime> for TimeBound {
    fn from(moment: NaiveDateTime) -> Self {
        Self::DateTime(Utc.from_utc_datetime(&moment))
    }
}

/// Parameters of [`LinkedInClient::get_network_updates`](crate::LinkedInClient::get_network_updates).
///
/// # Example
///
/// ```rust
/// use linkedin_api::{NetworkUpdateType, NetworkUpdatesQuery};
///
/// let query = NetworkUpdatesQuery::new()
///     .update_type(NetworkUpdateType::Status)
///     .update_type(NetworkUpdateType::Connections)
///     .count(10)
///     .after(1346269248747_i64);
///
/// let codes_query = NetworkUpdatesQuery::from_codes(["STAT", "CONN"]).unwrap();
/// assert_eq!(codes_query.types(), query.types());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NetworkUpdatesQuery {
    types: Vec<NetworkUpdateType>,
    count: Option<u32>,
    start: Option<u32>,
    before: Option<TimeBound>,
    after: Option<TimeBound>,
    extra: Vec<(String, String)>,
}

impl NetworkUpdatesQuery {
    /// Creates a query with no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query filtered to the given type codes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidNetworkUpdateCode`] for the first
    /// code outside [`VALID_NETWORK_UPDATE_CODES`].
    pub fn from_codes<I, S>(codes: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let types = codes
            .into_iter()
            .map(|code| code.as_ref().parse())
            .collect::<Result<Vec<NetworkUpdateType>, _>>()?;
        Ok(Self {
            types,
            ..Self::default()
        })
    }

    /// Adds an update type filter.
    #[must_use]
    pub fn update_type(mut self, update: NetworkUpdateType) -> Self {
        self.types.push(update);
        self
    }

    /// Sets the number of updates to return.
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the offset of the first update to return.
    #[must_use]
    pub const fn start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    /// Only return updates older than `bound`.
    #[must_use]
    pub fn before(mut self, bound: impl Into<TimeBound>) -> Self {
        self.before = Some(bound.into());
        self
    }

    /// Only return updates newer than `bound`.
    #[must_use]
    pub fn after(mut self, bound: impl Into<TimeBound>) -> Self {
        self.after = Some(bound.into());
        self
    }

    /// Adds a query parameter with no dedicated setter, such as `scope=self`.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Returns the update type filters.
    #[must_use]
    pub fn types(&self) -> &[NetworkUpdateType] {
        &self.types
    }

    /// Renders the query pairs; each type becomes its own `type` pair.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query: Vec<(String, String)> = self
            .types
            .iter()
            .map(|update| ("type".to_string(), update.as_str().to_string()))
            .collect();
        if let Some(count) = self.count {
            query.push(("count".to_string(), count.to_string()));
        }
        if let Some(start) = self.start {
            query.push(("start".to_string(), start.to_string()));
        }
        if let Some(before) = &self.before {
            query.push(("before".to_string(), before.to_query_value()));
        }
        if let Some(after) = &self.after {
            query.push(("after".to_string(), after.to_query_value()));
        }
        query.extend(self.extra.iter().cloned());
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_every_valid_code_parses() {
        for code in VALID_NETWORK_UPDATE_CODES {
            let update: NetworkUpdateType = code.parse().unwrap();
            assert_eq!(update.as_str(), code);
        }
    }

    #[test]
    fn test_invalid_codes_are_rejected() {
        for code in ["", "stat", "STATUS", "XXXX", " CONN"] {
            assert_eq!(
                code.parse::<NetworkUpdateType>(),
                Err(ValidationError::InvalidNetworkUpdateCode {
                    code: code.to_string()
                })
            );
        }
    }

    #[test]
    fn test_from_codes_stops_at_first_invalid_code() {
        let error = NetworkUpdatesQuery::from_codes(["STAT", "BOGUS", "ALSO"]).unwrap_err();
        assert_eq!(
            error,
            ValidationError::InvalidNetworkUpdateCode {
                code: "BOGUS".to_string()
            }
        );
    }

    #[test]
    fn test_to_query_repeats_type() {
        let query = NetworkUpdatesQuery::from_codes(["CONN", "STAT"])
            .unwrap()
            .count(5)
            .start(10)
            .to_query();

        assert_eq!(
            query,
            vec![
                pair("type", "CONN"),
                pair("type", "STAT"),
                pair("count", "5"),
                pair("start", "10"),
            ]
        );
    }

    #[test]
    fn test_time_bounds_render_as_millis_or_text() {
        let moment = Utc.with_ymd_and_hms(2012, 8, 29, 19, 40, 48).unwrap();
        let query = NetworkUpdatesQuery::new()
            .before(moment)
            .after("1346000000000")
            .query_param("scope", "self")
            .to_query();

        assert_eq!(
            query,
            vec![
                pair("before", "1346269248000"),
                pair("after", "1346000000000"),
                pair("scope", "self"),
            ]
        );
    }

    #[test]
    fn test_offset_and_naive_date_times_convert_to_utc_millis() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2012, 8, 29, 21, 40, 48).unwrap();
        assert_eq!(TimeBound::from(local).to_query_value(), "1346269248000");

        let naive = Utc
            .with_ymd_and_hms(2012, 8, 29, 19, 40, 48)
            .unwrap()
            .naive_utc();
        assert_eq!(TimeBound::from(naive).to_query_value(), "1346269248000");
    }

    #[test]
    fn test_empty_query_has_no_pairs() {
        assert!(NetworkUpdatesQuery::new().to_query().is_empty());
    }
}
