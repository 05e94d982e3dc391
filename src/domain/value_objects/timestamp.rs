//! # Timestamp Value Object
//!
//! DateTime wrapper with domain-specific methods.
//!
//! This module provides the [`Timestamp`] type used for valuation dates.
//! Provider pricing dates arrive as RFC 3339 strings and serialize back out
//! the same way.
//!
//! # Examples
//!
//! ```
//! use collateral_valuation::domain::value_objects::timestamp::Timestamp;
//!
//! let now = Timestamp::now();
//! assert!(now.is_within_past_days(30));
//!
//! let old = now.sub_days(45);
//! assert!(!old.is_within_past_days(30));
//! ```

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC timestamp.
///
/// Wraps `chrono::DateTime<Utc>` with the comparisons the valuation domain
/// needs, most importantly the recency window behind
/// [`VehicleValuation::is_recent`](crate::domain::entities::vehicle_valuation::VehicleValuation::is_recent).
///
/// # Invariants
///
/// - Always in UTC timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from Unix milliseconds.
    ///
    /// Returns `None` if the value is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use collateral_valuation::domain::value_objects::timestamp::Timestamp;
    ///
    /// let ts = Timestamp::from_millis(1704067200000).unwrap();
    /// assert_eq!(ts.timestamp_millis(), 1704067200000);
    /// ```
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Creates a timestamp from Unix seconds.
    ///
    /// Returns `None` if the value is out of range.
    #[must_use]
    pub fn from_secs(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }

    /// Parses an RFC 3339 / ISO 8601 date string.
    ///
    /// Provider responses carry pricing dates in this format.
    ///
    /// # Examples
    ///
    /// ```
    /// use collateral_valuation::domain::value_objects::timestamp::Timestamp;
    ///
    /// let ts = Timestamp::parse_rfc3339("2024-01-01T00:00:00Z").unwrap();
    /// assert_eq!(ts.timestamp_secs(), 1704067200);
    ///
    /// assert!(Timestamp::parse_rfc3339("last tuesday").is_none());
    /// ```
    #[must_use]
    pub fn parse_rfc3339(value: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| Self(dt.with_timezone(&Utc)))
    }

    /// Returns the Unix timestamp in milliseconds.
    #[inline]
    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Returns the Unix timestamp in seconds.
    #[inline]
    #[must_use]
    pub fn timestamp_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Adds seconds to the timestamp.
    #[must_use]
    pub fn add_secs(&self, secs: i64) -> Self {
        Self(self.0 + Duration::seconds(secs))
    }

    /// Subtracts whole days from the timestamp.
    #[must_use]
    pub fn sub_days(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    /// Returns true if this timestamp is before another.
    #[inline]
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self.0 < other.0
    }

    /// Returns true if this timestamp is after another.
    #[inline]
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    /// Returns true if this timestamp falls within the past `days` days.
    ///
    /// A timestamp in the future also satisfies the window; only timestamps
    /// strictly older than the cutoff fail it.
    #[must_use]
    pub fn is_within_past_days(&self, days: i64) -> bool {
        self.0 >= Utc::now() - Duration::days(days)
    }

    /// Formats the timestamp as ISO 8601 / RFC 3339.
    ///
    /// # Examples
    ///
    /// ```
    /// use collateral_valuation::domain::value_objects::timestamp::Timestamp;
    ///
    /// let ts = Timestamp::from_secs(1704067200).unwrap();
    /// assert!(ts.to_iso8601().starts_with("2024-01-01"));
    /// ```
    #[must_use]
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339()
    }

    /// Returns the underlying DateTime.
    #[inline]
    #[must_use]
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}
