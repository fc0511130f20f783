//! Codec for the .NET JSON date format used by the Xero API.
//!
//! Xero encodes timestamps as strings like `"\/Date(1724536800000)\/"`:
//! milliseconds since the Unix epoch wrapped in a literal marker.
//! See <https://developer.xero.com/documentation/api/accounting/requests-and-responses#json-responses-and-date-formats>

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Matches the .NET date marker anywhere in a string, tolerant of the
/// `\/` escape artifacts Xero wraps it in.
static XERO_DATE_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Date\((?P<value>\d+)\)").unwrap());

/// Errors from decoding a .NET timestamp string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("could not parse .NET timestamp")]
    InvalidTimestamp,

    #[error("invalid zero timestamp")]
    ZeroTimestamp,
}

/// Timestamp decoded from Xero's .NET date encoding.
///
/// Serializes as RFC 3339. Sub-second precision is discarded on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DateTimeField(pub DateTime<Utc>);

impl DateTimeField {
    /// Decode a raw timestamp string.
    ///
    /// An empty or non-matching input yields `Ok(None)`: Xero omits the
    /// marker for reports that were never updated. A marker carrying a
    /// non-positive value is an error, not an absent value.
    pub fn parse(raw: &str) -> Result<Option<Self>, DateError> {
        let Some(caps) = XERO_DATE_FORMAT.captures(raw) else {
            return Ok(None);
        };

        let millis: i64 = caps["value"]
            .parse()
            .map_err(|_| DateError::InvalidTimestamp)?;

        if millis <= 0 {
            return Err(DateError::ZeroTimestamp);
        }

        // Whole seconds only.
        let ts = DateTime::from_timestamp(millis / 1000, 0).ok_or(DateError::InvalidTimestamp)?;

        Ok(Some(Self(ts)))
    }
}

/// Field-level serde adapter for optional .NET timestamps.
///
/// A codec failure fails the surrounding document decode; an absent, null,
/// or non-matching value decodes to `None`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTimeField>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => DateTimeField::parse(&raw).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_absent() {
        assert_eq!(DateTimeField::parse("").unwrap(), None);
    }

    #[test]
    fn non_matching_input_is_absent() {
        assert_eq!(DateTimeField::parse("not a date").unwrap(), None);
    }

    #[test]
    fn decodes_utc_instant() {
        let dt = DateTimeField::parse(r"\/Date(1724536800000)\/")
            .unwrap()
            .unwrap();

        assert_eq!(dt.0.to_rfc3339(), "2024-08-24T22:00:00+00:00");
    }

    #[test]
    fn millis_truncate_to_whole_seconds() {
        let dt = DateTimeField::parse(r"\/Date(1724536800999)\/")
            .unwrap()
            .unwrap();

        assert_eq!(dt.0.timestamp(), 1_724_536_800);
        assert_eq!(dt.0.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn zero_timestamp_is_an_error() {
        assert_eq!(
            DateTimeField::parse(r"\/Date(0)\/"),
            Err(DateError::ZeroTimestamp)
        );
    }

    #[test]
    fn overlong_digits_are_invalid() {
        assert_eq!(
            DateTimeField::parse(r"\/Date(99999999999999999999)\/"),
            Err(DateError::InvalidTimestamp)
        );
    }

    #[test]
    fn marker_without_escapes_still_matches() {
        let dt = DateTimeField::parse("Date(1000)").unwrap();

        assert!(dt.is_some());
    }
}
