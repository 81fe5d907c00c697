//! Timestamp conversion functions

use chrono::{DateTime, FixedOffset, Utc};

use crate::error::ConversionError;

/// Convert an RFC 3339 string to a timestamp, keeping its offset
pub fn string_to_datetime(value: &str) -> Result<DateTime<FixedOffset>, ConversionError> {
    DateTime::parse_from_rfc3339(value).map_err(|source| ConversionError::InvalidTimestamp {
        value: value.to_string(),
        source,
    })
}

/// Convert an RFC 3339 string to a UTC timestamp
pub fn string_to_utc_datetime(value: &str) -> Result<DateTime<Utc>, ConversionError> {
    string_to_datetime(value).map(|timestamp| timestamp.with_timezone(&Utc))
}
