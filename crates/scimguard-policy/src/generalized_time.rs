//! Directory generalized-time conversion.
//!
//! Active Directory surfaces creation and modification times in
//! generalized-time form (`20170521103000.0Z`). Profile consumers expect
//! ISO-8601 without an offset.

use chrono::DateTime;
use thiserror::Error;

/// Input: 14-digit date-time, optional fractional seconds, zone designator.
const GENERALIZED_TIME_FORMAT: &str = "%Y%m%d%H%M%S%.f%#z";

/// Output: ISO-8601 date-time without offset.
const PROFILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A claim value did not parse as directory generalized time.
///
/// Recoverable: callers keep the original value and continue with the
/// remaining claims.
#[derive(Debug, Error)]
#[error("invalid generalized time '{value}': {message}")]
pub struct GeneralizedTimeError {
    /// The value that failed to parse.
    pub value: String,
    /// Parser diagnostic.
    pub message: String,
}

/// Convert a generalized-time value to a profile timestamp.
///
/// Wall-clock fields are preserved as written; the zone designator is
/// consumed but not applied.
///
/// # Errors
///
/// Returns [`GeneralizedTimeError`] when the value does not match the
/// generalized-time format.
pub fn to_profile_timestamp(value: &str) -> Result<String, GeneralizedTimeError> {
    let parsed =
        DateTime::parse_from_str(value, GENERALIZED_TIME_FORMAT).map_err(|e| {
            GeneralizedTimeError {
                value: value.to_string(),
                message: e.to_string(),
            }
        })?;
    Ok(parsed
        .naive_local()
        .format(PROFILE_TIMESTAMP_FORMAT)
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_utc_value() {
        assert_eq!(
            to_profile_timestamp("20170521103000.0Z").unwrap(),
            "2017-05-21T10:30:00"
        );
    }

    #[test]
    fn test_preserves_wall_clock_for_offset_value() {
        assert_eq!(
            to_profile_timestamp("20231107081530.0+0530").unwrap(),
            "2023-11-07T08:15:30"
        );
    }

    #[test]
    fn test_fractional_seconds_are_dropped() {
        assert_eq!(
            to_profile_timestamp("19991231235959.9Z").unwrap(),
            "1999-12-31T23:59:59"
        );
    }

    #[test]
    fn test_malformed_value_errors() {
        let err = to_profile_timestamp("not-a-date").unwrap_err();
        assert_eq!(err.value, "not-a-date");
    }

    #[test]
    fn test_empty_value_errors() {
        assert!(to_profile_timestamp("").is_err());
    }
}
