//! Time related utils.
//!
//! Everything here formats and parses in UTC through explicit functions.
//! The process-wide timezone is never consulted or modified.

use chrono::NaiveDateTime;
use chrono::Utc;

use crate::{Error, Result};

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// The timestamp pattern carried by every signed request: `2024-01-01T00:00:00Z`.
const REQUEST_TIMESTAMP: &str = "%Y-%m-%dT%H:%M:%SZ";

/// The datetime pattern used in service responses: `2024-01-01T00:00:00.000000`.
const RESPONSE_DATETIME: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Take the current time in UTC.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a time into the request `Timestamp` pattern.
pub fn format_request_timestamp(t: DateTime) -> String {
    t.format(REQUEST_TIMESTAMP).to_string()
}

/// Parse a datetime field out of a service response.
///
/// Response datetimes carry no zone designator and are understood as UTC.
pub fn parse_response_datetime(s: &str) -> Result<DateTime> {
    let t = NaiveDateTime::parse_from_str(s, RESPONSE_DATETIME)
        .map_err(|e| Error::response_invalid(format!("invalid datetime {s:?}")).with_source(e))?;
    Ok(t.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_request_timestamp() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_request_timestamp(t), "2024-01-01T00:00:00Z");

        let t = Utc.with_ymd_and_hms(2016, 3, 1, 23, 59, 59).unwrap();
        assert_eq!(format_request_timestamp(t), "2016-03-01T23:59:59Z");
    }

    #[test]
    fn test_parse_response_datetime() {
        let t = parse_response_datetime("2024-05-17T09:30:00.123456").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap() + chrono::Duration::microseconds(123456));
    }

    #[test]
    fn test_parse_response_datetime_rejects_garbage() {
        assert!(parse_response_datetime("yesterday").is_err());
        assert!(parse_response_datetime("").is_err());
    }
}
