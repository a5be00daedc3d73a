use chrono::{DateTime, NaiveDate, NaiveDateTime, SubsecRound, Utc};

use crate::error::CoreError;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Current UTC time at the precision PostgreSQL `TIMESTAMPTZ` stores
/// (microseconds), so a value handed to the store compares equal to the
/// value read back.
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}

/// Naive layouts accepted when the caller omits an offset. Interpreted as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an ISO 8601 timestamp as sent in a query string.
///
/// Accepts, in order:
/// - RFC 3339 with an offset or `Z` (`2024-05-01T12:00:00+02:00`)
/// - a naive date-time (`2024-05-01T12:00:00`, optional fraction), taken as UTC
/// - a bare date (`2024-05-01`), taken as midnight UTC
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, CoreError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }

    Err(CoreError::Validation(format!(
        "'{raw}' is not a valid ISO 8601 timestamp"
    )))
}
