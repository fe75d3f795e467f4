//! Cutoff instant resolution.
//!
//! Repositories created strictly before the cutoff are never watched.

mod error;

pub use error::CutoffError;

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};

/// Look-back window used when neither a date nor a day count is given.
pub const DEFAULT_DAYS: u32 = 30;

/// Parses an explicit cutoff.
///
/// Accepts RFC 3339 timestamps (any offset, normalised to UTC) and plain
/// `YYYY-MM-DD` dates, which mean midnight UTC.
///
/// # Errors
///
/// Returns [`CutoffError::InvalidTimestamp`] for any other input.
pub fn parse_since(value: &str) -> Result<DateTime<Utc>, CutoffError> {
    let trimmed = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight))
        .ok_or_else(|| CutoffError::InvalidTimestamp {
            value: value.to_string(),
        })
}

/// Returns the instant `days` days before `now`.
///
/// # Errors
///
/// Returns [`CutoffError::OutOfRange`] if the result cannot be represented.
pub fn cutoff_from_days(days: u32, now: DateTime<Utc>) -> Result<DateTime<Utc>, CutoffError> {
    TimeDelta::try_days(i64::from(days))
        .and_then(|delta| now.checked_sub_signed(delta))
        .ok_or(CutoffError::OutOfRange { days })
}

/// Resolves the cutoff from an explicit `since` value or a day count.
///
/// `since` takes precedence. Without either, [`DEFAULT_DAYS`] is used.
///
/// # Errors
///
/// Returns [`CutoffError`] if `since` is malformed or `days` is out of range.
pub fn resolve_cutoff(
    since: Option<&str>,
    days: Option<u32>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, CutoffError> {
    match since {
        Some(since) => parse_since(since),
        None => cutoff_from_days(days.unwrap_or(DEFAULT_DAYS), now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let cutoff = parse_since("2024-01-31T14:00:00+02:00").unwrap();
        assert_eq!(cutoff, Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap());
    }

    #[test]
    fn parses_plain_date_as_midnight_utc() {
        let cutoff = parse_since("2024-01-31").unwrap();
        assert_eq!(cutoff, Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_since("last tuesday"),
            Err(CutoffError::InvalidTimestamp {
                value: "last tuesday".to_string()
            })
        );
    }

    #[test]
    fn days_count_back_from_now() {
        let cutoff = cutoff_from_days(15, now()).unwrap();
        assert_eq!(cutoff, Utc.with_ymd_and_hms(2024, 5, 31, 12, 0, 0).unwrap());
    }

    #[test]
    fn since_wins_over_days() {
        let cutoff = resolve_cutoff(Some("2020-01-01"), Some(1), now()).unwrap();
        assert_eq!(cutoff, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn defaults_to_thirty_days() {
        let cutoff = resolve_cutoff(None, None, now()).unwrap();
        assert_eq!(cutoff, Utc.with_ymd_and_hms(2024, 5, 16, 12, 0, 0).unwrap());
    }
}
