//! Date/time constants, elapsed-time and formatting helpers.
//!
//! Formatting functions accept any `chrono` value that exposes calendar
//! fields: `NaiveDateTime`, `DateTime<Utc>`, `DateTime<Local>`, ...

use chrono::{DateTime, Datelike, TimeZone, Timelike};

// Units of time
pub const HOURS_PER_DAY: i64 = 24;
pub const MINS_PER_HOUR: i64 = 60;
pub const SECS_PER_MIN: i64 = 60;
pub const MSECS_PER_SEC: i64 = 1000;
pub const MINS_PER_DAY: i64 = HOURS_PER_DAY * MINS_PER_HOUR;
pub const SECS_PER_DAY: i64 = MINS_PER_DAY * SECS_PER_MIN;
pub const MSECS_PER_DAY: i64 = SECS_PER_DAY * MSECS_PER_SEC;

/// Days between 0001-01-01 and 1899-12-31.
pub const DATE_DELTA: i64 = 693_594;

/// Days between the OLE date basis (1899-12-30) and the Unix epoch.
pub const UNIX_DATE_DELTA: i64 = 25_569;

/// Whole milliseconds from `then` to `now` (negative if `then` is later),
/// truncated toward zero.
pub fn milliseconds_between<Tz1: TimeZone, Tz2: TimeZone>(
    now: &DateTime<Tz1>,
    then: &DateTime<Tz2>,
) -> i64 {
    (now.naive_utc() - then.naive_utc()).num_milliseconds()
}

/// Whole seconds from `then` to `now`, truncated toward zero.
pub fn seconds_between<Tz1: TimeZone, Tz2: TimeZone>(
    now: &DateTime<Tz1>,
    then: &DateTime<Tz2>,
) -> i64 {
    milliseconds_between(now, then) / MSECS_PER_SEC
}

/// Formats as `YYYY-MM-DD hh:mm:ss`.
///
/// ```rust
/// use chrono::NaiveDate;
/// use rtl_core::time::datetime_to_str;
///
/// let dt = NaiveDate::from_ymd_opt(2017, 3, 5).unwrap().and_hms_opt(8, 4, 9).unwrap();
/// assert_eq!(datetime_to_str(&dt), "2017-03-05 08:04:09");
/// ```
pub fn datetime_to_str<T: Datelike + Timelike>(dt: &T) -> String {
    format!("{} {}", date_to_str(dt), time_to_str(dt))
}

/// Formats as `YYYY-MM-DD` (the year is not zero-padded).
pub fn date_to_str<T: Datelike>(dt: &T) -> String {
    format!("{}-{:02}-{:02}", dt.year(), dt.month(), dt.day())
}

/// Formats as `hh:mm:ss` (24-hour clock).
pub fn time_to_str<T: Timelike>(dt: &T) -> String {
    format!("{:02}:{:02}:{:02}", dt.hour(), dt.minute(), dt.second())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};

    #[test]
    fn test_unit_constants() {
        assert_eq!(MINS_PER_DAY, 1440);
        assert_eq!(SECS_PER_DAY, 86_400);
        assert_eq!(MSECS_PER_DAY, 86_400_000);
    }

    #[test]
    fn test_formatting_pads_fields() {
        // Arrange
        let dt = Utc.with_ymd_and_hms(2009, 1, 2, 3, 4, 5).unwrap();

        // Act / Assert
        assert_eq!(datetime_to_str(&dt), "2009-01-02 03:04:05");
        assert_eq!(date_to_str(&dt), "2009-01-02");
        assert_eq!(time_to_str(&dt), "03:04:05");
    }

    #[test]
    fn test_formatting_uses_local_fields_of_offset_datetime() {
        let offset = FixedOffset::east_opt(8 * 3600).unwrap();
        let dt = offset.with_ymd_and_hms(2017, 12, 31, 23, 59, 59).unwrap();

        assert_eq!(datetime_to_str(&dt), "2017-12-31 23:59:59");
    }

    #[test]
    fn test_formatting_naive_date() {
        let date = NaiveDate::from_ymd_opt(1999, 7, 4).unwrap();

        assert_eq!(date_to_str(&date), "1999-07-04");
    }

    #[test]
    fn test_elapsed_time_truncates_toward_zero() {
        // Arrange
        let then = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let now = then + chrono::Duration::milliseconds(2_999);

        // Act / Assert
        assert_eq!(milliseconds_between(&now, &then), 2_999);
        assert_eq!(seconds_between(&now, &then), 2);
        assert_eq!(milliseconds_between(&then, &now), -2_999);
        assert_eq!(seconds_between(&then, &now), -2);
    }

    #[test]
    fn test_elapsed_time_across_time_zones() {
        let utc = Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2020, 1, 1, 21, 0, 10)
            .unwrap();

        assert_eq!(seconds_between(&tokyo, &utc), 10);
    }
}
