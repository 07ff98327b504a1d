//! Wall-clock timestamps for log line prefixes.
//!
//! Timestamps are taken when a line is formatted, not when its statement was
//! created, so a statement that lives for a while still reports the moment it
//! was actually emitted.

use chrono::{DateTime, Local, TimeZone};

/// Layout of the timestamp prefix: `YYYY-MM-DD HH:MM:SS`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders the current local time as `YYYY-MM-DD HH:MM:SS`.
pub fn now() -> String {
    format_time(&Local::now())
}

/// Renders any zoned time in the prefix layout.
///
/// # Examples
///
/// ```
/// # use slog::timestamp::format_time;
/// use chrono::{TimeZone, Utc};
/// let t = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap();
/// assert_eq!(format_time(&t), "2024-03-07 09:05:01");
/// ```
pub fn format_time<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    time.format(TIMESTAMP_FORMAT).to_string()
}
