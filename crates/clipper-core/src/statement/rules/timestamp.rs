//! Timestamp and date recognition for statement values.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Captures;

use super::patterns::{BARE_DATE, TIMESTAMP};

/// chrono format that renders a timestamp back in the statement's layout.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M %p";

/// Parse a row timestamp such as `01/02/2020 08:15 AM`.
///
/// The hour may be 0-23. `PM` moves hours below 12 into the afternoon and
/// `AM` maps 12 to midnight; any other hour is kept as written, so
/// `13:05 PM` is 13:05.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let caps = TIMESTAMP.captures(value)?;

    let date = date_from_captures(&caps)?;
    let mut hour: u32 = caps[4].parse().ok()?;
    let minute: u32 = caps[5].parse().ok()?;
    if hour > 23 {
        return None;
    }

    match &caps[6] {
        "PM" if hour < 12 => hour += 12,
        "AM" if hour == 12 => hour = 0,
        _ => {}
    }

    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(date.and_time(time))
}

/// Whether `value` is a complete row timestamp.
pub fn is_timestamp(value: &str) -> bool {
    parse_timestamp(value).is_some()
}

/// Whether `value` is a calendar date with no time, e.g. `01/31/2020`.
pub fn is_bare_date(value: &str) -> bool {
    BARE_DATE
        .captures(value)
        .and_then(|caps| date_from_captures(&caps))
        .is_some()
}

/// Render a timestamp in the statement's own layout.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

// Groups 1-3 are month, day and year in both patterns.
fn date_from_captures(caps: &Captures<'_>) -> Option<NaiveDate> {
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
