//! Wall-clock time helpers.
//!
//! Schedules store times as `"HH:MM"` strings (24-hour, minute granularity).
//! The planner works in minutes since midnight; this module converts between
//! the two and computes durations that may wrap past midnight.

use chrono::{NaiveTime, Timelike};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse `"HH:MM"` into minutes since midnight.
///
/// `"24:00"` is accepted as the end of the day (1440) so that an activity
/// running until midnight can be written without wrapping.
pub fn parse_minutes(value: &str) -> Option<u32> {
    let value = value.trim();
    if value == "24:00" {
        return Some(MINUTES_PER_DAY);
    }
    let time = NaiveTime::parse_from_str(value, "%H:%M").ok()?;
    Some(time.hour() * 60 + time.minute())
}

/// Convert `"HH:MM"` into minutes since midnight, coercing malformed input to 0.
///
/// This is a lossy fallback: a bad time string is treated as midnight so the
/// rest of the pipeline keeps going. Use [`parse_minutes`] when the caller
/// needs to tell the difference.
pub fn to_minutes(value: &str) -> u32 {
    match parse_minutes(value) {
        Some(minutes) => minutes,
        None => {
            tracing::warn!(value, "malformed time string, treating as 00:00");
            0
        }
    }
}

/// Format minutes since midnight as `"HH:MM"`.
///
/// Values past the end of the day wrap; exactly 1440 renders as `"24:00"`.
pub fn format_minutes(minutes: u32) -> String {
    if minutes == MINUTES_PER_DAY {
        return "24:00".to_string();
    }
    let minutes = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Length in minutes of the span `start..end`, wrapping past midnight when
/// `end <= start`.
///
/// Returns `None` for boundaries outside a single day.
pub fn span_minutes(start: u32, end: u32) -> Option<u32> {
    if start > MINUTES_PER_DAY || end > MINUTES_PER_DAY {
        return None;
    }
    if end <= start {
        Some(end + MINUTES_PER_DAY - start)
    } else {
        Some(end - start)
    }
}

/// Duration between two `"HH:MM"` strings, wrapping past midnight.
///
/// Malformed strings are coerced to 00:00 as in [`to_minutes`].
pub fn duration_minutes(start: &str, end: &str) -> Option<u32> {
    span_minutes(to_minutes(start), to_minutes(end))
}
