//! Slot parsing and formatting -- converts between the `HH:MM` wire format
//! and minutes-since-midnight.
//!
//! The wire format is strict: exactly 5 characters, colon at index 2,
//! hours 00-23, minutes 00-59. Leading zeros are required so that parsing
//! and formatting round-trip byte-for-byte.

use chrono::{NaiveTime, Timelike};

use crate::error::{CalendarError, Result};

/// Parse a strict `HH:MM` time string into minutes since midnight (0-1439).
///
/// The structural checks (length, colon position) enforce the leading-zero
/// requirement; `chrono` then rejects out-of-range or non-numeric fields.
///
/// # Errors
/// Returns `CalendarError::InvalidTime` for anything that is not strict
/// zero-padded `HH:MM`.
pub fn parse_slot(time: &str) -> Result<u16> {
    // Structural strictness first: chrono alone would accept "9:30" or
    // whitespace before a numeric field.
    let b = time.as_bytes();
    let shape_ok = b.len() == 5
        && b[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| b[i].is_ascii_digit());
    if !shape_ok {
        return Err(CalendarError::InvalidTime(time.to_string()));
    }

    let parsed = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| CalendarError::InvalidTime(time.to_string()))?;

    Ok((parsed.hour() * 60 + parsed.minute()) as u16)
}

/// Format minutes since midnight as zero-padded `HH:MM`.
pub fn format_slot(start: u16) -> String {
    format!("{:02}:{:02}", start / 60, start % 60)
}
