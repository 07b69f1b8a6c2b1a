//! Pure helpers that turn block data into display strings.
//!
//! Nothing here touches state; the view calls these on every render.

use std::fmt::Debug;
use std::fmt::Display;

use api::Quantity;
use chrono::DateTime;
use chrono::Local;
use chrono::TimeZone;
use chrono::Utc;
use serde::Serialize;
use web_time::SystemTime;
use web_time::UNIX_EPOCH;

/// Shown wherever a value is absent.
pub const PLACEHOLDER: &str = "—";

const ELLIPSIS: char = '…';

pub const DEFAULT_LEAD: usize = 10;
pub const DEFAULT_TAIL: usize = 6;
pub const HASH_LEAD: usize = 14;
pub const HASH_TAIL: usize = 10;
pub const ADDRESS_LEAD: usize = 8;
pub const ADDRESS_TAIL: usize = 6;

/// Timestamps above this are taken to be milliseconds already.
const MILLIS_THRESHOLD: u64 = 1_000_000_000_000;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Shortens `value` to its first `lead` and last `tail` characters.
///
/// Strings of at most `lead + tail + 3` characters are returned unchanged.
/// Absent and empty values render as [`PLACEHOLDER`].
pub fn truncate(value: Option<&str>, lead: usize, tail: usize) -> String {
    let Some(s) = value.filter(|s| !s.is_empty()) else {
        return PLACEHOLDER.to_string();
    };

    // Count characters, not bytes.
    let char_count = s.chars().count();
    if char_count <= lead + tail + 3 {
        return s.to_string();
    }

    let first_part: String = s.chars().take(lead).collect();
    let last_part: String = s.chars().skip(char_count - tail).collect();
    format!("{}{}{}", first_part, ELLIPSIS, last_part)
}

pub fn truncate_default(value: Option<&str>) -> String {
    truncate(value, DEFAULT_LEAD, DEFAULT_TAIL)
}

pub fn truncate_hash(value: Option<&str>) -> String {
    truncate(value, HASH_LEAD, HASH_TAIL)
}

pub fn truncate_address(value: Option<&str>) -> String {
    truncate(value, ADDRESS_LEAD, ADDRESS_TAIL)
}

/// Renders any displayable value, or [`PLACEHOLDER`] when absent.
///
/// For a [`Quantity`] this gives decimal for integers of any size and the
/// verbatim text for wrapped hex and unrecognised shapes.
pub fn display_value<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Converts a unix timestamp in seconds or milliseconds to UTC.
pub fn timestamp_utc(ts: &Quantity) -> Option<DateTime<Utc>> {
    let n = match ts {
        Quantity::Fixed(n) => *n,
        Quantity::Hex(s) => Quantity::parse(s).as_u64()?,
        Quantity::Big(_) | Quantity::Raw(_) => return None,
    };
    let millis = if n > MILLIS_THRESHOLD {
        n
    } else {
        n.checked_mul(1000)?
    };
    Utc.timestamp_millis_opt(i64::try_from(millis).ok()?).single()
}

/// Formats a unix timestamp as local date-time.
///
/// Falls back to the raw text when the value is not a usable timestamp.
pub fn format_timestamp(ts: Option<&Quantity>) -> String {
    let Some(ts) = ts else {
        return PLACEHOLDER.to_string();
    };
    match timestamp_utc(ts) {
        Some(utc) => utc.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
        None => ts.to_string(),
    }
}

/// Same as [`format_timestamp`] for a timestamp given as text.
pub fn format_timestamp_str(ts: &str) -> String {
    format_timestamp(Some(&Quantity::parse(ts)))
}

/// Formats a wall-clock instant the same way block timestamps are formatted.
pub fn format_system_time(time: SystemTime) -> String {
    match time.duration_since(UNIX_EPOCH) {
        Ok(since_epoch) => {
            let millis = u64::try_from(since_epoch.as_millis()).unwrap_or(u64::MAX);
            format_timestamp(Some(&Quantity::Fixed(millis)))
        }
        Err(_) => PLACEHOLDER.to_string(),
    }
}

/// Pretty JSON for the raw view. Never fails.
///
/// Block quantities serialize as decimal strings, so no integer loses
/// precision in a JSON consumer.
pub fn safe_json<T: Serialize + Debug>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| format!("{:#?}", value))
}
