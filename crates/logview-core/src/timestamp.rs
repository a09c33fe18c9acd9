//! Timestamp display formatting.
//!
//! Numbers are epoch milliseconds. Strings go through a permissive list of
//! date/time layouts. Anything that cannot be interpreted is shown verbatim so
//! a bad timestamp never costs the record.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde_json::Value;

/// Rendered layout for every parsed timestamp.
pub const DISPLAY_FORMAT: &str = "%m/%d %H:%M:%S";

/// Layouts carrying an explicit UTC offset.
const OFFSET_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y/%m/%d %H:%M:%S%.f %z",
];

/// Layouts without an offset; shown as written.
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
];

/// Format a JSON timestamp value for display in `tz`.
///
/// `null` yields an empty string; booleans, arrays and objects yield their JSON
/// text. Numbers outside the epoch-millisecond range are shown in serde_json's
/// canonical form, which for floats may differ from the source token
/// (`1e300` prints as `1e+300`).
pub fn format_value<Tz>(value: &Value, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match value {
        Value::Null => String::new(),
        Value::Number(n) => n
            .as_f64()
            .and_then(|ms| format_millis(ms, tz))
            .unwrap_or_else(|| n.to_string()),
        Value::String(s) => format_str(s, tz),
        other => other.to_string(),
    }
}

/// Format epoch milliseconds, or `None` when out of range.
pub fn format_millis<Tz>(ms: f64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if !ms.is_finite() {
        return None;
    }
    let utc = DateTime::from_timestamp_millis(ms.floor() as i64)?;
    Some(utc.with_timezone(tz).format(DISPLAY_FORMAT).to_string())
}

/// Format a date/time string, falling back to the input verbatim.
pub fn format_str<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let s = raw.trim();
    if s.is_empty() {
        return String::new();
    }

    let with_offset = DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_rfc2822(s))
        .ok()
        .or_else(|| {
            OFFSET_LAYOUTS
                .iter()
                .find_map(|layout| DateTime::parse_from_str(s, layout).ok())
        });
    if let Some(dt) = with_offset {
        return dt.with_timezone(tz).format(DISPLAY_FORMAT).to_string();
    }

    let naive = NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(s, layout).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        });
    if let Some(dt) = naive {
        return dt.format(DISPLAY_FORMAT).to_string();
    }

    // Some producers stringify their epoch-millisecond clocks.
    if let Some(formatted) = s.parse::<f64>().ok().and_then(|ms| format_millis(ms, tz)) {
        return formatted;
    }

    raw.to_string()
}
