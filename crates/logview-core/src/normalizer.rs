//! Normalizer — turns one NDJSON line into a [`LogRecord`].
//!
//! Only a line that is not JSON at all is an error. Any JSON value that parses
//! produces a record; missing or `null` fields take their defaults.

use chrono::TimeZone;
use serde_json::{Map, Value};

use crate::error::NormalizeError;
use crate::schema::Schema;
use crate::timestamp;
use crate::types::{LogRecord, UNKNOWN_LEVEL};

/// Parse and normalise one line, formatting timestamps in local time.
pub fn normalize_line(line: &str, schema: &Schema) -> Result<LogRecord, NormalizeError> {
    normalize_line_in(line, schema, &chrono::Local)
}

/// As [`normalize_line`], with timestamps rendered in `tz`.
pub fn normalize_line_in<Tz>(
    line: &str,
    schema: &Schema,
    tz: &Tz,
) -> Result<LogRecord, NormalizeError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let value: Value = serde_json::from_str(line.trim())?;
    Ok(normalize_value_in(&value, schema, tz))
}

/// Map an already-parsed JSON value. Non-objects yield a default record.
pub fn normalize_value_in<Tz>(value: &Value, schema: &Schema, tz: &Tz) -> LogRecord
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Some(obj) = value.as_object() else {
        return LogRecord::default();
    };
    let fields = schema.fields();

    let level = field_text(obj, &fields.level).filter(|s| !s.trim().is_empty());
    let tag = fields
        .tag
        .iter()
        .filter_map(|key| field_text(obj, key))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    LogRecord {
        timestamp: obj
            .get(&fields.timestamp)
            .map(|v| timestamp::format_value(v, tz))
            .unwrap_or_default(),
        level_present: level.is_some(),
        level: level.unwrap_or_else(|| UNKNOWN_LEVEL.to_string()),
        tag,
        text: field_text(obj, &fields.text).unwrap_or_default(),
        file: field_text(obj, &fields.file).unwrap_or_default(),
        method: field_text(obj, &fields.method).unwrap_or_default(),
        line: fields
            .line
            .as_deref()
            .and_then(|key| obj.get(key))
            .and_then(line_number),
    }
}

/// Display text for a field. Strings are taken as-is, other non-null values
/// as their JSON text.
fn field_text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn line_number(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
