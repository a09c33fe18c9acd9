//! Core types for logview-core.
//!
//! [`LogRecord`] is the canonical shape every input line is normalised into,
//! whichever schema produced it.

/// Level text used when a record carries no level at all.
pub const UNKNOWN_LEVEL: &str = "unknown";

/// A normalised log record. Built once per input line and never mutated.
///
/// Text fields default to the empty string when the source omits them, so
/// consumers never deal with `Option<String>` for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Display timestamp (`MM/DD HH:MM:SS`), the raw value if it could not be
    /// parsed, or empty.
    pub timestamp: String,
    /// Level token exactly as logged (case preserved), or [`UNKNOWN_LEVEL`].
    pub level: String,
    /// False when the source record had no level. Such records bypass the
    /// threshold.
    pub level_present: bool,
    /// Tag path such as `net/io`, or empty.
    pub tag: String,
    /// The human-readable message.
    pub text: String,
    /// Source file path as logged.
    pub file: String,
    /// Function or method name as logged.
    pub method: String,
    /// Source line, when the schema maps one.
    pub line: Option<u64>,
}

impl Default for LogRecord {
    fn default() -> Self {
        Self {
            timestamp: String::new(),
            level: UNKNOWN_LEVEL.to_string(),
            level_present: false,
            tag: String::new(),
            text: String::new(),
            file: String::new(),
            method: String::new(),
            line: None,
        }
    }
}

impl LogRecord {
    /// Final path component of `file`, accepting both `/` and `\` separators.
    pub fn file_name(&self) -> &str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.file)
    }
}
