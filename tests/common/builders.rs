//! Test builders — ergonomic constructors for `LogRecord` and `Collection`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::Utc;
use logview_core::{pipeline, Collection, Collector, FilterEngine, LogRecord, Schema};

// ---------------------------------------------------------------------------
// LogRecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`LogRecord`] test fixtures.
///
/// # Example
///
/// ```rust
/// let record = LogRecordBuilder::new("timeout connecting to db")
///     .level("Error")
///     .tag("net/io")
///     .file("/src/net/client.rs")
///     .build();
/// ```
pub struct LogRecordBuilder {
    record: LogRecord,
}

impl LogRecordBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            record: LogRecord {
                text: text.into(),
                ..LogRecord::default()
            },
        }
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.record.level = level.into();
        self.record.level_present = true;
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.record.tag = tag.into();
        self
    }

    pub fn timestamp(mut self, ts: impl Into<String>) -> Self {
        self.record.timestamp = ts.into();
        self
    }

    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.record.file = file.into();
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.record.method = method.into();
        self
    }

    pub fn line(mut self, line: u64) -> Self {
        self.record.line = Some(line);
        self
    }

    pub fn build(self) -> LogRecord {
        self.record
    }
}

// ---------------------------------------------------------------------------
// Collection helpers
// ---------------------------------------------------------------------------

/// Offer `records` to a collector over `schema`'s vocabulary at `min_level`.
pub fn collection_of(schema: &Schema, min_level: &str, records: Vec<LogRecord>) -> Collection {
    let threshold = schema.levels().threshold(min_level).unwrap();
    let mut collector = Collector::new(FilterEngine::new(schema.levels().clone(), threshold));
    for record in records {
        collector.offer(record);
    }
    collector.finish()
}

/// Run the full collection pass over raw lines, rendering timestamps in UTC.
pub fn collect_lines(schema: &Schema, min_level: &str, lines: &[&str]) -> Collection {
    let threshold = schema.levels().threshold(min_level).unwrap();
    pipeline::collect_in(lines.iter().copied(), schema, threshold, &Utc)
}
