//! Collection pass: normalise every line, filter, accumulate.
//!
//! Runs on the calling thread in input order. Lines that are not JSON are
//! logged at `warn` with their 1-based line number and dropped.

use chrono::TimeZone;

use crate::filter::{Collection, Collector, FilterEngine};
use crate::normalizer;
use crate::schema::Schema;
use crate::severity::Threshold;

/// Collect `lines` with timestamps in local time.
pub fn collect<I, S>(lines: I, schema: &Schema, threshold: Threshold) -> Collection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    collect_in(lines, schema, threshold, &chrono::Local)
}

/// As [`collect`], with timestamps rendered in `tz`.
pub fn collect_in<I, S, Tz>(lines: I, schema: &Schema, threshold: Threshold, tz: &Tz) -> Collection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let engine = FilterEngine::new(schema.levels().clone(), threshold);
    let mut collector = Collector::new(engine);

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line_no = idx + 1;
        if line.trim().is_empty() {
            tracing::debug!(line = line_no, "skipping blank line");
            continue;
        }
        match normalizer::normalize_line_in(line, schema, tz) {
            Ok(record) => {
                let kept = collector.offer(record);
                tracing::trace!(line = line_no, kept, "record filtered");
            }
            Err(e) => {
                tracing::warn!(line = line_no, error = %e, "skipping invalid JSON line");
                collector.skip();
            }
        }
    }

    let collection = collector.finish();
    tracing::info!(
        schema = schema.name(),
        min_level = collection.threshold.name(),
        lines = collection.stats.lines,
        accepted = collection.stats.accepted,
        rejected = collection.stats.rejected,
        skipped = collection.stats.skipped,
        tags = collection.tags.len(),
        "collection finished"
    );
    collection
}
