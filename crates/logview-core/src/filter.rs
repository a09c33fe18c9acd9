//! Filter engine — threshold acceptance and tag-universe accumulation.
//!
//! [`Collector`] keeps accepted records in arrival order and the distinct
//! non-empty tags of those records. Tags of rejected records are never seen.

use std::collections::BTreeSet;

use crate::severity::{LevelVocabulary, Threshold};
use crate::types::LogRecord;

/// Decides whether a record meets the run's minimum level.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    levels: LevelVocabulary,
    threshold: Threshold,
}

impl FilterEngine {
    pub fn new(levels: LevelVocabulary, threshold: Threshold) -> Self {
        Self { levels, threshold }
    }

    /// A record without a level is always accepted. Otherwise the level must
    /// rank at or above the threshold; unrecognised levels rank lowest.
    pub fn accept(&self, record: &LogRecord) -> bool {
        !record.level_present || self.levels.is_at_least(&record.level, &self.threshold)
    }

    pub fn levels(&self) -> &LevelVocabulary {
        &self.levels
    }

    pub fn threshold(&self) -> &Threshold {
        &self.threshold
    }
}

/// Line accounting for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectStats {
    /// Non-blank lines read.
    pub lines: usize,
    pub accepted: usize,
    pub rejected: usize,
    /// Lines dropped because they were not valid JSON.
    pub skipped: usize,
}

/// Accumulates accepted records and their tags.
#[derive(Debug)]
pub struct Collector {
    engine: FilterEngine,
    records: Vec<LogRecord>,
    tags: BTreeSet<String>,
    stats: CollectStats,
}

impl Collector {
    pub fn new(engine: FilterEngine) -> Self {
        Self {
            engine,
            records: Vec::new(),
            tags: BTreeSet::new(),
            stats: CollectStats::default(),
        }
    }

    /// Offer a normalised record. Returns whether it was kept.
    pub fn offer(&mut self, record: LogRecord) -> bool {
        self.stats.lines += 1;
        if !self.engine.accept(&record) {
            self.stats.rejected += 1;
            return false;
        }
        if !record.tag.is_empty() && !self.tags.contains(&record.tag) {
            self.tags.insert(record.tag.clone());
        }
        self.records.push(record);
        self.stats.accepted += 1;
        true
    }

    /// Count a line that never became a record.
    pub fn skip(&mut self) {
        self.stats.lines += 1;
        self.stats.skipped += 1;
    }

    pub fn finish(self) -> Collection {
        Collection {
            records: self.records,
            tags: self.tags.into_iter().collect(),
            levels: self.engine.levels,
            threshold: self.engine.threshold,
            stats: self.stats,
        }
    }
}

/// The outcome of one collection pass, ready for rendering.
#[derive(Debug, Clone)]
pub struct Collection {
    /// Accepted records in input order.
    pub records: Vec<LogRecord>,
    /// Distinct non-empty tags of `records`, sorted.
    pub tags: Vec<String>,
    pub levels: LevelVocabulary,
    pub threshold: Threshold,
    pub stats: CollectStats,
}

impl Collection {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
