//! Row visibility — the rule the page script applies on every filter change.
//!
//! The renderer uses [`RowFilter`] to set each row's initial `hidden`
//! attribute, and the embedded script re-implements [`RowFilter::is_visible`]
//! line for line. Rows carry their rank (empty when the record had no level)
//! and tag as `data-*` attributes, so the browser never re-parses cell text.

use std::collections::BTreeSet;

use logview_core::{LevelVocabulary, LogRecord};

/// Rank written to a row's `data-rank`. `None` for records without a level,
/// which no level selection can hide.
pub fn row_rank(record: &LogRecord, levels: &LevelVocabulary) -> Option<usize> {
    record
        .level_present
        .then(|| levels.rank(&record.level))
}

/// The page's current selection: a minimum rank and a set of selected tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFilter {
    min_rank: usize,
    tags: BTreeSet<String>,
}

impl RowFilter {
    pub fn new<I, S>(min_rank: usize, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            min_rank,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// A row is visible when its level passes the selected rank and its tag is
    /// selected. Rows without a level pass the level test; rows without a tag
    /// pass the tag test.
    pub fn is_visible(&self, rank: Option<usize>, tag: &str) -> bool {
        // An empty selection hides every tagged row. It does not mean "all".
        let level_match = rank.map_or(true, |r| r >= self.min_rank);
        let tag_match = tag.is_empty() || self.tags.contains(tag);
        level_match && tag_match
    }
}
