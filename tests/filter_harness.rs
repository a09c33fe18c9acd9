#![allow(unused)]
//! Filter engine integration harness.
//!
//! # What this covers
//!
//! - **Threshold acceptance**: `accept` is exactly `rank(level) >= rank(min)`,
//!   case-insensitive, with absent-level records always accepted. Verified
//!   with proptest over both vocabularies.
//! - **Tag universe**: sorted, deduplicated, non-empty, and built only from
//!   accepted records.
//! - **Stability**: accepted records keep input order.
//! - **Malformed input**: invalid lines are skipped and counted, never fatal.
//!
//! # Running
//!
//! ```sh
//! cargo test --test filter_harness
//! ```

mod common;
use common::*;

use logview_core::{FilterEngine, LevelVocabulary, Schema};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

// ---------------------------------------------------------------------------
// Acceptance
// ---------------------------------------------------------------------------

/// `info` + `debug` lines at `min = info` keep only the `info` line.
#[test]
fn info_threshold_drops_debug() {
    let c = collect_lines(
        &Schema::simple(),
        "info",
        &[
            r#"{"level":"info","text":"start"}"#,
            r#"{"level":"debug","text":"skip"}"#,
        ],
    );
    assert_eq!(c.len(), 1);
    assert_eq!(c.records[0].text, "start");
}

/// A rich `Warning` record passes every threshold up to and including
/// `warning`.
#[rstest]
#[case("trace", true)]
#[case("notice", true)]
#[case("warning", true)]
#[case("error", false)]
#[case("critical", false)]
fn rich_warning_against_thresholds(#[case] min: &str, #[case] accepted: bool) {
    let c = collect_lines(
        &Schema::rich(),
        min,
        &[r#"{"levelName":"Warning","subsystem":"net","category":"io","message":"timeout"}"#],
    );
    assert_eq!(c.len() == 1, accepted);
}

#[test]
fn everything_below_threshold_is_empty() {
    let c = collect_lines(&Schema::simple(), "fatal", &CORPUS_SIMPLE[..4]);
    assert!(c.is_empty());
    assert!(c.tags.is_empty());
    assert_eq!(c.stats.rejected, 4);
}

#[test]
fn absent_level_survives_highest_threshold() {
    let c = collect_lines(&Schema::rich(), "critical", CORPUS_RICH);
    let texts: Vec<_> = c.records.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["Out of memory", "heartbeat"]);
}

// ---------------------------------------------------------------------------
// Tag universe
// ---------------------------------------------------------------------------

#[test]
fn tag_universe_excludes_rejected_records() {
    let c = collect_lines(&Schema::rich(), "notice", CORPUS_RICH);
    // net/http (Debug), app/lifecycle (Info) and render (Trace) were rejected.
    assert_eq!(c.tags, vec!["db", "db/pool", "net/io"]);
}

#[test]
fn tag_universe_is_sorted_and_unique() {
    let c = collect_lines(&Schema::simple(), "trace", CORPUS_SIMPLE);
    assert_eq!(c.tags, vec!["cache", "db", "server"]);
}

// ---------------------------------------------------------------------------
// Stability and malformed input
// ---------------------------------------------------------------------------

#[test]
fn accepted_records_keep_input_order() {
    let c = collect_lines(&Schema::rich(), "info", CORPUS_RICH);
    let texts: Vec<_> = c.records.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Application started",
            "timeout",
            "migration 42 applied",
            "connection refused",
            "Out of memory",
            "heartbeat",
        ]
    );
}

#[test]
fn malformed_lines_are_skipped() {
    let c = collect_lines(&Schema::simple(), "trace", CORPUS_MALFORMED);
    assert_eq!(c.len(), 1);
    assert_eq!(c.records[0].text, "boom");
    assert_eq!(c.stats.skipped, 2);
}

#[test]
fn only_malformed_lines_behave_like_empty_input() {
    let c = collect_lines(&Schema::simple(), "trace", &["{", "nope", "[1,"]);
    assert!(c.is_empty());
    assert_eq!(c.stats.skipped, 3);
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

fn vocabulary() -> impl Strategy<Value = LevelVocabulary> {
    prop_oneof![Just(LevelVocabulary::rich()), Just(LevelVocabulary::simple())]
}

fn random_case(s: &str, mask: u32) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| {
            if mask & (1 << (i % 32)) != 0 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

proptest! {
    /// accept(record, min) ⇔ rank(record.level) ≥ rank(min), whatever the case.
    #[test]
    fn accept_matches_rank_comparison(
        levels in vocabulary(),
        level_idx in 0usize..7,
        min_idx in 0usize..7,
        mask in any::<u32>(),
    ) {
        let level_idx = level_idx % levels.len();
        let min_idx = min_idx % levels.len();
        let level = random_case(&levels.names()[level_idx], mask);
        let min = random_case(&levels.names()[min_idx], !mask);

        let threshold = levels.threshold(&min).unwrap();
        let engine = FilterEngine::new(levels.clone(), threshold);
        let record = LogRecordBuilder::new("x").level(level).build();
        prop_assert_eq!(engine.accept(&record), level_idx >= min_idx);
    }

    /// Records with no level are accepted at every threshold.
    #[test]
    fn absent_level_always_accepted(levels in vocabulary(), min_idx in 0usize..7) {
        let min = levels.names()[min_idx % levels.len()].clone();
        let threshold = levels.threshold(&min).unwrap();
        let engine = FilterEngine::new(levels, threshold);
        prop_assert!(engine.accept(&LogRecordBuilder::new("x").build()));
    }
}
