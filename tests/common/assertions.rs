//! Domain-specific assertions and page readers for logview harnesses.
//!
//! The macros wrap plain panics with context-rich failure messages that make
//! it clear *which* record or page invariant was violated. The readers pull
//! the machine-readable parts back out of a rendered page so harnesses can
//! replay the page script's filter decision in Rust.

use regex::Regex;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Record assertions
// ---------------------------------------------------------------------------

/// Assert that a `LogRecord` carries a specific level token (case-sensitive,
/// since display preserves the source casing).
///
/// ```rust
/// assert_level!(record, "Warning");
/// ```
#[macro_export]
macro_rules! assert_level {
    ($record:expr, $level:expr) => {{
        let record: &logview_core::LogRecord = &$record;
        let expected: &str = $level;
        if !record.level_present {
            panic!(
                "assert_level! failed: record has no level.\n  expected: {:?}\n  text: {:?}",
                expected, record.text
            );
        }
        if record.level != expected {
            panic!(
                "assert_level! failed:\n  expected: {:?}\n  actual:   {:?}\n  text: {:?}",
                expected, record.level, record.text
            );
        }
    }};
}

/// Assert that a `LogRecord` has the expected derived tag.
#[macro_export]
macro_rules! assert_tag {
    ($record:expr, $tag:expr) => {{
        let record: &logview_core::LogRecord = &$record;
        let expected: &str = $tag;
        if record.tag != expected {
            panic!(
                "assert_tag! failed:\n  expected: {:?}\n  actual:   {:?}\n  text: {:?}",
                expected, record.tag, record.text
            );
        }
    }};
}

/// Assert the number of table rows in a rendered page.
#[macro_export]
macro_rules! assert_row_count {
    ($html:expr, $count:expr) => {{
        let rows = $crate::common::rendered_rows(&$html);
        let expected: usize = $count;
        if rows.len() != expected {
            panic!(
                "assert_row_count! failed:\n  expected: {}\n  actual:   {}\n  texts: {:?}",
                expected,
                rows.len(),
                rows.iter().map(|r| &r.text).collect::<Vec<_>>()
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Page readers
// ---------------------------------------------------------------------------

/// One `<tr>` of the rendered table, attributes unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub level: String,
    pub rank: Option<usize>,
    pub tag: String,
    pub hidden: bool,
    /// Unescaped text cell (`-` placeholder markup for empty text).
    pub text: String,
}

/// Every table row, in document order.
pub fn rendered_rows(html: &str) -> Vec<RenderedRow> {
    let re = Regex::new(
        r#"(?s)<tr data-level="([^"]*)" data-rank="([^"]*)" data-tag="([^"]*)"( hidden)?>.*?<td class="text">(.*?)</td>\n</tr>"#,
    )
    .unwrap();
    re.captures_iter(html)
        .map(|c| RenderedRow {
            level: unescape_html(&c[1]),
            rank: (!c[2].is_empty()).then(|| c[2].parse().unwrap()),
            tag: unescape_html(&c[3]),
            hidden: c.get(4).is_some(),
            text: unescape_html(&c[5]),
        })
        .collect()
}

/// `(value, selected)` for each option of the `<select>` with `id`.
pub fn select_options(html: &str, id: &str) -> Vec<(String, bool)> {
    let start = html
        .find(&format!("<select id=\"{id}\""))
        .unwrap_or_else(|| panic!("no <select id={id:?}> in page"));
    let end = start + html[start..].find("</select>").unwrap();
    let re = Regex::new(r#"<option value="([^"]*)"( selected)?>"#).unwrap();
    re.captures_iter(&html[start..end])
        .map(|c| (unescape_html(&c[1]), c.get(2).is_some()))
        .collect()
}

/// The embedded level → rank table the page script reads.
pub fn level_ranks(html: &str) -> BTreeMap<String, usize> {
    let re = Regex::new(r#"<script type="application/json" id="levelRanks">(.*?)</script>"#).unwrap();
    let json = &re.captures(html).expect("no levelRanks script in page")[1];
    serde_json::from_str(json).unwrap()
}

/// Text of the header summary paragraph with tags stripped.
pub fn summary_text(html: &str) -> String {
    let re = Regex::new(r#"<p id="summary">(.*?)</p>"#).unwrap();
    let inner = &re.captures(html).expect("no summary in page")[1];
    let tags = Regex::new(r"<[^>]+>").unwrap();
    unescape_html(&tags.replace_all(inner, ""))
}

/// Reverse of the renderer's HTML escaping.
pub fn unescape_html(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
