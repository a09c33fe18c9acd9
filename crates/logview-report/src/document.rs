//! Document renderer — one self-contained HTML page per run.
//!
//! # Layout
//!
//! | Part | Contents |
//! |------|----------|
//! | Header | source name, entry count, collection level |
//! | Controls | level selector (collection level and above), tag multi-select, select/clear buttons |
//! | Table | one row per accepted record, input order, `data-level` / `data-rank` / `data-tag` |
//! | Scripts | level-rank table as JSON, then the filter script |
//!
//! Output depends only on the collection, the source name, the initial level
//! and the theme. Nothing time- or environment-dependent is embedded, so the
//! same input renders byte-identical pages.

use logview_core::{Collection, ConfigError, LogRecord, Threshold};
use serde_json::{Map, Value};

use crate::escape;
use crate::theme::Theme;
use crate::visibility::{row_rank, RowFilter};

const STYLE: &str = include_str!("assets/style.css");
const FILTER_SCRIPT: &str = include_str!("assets/filter.js");
const EMPTY_CELL: &str = r#"<span class="empty">-</span>"#;

/// A renderable report over one [`Collection`].
#[derive(Debug, Clone)]
pub struct Document<'a> {
    source_name: &'a str,
    collection: &'a Collection,
    initial_level: Threshold,
}

impl<'a> Document<'a> {
    /// The level selector opens on the collection threshold until
    /// [`with_initial_level`](Self::with_initial_level) says otherwise.
    pub fn new(source_name: &'a str, collection: &'a Collection) -> Self {
        Self {
            source_name,
            collection,
            initial_level: collection.threshold.clone(),
        }
    }

    /// Open the page's level selector on `name` instead of the collection
    /// threshold.
    ///
    /// A level ranked below the threshold is not offered by the selector, so
    /// the threshold is used in that case. A name outside the vocabulary is a
    /// configuration error.
    pub fn with_initial_level(mut self, name: &str) -> Result<Self, ConfigError> {
        let level = self.collection.levels.threshold(name)?;
        if level.rank() >= self.collection.threshold.rank() {
            self.initial_level = level;
        } else {
            tracing::debug!(
                requested = level.name(),
                threshold = self.collection.threshold.name(),
                "initial level below collection threshold; using threshold"
            );
        }
        Ok(self)
    }

    pub fn initial_level(&self) -> &Threshold {
        &self.initial_level
    }

    /// Render the complete page.
    pub fn render(&self, theme: &Theme) -> String {
        let mut html = String::with_capacity(16 * 1024 + self.collection.len() * 512);
        self.render_head(&mut html);
        self.render_header(&mut html);
        self.render_table(&mut html, theme);
        self.render_scripts(&mut html);
        tracing::debug!(
            rows = self.collection.len(),
            tags = self.collection.tags.len(),
            bytes = html.len(),
            "rendered report"
        );
        html
    }

    fn render_head(&self, html: &mut String) {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!(
            "<title>Log Viewer - {}</title>\n",
            escape::html(self.source_name)
        ));
        html.push_str("<style>\n");
        html.push_str(STYLE);
        html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");
    }

    fn render_header(&self, html: &mut String) {
        let threshold = &self.collection.threshold;
        html.push_str("<div class=\"header\">\n<h1>Log Viewer</h1>\n");
        html.push_str(&format!(
            "<p id=\"summary\"><span id=\"summarySource\">{}</span> • \
             <span id=\"summaryCount\">{} entries</span> • \
             <span id=\"summaryLevel\">Level: {}+</span>\
             <span id=\"summaryTags\"></span></p>\n",
            escape::html(self.source_name),
            self.collection.len(),
            escape::html(&threshold.name().to_uppercase()),
        ));

        html.push_str("<div class=\"controls\">\n");
        html.push_str("<label for=\"levelFilter\">Filter by level:</label>\n");
        html.push_str("<select id=\"levelFilter\">\n");
        for level in self.collection.levels.at_or_above(threshold) {
            let selected = if level == self.initial_level.name() {
                " selected"
            } else {
                ""
            };
            html.push_str(&format!(
                "<option value=\"{}\"{}>{}+</option>\n",
                escape::html(level),
                selected,
                escape::html(&level.to_uppercase()),
            ));
        }
        html.push_str("</select>\n");

        html.push_str("<div class=\"tag-controls\">\n");
        html.push_str("<label for=\"tagFilter\">Filter by tags:</label>\n");
        html.push_str("<select id=\"tagFilter\" multiple>\n");
        html.push_str(&tag_options(&self.collection.tags));
        html.push_str("</select>\n");
        html.push_str("<div class=\"tag-actions\">\n");
        html.push_str("<button type=\"button\" id=\"selectAllTags\">Select All</button>\n");
        html.push_str("<button type=\"button\" id=\"clearAllTags\">Clear All</button>\n");
        html.push_str("</div>\n</div>\n</div>\n</div>\n");
    }

    fn render_table(&self, html: &mut String, theme: &Theme) {
        html.push_str("<div class=\"table-container\">\n<table>\n<thead>\n<tr>\n");
        html.push_str("<th class=\"col-date\">Date</th>\n");
        html.push_str("<th class=\"col-level\">Level</th>\n");
        html.push_str("<th class=\"col-tag\">Tag</th>\n");
        html.push_str("<th class=\"col-file\">File</th>\n");
        html.push_str("<th class=\"col-method\">Function</th>\n");
        html.push_str("<th class=\"col-text\">Text</th>\n");
        html.push_str("</tr>\n</thead>\n<tbody id=\"logRows\">\n");

        let filter = RowFilter::new(self.initial_level.rank(), self.collection.tags.iter().cloned());
        for record in &self.collection.records {
            self.render_row(html, record, theme, &filter);
        }
        html.push_str("</tbody>\n</table>\n</div>\n</div>\n");
    }

    fn render_row(&self, html: &mut String, record: &LogRecord, theme: &Theme, filter: &RowFilter) {
        let rank = row_rank(record, &self.collection.levels);
        let hidden = if filter.is_visible(rank, &record.tag) {
            ""
        } else {
            " hidden"
        };
        html.push_str(&format!(
            "<tr data-level=\"{}\" data-rank=\"{}\" data-tag=\"{}\"{}>\n",
            escape::html(&record.level.to_lowercase()),
            rank.map(|r| r.to_string()).unwrap_or_default(),
            escape::html(&record.tag),
            hidden,
        ));
        html.push_str(&format!(
            "<td class=\"timestamp\">{}</td>\n",
            cell(&record.timestamp)
        ));
        html.push_str(&format!(
            "<td class=\"level\" style=\"color: {}\">{}</td>\n",
            escape::html(theme.level_color(&record.level)),
            escape::html(&record.level),
        ));
        html.push_str(&format!("<td class=\"tag\">{}</td>\n", cell(&record.tag)));

        let file_name = match (record.file_name(), record.line) {
            ("", _) => String::new(),
            (name, Some(line)) => format!("{name}:{line}"),
            (name, None) => name.to_string(),
        };
        if record.file.is_empty() {
            html.push_str(&format!("<td class=\"file\">{EMPTY_CELL}</td>\n"));
        } else {
            html.push_str(&format!(
                "<td class=\"file\" title=\"{}\">{}</td>\n",
                escape::html(&record.file),
                cell(&file_name),
            ));
        }
        html.push_str(&format!(
            "<td class=\"method\">{}</td>\n",
            cell(&record.method)
        ));
        html.push_str(&format!("<td class=\"text\">{}</td>\n", cell(&record.text)));
        html.push_str("</tr>\n");
    }

    fn render_scripts(&self, html: &mut String) {
        let ranks: Map<String, Value> = self
            .collection
            .levels
            .names()
            .iter()
            .enumerate()
            .map(|(rank, name)| (name.clone(), Value::from(rank)))
            .collect();
        html.push_str(&format!(
            "<script type=\"application/json\" id=\"levelRanks\">{}</script>\n",
            escape::script_json(&Value::Object(ranks))
        ));
        html.push_str("<script>\n");
        html.push_str(FILTER_SCRIPT);
        html.push_str("</script>\n</body>\n</html>\n");
    }
}

/// `<option>` lines for the tag selector, every tag selected.
pub fn tag_options(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| {
            let tag = escape::html(tag);
            format!("<option value=\"{tag}\" selected>{tag}</option>\n")
        })
        .collect()
}

fn cell(value: &str) -> String {
    if value.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        escape::html(value).into_owned()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
