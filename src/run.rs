//! One run: resolve options, collect, render, place the report.
//!
//! Everything that can be rejected without reading the input (schema, levels)
//! is checked in [`RunOptions::resolve`], before any file is touched.

use anyhow::Context;
use std::path::{Path, PathBuf};

use logview_core::config::{Config, DEFAULT_UI_LEVEL};
use logview_core::{ConfigError, Schema, Threshold};
use logview_feeds::{discover, file};
use logview_report::{Document, Theme};

use crate::cli::Cli;
use crate::output;

/// Validated settings for a run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub schema: Schema,
    pub threshold: Threshold,
    pub ui_level: Threshold,
    /// Explicit input file, if one was given.
    pub input: Option<PathBuf>,
    /// Directory searched for the newest input when `input` is `None`.
    pub search_dir: PathBuf,
    pub extension: String,
    pub output_dir: PathBuf,
    pub open: bool,
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The report was written to this path.
    Written(PathBuf),
    /// Nothing passed the filter; no report was written.
    NoMatches,
}

impl RunOptions {
    /// Merge CLI flags over the config file and validate every level name
    /// against the chosen schema's vocabulary.
    ///
    /// A UI level the user named must exist in the vocabulary. The built-in
    /// default is only used when it does; otherwise the page opens on the
    /// threshold.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self, ConfigError> {
        let schema = config.schema(cli.schema.as_deref().unwrap_or(&config.run.schema))?;
        let levels = schema.levels();
        let threshold = levels.threshold(cli.level.as_deref().unwrap_or(&config.run.min_level))?;
        let ui_level = match cli.ui_level.as_deref().or(config.run.ui_level.as_deref()) {
            Some(name) => levels.threshold(name)?,
            None => levels
                .threshold(DEFAULT_UI_LEVEL)
                .unwrap_or_else(|_| threshold.clone()),
        };

        Ok(Self {
            input: cli.file.clone(),
            search_dir: PathBuf::from("."),
            extension: config.run.extension.clone(),
            output_dir: cli
                .output_dir
                .clone()
                .or_else(|| config.run.output_dir.clone())
                .unwrap_or_else(std::env::temp_dir),
            open: config.run.open_browser && !cli.no_open,
            schema,
            threshold,
            ui_level,
        })
    }

    /// The input file: the explicit one, or the newest match in `search_dir`.
    pub fn input_path(&self) -> anyhow::Result<PathBuf> {
        match &self.input {
            Some(path) => Ok(path.clone()),
            None => {
                let path = discover::most_recent(&self.search_dir, &self.extension)?;
                tracing::info!(
                    path = %path.display(),
                    "no file specified, using most recent .{} file",
                    self.extension.trim_start_matches('.')
                );
                Ok(path)
            }
        }
    }
}

/// Collect `input` and render it. `None` when no record passed the filter.
pub fn render(input: &Path, opts: &RunOptions, theme: &Theme) -> anyhow::Result<Option<String>> {
    tracing::info!(
        path = %input.display(),
        schema = opts.schema.name(),
        min_level = opts.threshold.name(),
        "parsing log file"
    );
    let collection = file::collect_file(input, &opts.schema, opts.threshold.clone())?;
    if collection.is_empty() {
        return Ok(None);
    }

    let source_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    let html = Document::new(&source_name, &collection)
        .with_initial_level(opts.ui_level.name())?
        .render(theme);
    Ok(Some(html))
}

/// Run end to end: find the input, render, write once, optionally open.
pub fn run(opts: &RunOptions) -> anyhow::Result<Outcome> {
    let input = opts.input_path()?;
    let theme = Theme::load_default();

    let Some(html) = render(&input, opts, &theme)? else {
        tracing::info!("no log entries found matching the specified criteria");
        return Ok(Outcome::NoMatches);
    };

    let path = output::report_path(&opts.output_dir, &input, &chrono::Local::now());
    output::write_report(&path, &html)
        .with_context(|| format!("failed to save report for {}", input.display()))?;
    if opts.open {
        output::open_report(&path);
    }
    Ok(Outcome::Written(path))
}
