//! Output placement — where the report goes and how it is shown.

use anyhow::Context;
use chrono::{DateTime, TimeZone};
use std::path::{Path, PathBuf};

/// `<dir>/<input stem>_<YYYYmmdd_HHMMSS>.html`.
pub fn report_path<Tz>(dir: &Path, input: &Path, now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "logview".to_string());
    dir.join(format!("{stem}_{}.html", now.format("%Y%m%d_%H%M%S")))
}

/// Write the finished document in a single call, creating `path`'s parent
/// directory if needed.
pub fn write_report(path: &Path, html: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = html.len(), "report written");
    Ok(())
}

/// Open the report with the platform's default handler. A failure here leaves
/// a valid report on disk, so it is only logged.
pub fn open_report(path: &Path) {
    match open::that(path) {
        Ok(()) => tracing::info!(path = %path.display(), "opening in browser"),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to open report"),
    }
}
