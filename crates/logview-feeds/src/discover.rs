//! Input discovery — find the newest log file in a directory.

use glob::{glob, Pattern};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::FeedError;

/// Return the most recently modified regular file in `dir` whose name ends in
/// `.<extension>`.
///
/// Files with identical modification times resolve to the lexicographically
/// last path, so the choice does not depend on directory iteration order.
///
/// # Errors
///
/// [`FeedError::NoCandidates`] when nothing matches, [`FeedError::Pattern`]
/// if the extension produces an invalid glob.
pub fn most_recent(dir: &Path, extension: &str) -> Result<PathBuf, FeedError> {
    let extension = extension.trim_start_matches('.');
    let pattern = resolve_glob(dir, extension);

    let mut newest: Option<(SystemTime, PathBuf)> = None;
    let matches = glob(&pattern).map_err(|source| FeedError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;
    for path in matches.filter_map(Result::ok) {
        let Ok(meta) = path.metadata() else {
            continue;
        };
        if !meta.is_file() {
            continue;
        }
        let mtime = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        let candidate = (mtime, path);
        if newest.as_ref().map_or(true, |best| candidate > *best) {
            newest = Some(candidate);
        }
    }

    match newest {
        Some((_, path)) => {
            tracing::debug!(path = %path.display(), "selected most recent input");
            Ok(path)
        }
        None => Err(FeedError::NoCandidates {
            dir: dir.to_path_buf(),
            extension: extension.to_string(),
        }),
    }
}

/// Build the `<dir>/*.<extension>` pattern, escaping glob metacharacters in
/// both parts.
pub fn resolve_glob(dir: &Path, extension: &str) -> String {
    let dir = Pattern::escape(&dir.to_string_lossy());
    PathBuf::from(dir)
        .join(format!("*.{}", Pattern::escape(extension)))
        .to_string_lossy()
        .into_owned()
}
