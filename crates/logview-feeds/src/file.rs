//! Reads an NDJSON file and runs the collection pass over it.
//!
//! Bytes are decoded per line with UTF-8 lossy conversion, so one corrupt
//! byte sequence costs at most that line's JSON parse, never the run.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use logview_core::{pipeline, Collection, Schema, Threshold};

use crate::error::FeedError;

/// Confirm `path` names an existing regular file.
pub fn check_input(path: &Path) -> Result<(), FeedError> {
    match path.metadata() {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(FeedError::NotAFile(path.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(FeedError::NotFound(path.to_path_buf()))
        }
        Err(source) => Err(FeedError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read every line of `path`. Line terminators (`\n` or `\r\n`) are removed.
pub fn read_lines(path: &Path) -> Result<Vec<String>, FeedError> {
    let io_err = |source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let mut reader = BufReader::new(file);

    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).map_err(io_err)?;
        if n == 0 {
            break;
        }
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }
    tracing::debug!(path = %path.display(), lines = lines.len(), "read input");
    Ok(lines)
}

/// Check, read and collect `path` in one call.
pub fn collect_file(
    path: &Path,
    schema: &Schema,
    threshold: Threshold,
) -> Result<Collection, FeedError> {
    check_input(path)?;
    let lines = read_lines(path)?;
    Ok(pipeline::collect(lines, schema, threshold))
}
