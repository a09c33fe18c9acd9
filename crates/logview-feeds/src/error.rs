use std::path::PathBuf;

/// Failures locating or reading the input file. All of them end the run.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("no .{extension} files found in {}", .dir.display())]
    NoCandidates { dir: PathBuf, extension: String },

    #[error("invalid search pattern {pattern:?}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
