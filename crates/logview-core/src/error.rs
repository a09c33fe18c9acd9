//! Error types for logview-core.
//!
//! Configuration problems are fatal and surface before any input is read.
//! Per-line problems are recoverable: the pipeline logs them and moves on.

/// A problem with the run configuration: level names, schemas, or the
/// config file itself.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown log level {name:?} (valid levels: {valid})")]
    UnknownLevel { name: String, valid: String },

    #[error("unknown schema {name:?} (available schemas: {available})")]
    UnknownSchema { name: String, available: String },

    #[error("level vocabulary must contain at least one level")]
    EmptyVocabulary,

    #[error("level names must not be empty")]
    EmptyLevelName,

    #[error("level {0:?} appears more than once in the vocabulary")]
    DuplicateLevel(String),

    #[error("failed to load configuration")]
    Load(#[from] config::ConfigError),

    #[error("failed to write default configuration to {path}")]
    WriteDefaults {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single input line could not become a record.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
