//! logview-core — severity model, normalization and filtering for logview.
//!
//! # Pipeline
//!
//! ```text
//! NDJSON line ──► normalizer ──► FilterEngine ──► Collector ──► Collection
//!                    ▲               ▲
//!                 Schema ──── LevelVocabulary
//! ```
//!
//! The schema is picked once per run and carries the level vocabulary, so the
//! filter and the renderer rank levels from the same value.

pub mod config;
pub mod error;
pub mod filter;
pub mod normalizer;
pub mod pipeline;
pub mod schema;
pub mod severity;
pub mod timestamp;
pub mod types;

pub use error::{ConfigError, NormalizeError};
pub use filter::{Collection, CollectStats, Collector, FilterEngine};
pub use schema::{FieldMapping, Schema};
pub use severity::{LevelVocabulary, Threshold};
pub use types::{LogRecord, UNKNOWN_LEVEL};
