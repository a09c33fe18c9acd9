//! Configuration types for logview.
//!
//! [`Config::load`] reads `~/.config/logview/config.toml`, creating it with
//! the built-in defaults if it does not yet exist. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in
//! tests).
//!
//! Besides run defaults the file declares the schemas. `rich` and `simple`
//! are always present; further `[schemas.<name>]` tables describe other log
//! shapes with their own level vocabulary.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::schema::{FieldMapping, Schema};
use crate::severity::LevelVocabulary;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[run]
schema       = "rich"
min_level    = "trace"
# ui_level   = "debug"
extension    = "ndjson"
open_browser = true

[schemas.rich]
levels    = ["trace", "debug", "info", "notice", "warning", "error", "critical"]
level     = "levelName"
tag       = ["subsystem", "category"]
text      = "message"
file      = "file"
method    = "function"
timestamp = "timestamp"

[schemas.simple]
levels    = ["trace", "debug", "info", "warning", "error", "fatal"]
level     = "level"
tag       = ["tag"]
text      = "text"
file      = "file"
method    = "method"
line      = "line"
timestamp = "timestamp"
"#;

/// Initial page level when neither the CLI nor the config file names one.
pub const DEFAULT_UI_LEVEL: &str = "debug";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/logview/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub schemas: BTreeMap<String, SchemaConfig>,
}

/// `[run]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_schema")]
    pub schema: String,
    #[serde(default = "default_min_level")]
    pub min_level: String,
    /// Level the page's level selector opens on. Clamped to the collection
    /// threshold when it ranks below it. When unset, [`DEFAULT_UI_LEVEL`] is
    /// used if the schema has it.
    #[serde(default)]
    pub ui_level: Option<String>,
    /// Extension used to find the newest input file when none is given.
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_open_browser")]
    pub open_browser: bool,
    /// Where reports are written. `None` means the system temp directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_schema() -> String { "rich".to_string() }
fn default_min_level() -> String { "trace".to_string() }
fn default_extension() -> String { "ndjson".to_string() }
fn default_open_browser() -> bool { true }

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            schema: default_schema(),
            min_level: default_min_level(),
            ui_level: None,
            extension: default_extension(),
            open_browser: default_open_browser(),
            output_dir: None,
        }
    }
}

/// A `[schemas.<name>]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaConfig {
    /// Level names, least severe first.
    pub levels: Vec<String>,
    pub level: String,
    #[serde(default)]
    pub tag: Vec<String>,
    pub text: String,
    pub file: String,
    pub method: String,
    #[serde(default)]
    pub line: Option<String>,
    pub timestamp: String,
}

impl SchemaConfig {
    fn to_schema(&self, name: &str) -> Result<Schema, ConfigError> {
        let levels = LevelVocabulary::new(&self.levels)?;
        Ok(Schema::new(
            name,
            levels,
            FieldMapping {
                level: self.level.clone(),
                tag: self.tag.clone(),
                text: self.text.clone(),
                file: self.file.clone(),
                method: self.method.clone(),
                line: self.line.clone(),
                timestamp: self.timestamp.clone(),
            },
        ))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/logview/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    ///
    /// If that file cannot be created the built-in defaults are used. A file
    /// that exists but does not parse is an error.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_at(&config_path())
    }

    fn load_at(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            if let Err(e) = write_defaults(path) {
                tracing::warn!(error = %e, "using built-in configuration");
                return Ok(Self::defaults());
            }
            tracing::info!(path = %path.display(), "wrote default configuration");
        }
        Self::load_from(path)
    }

    /// Layer an explicit file over the built-in defaults. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Resolve a schema by name (case-insensitive).
    pub fn schema(&self, name: &str) -> Result<Schema, ConfigError> {
        let key = name.trim().to_lowercase();
        match self.schemas.get(&key) {
            Some(table) => table.to_schema(&key),
            None => Err(ConfigError::UnknownSchema {
                name: name.to_string(),
                available: self.schemas.keys().cloned().collect::<Vec<_>>().join(", "),
            }),
        }
    }

    /// Names of all declared schemas, sorted.
    pub fn schema_names(&self) -> Vec<&str> {
        self.schemas.keys().map(String::as_str).collect()
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn write_defaults(path: &Path) -> Result<(), ConfigError> {
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, DEFAULT_CONFIG.trim_start())
    };
    write().map_err(|source| ConfigError::WriteDefaults {
        path: path.to_path_buf(),
        source,
    })
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("logview")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
