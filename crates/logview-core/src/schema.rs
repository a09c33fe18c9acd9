//! Schema — which JSON keys feed which [`LogRecord`](crate::LogRecord) field,
//! and which level vocabulary ranks them.
//!
//! A schema is chosen once per run by name. Shapes are never inferred from the
//! input, so a file mixing both shapes is read consistently with one mapping.

use serde::Deserialize;

use crate::severity::LevelVocabulary;

/// JSON key names for each record field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldMapping {
    pub level: String,
    /// Keys whose values are joined with `/` to form the tag. Absent keys are
    /// skipped.
    pub tag: Vec<String>,
    pub text: String,
    pub file: String,
    pub method: String,
    #[serde(default)]
    pub line: Option<String>,
    pub timestamp: String,
}

/// A named field mapping bound to its level vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    name: String,
    levels: LevelVocabulary,
    fields: FieldMapping,
}

impl Schema {
    pub fn new(name: impl Into<String>, levels: LevelVocabulary, fields: FieldMapping) -> Self {
        Self {
            name: name.into(),
            levels,
            fields,
        }
    }

    /// `levelName` / `subsystem` + `category` / `message` / `function`, with
    /// epoch-millisecond timestamps and the seven-level vocabulary.
    pub fn rich() -> Self {
        Self::new(
            "rich",
            LevelVocabulary::rich(),
            FieldMapping {
                level: "levelName".to_string(),
                tag: vec!["subsystem".to_string(), "category".to_string()],
                text: "message".to_string(),
                file: "file".to_string(),
                method: "function".to_string(),
                line: None,
                timestamp: "timestamp".to_string(),
            },
        )
    }

    /// `level` / `tag` / `text` / `method` / `line`, with date-string
    /// timestamps and the six-level vocabulary.
    pub fn simple() -> Self {
        Self::new(
            "simple",
            LevelVocabulary::simple(),
            FieldMapping {
                level: "level".to_string(),
                tag: vec!["tag".to_string()],
                text: "text".to_string(),
                file: "file".to_string(),
                method: "method".to_string(),
                line: Some("line".to_string()),
                timestamp: "timestamp".to_string(),
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn levels(&self) -> &LevelVocabulary {
        &self.levels
    }

    pub fn fields(&self) -> &FieldMapping {
        &self.fields
    }
}
