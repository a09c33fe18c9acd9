//! Severity model — ordered level vocabularies and threshold comparison.
//!
//! A [`LevelVocabulary`] is an immutable, ordered list of level names. Rank is
//! the position in that list (0 = least severe). Lookups are case-insensitive;
//! callers keep the original token for display.
//!
//! Two vocabularies ship built in and are never merged:
//!
//! | Vocabulary | Levels |
//! |------------|--------|
//! | `rich`     | trace < debug < info < notice < warning < error < critical |
//! | `simple`   | trace < debug < info < warning < error < fatal |

use crate::error::ConfigError;

const RICH_LEVELS: &[&str] = &[
    "trace", "debug", "info", "notice", "warning", "error", "critical",
];
const SIMPLE_LEVELS: &[&str] = &["trace", "debug", "info", "warning", "error", "fatal"];

/// An ordered set of level names with a strict total order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelVocabulary {
    /// Lowercase level names, least severe first.
    names: Vec<String>,
}

/// A validated minimum level: the name as it appears in the vocabulary plus
/// its rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Threshold {
    name: String,
    rank: usize,
}

impl Threshold {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rank(&self) -> usize {
        self.rank
    }
}

impl LevelVocabulary {
    /// Build a vocabulary from names ordered least severe first.
    ///
    /// Names are lowercased. An empty list, a blank name, or a name that
    /// repeats (case-insensitively) is rejected.
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim().to_lowercase();
            if name.is_empty() {
                return Err(ConfigError::EmptyLevelName);
            }
            if out.contains(&name) {
                return Err(ConfigError::DuplicateLevel(name));
            }
            out.push(name);
        }
        if out.is_empty() {
            return Err(ConfigError::EmptyVocabulary);
        }
        Ok(Self { names: out })
    }

    /// The seven-level vocabulary used by the `rich` schema.
    pub fn rich() -> Self {
        Self {
            names: RICH_LEVELS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The six-level vocabulary used by the `simple` schema.
    pub fn simple() -> Self {
        Self {
            names: SIMPLE_LEVELS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Level names, least severe first.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Rank of `name`, or `None` if it is not part of this vocabulary.
    pub fn lookup(&self, name: &str) -> Option<usize> {
        let folded = name.trim().to_lowercase();
        self.names.iter().position(|n| *n == folded)
    }

    /// Rank of `name`. Unrecognised names land in the lowest bucket (0).
    pub fn rank(&self, name: &str) -> usize {
        self.lookup(name).unwrap_or(0)
    }

    /// Validate a threshold name. Unknown names are a configuration error.
    pub fn threshold(&self, name: &str) -> Result<Threshold, ConfigError> {
        match self.lookup(name) {
            Some(rank) => Ok(Threshold {
                name: self.names[rank].clone(),
                rank,
            }),
            None => Err(ConfigError::UnknownLevel {
                name: name.to_string(),
                valid: self.names.join(", "),
            }),
        }
    }

    /// The least severe level, i.e. a threshold that admits everything.
    pub fn lowest(&self) -> Threshold {
        Threshold {
            name: self.names[0].clone(),
            rank: 0,
        }
    }

    /// Whether `name` ranks at or above `threshold`.
    pub fn is_at_least(&self, name: &str, threshold: &Threshold) -> bool {
        self.rank(name) >= threshold.rank
    }

    /// Level names ranked at or above `threshold`, in vocabulary order.
    pub fn at_or_above<'a>(&'a self, threshold: &Threshold) -> impl Iterator<Item = &'a str> + 'a {
        self.names
            .iter()
            .skip(threshold.rank)
            .map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
