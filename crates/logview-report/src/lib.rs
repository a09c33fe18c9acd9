//! logview-report — renders a [`Collection`](logview_core::Collection) as one
//! self-contained HTML page.
//!
//! The page carries inline CSS and an inline filter script, and nothing else:
//! it opens offline straight from disk.

pub mod document;
pub mod escape;
pub mod theme;
pub mod visibility;

pub use document::Document;
pub use theme::Theme;
pub use visibility::RowFilter;
