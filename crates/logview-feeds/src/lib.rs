//! logview-feeds — input side of logview.
//!
//! [`discover`] picks the input file when the caller names none; [`file`]
//! reads it into lines and hands them to the collection pipeline.

pub mod discover;
pub mod error;
pub mod file;

pub use error::FeedError;
