//! logview — render NDJSON log files as a filterable, self-contained HTML page.
//!
//! # Architecture
//!
//! ```text
//! feeds (discover, read) ──► core (normalize, filter) ──► report (render)
//!                                                              │
//!                                               output (write once, open)
//! ```
//!
//! The binary is a thin wrapper over [`run::run`]; integration tests drive
//! [`run::render`] and [`run::run`] directly.

pub mod cli;
pub mod output;
pub mod run;

pub use run::{Outcome, RunOptions};
