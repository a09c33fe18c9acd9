//! Shared test utilities for logview integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Timestamps in harness corpora are rendered in UTC
//! through the `*_in` entry points so results do not depend on the host zone.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
