//! Fact builder (verb module)
//!
//! Re-scans the canonical rows and emits one fact row each, resolving every
//! dimension reference through the in-memory key mappings built alongside the
//! dimension tables.

mod build;
mod error;
mod types;

pub use build::build_fact;
pub use error::FactError;
pub use types::{FactRow, FactTable, MissPolicy};
