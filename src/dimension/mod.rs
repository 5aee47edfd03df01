//! Dimension builder (verb module)
//!
//! Extracts unique value-tuples per dimension from the canonical rows and
//! assigns dense 1-based surrogate keys in first-seen order.

mod build;
mod types;

pub use build::{build_dimension, value_tuple};
pub use types::{DimensionRow, DimensionTable, KeyMapping, ValueTuple};
