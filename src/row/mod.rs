//! Row representations (noun module)
//!
//! `RawRow` is what the extracts give us: case-insensitive column names and
//! raw text. `CanonicalRow` is what validation produces: every declared
//! column typed per the registry or null with a reason.

mod canonical;
mod raw;
mod value;

pub use canonical::{CanonicalRow, FieldOutcome, NullReason};
pub use raw::RawRow;
pub use value::Value;
