//! Row validator (verb module)
//!
//! Casts and cleans raw rows against the registry's declared types. The
//! required-column check is fatal; per-field cast failures are not.

mod cast;
mod check;
mod error;

pub use cast::{validate_row, validate_rows};
pub use check::check_columns;
pub use error::ValidateError;
