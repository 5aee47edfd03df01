//! Schema registry (noun module)
//!
//! Static declaration of dimensions, their ordered columns and types, plus
//! the fact measures. Pure lookup, no mutation at runtime.

mod declaration;
mod dimension;
mod measure;
mod types;

pub use declaration::Registry;
pub use dimension::{Column, Dimension};
pub use measure::Measure;
pub use types::{ColumnType, ParseColumnTypeError};
