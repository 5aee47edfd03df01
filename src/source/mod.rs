//! Delimited-text I/O (verb module)
//!
//! Reads the raw extracts into `RowSet`s and writes mart tables atomically.

mod error;
mod reader;
mod writer;

pub use error::SourceError;
pub use reader::{read_rows, RowSet};
pub use writer::write_table;
