//! crashmart - Transform raw crash extracts into a star-schema data mart
//!
//! This library provides:
//! - Star-schema declaration types (Registry, Dimension, Measure, ColumnType)
//! - Declaration parsing from YAML (plus the built-in crash data mart)
//! - Extract reading, cleaning and ordered left joins
//! - Per-field validation against the declared types
//! - Dimension extraction with dense surrogate keys
//! - Fact table resolution and atomic file writes
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `registry/` - the star-schema declaration (Registry, Dimension, Measure, ColumnType)
//! - `row/` - row representations (RawRow, CanonicalRow, Value, NullReason)
//! - `dimension/` - built dimension tables and key mappings (also builds them)
//! - `fact/` - the built fact table (also builds it)
//!
//! **Verb modules** (transformations):
//! - `source/` - files → RowSet, tables → files
//! - `clean/` - per-extract repairs (dates, coordinates, damage amounts)
//! - `join/` - RowSet + RowSet → joined RowSet
//! - `validate/` - Registry + RawRow → CanonicalRow
//! - `ddl/` - Registry → CREATE TABLE statements
//! - `pipeline/` - extracts → mart files, end to end
//!
//! `external/` holds the cleaning stage's collaborator contracts (geocoding,
//! beat lookup) and pure reference implementations (holidays, fuzzy name
//! correction, crime averages).
//!
//! # Example
//!
//! ```ignore
//! use crashmart::{pipeline, Registry};
//!
//! let registry = Registry::crash_datamart();
//! let config = pipeline::PipelineConfig::from_dir("extracts/");
//! let report = pipeline::run(&registry, &config)?;
//! println!("{} fact rows", report.fact_rows);
//! ```

pub mod clean;
pub mod ddl;
pub mod dimension;
pub mod error;
pub mod external;
pub mod fact;
pub mod join;
pub mod pipeline;
pub mod registry;
pub mod row;
pub mod source;
pub mod validate;

// Re-export commonly used types
pub use clean::{clean_crashes, clean_people, clean_vehicles, CleanError};
pub use ddl::create_table_statements;
pub use dimension::{build_dimension, DimensionTable, KeyMapping};
pub use error::ParseError;
pub use fact::{build_fact, FactError, FactTable, MissPolicy};
pub use join::{left_join, KeyNormalization};
pub use pipeline::{run, PipelineConfig, PipelineError, RunReport};
pub use registry::{Column, ColumnType, Dimension, Measure, Registry};
pub use row::{CanonicalRow, FieldOutcome, NullReason, RawRow, Value};
pub use source::{read_rows, write_table, RowSet, SourceError};
pub use validate::{check_columns, validate_rows, ValidateError};
