//! Pipeline orchestration (verb module)
//!
//! Runs the stages in order against configured file paths: read, optional
//! cleaning, two left joins, column check, validation, dimension extraction,
//! fact resolution, atomic writes. Each stage's error aborts the run.

mod error;
mod run;

pub use error::PipelineError;
pub use run::{run, Cleaning, PipelineConfig, RunReport};
