//! Join engine (verb module)
//!
//! Ordered left-outer joins of raw row sets on declared keys. Applied twice
//! in the pipeline: People joined with Crashes on the report number, then the
//! result joined with Vehicles on the normalized unit identifier.

mod left_join;

pub use left_join::{left_join, normalize_unit_key, KeyNormalization};
