//! Extract cleaning (verb module)
//!
//! Per-extract repairs applied before the joins: timestamp splitting,
//! coordinate and beat repair, damage amount normalization, fuzzy name
//! correction. Each extract gets its own pass since the repairs do not
//! overlap.

mod crashes;
mod date;
mod error;
mod people;
mod vehicles;

pub use crashes::clean_crashes;
pub use date::{split_datetime, DateParts};
pub use error::CleanError;
pub use people::clean_people;
pub use vehicles::clean_vehicles;
