//! Fact builder error types

use std::fmt;

/// Errors that can occur while building the fact table
#[derive(Debug)]
pub enum FactError {
    /// A row's value-tuple is absent from a dimension's key mapping and the
    /// miss policy is `Fail`
    KeyMiss {
        dimension: String,
        fact_key: u64,
    },
    /// The mappings handed in do not line up with the registry's dimensions
    MappingMismatch {
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for FactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyMiss { dimension, fact_key } => {
                write!(
                    f,
                    "Fact row {} has no surrogate key in dimension '{}'",
                    fact_key, dimension
                )
            }
            Self::MappingMismatch { expected, actual } => {
                write!(
                    f,
                    "Expected {} key mappings (one per dimension), got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for FactError {}
