//! Validation error types

use std::fmt;

/// Errors that abort validation before any row is processed
#[derive(Debug)]
pub enum ValidateError {
    /// The joined extract is missing columns the registry declares
    MissingColumns {
        missing: Vec<String>,
        unused: Vec<String>,
    },
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumns { missing, unused } => {
                write!(
                    f,
                    "Source is missing declared columns: [{}]",
                    missing.join(", ")
                )?;
                if !unused.is_empty() {
                    write!(f, "; unused source columns: [{}]", unused.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ValidateError {}
