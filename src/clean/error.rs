//! Cleaning error types

use std::fmt;

/// Errors that abort an extract's cleaning pass
#[derive(Debug)]
pub enum CleanError {
    /// A date column the stage must split is absent or malformed
    Date {
        column: String,
        value: String,
        source: chrono::ParseError,
    },
    /// A column the cleaning pass depends on is absent from the extract
    MissingColumn {
        column: String,
    },
}

impl fmt::Display for CleanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date { column, value, source } => {
                write!(f, "Malformed date '{}' in column {}: {}", value, column, source)
            }
            Self::MissingColumn { column } => {
                write!(f, "Extract is missing required column {}", column)
            }
        }
    }
}

impl std::error::Error for CleanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Date { source, .. } => Some(source),
            Self::MissingColumn { .. } => None,
        }
    }
}
