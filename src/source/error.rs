//! Source I/O error types

use std::fmt;

/// Errors reading or writing delimited-text tables
#[derive(Debug)]
pub enum SourceError {
    /// IO failure on a table file
    Io {
        path: String,
        source: std::io::Error,
    },
    /// Malformed delimited text
    Csv {
        path: String,
        source: csv::Error,
    },
}

impl SourceError {
    pub(crate) fn io(path: &str, source: std::io::Error) -> Self {
        SourceError::Io {
            path: path.to_string(),
            source,
        }
    }

    pub(crate) fn csv(path: &str, source: csv::Error) -> Self {
        SourceError::Csv {
            path: path.to_string(),
            source,
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Io { path, source } => {
                write!(f, "IO error on '{}': {}", path, source)
            }
            SourceError::Csv { path, source } => {
                write!(f, "Malformed table '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io { source, .. } => Some(source),
            SourceError::Csv { source, .. } => Some(source),
        }
    }
}
