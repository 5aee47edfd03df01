//! Pipeline error type

use std::fmt;

use crate::clean::CleanError;
use crate::fact::FactError;
use crate::source::SourceError;
use crate::validate::ValidateError;

/// Any error that aborts a pipeline run, wrapping the failing stage's error
#[derive(Debug)]
pub enum PipelineError {
    Source(SourceError),
    Clean(CleanError),
    Validate(ValidateError),
    Fact(FactError),
    /// Creating the output directory failed
    OutDir {
        path: String,
        source: std::io::Error,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(e) => write!(f, "{}", e),
            Self::Clean(e) => write!(f, "{}", e),
            Self::Validate(e) => write!(f, "{}", e),
            Self::Fact(e) => write!(f, "{}", e),
            Self::OutDir { path, source } => {
                write!(f, "Could not create output directory {}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(e) => Some(e),
            Self::Clean(e) => Some(e),
            Self::Validate(e) => Some(e),
            Self::Fact(e) => Some(e),
            Self::OutDir { source, .. } => Some(source),
        }
    }
}

impl From<SourceError> for PipelineError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

impl From<CleanError> for PipelineError {
    fn from(e: CleanError) -> Self {
        Self::Clean(e)
    }
}

impl From<ValidateError> for PipelineError {
    fn from(e: ValidateError) -> Self {
        Self::Validate(e)
    }
}

impl From<FactError> for PipelineError {
    fn from(e: FactError) -> Self {
        Self::Fact(e)
    }
}
