//! Top-level analysis errors.

use super::error_code::{self, ErrorCode};
use super::{ConfigError, DatasetError, LookupError};

/// Errors surfaced by an analysis session.
/// Aggregates the per-concern errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Dataset(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Lookup(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}
