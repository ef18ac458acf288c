//! Errors raised at the loader/engine boundary.

use super::error_code::{self, ErrorCode};

/// Malformed input detected while normalizing raw tables.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Required table '{table}' is empty")]
    EmptyTable { table: &'static str },

    #[error("Table '{table}' row {row}: missing required column '{column}'")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
        row: usize,
    },

    #[error("Table '{table}' row {row}: invalid value in '{column}': {message}")]
    InvalidValue {
        table: &'static str,
        column: &'static str,
        row: usize,
        message: String,
    },

    #[error("Table '{table}' has duplicate key '{key}'")]
    DuplicateKey { table: &'static str, key: String },

    #[error("Table '{table}' column '{column}' references unknown key '{key}'")]
    UnknownReference {
        table: &'static str,
        column: &'static str,
        key: String,
    },

    #[error("Dataset parse error: {message}")]
    Parse { message: String },

    #[error("Failed to read dataset from {path}: {message}")]
    Io { path: String, message: String },
}

impl ErrorCode for DatasetError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } | Self::Io { .. } => error_code::DATASET_PARSE_ERROR,
            _ => error_code::DATASET_ERROR,
        }
    }
}
