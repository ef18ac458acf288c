//! "Not found" conditions for out-of-range inputs.

use super::error_code::{self, ErrorCode};

/// A caller asked for a row that the dataset does not contain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Sprint {0} not found")]
    SprintNotFound(u32),

    #[error("Initiative '{0}' not found")]
    InitiativeNotFound(String),

    #[error("Team member '{0}' not found")]
    MemberNotFound(String),
}

impl ErrorCode for LookupError {
    fn error_code(&self) -> &'static str {
        error_code::NOT_FOUND
    }
}
