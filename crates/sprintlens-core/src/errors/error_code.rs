//! ErrorCode trait for structured error reporting to the presentation layer.

/// Every error enum implements this to expose a stable code string
/// alongside its human-readable message.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "DATASET_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn display_code(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const DATASET_ERROR: &str = "DATASET_ERROR";
pub const DATASET_PARSE_ERROR: &str = "DATASET_PARSE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
