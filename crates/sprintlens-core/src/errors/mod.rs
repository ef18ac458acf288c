//! Error handling for SprintLens.
//! One error enum per concern, `thiserror` only.

pub mod analysis_error;
pub mod config_error;
pub mod dataset_error;
pub mod error_code;
pub mod lookup_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use dataset_error::DatasetError;
pub use error_code::ErrorCode;
pub use lookup_error::LookupError;
