//! Core types, dataset adapter, errors, config, tracing, and constants
//! for the SprintLens analytics engine.

pub mod config;
pub mod constants;
pub mod dataset;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::SprintLensConfig;
pub use dataset::{Dataset, RawDataset};
pub use errors::{AnalysisError, ConfigError, DatasetError, ErrorCode, LookupError};
pub use types::{
    Initiative, InitiativeStatus, RoiEstimate, Sprint, Story, StoryStatus, StoryType,
    TeamMember,
};
