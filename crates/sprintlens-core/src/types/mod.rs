//! Typed entity records for the four loaded tables.

pub mod initiative;
pub mod sprint;
pub mod story;
pub mod team;

pub use initiative::{Initiative, InitiativeStatus, RoiEstimate};
pub use sprint::Sprint;
pub use story::{Story, StoryStatus, StoryType};
pub use team::TeamMember;

/// Error returned when parsing an enum label from source data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown label '{label}', expected one of: {}", .expected.join(", "))]
pub struct UnknownLabel {
    pub label: String,
    pub expected: &'static [&'static str],
}
