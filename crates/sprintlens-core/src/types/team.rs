//! TeamMember: one contributor.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub member_id: String,
    pub name: String,
    pub avg_capacity_per_sprint: f64,
    #[serde(default)]
    pub role: Option<String>,
}

impl TeamMember {
    /// First token of the display name.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
