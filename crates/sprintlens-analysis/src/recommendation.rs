//! Templated recommendation messages shared by the portfolio and predictive engines.

use serde::{Deserialize, Serialize};

/// Tone of a recommendation; the presentation layer maps it to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Strength,
    Opportunity,
    Optimization,
    Alert,
}

impl RecommendationKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strength => "STRENGTH",
            Self::Opportunity => "OPPORTUNITY",
            Self::Optimization => "OPTIMIZATION",
            Self::Alert => "ALERT",
        }
    }
}

impl std::fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub message: String,
}

impl Recommendation {
    pub fn new(kind: RecommendationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}
