//! SprintLens analysis engine: sprint metrics, portfolio prioritization,
//! initiative risk, and Monte Carlo delivery forecasting.
//!
//! Every engine function is a pure computation over borrowed typed tables.
//! [`session::AnalysisSession`] owns a loaded dataset plus its derived
//! tables and exposes each operation as a method.

pub mod metrics;
pub mod prediction;
pub mod prioritization;
pub mod recommendation;
pub mod session;
pub mod stats;

pub use recommendation::{Recommendation, RecommendationKind};
pub use session::AnalysisSession;
