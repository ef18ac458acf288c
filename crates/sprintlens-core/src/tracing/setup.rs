//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the SprintLens tracing/logging system.
///
/// Reads the `SPRINTLENS_LOG` environment variable for per-module levels.
/// Format: `SPRINTLENS_LOG=sprintlens_analysis::prediction=debug,sprintlens_core=warn`
///
/// Falls back to `sprintlens=info` if `SPRINTLENS_LOG` is unset or invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("sprintlens=info"));

        // A subscriber installed elsewhere (e.g. by the host application) wins.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
