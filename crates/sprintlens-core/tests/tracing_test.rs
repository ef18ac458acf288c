//! Tests for the SprintLens tracing setup.

use std::sync::Mutex;

use sprintlens_core::tracing::init_tracing;

/// Serializes tests that touch SPRINTLENS_LOG.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_init_tracing_with_filter() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("SPRINTLENS_LOG", "sprintlens_analysis=debug,sprintlens_core=warn");
    init_tracing();
    std::env::remove_var("SPRINTLENS_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    tracing::info!("still usable after repeated init");
}
