//! Shared fixtures for the API integration tests.

// Each test binary compiles this module; not every binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use tabsync_api::{ApiConfig, AppState};
use tabsync_core::Workbook;
use tabsync_store::{InMemoryStateStore, ManualClock};
use tabsync_test_utils::seeded_store;

/// Config with open rate windows and short lock bounds, so tests that do
/// not exercise throttling never wait on it.
pub fn test_config() -> ApiConfig {
    ApiConfig {
        update_min_interval: Duration::ZERO,
        assign_min_interval: Duration::ZERO,
        update_lock_timeout: Duration::from_millis(100),
        assign_lock_timeout: Duration::from_millis(100),
        ..ApiConfig::default()
    }
}

/// Config with the production rate windows, for throttling tests.
pub fn throttled_config() -> ApiConfig {
    ApiConfig {
        update_lock_timeout: Duration::from_millis(100),
        assign_lock_timeout: Duration::from_millis(100),
        ..ApiConfig::default()
    }
}

/// App state over a seeded secret store and a manual clock.
pub fn test_state(workbook: Workbook) -> (AppState, Arc<ManualClock>) {
    test_state_with(workbook, seeded_store(), test_config())
}

pub fn test_state_with(
    workbook: Workbook,
    store: Arc<InMemoryStateStore>,
    config: ApiConfig,
) -> (AppState, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(1_000_000));
    let state = AppState::with_clock(workbook, store, clock.clone(), config);
    (state, clock)
}
