//! Shared application state for Axum routers.

use std::sync::Arc;

use tabsync_core::Workbook;
use tabsync_store::{Clock, RateLimiter, SheetLock, StateStore, SystemClock};

use crate::config::ApiConfig;

/// Application-wide state shared across all routes.
///
/// The workbook is reachable only through `sheets`, the single global
/// lock, so every mutation path is serialized by construction.
#[derive(Clone)]
pub struct AppState {
    /// The tabular store behind the process-wide lock.
    pub sheets: SheetLock,
    /// Persisted key-value state: secret token and rate-limit timestamps.
    pub state: Arc<dyn StateStore>,
    /// Persisted-window rate limiter over `state`.
    pub limiter: RateLimiter,
    pub config: ApiConfig,
}

impl AppState {
    /// Build state with an explicit clock (tests inject a manual one).
    pub fn with_clock(
        workbook: Workbook,
        state: Arc<dyn StateStore>,
        clock: Arc<dyn Clock>,
        config: ApiConfig,
    ) -> Self {
        let limiter = RateLimiter::new(state.clone(), clock);
        Self {
            sheets: SheetLock::new(workbook),
            state,
            limiter,
            config,
        }
    }

    /// Build state on the system clock.
    pub fn new(workbook: Workbook, state: Arc<dyn StateStore>, config: ApiConfig) -> Self {
        Self::with_clock(workbook, state, Arc::new(SystemClock), config)
    }
}
