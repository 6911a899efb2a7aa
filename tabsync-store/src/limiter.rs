//! Persisted-window rate limiter.
//!
//! One timestamp per category lives in the [`StateStore`], so the window
//! survives process restarts. The timestamp is overwritten the moment a
//! call passes the check - before the caller attempts the store lock - so
//! a failed lock acquisition still consumes the window. That is the
//! documented contract, not an accident; see the tests.

use std::sync::Arc;
use std::time::Duration;

use crate::clock::Clock;
use crate::kv::StateStore;

/// Independently throttled class of operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateCategory {
    /// Row-update requests from the sync endpoint.
    Update,
    /// Identifier-assignment passes fired by change notifications.
    Assign,
}

impl RateCategory {
    /// State-store key holding this category's last-pass timestamp.
    pub fn state_key(self) -> &'static str {
        match self {
            RateCategory::Update => "rate.last_update_ms",
            RateCategory::Assign => "rate.last_assign_ms",
        }
    }
}

/// Minimum-interval limiter over persisted timestamps.
#[derive(Clone)]
pub struct RateLimiter {
    store: Arc<dyn StateStore>,
    clock: Arc<dyn Clock>,
}

impl RateLimiter {
    pub fn new(store: Arc<dyn StateStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Check and consume the window for `category`.
    ///
    /// Returns `false` with no side effect while the window is closed.
    /// Otherwise writes `now` as the new last-pass timestamp and returns
    /// `true`. Unreadable persisted state counts as "never called".
    pub async fn try_acquire(&self, category: RateCategory, min_interval: Duration) -> bool {
        let now = self.clock.now_ms();
        let last = match self.store.get(category.state_key()).await {
            Some(raw) => raw.parse::<i64>().unwrap_or(0),
            None => 0,
        };

        if now.saturating_sub(last) < min_interval.as_millis() as i64 {
            tracing::debug!(category = ?category, "rate limit window still closed");
            return false;
        }

        self.store
            .put(category.state_key(), &now.to_string())
            .await;
        true
    }
}
