//! Persisted key-value state.
//!
//! The service keeps a small amount of durable configuration outside the
//! workbook itself: the shared secret and the per-category rate-limit
//! timestamps. [`StateStore`] is the narrow interface to whatever holds
//! that state; the in-memory implementation backs tests and single-node
//! deployments seeded from the environment.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// State-store key holding the shared secret for the update endpoint.
pub const SECRET_TOKEN_KEY: &str = "sync.secret_token";

/// Narrow key-value interface for persisted service state.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Read a value, or `None` if the key has never been written.
    async fn get(&self, key: &str) -> Option<String>;

    /// Write a value, overwriting any previous one.
    async fn put(&self, key: &str, value: &str);
}

/// In-memory [`StateStore`].
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with entries, wrapped for sharing.
    pub fn seeded<I, K, V>(entries: I) -> Arc<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Arc::new(Self {
            entries: RwLock::new(map),
        })
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    async fn put(&self, key: &str, value: &str) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }
}
