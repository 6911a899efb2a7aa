//! API Configuration Module
//!
//! Configuration is loaded from environment variables with defaults from
//! the `constants` module.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_ASSIGN_LOCK_TIMEOUT_MS, DEFAULT_ASSIGN_MIN_INTERVAL_MS, DEFAULT_BIND_HOST,
    DEFAULT_PORT, DEFAULT_UPDATE_LOCK_TIMEOUT_MS, DEFAULT_UPDATE_MIN_INTERVAL_MS,
};
use crate::error::{ApiError, ApiResult, ErrorCode};

/// Runtime configuration for the tabsync server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind host for the HTTP listener.
    pub bind_host: String,

    /// Bind port for the HTTP listener.
    pub port: u16,

    /// Minimum interval between update requests.
    pub update_min_interval: Duration,

    /// Minimum interval between assignment passes.
    pub assign_min_interval: Duration,

    /// Bound on waiting for the store lock on the update path.
    pub update_lock_timeout: Duration,

    /// Bound on waiting for the store lock on the assignment path.
    pub assign_lock_timeout: Duration,

    /// Optional JSON workbook file loaded at startup.
    pub workbook_path: Option<PathBuf>,

    /// Optional secret seeded into the state store at startup.
    pub seed_secret: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_host: DEFAULT_BIND_HOST.to_string(),
            port: DEFAULT_PORT,
            update_min_interval: Duration::from_millis(DEFAULT_UPDATE_MIN_INTERVAL_MS),
            assign_min_interval: Duration::from_millis(DEFAULT_ASSIGN_MIN_INTERVAL_MS),
            update_lock_timeout: Duration::from_millis(DEFAULT_UPDATE_LOCK_TIMEOUT_MS),
            assign_lock_timeout: Duration::from_millis(DEFAULT_ASSIGN_LOCK_TIMEOUT_MS),
            workbook_path: None,
            seed_secret: None,
        }
    }
}

impl ApiConfig {
    /// Create an ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `TABSYNC_BIND`: bind host (default: `0.0.0.0`)
    /// - `TABSYNC_PORT` / `PORT`: bind port (default: `3000`)
    /// - `TABSYNC_UPDATE_MIN_INTERVAL_MS`: update window (default: 1000)
    /// - `TABSYNC_ASSIGN_MIN_INTERVAL_MS`: assignment window (default: 500)
    /// - `TABSYNC_UPDATE_LOCK_TIMEOUT_MS`: update lock bound (default: 10000)
    /// - `TABSYNC_ASSIGN_LOCK_TIMEOUT_MS`: assignment lock bound (default: 5000)
    /// - `TABSYNC_WORKBOOK`: path to a JSON workbook file
    /// - `TABSYNC_SECRET`: secret seeded into the state store
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let bind_host = std::env::var("TABSYNC_BIND").unwrap_or(defaults.bind_host);
        let port = std::env::var("TABSYNC_PORT")
            .ok()
            .or_else(|| std::env::var("PORT").ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);

        Self {
            bind_host,
            port,
            update_min_interval: env_ms(
                "TABSYNC_UPDATE_MIN_INTERVAL_MS",
                defaults.update_min_interval,
            ),
            assign_min_interval: env_ms(
                "TABSYNC_ASSIGN_MIN_INTERVAL_MS",
                defaults.assign_min_interval,
            ),
            update_lock_timeout: env_ms(
                "TABSYNC_UPDATE_LOCK_TIMEOUT_MS",
                defaults.update_lock_timeout,
            ),
            assign_lock_timeout: env_ms(
                "TABSYNC_ASSIGN_LOCK_TIMEOUT_MS",
                defaults.assign_lock_timeout,
            ),
            workbook_path: std::env::var("TABSYNC_WORKBOOK").ok().map(PathBuf::from),
            seed_secret: std::env::var("TABSYNC_SECRET").ok(),
        }
    }

    /// Resolve the listener address.
    pub fn bind_addr(&self) -> ApiResult<SocketAddr> {
        let addr = format!("{}:{}", self.bind_host, self.port);
        addr.parse::<SocketAddr>().map_err(|e| {
            ApiError::new(
                ErrorCode::ServerMisconfigured,
                format!("Invalid bind address {addr}: {e}"),
            )
        })
    }
}

fn env_ms(var: &str, default: Duration) -> Duration {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}
