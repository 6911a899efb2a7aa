//! Tabsync Server Entry Point
//!
//! Bootstraps tracing and configuration, loads the workbook file, seeds
//! the state store, and starts the Axum HTTP server.

use std::sync::Arc;

use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tabsync_api::{create_router, ApiConfig, ApiError, ApiResult, AppState, ErrorCode};
use tabsync_core::Workbook;
use tabsync_store::{InMemoryStateStore, StateStore, SECRET_TOKEN_KEY};

#[tokio::main]
async fn main() -> ApiResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env();
    let workbook = load_workbook(&config)?;
    let store = seed_state_store(&config).await;

    let addr = config.bind_addr()?;
    let state = AppState::new(workbook, store, config);
    let app: Router = create_router(state);

    tracing::info!(%addr, "Starting tabsync server");
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        ApiError::new(
            ErrorCode::ServerMisconfigured,
            format!("Failed to bind {addr}: {e}"),
        )
    })?;

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            result.map_err(|e| {
                ApiError::new(ErrorCode::ServerMisconfigured, format!("Server error: {e}"))
            })?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }
    Ok(())
}

/// Load the workbook file named by the configuration, or start empty.
fn load_workbook(config: &ApiConfig) -> ApiResult<Workbook> {
    let Some(path) = &config.workbook_path else {
        tracing::info!("No workbook file configured; starting with an empty store");
        return Ok(Workbook::new());
    };
    let raw = std::fs::read_to_string(path).map_err(|e| {
        ApiError::new(
            ErrorCode::ServerMisconfigured,
            format!("Failed to read workbook {}: {e}", path.display()),
        )
    })?;
    let workbook: Workbook = serde_json::from_str(&raw).map_err(|e| {
        ApiError::new(
            ErrorCode::ServerMisconfigured,
            format!("Invalid workbook {}: {e}", path.display()),
        )
    })?;
    tracing::info!(sheets = workbook.len(), path = %path.display(), "workbook loaded");
    Ok(workbook)
}

/// Build the state store, seeding the secret from the environment when set.
async fn seed_state_store(config: &ApiConfig) -> Arc<dyn StateStore> {
    let store: Arc<dyn StateStore> = Arc::new(InMemoryStateStore::new());
    match &config.seed_secret {
        Some(secret) => store.put(SECRET_TOKEN_KEY, secret).await,
        None => tracing::warn!(
            "TABSYNC_SECRET not set; update requests will fail until a secret is configured"
        ),
    }
    store
}
