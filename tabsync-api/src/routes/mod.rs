//! REST API Routes Module
//!
//! - `POST /api/v1/sync` - authenticated row update by identifier
//! - `POST /api/v1/assign` - change-notification hook; assigns identifiers
//! - `GET /api/v1/sheets` - read-only sheet listing
//! - `GET /health/*` - liveness endpoints, no auth

pub mod assign;
pub mod health;
pub mod sheets;
pub mod sync;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the API router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/sync", post(sync::update))
        .route("/api/v1/assign", post(assign::run))
        .route("/api/v1/sheets", get(sheets::list))
        .route("/health/ping", get(health::ping))
        .route("/health/live", get(health::live))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
