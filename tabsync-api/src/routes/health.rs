//! Health check endpoints. No authentication required.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health/ping - simple pong response
pub async fn ping() -> &'static str {
    "pong"
}

/// GET /health/live - process alive check
pub async fn live() -> Json<HealthResponse> {
    Json(HealthResponse { status: "alive" })
}
