//! Tabsync API - HTTP Layer
//!
//! Axum routes and server plumbing over `tabsync-core` and
//! `tabsync-store`: the authenticated row-update endpoint, the
//! identifier-assignment trigger, and the structured error mapping the
//! endpoints share.

pub mod config;
pub mod constants;
pub mod error;
pub mod routes;
pub mod state;
pub mod types;

// Re-export commonly used types
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ErrorCode};
pub use routes::create_router;
pub use state::AppState;
pub use types::{AssignResponse, ResponseStatus, SheetListResponse, SyncResponse, UpdateOutcome};
