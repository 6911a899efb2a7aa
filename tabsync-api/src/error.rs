//! Error types for the tabsync API
//!
//! Every failure on the update and assignment paths is converted to a
//! structured response at the handler boundary; nothing propagates as an
//! unhandled fault. The embedded status mapping is deliberately coarse:
//! 401 for auth/config failures, 400 for everything else.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use tabsync_core::{GridError, SanitizeError};
use tabsync_store::LockTimeout;

use crate::types::SyncResponse;

/// Result alias used across the API crate.
pub type ApiResult<T> = Result<T, ApiError>;

// ============================================================================
// ERROR CODE ENUM
// ============================================================================

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The rate-limit window for the call category is still closed.
    /// Transient; retry after the window reopens.
    RateLimited,

    /// The store lock could not be acquired within the bound.
    /// Transient; retry-safe.
    ServerBusy,

    /// No shared secret is configured. Fatal until an operator fixes it.
    ServerMisconfigured,

    /// Client-caused failure: malformed payload, bad identifier,
    /// unknown row, or a rejected value.
    BadRequest,

    /// Missing or mismatched credential.
    Unauthorized,
}

impl ErrorCode {
    /// HTTP status for this error code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::Unauthorized | ErrorCode::ServerMisconfigured => StatusCode::UNAUTHORIZED,
            ErrorCode::RateLimited | ErrorCode::ServerBusy | ErrorCode::BadRequest => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    /// Default message for this error code.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::RateLimited => "Rate limit exceeded; try again shortly",
            ErrorCode::ServerBusy => "Server busy; try again shortly",
            ErrorCode::ServerMisconfigured => "Server is not configured with a secret token",
            ErrorCode::BadRequest => "Invalid request",
            ErrorCode::Unauthorized => "Authentication failed",
        }
    }
}

// ============================================================================
// API ERROR STRUCT
// ============================================================================

/// Structured error for API operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    /// Error code categorizing the failure.
    pub code: ErrorCode,

    /// Human-readable message.
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create an error carrying the code's default message.
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.default_message().to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }

    // ========================================================================
    // Convenience constructors
    // ========================================================================

    pub fn rate_limited() -> Self {
        Self::from_code(ErrorCode::RateLimited)
    }

    pub fn server_busy() -> Self {
        Self::from_code(ErrorCode::ServerBusy)
    }

    pub fn misconfigured() -> Self {
        Self::from_code(ErrorCode::ServerMisconfigured)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }
}

impl From<LockTimeout> for ApiError {
    fn from(timeout: LockTimeout) -> Self {
        Self::new(ErrorCode::ServerBusy, timeout.to_string())
    }
}

impl From<SanitizeError> for ApiError {
    fn from(error: SanitizeError) -> Self {
        Self::bad_request(error.to_string())
    }
}

impl From<GridError> for ApiError {
    fn from(error: GridError) -> Self {
        Self::bad_request(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = SyncResponse::error(status.as_u16(), self.message);
        (status, Json(body)).into_response()
    }
}
