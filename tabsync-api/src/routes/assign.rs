//! The identifier-assignment trigger.
//!
//! `POST /api/v1/assign` is the hook the hosting platform calls on
//! data-change notifications. Per-sheet failures are logged and swallowed
//! inside the pass; only the rate limiter and the lock can refuse the run.

use axum::{extract::State, Json};

use tabsync_store::{assign_all, AssignReport, RateCategory};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::types::AssignResponse;

/// POST /api/v1/assign
pub async fn run(State(state): State<AppState>) -> ApiResult<Json<AssignResponse>> {
    let report = run_assign(&state).await?;
    Ok(Json(AssignResponse::success(report)))
}

/// Rate-limit, lock, and run one workbook-wide assignment pass.
pub async fn run_assign(state: &AppState) -> ApiResult<AssignReport> {
    if !state
        .limiter
        .try_acquire(RateCategory::Assign, state.config.assign_min_interval)
        .await
    {
        return Err(ApiError::rate_limited());
    }

    let mut workbook = state
        .sheets
        .acquire(state.config.assign_lock_timeout)
        .await?;
    Ok(assign_all(&mut workbook))
}
