//! Read-only sheet listing.

use axum::{extract::State, Json};

use tabsync_core::Sheet;

use crate::error::ApiResult;
use crate::state::AppState;
use crate::types::{SheetListResponse, SheetSummary};

/// GET /api/v1/sheets
///
/// Reads go through the same global lock as writes; the store is
/// deliberately single-keyed.
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<SheetListResponse>> {
    let workbook = state
        .sheets
        .acquire(state.config.update_lock_timeout)
        .await?;
    let sheets = workbook.sheets().iter().map(summarize).collect();
    Ok(Json(SheetListResponse { sheets }))
}

fn summarize(sheet: &Sheet) -> SheetSummary {
    SheetSummary {
        name: sheet.name().to_string(),
        rows: sheet.last_row(),
        columns: sheet.last_column(),
    }
}
