//! The row-update endpoint.
//!
//! `POST /api/v1/sync` takes a raw JSON body and runs the update state
//! machine: rate limit, lock, config check, parse, auth, identifier
//! validation, row lookup, header resolution, field application. Any step
//! can short-circuit to its error; the lock guard drops on every path.
//!
//! Field application follows payload document order and is not atomic: a
//! rejected value aborts the remaining fields but leaves earlier writes in
//! place. Callers see the failure, never a partial "success".

use axum::{extract::State, Json};
use serde_json::Value;

use tabsync_core::{
    has_row_id_prefix, normalize_header, resolve_headers, sanitize, Cell, ID_COLUMN_HEADER,
    ROW_ID_PREFIX,
};
use tabsync_store::{find_row, RateCategory, SECRET_TOKEN_KEY};

use crate::constants::{AUTH_TOKEN_FIELD, ROW_ID_FIELD};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::types::{SyncResponse, UpdateOutcome};

/// POST /api/v1/sync
pub async fn update(
    State(state): State<AppState>,
    body: String,
) -> ApiResult<Json<SyncResponse>> {
    let outcome = apply_update(&state, &body).await?;
    tracing::info!(
        uuid = %outcome.row_id,
        sheet = %outcome.sheet,
        row = outcome.row,
        updated = outcome.updated,
        "row updated"
    );
    Ok(Json(SyncResponse::success(&outcome)))
}

/// Run the update state machine against the shared state.
///
/// Split from the Axum handler so tests can drive it without a listener.
pub async fn apply_update(state: &AppState, body: &str) -> ApiResult<UpdateOutcome> {
    // 1. Rate limit. Checked strictly before the lock; a refused request
    // never touches the lock at all. The window is consumed here even if
    // the lock acquisition below fails.
    if !state
        .limiter
        .try_acquire(RateCategory::Update, state.config.update_min_interval)
        .await
    {
        return Err(ApiError::rate_limited());
    }

    // 2. Lock. Bounded wait; timeout surfaces as ServerBusy.
    let mut workbook = state
        .sheets
        .acquire(state.config.update_lock_timeout)
        .await?;

    // 3. Config. A missing secret is an operator problem, not a client one.
    let secret = match state.state.get(SECRET_TOKEN_KEY).await {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Err(ApiError::misconfigured()),
    };

    // 4. Parse.
    let payload: Value = serde_json::from_str(body)
        .map_err(|e| ApiError::bad_request(format!("Malformed request body: {e}")))?;
    let fields = payload
        .as_object()
        .ok_or_else(|| ApiError::bad_request("Request body must be a JSON object"))?;

    // 5. Auth. Missing and mismatched get distinct messages, same class.
    match fields.get(AUTH_TOKEN_FIELD).and_then(Value::as_str) {
        None => return Err(ApiError::unauthorized("Missing auth token")),
        Some(token) if token != secret => {
            return Err(ApiError::unauthorized("Invalid auth token"))
        }
        Some(_) => {}
    }

    // 6. Identifier field.
    let row_id = fields
        .get(ROW_ID_FIELD)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ApiError::bad_request(format!("Request must carry a string '{ROW_ID_FIELD}' field"))
        })?;
    if !has_row_id_prefix(row_id) {
        return Err(ApiError::bad_request(format!(
            "'{ROW_ID_FIELD}' must start with '{ROW_ID_PREFIX}'"
        )));
    }

    // 7. Row lookup. A miss is a client error.
    let location = find_row(&workbook, row_id)
        .ok_or_else(|| ApiError::bad_request(format!("No row matches identifier '{row_id}'")))?;

    let sheet = match workbook.sheet_mut(location.sheet) {
        Some(sheet) => sheet,
        None => return Err(ApiError::bad_request("Located sheet is out of range")),
    };
    let sheet_name = sheet.name().to_string();

    // 8. Header resolution, fresh per operation.
    let headers = resolve_headers(sheet);

    // 9. Field application in payload document order.
    let mut updated = 0;
    for (name, value) in fields {
        let normalized = normalize_header(name);
        if normalized == normalize_header(AUTH_TOKEN_FIELD) || normalized == ID_COLUMN_HEADER {
            continue;
        }
        let Some(col) = headers.column(name) else {
            tracing::warn!(field = %name, sheet = %sheet_name, "no matching column; field skipped");
            continue;
        };
        sanitize(name, value)?;
        sheet.set(location.row, col, Cell::from_json(value))?;
        updated += 1;
    }

    Ok(UpdateOutcome {
        row_id: row_id.to_string(),
        sheet: sheet_name,
        row: location.row,
        updated,
    })
}
