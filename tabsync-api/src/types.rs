//! Request/response types for the tabsync API

use serde::{Deserialize, Serialize};

use tabsync_store::AssignReport;

// ============================================================================
// SYNC RESPONSE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Structured result of an update request.
///
/// The `code` field carries the embedded status (200/400/401); the HTTP
/// adapter mirrors it as the transport status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncResponse {
    pub status: ResponseStatus,
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<usize>,
}

impl SyncResponse {
    pub fn success(outcome: &UpdateOutcome) -> Self {
        Self {
            status: ResponseStatus::Success,
            code: 200,
            message: format!(
                "Updated {} field(s) for {}",
                outcome.updated, outcome.row_id
            ),
            uuid: Some(outcome.row_id.clone()),
            sheet: Some(outcome.sheet.clone()),
            row: Some(outcome.row),
            updated: Some(outcome.updated),
        }
    }

    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            code,
            message: message.into(),
            uuid: None,
            sheet: None,
            row: None,
            updated: None,
        }
    }
}

/// What an update actually did, before response shaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub row_id: String,
    pub sheet: String,
    pub row: usize,
    pub updated: usize,
}

// ============================================================================
// ASSIGNMENT RESPONSE
// ============================================================================

/// Structured result of an assignment pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignResponse {
    pub status: ResponseStatus,
    pub code: u16,
    pub message: String,
    #[serde(flatten)]
    pub report: AssignReport,
}

impl AssignResponse {
    pub fn success(report: AssignReport) -> Self {
        Self {
            status: ResponseStatus::Success,
            code: 200,
            message: format!(
                "Assigned {} identifier(s) across {} sheet(s)",
                report.rows_assigned, report.sheets_scanned
            ),
            report,
        }
    }
}

// ============================================================================
// SHEET LISTING
// ============================================================================

/// Dimensions of one sheet, for the read-only listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSummary {
    pub name: String,
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetListResponse {
    pub sheets: Vec<SheetSummary>,
}
