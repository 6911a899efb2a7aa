//! Row-identifier assignment.
//!
//! The assignment pass walks a sheet and gives every data row a fresh
//! identifier if it lacks one. Rows that already carry an identifier, and
//! rows with no data at all, are left untouched - re-running the pass on
//! an unchanged sheet performs zero writes.

use serde::Serialize;

use tabsync_core::{new_row_id, sheet_has_id_column, Cell, GridError, Sheet, Workbook};

/// Outcome of one workbook-wide assignment pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AssignReport {
    /// Sheets visited (identifier sheets or not).
    pub sheets_scanned: usize,
    /// Identifiers written across all sheets.
    pub rows_assigned: usize,
    /// Sheets whose pass failed and was skipped.
    pub sheets_failed: usize,
}

/// Assign identifiers to the data rows of one sheet.
///
/// Skips sheets whose first column is not the identifier column, and
/// sheets holding only a header row. Returns the number of identifiers
/// written.
pub fn assign_row_ids(sheet: &mut Sheet) -> Result<usize, GridError> {
    if !sheet_has_id_column(sheet) {
        return Ok(0);
    }
    if sheet.last_row() < 2 {
        return Ok(0);
    }

    let mut assigned = 0;
    for row in 2..=sheet.last_row() {
        if sheet.value(row, 1).is_empty() && row_has_data(sheet, row) {
            sheet.set(row, 1, Cell::Text(new_row_id()))?;
            assigned += 1;
        }
    }
    Ok(assigned)
}

/// Run the assignment pass over every sheet.
///
/// A failure on one sheet is logged and swallowed so it never blocks the
/// remaining sheets - this runs unattended off change notifications.
pub fn assign_all(workbook: &mut Workbook) -> AssignReport {
    let mut report = AssignReport::default();
    for sheet in workbook.sheets_mut() {
        report.sheets_scanned += 1;
        match assign_row_ids(sheet) {
            Ok(count) => {
                if count > 0 {
                    tracing::info!(sheet = %sheet.name(), rows = count, "assigned row identifiers");
                }
                report.rows_assigned += count;
            }
            Err(error) => {
                tracing::warn!(sheet = %sheet.name(), %error, "assignment failed; continuing");
                report.sheets_failed += 1;
            }
        }
    }
    report
}

/// Whether any cell in columns 2..=N of `row` holds data.
fn row_has_data(sheet: &Sheet, row: usize) -> bool {
    (2..=sheet.last_column()).any(|col| !sheet.value(row, col).is_empty())
}
