//! Row lookup across sheets.

use tabsync_core::{sheet_has_id_column, Workbook};

/// Address of a located row: sheet position in the workbook plus 1-based
/// row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLocation {
    pub sheet: usize,
    pub row: usize,
}

/// Find the row holding `row_id`.
///
/// Sheets are scanned in declaration order and only sheets whose first
/// column is the identifier column participate. Within a sheet, column 1
/// is scanned top-to-bottom from row 2 with an exact string match - no
/// trimming, no case folding. The first match wins; duplicate identifiers
/// across sheets are not detected.
pub fn find_row(workbook: &Workbook, row_id: &str) -> Option<RowLocation> {
    for (index, sheet) in workbook.sheets().iter().enumerate() {
        if !sheet_has_id_column(sheet) {
            continue;
        }
        for row in 2..=sheet.last_row() {
            if sheet.value(row, 1).as_text() == Some(row_id) {
                return Some(RowLocation { sheet: index, row });
            }
        }
    }
    None
}
