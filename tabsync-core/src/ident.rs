//! Row identifier generation.

use uuid::Uuid;

use crate::grid::Sheet;
use crate::header::normalize_header;

/// Fixed prefix carried by every row identifier.
pub const ROW_ID_PREFIX: &str = "uuid-";

/// Header text that designates column 1 as the identifier column
/// (compared after normalization).
pub const ID_COLUMN_HEADER: &str = "UUID";

/// Generate a new row identifier: the fixed prefix plus a random v4 UUID.
///
/// Identifiers are opaque; nothing downstream parses past the prefix.
pub fn new_row_id() -> String {
    format!("{ROW_ID_PREFIX}{}", Uuid::new_v4())
}

/// Whether a value carries the identifier prefix.
pub fn has_row_id_prefix(value: &str) -> bool {
    value.starts_with(ROW_ID_PREFIX)
}

/// Whether a sheet designates column 1 as its identifier column.
pub fn sheet_has_id_column(sheet: &Sheet) -> bool {
    normalize_header(&sheet.value(1, 1).display_text()) == ID_COLUMN_HEADER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use std::collections::HashSet;

    #[test]
    fn test_generated_ids_carry_prefix() {
        let id = new_row_id();
        assert!(has_row_id_prefix(&id));
        assert!(id.len() > ROW_ID_PREFIX.len());
    }

    #[test]
    fn test_generated_ids_are_pairwise_distinct() {
        let ids: HashSet<String> = (0..256).map(|_| new_row_id()).collect();
        assert_eq!(ids.len(), 256);
    }

    #[test]
    fn test_prefix_check_is_exact() {
        assert!(has_row_id_prefix("uuid-abc"));
        assert!(!has_row_id_prefix("UUID-abc"));
        assert!(!has_row_id_prefix(" uuid-abc"));
        assert!(!has_row_id_prefix("abc"));
    }

    #[test]
    fn test_id_column_detection_normalizes() {
        let yes = Sheet::from_rows("s", vec![vec![Cell::from("  uuid ")]]);
        assert!(sheet_has_id_column(&yes));
        let no = Sheet::from_rows("s", vec![vec![Cell::from("Name")]]);
        assert!(!sheet_has_id_column(&no));
        assert!(!sheet_has_id_column(&Sheet::new("empty")));
    }
}
