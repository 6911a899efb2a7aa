//! Header resolution.
//!
//! A [`HeaderMap`] is rebuilt from row 1 every time it is needed - header
//! layout may change between operations, so the map is never cached.

use std::collections::HashMap;

use crate::grid::Sheet;

/// Normalize header text for lookup: trimmed, upper-cased.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Ephemeral mapping from normalized header text to 1-based column index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    columns: HashMap<String, usize>,
}

impl HeaderMap {
    /// Look up a column by header name. The query is normalized the same
    /// way the headers were.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.get(&normalize_header(name)).copied()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Build a [`HeaderMap`] from a sheet's header row.
///
/// Blank or whitespace-only headers are not addressable and are skipped.
/// When two headers normalize identically the later column wins silently.
pub fn resolve_headers(sheet: &Sheet) -> HeaderMap {
    let mut columns = HashMap::new();
    for col in 1..=sheet.last_column() {
        let text = sheet.value(1, col).display_text();
        if text.trim().is_empty() {
            continue;
        }
        columns.insert(normalize_header(&text), col);
    }
    HeaderMap { columns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    fn header_sheet(headers: &[&str]) -> Sheet {
        Sheet::from_rows("s", vec![headers.iter().map(|h| Cell::from(*h)).collect()])
    }

    #[test]
    fn test_resolve_maps_case_insensitively() {
        let map = resolve_headers(&header_sheet(&["UUID", "First Name", "Last Name"]));
        assert_eq!(map.column("uuid"), Some(1));
        assert_eq!(map.column("first name"), Some(2));
        assert_eq!(map.column("  Last Name  "), Some(3));
        assert_eq!(map.column("Middle Name"), None);
    }

    #[test]
    fn test_blank_headers_are_skipped() {
        let map = resolve_headers(&header_sheet(&["UUID", "", "   ", "Notes"]));
        assert_eq!(map.len(), 2);
        assert_eq!(map.column("notes"), Some(4));
    }

    // Duplicate headers are not rejected; the later column wins. Pinned as
    // a documented limitation rather than inferred stricter intent.
    #[test]
    fn test_duplicate_headers_last_wins() {
        let map = resolve_headers(&header_sheet(&["UUID", "Name", "name"]));
        assert_eq!(map.column("NAME"), Some(3));
    }

    #[test]
    fn test_non_text_headers_use_display_text() {
        let sheet = Sheet::from_rows(
            "s",
            vec![vec![Cell::from("UUID"), Cell::Number(2024.0), Cell::Bool(true)]],
        );
        let map = resolve_headers(&sheet);
        assert_eq!(map.column("2024"), Some(2));
        assert_eq!(map.column("TRUE"), Some(3));
    }

    #[test]
    fn test_map_reflects_current_layout() {
        let mut sheet = header_sheet(&["UUID", "Name"]);
        assert_eq!(resolve_headers(&sheet).column("name"), Some(2));
        // Headers moved between operations; a fresh resolve sees the change.
        sheet.set(1, 2, Cell::from("Email")).unwrap();
        sheet.set(1, 3, Cell::from("Name")).unwrap();
        let map = resolve_headers(&sheet);
        assert_eq!(map.column("name"), Some(3));
        assert_eq!(map.column("email"), Some(2));
    }
}
