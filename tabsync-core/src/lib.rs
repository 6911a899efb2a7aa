//! Tabsync Core - Grid Model and Leaf Algorithms
//!
//! Pure data structures and the leaf operations of the row-sync service:
//! the cell/sheet/workbook grid model, header normalization and resolution,
//! row-identifier generation, and value sanitization. No async, no I/O -
//! coordination and transport live in `tabsync-store` and `tabsync-api`.

pub mod error;
pub mod grid;
pub mod header;
pub mod ident;
pub mod sanitize;

// Re-export commonly used types
pub use error::{GridError, SanitizeError};
pub use grid::{Cell, Sheet, Workbook};
pub use header::{normalize_header, resolve_headers, HeaderMap};
pub use ident::{
    has_row_id_prefix, new_row_id, sheet_has_id_column, ID_COLUMN_HEADER, ROW_ID_PREFIX,
};
pub use sanitize::sanitize;
