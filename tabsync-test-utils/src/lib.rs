//! Tabsync Test Utilities
//!
//! Centralized test infrastructure for the tabsync workspace:
//! - Workbook and sheet fixtures for the common update/assignment scenarios
//! - A seeded state store with the test secret
//! - Proptest generators for cells and identifier sheets

use std::sync::Arc;

use tabsync_core::{Cell, Sheet, Workbook};
use tabsync_store::{InMemoryStateStore, SECRET_TOKEN_KEY};

use proptest::prelude::*;

/// Shared secret used by fixture state stores.
pub const TEST_SECRET: &str = "test-secret";

/// Build a sheet from string rows; `""` becomes an empty cell.
pub fn sheet_of(name: &str, rows: &[&[&str]]) -> Sheet {
    let rows = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    if cell.is_empty() {
                        Cell::Empty
                    } else {
                        Cell::from(*cell)
                    }
                })
                .collect()
        })
        .collect();
    Sheet::from_rows(name, rows)
}

/// The canonical update-scenario sheet: `UUID, First Name, Last Name` with
/// one identified but otherwise blank row.
pub fn contact_sheet() -> Sheet {
    sheet_of(
        "contacts",
        &[
            &["UUID", "First Name", "Last Name"],
            &["uuid-abc", "", ""],
        ],
    )
}

/// A workbook holding [`contact_sheet`] plus a sheet without an identifier
/// column, so lookups have something to skip.
pub fn contact_workbook() -> Workbook {
    Workbook::from_sheets(vec![
        sheet_of(
            "notes",
            &[&["Title", "Body"], &["welcome", "hello there"]],
        ),
        contact_sheet(),
    ])
}

/// In-memory state store pre-seeded with [`TEST_SECRET`].
pub fn seeded_store() -> Arc<InMemoryStateStore> {
    InMemoryStateStore::seeded([(SECRET_TOKEN_KEY, TEST_SECRET)])
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

/// Arbitrary scalar cell, biased toward text.
pub fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        2 => Just(Cell::Empty),
        1 => any::<bool>().prop_map(Cell::Bool),
        2 => (-1000.0f64..1000.0).prop_map(Cell::Number),
        5 => "[a-zA-Z0-9 ]{0,12}".prop_map(Cell::Text),
    ]
}

/// Arbitrary identifier sheet: `UUID` header plus up to seven data rows of
/// up to four columns.
pub fn arb_id_sheet() -> impl Strategy<Value = Sheet> {
    proptest::collection::vec(proptest::collection::vec(arb_cell(), 1..5), 0..8).prop_map(
        |data_rows| {
            let mut rows = vec![vec![
                Cell::from("UUID"),
                Cell::from("Name"),
                Cell::from("Email"),
                Cell::from("Notes"),
            ]];
            rows.extend(data_rows);
            Sheet::from_rows("generated", rows)
        },
    )
}
