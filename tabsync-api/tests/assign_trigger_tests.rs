//! Integration tests for the identifier-assignment trigger.

mod support;

use std::time::Duration;

use support::{test_state, test_state_with, throttled_config};
use tabsync_api::routes::assign::run_assign;
use tabsync_api::ErrorCode;
use tabsync_core::{has_row_id_prefix, Workbook};
use tabsync_test_utils::{seeded_store, sheet_of};

const LOCK_WAIT: Duration = Duration::from_millis(100);

fn unassigned_workbook() -> Workbook {
    Workbook::from_sheets(vec![
        sheet_of(
            "contacts",
            &[
                &["UUID", "First Name", "Last Name"],
                &["", "Ada", "Lovelace"],
                &["uuid-existing", "Grace", "Hopper"],
                &["", "", ""],
            ],
        ),
        sheet_of("notes", &[&["Title", "Body"], &["", "orphan"]]),
    ])
}

#[tokio::test]
async fn test_assignment_fills_missing_identifiers() {
    let (state, _) = test_state(unassigned_workbook());

    let report = run_assign(&state).await.unwrap();
    assert_eq!(report.sheets_scanned, 2);
    assert_eq!(report.rows_assigned, 1);
    assert_eq!(report.sheets_failed, 0);

    let workbook = state.sheets.acquire(LOCK_WAIT).await.unwrap();
    let contacts = workbook.sheet_by_name("contacts").unwrap();
    let assigned = contacts.value(2, 1).as_text().unwrap().to_string();
    assert!(has_row_id_prefix(&assigned));
    assert_eq!(contacts.value(3, 1).as_text(), Some("uuid-existing"));
    assert!(contacts.value(4, 1).is_empty());

    // The sheet without an identifier column is untouched.
    let notes = workbook.sheet_by_name("notes").unwrap();
    assert!(notes.value(2, 1).is_empty());
}

#[tokio::test]
async fn test_second_pass_assigns_nothing() {
    let (state, clock) = test_state(unassigned_workbook());

    run_assign(&state).await.unwrap();
    clock.advance(500);
    let report = run_assign(&state).await.unwrap();
    assert_eq!(report.rows_assigned, 0);
}

#[tokio::test]
async fn test_trigger_is_rate_limited() {
    let (state, clock) =
        test_state_with(unassigned_workbook(), seeded_store(), throttled_config());

    run_assign(&state).await.unwrap();
    let err = run_assign(&state).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::RateLimited);

    clock.advance(500);
    run_assign(&state).await.unwrap();
}

#[tokio::test]
async fn test_trigger_reports_busy_while_lock_held() {
    let (state, _) = test_state(unassigned_workbook());

    let guard = state.sheets.acquire(LOCK_WAIT).await.unwrap();
    let err = run_assign(&state).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ServerBusy);
    drop(guard);

    run_assign(&state).await.unwrap();
}

#[tokio::test]
async fn test_update_and_assign_windows_are_independent() {
    let (state, _) =
        test_state_with(unassigned_workbook(), seeded_store(), throttled_config());

    // Consuming the assign window leaves the update window open.
    run_assign(&state).await.unwrap();
    let body = serde_json::json!({
        "authToken": tabsync_test_utils::TEST_SECRET,
        "UUID": "uuid-existing",
        "First Name": "Grace",
    })
    .to_string();
    tabsync_api::routes::sync::apply_update(&state, &body)
        .await
        .unwrap();
}
