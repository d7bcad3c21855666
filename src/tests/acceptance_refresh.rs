//! Acceptance tests: reloading the table while the app runs.

use crate::state::{Selection, StatusMessage};
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;
use std::fs;
use std::path::PathBuf;

const HEADER: &str = "교재명,카테고리,난이도\n";

fn temp_csv(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "edubrowse_refresh_{}_{name}.csv",
        std::process::id()
    ));
    fs::write(&path, format!("{HEADER}{body}")).expect("write temp csv");
    path
}

#[test]
fn refresh_picks_up_new_rows() {
    let path = temp_csv("grow", "Alpha,Cat1,Easy\n");
    let mut harness =
        AcceptanceTestHarness::from_fixture(path.to_str().unwrap()).expect("temp csv loads");
    assert_eq!(harness.state().store().len(), 1);

    // WHEN: the sheet gains a row and the user presses r
    fs::write(&path, format!("{HEADER}Alpha,Cat1,Easy\nBeta,Cat1,Hard\n")).unwrap();
    harness.send_key(KeyCode::Char('r'));

    // THEN: the new row is listed and the status bar says so
    assert_eq!(harness.state().list_items(), vec!["Alpha", "Beta"]);
    let screen = harness.render_to_string();
    assert!(screen.contains("Reloaded 2 materials"), "{screen}");

    fs::remove_file(path).ok();
}

#[test]
fn refresh_keeps_navigation_state() {
    let path = temp_csv("keep", "Alpha,Cat1,Easy\nBeta,Cat2,Easy\n");
    let mut harness = AcceptanceTestHarness::from_fixture(path.to_str().unwrap()).unwrap();
    harness.send_keys(&[KeyCode::Tab, KeyCode::Char('l'), KeyCode::Enter]);
    assert_eq!(
        harness.state().navigation().selection(),
        &Selection::Tag("Easy".to_string())
    );

    fs::write(&path, format!("{HEADER}Alpha,Cat1,Easy\nBeta,Cat2,Easy\nGamma,Cat3,Easy\n")).unwrap();
    harness.send_key(KeyCode::Char('r'));

    assert_eq!(
        harness.state().navigation().selection(),
        &Selection::Tag("Easy".to_string())
    );
    assert_eq!(harness.state().list_items(), vec!["Alpha", "Beta", "Gamma"]);

    fs::remove_file(path).ok();
}

#[test]
fn failed_refresh_keeps_old_data_and_reports_error() {
    let path = temp_csv("vanish", "Alpha,Cat1,Easy\n");
    let mut harness = AcceptanceTestHarness::from_fixture(path.to_str().unwrap()).unwrap();

    // WHEN: the file disappears before refresh
    fs::remove_file(&path).unwrap();
    harness.send_key(KeyCode::Char('r'));

    // THEN: previous rows remain and the error is visible
    assert_eq!(harness.state().list_items(), vec!["Alpha"]);
    assert!(matches!(
        harness.state().status(),
        Some(StatusMessage::Error(_))
    ));
    let screen = harness.render_to_string();
    assert!(screen.contains("Refresh failed"), "{screen}");
}

#[test]
fn status_message_clears_on_next_navigation() {
    let path = temp_csv("clear_status", "Alpha,Cat1,Easy\n");
    let mut harness = AcceptanceTestHarness::from_fixture(path.to_str().unwrap()).unwrap();
    harness.send_key(KeyCode::Char('r'));
    assert!(harness.state().status().is_some());

    harness.send_key(KeyCode::Enter);

    assert_eq!(harness.state().status(), None);
    fs::remove_file(path).ok();
}

#[test]
fn refresh_dropping_selected_title_shows_no_results() {
    let path = temp_csv("drop_selected", "Alpha,Cat1,Easy\nBeta,Cat2,Easy\n");
    let mut harness = AcceptanceTestHarness::from_fixture(path.to_str().unwrap()).unwrap();
    harness.send_keys(&[KeyCode::Char('j'), KeyCode::Enter]);
    assert_eq!(
        harness.state().navigation().selection(),
        &Selection::Title("Beta".to_string())
    );

    // WHEN: the row is removed from the sheet and the user presses r
    fs::write(&path, format!("{HEADER}Alpha,Cat1,Easy\n")).unwrap();
    harness.send_key(KeyCode::Char('r'));

    // THEN: the selection stays, nothing matches, and the app keeps running
    assert!(harness.is_running());
    assert_eq!(harness.state().store().len(), 1);
    assert_eq!(
        harness.state().navigation().selection(),
        &Selection::Title("Beta".to_string())
    );
    assert!(harness.state().list_items().is_empty());
    assert_eq!(harness.state().highlighted_record(), None);
    let screen = harness.render_to_string();
    assert!(screen.contains("No results"), "{screen}");

    // AND: back still returns to the full list
    harness.send_key(KeyCode::Char('b'));
    assert_eq!(harness.state().list_items(), vec!["Alpha"]);

    fs::remove_file(path).ok();
}
