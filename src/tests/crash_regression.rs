//! Regression tests: odd inputs must never panic.

use crate::source::StaticSource;
use crate::test_harness::{AcceptanceTestHarness, MATERIALS_FIXTURE};
use crossterm::event::{KeyCode, KeyModifiers};

const EVERY_KEY: &[KeyCode] = &[
    KeyCode::Char('j'),
    KeyCode::Char('k'),
    KeyCode::Char('g'),
    KeyCode::Char('h'),
    KeyCode::Char('l'),
    KeyCode::Tab,
    KeyCode::Enter,
    KeyCode::Char('b'),
    KeyCode::Char('f'),
    KeyCode::Char('x'),
    KeyCode::Char('r'),
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Home,
    KeyCode::End,
    KeyCode::Backspace,
    KeyCode::Esc,
];

#[test]
fn every_key_on_header_only_table() {
    let source = StaticSource::new(["교재명"], Vec::<Vec<String>>::new());
    let mut harness = AcceptanceTestHarness::from_source(Box::new(source), 80, 24).unwrap();

    harness.send_keys(EVERY_KEY);

    assert!(harness.is_running());
    assert!(harness.render_to_string().contains("No results"));
}

#[test]
fn every_key_on_tiny_terminal() {
    let mut harness = AcceptanceTestHarness::from_fixture_with_size(MATERIALS_FIXTURE, 12, 5).unwrap();

    for key in EVERY_KEY {
        harness.send_key(*key);
        harness.render_to_string();
    }

    assert!(harness.is_running());
}

#[test]
fn shift_g_then_search_resets_cursor() {
    let mut harness = AcceptanceTestHarness::from_fixture(MATERIALS_FIXTURE).unwrap();
    harness.send_key_with_mods(KeyCode::Char('G'), KeyModifiers::SHIFT);
    assert_eq!(harness.state().list_cursor(), 4);

    harness.search("피자");

    assert_eq!(harness.state().list_cursor(), 0);
    harness.render_to_string();
}

#[test]
fn control_characters_while_typing_are_ignored() {
    let mut harness = AcceptanceTestHarness::from_fixture(MATERIALS_FIXTURE).unwrap();
    harness.send_key(KeyCode::Char('/'));

    harness.send_key_with_mods(KeyCode::Char('a'), KeyModifiers::CONTROL);
    harness.send_key(KeyCode::Tab);

    assert_eq!(harness.state().search.draft(), Some(""));
}

#[test]
fn missing_fixture_fails_to_load() {
    let result = AcceptanceTestHarness::from_fixture("tests/fixtures/does_not_exist.csv");
    assert!(matches!(result, Err(crate::model::AppError::Store(_))));
}
