//! Acceptance tests: drilling into tags and walking history.

use crate::state::Selection;
use crate::test_harness::{AcceptanceTestHarness, MATERIALS_FIXTURE};
use crossterm::event::KeyCode;

fn harness() -> AcceptanceTestHarness {
    AcceptanceTestHarness::from_fixture(MATERIALS_FIXTURE).expect("fixture should load")
}

#[test]
fn category_tag_lists_materials_in_category() {
    let mut harness = harness();

    // GIVEN: first material highlighted; its first tag is the category 수학
    // WHEN: user focuses the tags and presses Enter
    harness.send_keys(&[KeyCode::Tab, KeyCode::Enter]);

    // THEN: both math materials are listed
    assert_eq!(
        harness.state().navigation().selection(),
        &Selection::Tag("수학".to_string())
    );
    assert_eq!(
        harness.state().list_items(),
        vec!["피자로 배우는 분수", "분수 카드 게임"]
    );
}

#[test]
fn keyword_tag_matches_substring_of_keyword_cells() {
    let mut harness = harness();
    // open 식물 성장 일기, then pick its 관찰 keyword chip
    harness.send_keys(&[KeyCode::Char('j'), KeyCode::Tab]);
    let tags = harness.state().highlighted_tags();
    let index = tags.iter().position(|t| *t == "관찰").expect("관찰 tag");
    for _ in 0..index {
        harness.send_key(KeyCode::Char('l'));
    }

    harness.send_key(KeyCode::Enter);

    assert_eq!(
        harness.state().list_items(),
        vec!["식물 성장 일기", "날씨 관찰 프로젝트"]
    );
}

#[test]
fn back_and_forward_walk_history() {
    let mut harness = harness();
    harness.search("분수");
    harness.send_key(KeyCode::Enter); // open 피자로 배우는 분수
    harness.send_keys(&[KeyCode::Tab, KeyCode::Enter]); // tag 수학

    // WHEN: back twice
    harness.send_key(KeyCode::Char('b'));
    assert_eq!(
        harness.state().navigation().selection(),
        &Selection::Title("피자로 배우는 분수".to_string())
    );
    harness.send_key(KeyCode::Backspace);

    // THEN: back at the results for the search
    assert_eq!(harness.state().navigation().selection(), &Selection::None);
    assert_eq!(harness.state().navigation().search_text(), "분수");

    // WHEN: forward once
    harness.send_key(KeyCode::Char('f'));
    assert_eq!(
        harness.state().navigation().selection(),
        &Selection::Title("피자로 배우는 분수".to_string())
    );

    let screen = harness.render_to_string();
    assert!(screen.contains("◀1 ▶1"), "{screen}");
}

#[test]
fn clear_resets_search_and_selection() {
    let mut harness = harness();
    harness.search("지도");
    harness.send_key(KeyCode::Enter);

    harness.send_key(KeyCode::Char('x'));

    assert_eq!(harness.state().navigation().search_text(), "");
    assert_eq!(harness.state().navigation().selection(), &Selection::None);
    assert!(!harness.state().navigation().can_go_back());
    let screen = harness.render_to_string();
    assert!(screen.contains("all materials"), "{screen}");
}

#[test]
fn breadcrumb_tracks_position() {
    let mut harness = harness();
    harness.search("날씨");
    harness.send_key(KeyCode::Enter);

    let screen = harness.render_to_string();

    assert!(
        screen.contains("search \"날씨\" > title 날씨 관찰 프로젝트"),
        "{screen}"
    );
}

#[test]
fn help_overlay_opens_and_closes() {
    let mut harness = harness();

    harness.send_key(KeyCode::Char('?'));
    assert!(harness.render_to_string().contains("Keyboard Shortcuts"));

    harness.send_key(KeyCode::Char('?'));
    assert!(!harness.state().help_visible);
}

#[test]
fn q_quits() {
    let mut harness = harness();
    assert!(harness.send_key(KeyCode::Char('q')));
    assert!(!harness.is_running());
}
