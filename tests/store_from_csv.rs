//! Integration tests: loading the fixture through the public API.

use edubrowse::source::{CsvSource, RowSource};
use edubrowse::state::{replay, startup_actions, visible_results, Selection};
use edubrowse::store::RecordStore;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/materials.csv");

#[test]
fn fixture_loads_with_korean_headers() {
    let store = RecordStore::load(&CsvSource::new(FIXTURE)).expect("fixture loads");

    assert_eq!(store.len(), 5);
    let pizza = store.find_by_title("피자로 배우는 분수").expect("present");
    assert_eq!(pizza.category(), "수학");
    assert_eq!(pizza.difficulty(), "쉬움");
    assert_eq!(pizza.recommended_grade(), Some("3"));
    assert_eq!(pizza.general_keyword_tokens(), vec!["분수", "피자"]);
    assert_eq!(pizza.teaching_strategy(), "모둠 활동");
}

#[test]
fn csv_source_describes_its_path() {
    assert!(CsvSource::new(FIXTURE).describe().contains("materials.csv"));
}

#[test]
fn grade_tag_matches_exactly() {
    let store = RecordStore::load(&CsvSource::new(FIXTURE)).unwrap();
    let navigation = replay(startup_actions(None, None, Some("4")));

    let titles: Vec<&str> = visible_results(&navigation, store.records())
        .into_iter()
        .map(|r| r.title())
        .collect();

    assert_eq!(navigation.selection(), &Selection::Tag("4".to_string()));
    assert_eq!(titles, vec!["식물 성장 일기", "분수 카드 게임"]);
}

#[test]
fn search_then_tag_then_back_walkthrough() {
    use edubrowse::model::Record;
    use edubrowse::state::{reduce, Action, NavigationState};

    let records = vec![
        Record::new("A").with_category("Cat1").with_difficulty("Easy").with_general_keywords("x/y"),
        Record::new("B").with_category("Cat2").with_difficulty("Easy").with_general_keywords("y/z"),
    ];
    let titles = |state: &NavigationState| -> Vec<String> {
        visible_results(state, &records)
            .into_iter()
            .map(|r| r.title().to_string())
            .collect()
    };

    let state = reduce(NavigationState::new(), Action::CommitSearch("a".to_string()));
    assert_eq!(titles(&state), vec!["A"]);

    let state = reduce(state, Action::SelectTag("Easy".to_string()));
    assert_eq!(titles(&state), vec!["A", "B"]);

    let state = reduce(state, Action::GoBack);
    assert_eq!(state.search_text(), "a");
    assert_eq!(state.selection(), &Selection::None);
    assert_eq!(titles(&state), vec!["A"]);
}
