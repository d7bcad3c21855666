//! Derived views over the record store.
//!
//! Both functions are pure: the same navigation state and records always
//! produce the same output. The renderer consumes these and never filters
//! on its own.

use crate::model::Record;
use std::collections::HashSet;
use crate::state::navigation::{NavigationState, Selection};

// ===== Predicates =====

/// Whether `record` matches a tag drill-down.
///
/// Exact match on category, difficulty and grade; case-sensitive substring
/// match on the two raw keyword cells. An empty tag matches nothing.
pub fn matches_tag(record: &Record, tag: &str) -> bool {
    if tag.is_empty() {
        return false;
    }

    record.category() == tag
        || record.difficulty() == tag
        || record.recommended_grade() == Some(tag)
        || record.general_keywords().contains(tag)
        || record.major_keywords().contains(tag)
}

/// Case-insensitive substring match on the title.
///
/// `query_lower` must already be lowercased.
pub fn title_contains(record: &Record, query_lower: &str) -> bool {
    record.title().to_lowercase().contains(query_lower)
}

// ===== Derived views =====

/// Records visible for the current state.
///
/// Precedence, first match wins:
/// 1. `Title(t)`: records titled exactly `t`
/// 2. `Tag(g)`: records matching [`matches_tag`]
/// 3. non-empty trimmed search text: case-insensitive title match
/// 4. everything, in store order
pub fn visible_results<'a>(state: &NavigationState, records: &'a [Record]) -> Vec<&'a Record> {
    match state.selection() {
        Selection::Title(title) => records
            .iter()
            .filter(|record| record.title() == title.as_str())
            .collect(),
        Selection::Tag(tag) => records
            .iter()
            .filter(|record| matches_tag(record, tag))
            .collect(),
        Selection::None => {
            let query = state.current().query();
            if query.is_empty() {
                records.iter().collect()
            } else {
                let query_lower = query.to_lowercase();
                records
                    .iter()
                    .filter(|record| title_contains(record, &query_lower))
                    .collect()
            }
        }
    }
}

/// Autocomplete titles for the committed search text.
///
/// Empty when the search text is blank or a selection is active. Titles are
/// de-duplicated and kept in store order.
pub fn suggestions<'a>(state: &NavigationState, records: &'a [Record]) -> Vec<&'a str> {
    if !state.selection().is_none() {
        return Vec::new();
    }
    title_suggestions(state.current().query(), records)
}

/// Distinct titles containing `query` (case-insensitive), in store order.
///
/// `query` is trimmed first; a blank query suggests nothing. The search bar
/// uses this for the draft while the user is still typing.
pub fn title_suggestions<'a>(query: &str, records: &'a [Record]) -> Vec<&'a str> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let query_lower = query.to_lowercase();
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|record| title_contains(record, &query_lower))
        .map(Record::title)
        .filter(|title| seen.insert(*title))
        .collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
