//! Educational material records and the static column mapping.
//!
//! A [`Record`] is one row of the materials spreadsheet. Records are
//! immutable once built; the store hands out shared references only.

use serde::Serialize;
use std::collections::HashSet;

/// Separator used inside the keyword columns.
pub const KEYWORD_SEPARATOR: char = '/';

// ===== Column =====

/// Canonical record field a spreadsheet column maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Material title. The only required column.
    Title,
    /// Subject category.
    Category,
    /// Difficulty level.
    Difficulty,
    /// Recommended school grade.
    RecommendedGrade,
    /// '/'-delimited general keywords.
    GeneralKeywords,
    /// '/'-delimited major keywords.
    MajorKeywords,
    /// Free-text teaching strategy.
    TeachingStrategy,
    /// Free-text additional example.
    AdditionalExample,
}

impl Column {
    /// Every column, in display order.
    pub const ALL: [Column; 8] = [
        Column::Title,
        Column::Category,
        Column::Difficulty,
        Column::RecommendedGrade,
        Column::GeneralKeywords,
        Column::MajorKeywords,
        Column::TeachingStrategy,
        Column::AdditionalExample,
    ];

    /// Header names accepted for this column.
    ///
    /// The Korean names are the ones used by the source spreadsheet; the
    /// snake_case names allow English exports of the same sheet.
    pub fn header_names(self) -> &'static [&'static str] {
        match self {
            Column::Title => &["교재명", "title"],
            Column::Category => &["카테고리", "category"],
            Column::Difficulty => &["난이도", "difficulty"],
            Column::RecommendedGrade => &["추천 학년", "추천학년", "recommended_grade"],
            Column::GeneralKeywords => &["에듀넷 키워드", "general_keywords"],
            Column::MajorKeywords => &["주요 키워드", "major_keywords"],
            Column::TeachingStrategy => &["교수 전략", "teaching_strategy"],
            Column::AdditionalExample => &["추가예시", "추가 예시", "additional_example"],
        }
    }

    /// Map a raw header cell to a column.
    ///
    /// Surrounding whitespace and a leading byte-order mark are ignored.
    /// ASCII names compare case-insensitively. Returns `None` for columns
    /// the browser does not use.
    pub fn from_header(raw: &str) -> Option<Column> {
        let name = normalize_header(raw);
        Column::ALL.into_iter().find(|column| {
            column
                .header_names()
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(name))
        })
    }

    /// Human-readable label used by the detail pane and text reports.
    pub fn label(self) -> &'static str {
        match self {
            Column::Title => "Title",
            Column::Category => "Category",
            Column::Difficulty => "Difficulty",
            Column::RecommendedGrade => "Recommended grade",
            Column::GeneralKeywords => "General keywords",
            Column::MajorKeywords => "Major keywords",
            Column::TeachingStrategy => "Teaching strategy",
            Column::AdditionalExample => "Additional example",
        }
    }
}

/// Strip whitespace and a UTF-8 BOM from a header cell.
pub fn normalize_header(raw: &str) -> &str {
    raw.trim().trim_start_matches('\u{feff}').trim()
}

/// Split a '/'-delimited keyword cell into trimmed, non-empty tokens.
pub fn split_keywords(raw: &str) -> Vec<&str> {
    raw.split(KEYWORD_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

// ===== Record =====

/// One educational material.
///
/// `title` is the lookup key. Every other field may be empty; missing
/// columns in the source degrade to empty strings (or `None` for the grade).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    title: String,
    category: String,
    difficulty: String,
    recommended_grade: Option<String>,
    general_keywords: String,
    major_keywords: String,
    teaching_strategy: String,
    additional_example: String,
}

impl Record {
    /// Create a record with the given title and every other field empty.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: String::new(),
            difficulty: String::new(),
            recommended_grade: None,
            general_keywords: String::new(),
            major_keywords: String::new(),
            teaching_strategy: String::new(),
            additional_example: String::new(),
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the difficulty.
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    /// Set the recommended grade. An empty string clears it.
    pub fn with_recommended_grade(mut self, grade: impl Into<String>) -> Self {
        let grade = grade.into();
        self.recommended_grade = if grade.is_empty() { None } else { Some(grade) };
        self
    }

    /// Set the raw '/'-delimited general keywords.
    pub fn with_general_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.general_keywords = keywords.into();
        self
    }

    /// Set the raw '/'-delimited major keywords.
    pub fn with_major_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.major_keywords = keywords.into();
        self
    }

    /// Set the teaching strategy.
    pub fn with_teaching_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.teaching_strategy = strategy.into();
        self
    }

    /// Set the additional example.
    pub fn with_additional_example(mut self, example: impl Into<String>) -> Self {
        self.additional_example = example.into();
        self
    }

    /// Set a field by column. Used by the store when mapping rows.
    pub fn with_column(self, column: Column, value: impl Into<String>) -> Self {
        match column {
            Column::Title => Self {
                title: value.into(),
                ..self
            },
            Column::Category => self.with_category(value),
            Column::Difficulty => self.with_difficulty(value),
            Column::RecommendedGrade => self.with_recommended_grade(value),
            Column::GeneralKeywords => self.with_general_keywords(value),
            Column::MajorKeywords => self.with_major_keywords(value),
            Column::TeachingStrategy => self.with_teaching_strategy(value),
            Column::AdditionalExample => self.with_additional_example(value),
        }
    }

    /// Raw value of one column. A missing grade reads as `""`.
    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::Title => self.title.as_str(),
            Column::Category => self.category.as_str(),
            Column::Difficulty => self.difficulty.as_str(),
            Column::RecommendedGrade => self.recommended_grade().unwrap_or_default(),
            Column::GeneralKeywords => self.general_keywords.as_str(),
            Column::MajorKeywords => self.major_keywords.as_str(),
            Column::TeachingStrategy => self.teaching_strategy.as_str(),
            Column::AdditionalExample => self.additional_example.as_str(),
        }
    }

    /// Material title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Subject category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Difficulty level.
    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    /// Recommended grade, if the sheet provides one.
    pub fn recommended_grade(&self) -> Option<&str> {
        self.recommended_grade.as_deref()
    }

    /// Raw general keywords cell.
    pub fn general_keywords(&self) -> &str {
        &self.general_keywords
    }

    /// Raw major keywords cell.
    pub fn major_keywords(&self) -> &str {
        &self.major_keywords
    }

    /// Teaching strategy text.
    pub fn teaching_strategy(&self) -> &str {
        &self.teaching_strategy
    }

    /// Additional example text (empty when the sheet has none).
    pub fn additional_example(&self) -> &str {
        &self.additional_example
    }

    /// General keywords split into tokens.
    pub fn general_keyword_tokens(&self) -> Vec<&str> {
        split_keywords(&self.general_keywords)
    }

    /// Major keywords split into tokens.
    pub fn major_keyword_tokens(&self) -> Vec<&str> {
        split_keywords(&self.major_keywords)
    }

    /// Every value usable as a drill-down tag.
    ///
    /// Order: category, difficulty, grade, general keyword tokens, major
    /// keyword tokens. Empty values are skipped and repeats are dropped.
    pub fn tags(&self) -> Vec<&str> {
        let scalars = [
            self.category.trim(),
            self.difficulty.trim(),
            self.recommended_grade().map(str::trim).unwrap_or_default(),
        ];

        let mut seen = HashSet::new();
        scalars
            .into_iter()
            .chain(self.general_keyword_tokens())
            .chain(self.major_keyword_tokens())
            .filter(|tag| !tag.is_empty() && seen.insert(*tag))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_header_matches_korean_names() {
        assert_eq!(Column::from_header("교재명"), Some(Column::Title));
        assert_eq!(Column::from_header("에듀넷 키워드"), Some(Column::GeneralKeywords));
        assert_eq!(Column::from_header("추가예시"), Some(Column::AdditionalExample));
    }

    #[test]
    fn from_header_ignores_whitespace_and_bom() {
        assert_eq!(Column::from_header("\u{feff}교재명 "), Some(Column::Title));
        assert_eq!(Column::from_header("  난이도\t"), Some(Column::Difficulty));
    }

    #[test]
    fn from_header_english_names_are_case_insensitive() {
        assert_eq!(Column::from_header("Title"), Some(Column::Title));
        assert_eq!(Column::from_header("MAJOR_KEYWORDS"), Some(Column::MajorKeywords));
    }

    #[test]
    fn from_header_unknown_column_is_none() {
        assert_eq!(Column::from_header("비고"), None);
        assert_eq!(Column::from_header(""), None);
    }

    #[test]
    fn split_keywords_trims_and_drops_empty_tokens() {
        assert_eq!(split_keywords(" 분수 / 비율//소수 /"), vec!["분수", "비율", "소수"]);
        assert!(split_keywords("").is_empty());
        assert!(split_keywords(" / ").is_empty());
    }

    #[test]
    fn empty_grade_is_none() {
        let record = Record::new("A").with_recommended_grade("");
        assert_eq!(record.recommended_grade(), None);

        let record = Record::new("A").with_recommended_grade("3학년");
        assert_eq!(record.recommended_grade(), Some("3학년"));
    }

    #[test]
    fn tags_are_ordered_and_deduplicated() {
        let record = Record::new("A")
            .with_category("수학")
            .with_difficulty("Easy")
            .with_recommended_grade("3")
            .with_general_keywords("x / y")
            .with_major_keywords("y/z/수학");

        assert_eq!(record.tags(), vec!["수학", "Easy", "3", "x", "y", "z"]);
    }

    #[test]
    fn tags_skip_empty_scalars() {
        let record = Record::new("A").with_general_keywords("k");
        assert_eq!(record.tags(), vec!["k"]);
    }

    #[test]
    fn with_column_sets_matching_field() {
        let record = Column::ALL
            .into_iter()
            .fold(Record::new(""), |record, column| {
                record.with_column(column, column.label())
            });

        assert_eq!(record.title(), "Title");
        assert_eq!(record.category(), "Category");
        assert_eq!(record.recommended_grade(), Some("Recommended grade"));
        assert_eq!(record.additional_example(), "Additional example");
    }

    #[test]
    fn field_reads_back_every_column() {
        let record = Column::ALL
            .into_iter()
            .fold(Record::new(""), |record, column| {
                record.with_column(column, column.label())
            });

        for column in Column::ALL {
            assert_eq!(record.field(column), column.label());
        }
        assert_eq!(Record::new("A").field(Column::RecommendedGrade), "");
    }
}
