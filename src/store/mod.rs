//! Read-only record store.
//!
//! The store is loaded wholesale from a [`RowSource`] and never mutated. A
//! refresh builds a brand new store and the session swaps it in.

use crate::model::{Column, Record, StoreError};
use crate::source::{RawTable, RowSource};
use chrono::{DateTime, Local};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Column index resolved from a header row.
#[derive(Debug, Clone, Default)]
struct ColumnMap {
    indices: HashMap<Column, usize>,
}

impl ColumnMap {
    /// Map header cells to columns. The first matching header wins.
    fn from_header(header: &[String]) -> Self {
        let mut indices = HashMap::new();
        for (index, cell) in header.iter().enumerate() {
            if let Some(column) = Column::from_header(cell) {
                indices.entry(column).or_insert(index);
            }
        }
        Self { indices }
    }

    fn has(&self, column: Column) -> bool {
        self.indices.contains_key(&column)
    }

    /// Build a record from one row. Missing cells read as empty strings.
    fn record_from_row(&self, row: &[String]) -> Record {
        Column::ALL
            .into_iter()
            .fold(Record::new(String::new()), |record, column| {
                let value = self
                    .indices
                    .get(&column)
                    .and_then(|&index| row.get(index))
                    .map(|cell| cell.trim())
                    .unwrap_or_default();
                record.with_column(column, value)
            })
    }
}

/// Materials loaded from one fetch of the source.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
    origin: String,
    loaded_at: DateTime<Local>,
}

impl RecordStore {
    /// Fetch the table from `source` and build a store.
    ///
    /// Always re-fetches; nothing is cached between calls.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SourceUnavailable` when the source fails, returns
    /// no header, or the header has no title column.
    pub fn load<S: RowSource + ?Sized>(source: &S) -> Result<Self, StoreError> {
        let origin = source.describe();
        debug!(source = %origin, "Fetching materials table");

        let table = source.fetch_rows()?;
        let store = Self::from_table(table, origin)?;

        info!(
            source = %store.origin,
            records = store.len(),
            "Materials loaded"
        );
        Ok(store)
    }

    /// Build a store from an already-fetched table.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SourceUnavailable` when the header is empty or
    /// lacks the title column.
    pub fn from_table(table: RawTable, origin: impl Into<String>) -> Result<Self, StoreError> {
        let origin = origin.into();

        if table.header.iter().all(|cell| cell.trim().is_empty()) {
            return Err(StoreError::unavailable(origin, "no header row"));
        }

        let columns = ColumnMap::from_header(&table.header);
        if !columns.has(Column::Title) {
            return Err(StoreError::unavailable(
                origin,
                format!(
                    "header has no title column (expected one of: {})",
                    Column::Title.header_names().join(", ")
                ),
            ));
        }

        for column in Column::ALL {
            if !columns.has(column) {
                debug!(column = column.label(), "Column missing, defaulting to empty");
            }
        }

        let mut records = Vec::with_capacity(table.rows.len());
        let mut skipped = 0usize;
        for row in &table.rows {
            let record = columns.record_from_row(row);
            if record.title().is_empty() {
                skipped += 1;
                continue;
            }
            records.push(record);
        }

        if skipped > 0 {
            debug!(skipped, "Skipped rows without a title");
        }

        let duplicates = count_duplicate_titles(&records);
        if duplicates > 0 {
            warn!(duplicates, "Materials table contains repeated titles");
        }

        Ok(Self {
            records,
            origin,
            loaded_at: Local::now(),
        })
    }

    /// Store holding `records` as-is. Used for embedding and tests.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records,
            origin: "in-memory records".to_string(),
            loaded_at: Local::now(),
        }
    }

    /// All records, in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record with exactly this title.
    pub fn find_by_title(&self, title: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.title() == title)
    }

    /// Description of the source this store was loaded from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// When the load completed.
    pub fn loaded_at(&self) -> DateTime<Local> {
        self.loaded_at
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::from_records(Vec::new())
    }
}

fn count_duplicate_titles(records: &[Record]) -> usize {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|record| !seen.insert(record.title()))
        .count()
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
