//! CSV export of the materials spreadsheet.
//!
//! The sheet is downloaded as CSV (File → Download → .csv) and read with the
//! `csv` crate. Rows may have differing lengths; the reader runs in flexible
//! mode and the store pads missing cells.

use super::{RawTable, RowSource};
use crate::model::StoreError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CSV file source. Re-reads the file on every fetch.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvSource {
    /// Create a source for a comma-separated file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Use a different field delimiter (e.g. `b'\t'` for TSV exports).
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSource for CsvSource {
    fn fetch_rows(&self) -> Result<RawTable, StoreError> {
        let origin = self.describe();

        if !self.path.exists() {
            return Err(StoreError::unavailable(origin, "file not found"));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_path(&self.path)
            .map_err(|e| StoreError::unavailable(origin.clone(), e))?;

        let mut records = reader.records();

        let header: Vec<String> = match records.next() {
            Some(row) => row
                .map_err(|e| StoreError::unavailable(origin.clone(), e))?
                .iter()
                .map(str::to_string)
                .collect(),
            None => return Err(StoreError::unavailable(origin, "no header row")),
        };

        if header.iter().all(|cell| cell.trim().is_empty()) {
            return Err(StoreError::unavailable(origin, "no header row"));
        }

        let mut rows = Vec::new();
        for row in records {
            let row = row.map_err(|e| StoreError::unavailable(origin.clone(), e))?;
            rows.push(row.iter().map(str::to_string).collect());
        }

        debug!(path = %self.path.display(), rows = rows.len(), "Read CSV export");

        Ok(RawTable { header, rows })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
