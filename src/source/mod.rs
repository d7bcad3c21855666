//! Row sources for the materials table.
//!
//! This module provides the "fetch all rows with header" boundary:
//! - [`RowSource`] trait that any transport can implement
//! - [`CsvSource`] for a CSV export of the spreadsheet on disk
//! - [`StaticSource`] for in-memory tables (embedding and tests)
//!
//! Sources return raw strings only. Column mapping and record construction
//! happen in the store.

use crate::model::StoreError;

pub mod file;

pub use file::CsvSource;

/// Rectangular-ish table of strings as returned by a source.
///
/// `header` is the first row. `rows` may be ragged; the store pads short
/// rows with empty cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Header cells, in source order.
    pub header: Vec<String>,
    /// Data rows, in source order.
    pub rows: Vec<Vec<String>>,
}

/// Anything that can return the full materials table.
///
/// Implementations must re-fetch on every call; the store never caches.
pub trait RowSource {
    /// Fetch the header row and every data row.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SourceUnavailable` when the source cannot be read
    /// or produces no header row.
    fn fetch_rows(&self) -> Result<RawTable, StoreError>;

    /// Short description for logs and the status bar.
    fn describe(&self) -> String;
}

impl<S: RowSource + ?Sized> RowSource for Box<S> {
    fn fetch_rows(&self) -> Result<RawTable, StoreError> {
        (**self).fetch_rows()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// In-memory source returning a fixed table.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    table: Option<RawTable>,
}

impl StaticSource {
    /// Source that returns `header` and `rows` on every fetch.
    pub fn new<H, R, C>(header: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let header = header.into_iter().map(Into::into).collect();
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Self {
            table: Some(RawTable { header, rows }),
        }
    }

    /// Source that always fails, standing in for an unreachable sheet.
    pub fn unavailable() -> Self {
        Self { table: None }
    }
}

impl RowSource for StaticSource {
    fn fetch_rows(&self) -> Result<RawTable, StoreError> {
        match &self.table {
            Some(table) if !table.header.is_empty() => Ok(table.clone()),
            Some(_) => Err(StoreError::unavailable(self.describe(), "no header row")),
            None => Err(StoreError::unavailable(self.describe(), "source not reachable")),
        }
    }

    fn describe(&self) -> String {
        "in-memory table".to_string()
    }
}
