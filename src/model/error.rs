//! Error types for edubrowse.
//!
//! The taxonomy is deliberately small. The core has exactly one failure mode,
//! [`StoreError::SourceUnavailable`]; everything else in the navigation and
//! filter engine is a total function. The shell adds configuration, logging
//! and terminal failures, all of which funnel into [`AppError`] through `From`
//! conversions so `?` composes across layers.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error returned from `main`
//!   - [`StoreError`] - the data source could not be read or had no usable header
//!   - [`ConfigError`](crate::config::ConfigError) - config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - tracing setup failures
//!   - [`TuiError`](crate::view::TuiError) - terminal I/O failures
//!
//! # Recovery
//!
//! An empty result set is not an error. A `SourceUnavailable` at startup is
//! fatal; during a user-triggered refresh it is shown in the status bar and
//! the previous records stay on screen. There is no automatic retry.

use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Loading the materials table failed.
    #[error("Failed to load materials: {0}")]
    Store(#[from] StoreError),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Log output could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or rendering failure.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),

    /// Writing report output failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors raised while loading the record store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing source could not be reached, or returned a table without
    /// a usable header row.
    ///
    /// `origin` names the source (a file path, `"in-memory table"`, ...) and
    /// `reason` carries the underlying cause as text.
    ///
    /// ```
    /// use edubrowse::model::StoreError;
    ///
    /// let err = StoreError::unavailable("sheet.csv", "no header row");
    /// assert!(err.to_string().contains("sheet.csv"));
    /// assert!(err.to_string().contains("no header row"));
    /// ```
    #[error("Source unavailable ({origin}): {reason}")]
    SourceUnavailable {
        /// Description of the source that failed.
        origin: String,
        /// Why the load failed.
        reason: String,
    },
}

impl StoreError {
    /// Shorthand for [`StoreError::SourceUnavailable`].
    pub fn unavailable(origin: impl Into<String>, reason: impl ToString) -> Self {
        StoreError::SourceUnavailable {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }
}
