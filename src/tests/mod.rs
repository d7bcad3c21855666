//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests driving `TuiApp<TestBackend>` with key
//! events against the CSV fixture.

mod acceptance_navigation;
mod acceptance_refresh;
mod crash_regression;
