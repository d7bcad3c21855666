//! edubrowse
//!
//! Terminal browser for a spreadsheet of educational materials: search by
//! title, drill into categories, difficulty levels, grades and keywords,
//! and walk back and forward through the path taken.
//!
//! Pure Core / Impure Shell: `model`, `store` and `state` are pure; `source`,
//! `view`, `logging` and `report` do I/O.

pub mod config;
pub mod logging;
pub mod model;
pub mod report;
pub mod source;
pub mod state;
pub mod store;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
