//! Domain model types (pure).
//!
//! All types in this module are pure data.

pub mod error;
pub mod key_action;
pub mod record;

// Re-export for convenience
pub use error::{AppError, StoreError};
pub use key_action::KeyAction;
pub use record::{split_keywords, Column, Record};
