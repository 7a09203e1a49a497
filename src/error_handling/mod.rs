//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, lookups and dispatch
//! - Categorization of resolver errors into lookup errors
//!
//! Lookup errors are never swallowed: a successful lookup with zero records is
//! represented by an empty result, everything else is a `LookupError`.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_resolve_error, is_empty_answer};
pub use types::{DispatchError, InitializationError, LookupError};
