//! CLI shell helpers.
//!
//! This module provides usage text, output writing, exit code selection and
//! Ctrl-C handling used by the `nslookup` binary.

pub mod exit;
pub mod output;
pub mod shutdown;
pub mod usage;

// Re-export public API
pub use exit::{exit_code_for, EXIT_INIT_ERROR, EXIT_LOOKUP_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use output::write_lines;
pub use shutdown::cancel_on_ctrl_c;
pub use usage::{usage_text, write_usage};
