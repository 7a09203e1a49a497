//! Process exit codes.

use crate::error_handling::{DispatchError, InitializationError};

/// Lookup completed, including lookups with no records, and `help`.
pub const EXIT_SUCCESS: i32 = 0;
/// The lookup failed.
pub const EXIT_LOOKUP_ERROR: i32 = 1;
/// Bad or missing arguments, or an unknown command.
pub const EXIT_USAGE_ERROR: i32 = 2;
/// The logger or the resolver could not be set up.
pub const EXIT_INIT_ERROR: i32 = 3;

/// Chooses the exit code for a failed run.
///
/// Walks the error chain so that context added with `anyhow` does not hide
/// the underlying error.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    for cause in error.chain() {
        if let Some(dispatch) = cause.downcast_ref::<DispatchError>() {
            return match dispatch {
                DispatchError::HelpRequested => EXIT_SUCCESS,
                DispatchError::UsageError(_) => EXIT_USAGE_ERROR,
                DispatchError::Lookup(_) => EXIT_LOOKUP_ERROR,
            };
        }
        if cause.downcast_ref::<InitializationError>().is_some() {
            return EXIT_INIT_ERROR;
        }
    }
    EXIT_LOOKUP_ERROR
}
