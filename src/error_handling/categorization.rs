//! Resolver error categorization.
//!
//! Maps `hickory-resolver` errors onto the lookup error taxonomy.

use std::io;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::error::ProtoErrorKind;
use hickory_resolver::proto::op::ResponseCode;

use super::types::LookupError;

/// Returns true when the resolver answered successfully but with no records.
///
/// hickory reports an empty NOERROR answer as `NoRecordsFound`; callers turn
/// it into an empty result rather than an error.
pub fn is_empty_answer(error: &ResolveError) -> bool {
    matches!(
        error.kind(),
        ResolveErrorKind::NoRecordsFound {
            response_code: ResponseCode::NoError,
            ..
        }
    )
}

/// Categorizes a `ResolveError` into a `LookupError`.
///
/// # Arguments
///
/// * `target` - The name or address that was queried, kept in the error message
/// * `error` - The resolver error
///
/// # Returns
///
/// The `LookupError` matching the response code or transport condition.
pub fn categorize_resolve_error(target: &str, error: &ResolveError) -> LookupError {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
            ResponseCode::NXDomain => LookupError::NameNotFound(target.to_string()),
            ResponseCode::NotImp => {
                LookupError::NoSuchRecordType(format!("{target} ({response_code})"))
            }
            other => LookupError::ServerFailure(format!("{target} ({other})")),
        },
        ResolveErrorKind::Timeout => LookupError::TransportTimeout(target.to_string()),
        ResolveErrorKind::Io(io_err) if is_timeout(io_err) => {
            LookupError::TransportTimeout(format!("{target}: {io_err}"))
        }
        ResolveErrorKind::Proto(proto) => match proto.kind() {
            ProtoErrorKind::Timeout => LookupError::TransportTimeout(target.to_string()),
            ProtoErrorKind::Io(io_err) if is_timeout(io_err) => {
                LookupError::TransportTimeout(format!("{target}: {io_err}"))
            }
            _ => LookupError::ServerFailure(format!("{target}: {error}")),
        },
        _ => {
            // Messages such as "request timed out" carry no structured kind
            let message = error.to_string();
            if message.contains("timed out") || message.contains("timeout") {
                LookupError::TransportTimeout(format!("{target}: {message}"))
            } else {
                LookupError::ServerFailure(format!("{target}: {message}"))
            }
        }
    }
}

fn is_timeout(error: &io::Error) -> bool {
    error.kind() == io::ErrorKind::TimedOut
}
