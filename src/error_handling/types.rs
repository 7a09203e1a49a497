//! Error type definitions.
//!
//! This module defines the error types surfaced by initialization, by the
//! resolution engine and by the query dispatcher.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Failures of a single lookup.
///
/// Every variant is terminal for the query it belongs to. A lookup that
/// succeeds with zero records is not an error; see `LookupResult::empty`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The name does not exist (NXDOMAIN).
    #[error("name not found: {0}")]
    NameNotFound(String),

    /// The PTR target is not an IPv4 or IPv6 literal.
    #[error("invalid IP address: {0}")]
    InvalidAddress(String),

    /// The SRV protocol is neither `tcp` nor `udp`.
    #[error("invalid protocol '{0}' (expected tcp or udp)")]
    InvalidProtocol(String),

    /// No answer from the nameserver within the transport timeout.
    #[error("timed out waiting for nameserver: {0}")]
    TransportTimeout(String),

    /// SERVFAIL, REFUSED, a malformed response or any other transport failure.
    #[error("server failure: {0}")]
    ServerFailure(String),

    /// The server does not implement the requested record type (NOTIMP).
    #[error("record type not supported: {0}")]
    NoSuchRecordType(String),

    /// The caller cancelled the lookup before it completed.
    #[error("lookup cancelled")]
    Cancelled,
}

impl LookupError {
    /// Short category label, used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupError::NameNotFound(_) => "name not found",
            LookupError::InvalidAddress(_) => "invalid address",
            LookupError::InvalidProtocol(_) => "invalid protocol",
            LookupError::TransportTimeout(_) => "transport timeout",
            LookupError::ServerFailure(_) => "server failure",
            LookupError::NoSuchRecordType(_) => "no such record type",
            LookupError::Cancelled => "cancelled",
        }
    }
}

/// Error types for command dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Missing or surplus arguments, or an unrecognized command.
    #[error("usage error: {0}")]
    UsageError(String),

    /// The `help` command was given; the caller prints usage text.
    #[error("help requested")]
    HelpRequested,

    /// The lookup itself failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}
