//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (ports, timeouts, output placeholders)
//! - Transport configuration for the resolution engine
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{parse_nameserver, LogFormat, LogLevel, Opt, Protocol, TransportConfig};
