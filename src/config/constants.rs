//! Configuration constants.
//!
//! Defaults for the transport layer and the CLI shell.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Standard DNS port, used when `--nameserver` omits one.
pub const DNS_PORT: u16 = 53;

/// Default transport timeout in milliseconds.
/// Matches the dial timeout of the lookup tool this utility replaces.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default transport timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(DEFAULT_TIMEOUT_MS);

/// Nameserver used when the system configuration cannot be read.
pub const FALLBACK_NAMESERVER: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), DNS_PORT);

/// Number of query attempts per lookup. The core never retries on its own.
pub const QUERY_ATTEMPTS: usize = 1;

/// Placeholder line for a lookup that succeeded with zero records.
pub const NO_RECORD_LINE: &str = "no record";

/// Prefix of the leading canonical-name line of an SRV lookup.
pub const CNAME_LINE_PREFIX: &str = "cname: ";
