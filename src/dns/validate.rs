//! Input checks performed before any query is sent.

use std::net::IpAddr;

use crate::error_handling::LookupError;

/// Parses the target of a reverse lookup.
///
/// # Errors
///
/// Returns `LookupError::InvalidAddress` unless `ip` is an IPv4 or IPv6 literal.
pub fn parse_pointer_address(ip: &str) -> Result<IpAddr, LookupError> {
    ip.trim()
        .parse::<IpAddr>()
        .map_err(|_| LookupError::InvalidAddress(ip.to_string()))
}

/// Checks the protocol label of an SRV query.
///
/// # Errors
///
/// Returns `LookupError::InvalidProtocol` unless `protocol` is `tcp` or `udp`.
pub fn validate_service_protocol(protocol: &str) -> Result<(), LookupError> {
    match protocol {
        "tcp" | "udp" => Ok(()),
        other => Err(LookupError::InvalidProtocol(other.to_string())),
    }
}

/// Owner name of an SRV query: `_service._protocol.name`.
pub fn service_query_name(service: &str, protocol: &str, name: &str) -> String {
    format!("_{service}._{protocol}.{name}")
}

/// Presentation form of a name, with its trailing dot.
pub fn fully_qualified(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}
