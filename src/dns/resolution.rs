//! Address resolution, canonical names and reverse DNS lookup.
//!
//! This module provides functions to resolve hostnames to IP addresses, to
//! find the canonical name of a host and to perform reverse lookups (PTR).

use hickory_resolver::proto::rr::{RData, Record, RecordType};

use super::validate::{fully_qualified, parse_pointer_address};
use crate::error_handling::{categorize_resolve_error, is_empty_answer, LookupError};
use crate::initialization::LookupResolver;

/// Resolves a hostname to all of its IPv4 and IPv6 addresses.
///
/// # Arguments
///
/// * `host` - The hostname to resolve
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// Textual addresses in the order the resolver returned them; an empty vector
/// when the name exists but has no address records.
///
/// # Errors
///
/// Returns the categorized `LookupError` if the lookup fails.
pub async fn resolve_host_addresses(
    host: &str,
    resolver: &LookupResolver,
) -> Result<Vec<String>, LookupError> {
    log::debug!("Resolving addresses of {host}");
    match resolver.lookup_ip(host).await {
        Ok(response) => Ok(response.iter().map(|ip| ip.to_string()).collect()),
        Err(e) if is_empty_answer(&e) => Ok(Vec::new()),
        Err(e) => Err(categorize_resolve_error(host, &e)),
    }
}

/// Resolves a hostname to its IPv6 addresses with a single AAAA query.
pub async fn resolve_ipv6_addresses(
    host: &str,
    resolver: &LookupResolver,
) -> Result<Vec<String>, LookupError> {
    log::debug!("Querying AAAA records for {host}");
    match resolver.lookup(host, RecordType::AAAA).await {
        Ok(lookup) => Ok(lookup
            .iter()
            .filter_map(|rdata| {
                if let RData::AAAA(aaaa) = rdata {
                    Some(aaaa.0.to_string())
                } else {
                    None
                }
            })
            .collect()),
        Err(e) if is_empty_answer(&e) => Ok(Vec::new()),
        Err(e) => Err(categorize_resolve_error(host, &e)),
    }
}

/// Finds the canonical name of a host.
///
/// Resolves the name's IPv4 addresses and reads the alias chain the resolver
/// followed on the way: recursive servers answer a CNAME query with the first
/// alias only, while an address answer carries the whole chain.
///
/// # Returns
///
/// The name ultimately pointed to, or `name` itself with a trailing dot when
/// it is not an alias or has no address records.
///
/// # Errors
///
/// `LookupError::NameNotFound` on NXDOMAIN, or the categorized lookup error.
pub async fn lookup_canonical_name(
    name: &str,
    resolver: &LookupResolver,
) -> Result<String, LookupError> {
    log::debug!("Resolving canonical name of {name}");
    match resolver.lookup(name, RecordType::A).await {
        Ok(lookup) => Ok(end_of_alias_chain(lookup.record_iter(), name)),
        Err(e) if is_empty_answer(&e) => Ok(fully_qualified(name)),
        Err(e) => Err(categorize_resolve_error(name, &e)),
    }
}

/// The owner of the first address record ends the chain; without one the last
/// CNAME target does.
fn end_of_alias_chain<'a>(records: impl Iterator<Item = &'a Record>, name: &str) -> String {
    let mut last_alias = None;
    for record in records {
        match record.data() {
            Some(RData::A(_)) | Some(RData::AAAA(_)) => return record.name().to_utf8(),
            Some(RData::CNAME(cname)) => last_alias = Some(cname.to_utf8()),
            _ => {}
        }
    }
    last_alias.unwrap_or_else(|| fully_qualified(name))
}

/// Performs a reverse DNS lookup (PTR records) for an IP address.
///
/// # Arguments
///
/// * `ip` - The IP address to look up, as an IPv4 or IPv6 literal
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// Every name bound to the address, in answer order.
///
/// # Errors
///
/// Returns `LookupError::InvalidAddress` without querying when `ip` is not an
/// address literal, or the categorized lookup error.
pub async fn reverse_dns_lookup(
    ip: &str,
    resolver: &LookupResolver,
) -> Result<Vec<String>, LookupError> {
    let addr = parse_pointer_address(ip)?;
    log::debug!("Performing reverse lookup of {addr}");
    match resolver.reverse_lookup(addr).await {
        Ok(response) => Ok(response.iter().map(|name| name.to_utf8()).collect()),
        Err(e) if is_empty_answer(&e) => Ok(Vec::new()),
        Err(e) => Err(categorize_resolve_error(ip, &e)),
    }
}
