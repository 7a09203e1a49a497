//! DNS resolution and record querying.
//!
//! This module provides the resolution engine and the types it produces:
//! - IP address resolution (A/AAAA records)
//! - Canonical names (CNAME) and reverse lookups (PTR)
//! - Nameserver, text, mail exchanger and service queries (NS, TXT, MX, SRV)
//!
//! All operations are async and go through a resolver built from an explicit
//! transport configuration.

mod engine;
mod records;
mod resolution;
mod types;
mod validate;

// Re-export public API
pub use engine::{DnsEngine, ResolutionEngine};
pub use records::{lookup_mx_records, lookup_ns_records, lookup_srv_records, lookup_txt_records};
pub use resolution::{
    lookup_canonical_name, resolve_host_addresses, resolve_ipv6_addresses, reverse_dns_lookup,
};
pub use types::{
    LookupResult, QueryKind, QueryRequest, ResolvedRecord, ServiceQuery, ServiceRecord,
    WeightedRecord,
};
pub use validate::{
    fully_qualified, parse_pointer_address, service_query_name, validate_service_protocol,
};
