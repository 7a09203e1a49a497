//! DNS record queries (MX, NS, TXT, SRV).
//!
//! Answers are returned in the order the server sent them; nothing is re-sorted.

use hickory_resolver::proto::rr::{RData, RecordType};

use super::types::{ServiceRecord, WeightedRecord};
use super::validate::{fully_qualified, service_query_name, validate_service_protocol};
use crate::error_handling::{categorize_resolve_error, is_empty_answer, LookupError};
use crate::initialization::LookupResolver;

/// Queries NS (nameserver) records for a domain.
///
/// # Arguments
///
/// * `domain` - The domain to query
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// A vector of nameserver hostnames, empty if the domain has none.
pub async fn lookup_ns_records(
    domain: &str,
    resolver: &LookupResolver,
) -> Result<Vec<String>, LookupError> {
    log::debug!("Querying NS records for {domain}");
    match resolver.lookup(domain, RecordType::NS).await {
        Ok(lookup) => Ok(lookup
            .iter()
            .filter_map(|rdata| {
                if let RData::NS(ns) = rdata {
                    Some(ns.to_utf8())
                } else {
                    None
                }
            })
            .collect()),
        Err(e) if is_empty_answer(&e) => Ok(Vec::new()),
        Err(e) => Err(categorize_resolve_error(domain, &e)),
    }
}

/// Queries TXT (text) records for a domain.
///
/// A TXT record may hold several character-strings; each one becomes its own
/// entry, in record order.
pub async fn lookup_txt_records(
    domain: &str,
    resolver: &LookupResolver,
) -> Result<Vec<String>, LookupError> {
    log::debug!("Querying TXT records for {domain}");
    match resolver.lookup(domain, RecordType::TXT).await {
        Ok(lookup) => Ok(lookup
            .iter()
            .filter_map(|rdata| {
                if let RData::TXT(txt) = rdata {
                    Some(
                        txt.iter()
                            .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                            .collect::<Vec<String>>(),
                    )
                } else {
                    None
                }
            })
            .flatten()
            .collect()),
        Err(e) if is_empty_answer(&e) => Ok(Vec::new()),
        Err(e) => Err(categorize_resolve_error(domain, &e)),
    }
}

/// Queries MX (mail exchanger) records for a domain.
///
/// # Returns
///
/// Host and preference pairs in server order (lower preference = more preferred).
pub async fn lookup_mx_records(
    domain: &str,
    resolver: &LookupResolver,
) -> Result<Vec<WeightedRecord>, LookupError> {
    log::debug!("Querying MX records for {domain}");
    match resolver.lookup(domain, RecordType::MX).await {
        Ok(lookup) => Ok(lookup
            .iter()
            .filter_map(|rdata| {
                if let RData::MX(mx) = rdata {
                    Some(WeightedRecord {
                        host: mx.exchange().to_utf8(),
                        priority: mx.preference(),
                    })
                } else {
                    None
                }
            })
            .collect()),
        Err(e) if is_empty_answer(&e) => Ok(Vec::new()),
        Err(e) => Err(categorize_resolve_error(domain, &e)),
    }
}

/// Queries SRV records of `_service._protocol.name`.
///
/// # Returns
///
/// The canonical name of the service (owner name of the SRV answer, or the
/// queried name when there is none) and its records in server order.
///
/// # Errors
///
/// Returns `LookupError::InvalidProtocol` without querying unless `protocol`
/// is `tcp` or `udp`, or the categorized lookup error.
pub async fn lookup_srv_records(
    service: &str,
    protocol: &str,
    name: &str,
    resolver: &LookupResolver,
) -> Result<(String, Vec<ServiceRecord>), LookupError> {
    validate_service_protocol(protocol)?;
    let query_name = service_query_name(service, protocol, name);
    log::debug!("Querying SRV records for {query_name}");

    match resolver.lookup(query_name.as_str(), RecordType::SRV).await {
        Ok(lookup) => {
            let cname = lookup
                .record_iter()
                .find(|record| record.record_type() == RecordType::SRV)
                .map(|record| record.name().to_utf8())
                .unwrap_or_else(|| fully_qualified(&query_name));
            let records = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::SRV(srv) = rdata {
                        Some(ServiceRecord {
                            target: srv.target().to_utf8(),
                            port: srv.port(),
                            priority: srv.priority(),
                            weight: srv.weight(),
                            cname: cname.clone(),
                        })
                    } else {
                        None
                    }
                })
                .collect();
            Ok((cname, records))
        }
        Err(e) if is_empty_answer(&e) => Ok((fully_qualified(&query_name), Vec::new())),
        Err(e) => Err(categorize_resolve_error(&query_name, &e)),
    }
}
