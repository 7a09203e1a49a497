//! The resolution engine: one operation per record type.

use std::sync::Arc;

use async_trait::async_trait;

use super::records::{lookup_mx_records, lookup_ns_records, lookup_srv_records, lookup_txt_records};
use super::resolution::{
    lookup_canonical_name, resolve_host_addresses, resolve_ipv6_addresses, reverse_dns_lookup,
};
use super::types::{LookupResult, QueryKind, ResolvedRecord};
use crate::error_handling::LookupError;
use crate::initialization::LookupResolver;

/// Lookup operations, one per record type.
///
/// Each call issues at most one logical query and never retries. Failures are
/// returned as `LookupError`; a successful answer without records is a
/// `LookupResult` with `empty` set.
///
/// The dispatcher only talks to this trait, so tests substitute stub engines
/// without touching the network.
#[async_trait]
pub trait ResolutionEngine: Send + Sync {
    /// IPv4 and IPv6 addresses bound to `name`.
    async fn lookup_address(&self, name: &str) -> Result<LookupResult, LookupError>;

    /// IPv6 addresses bound to `name`.
    async fn lookup_ipv6_address(&self, name: &str) -> Result<LookupResult, LookupError>;

    /// Canonical name of `name`; `name.` itself when it is not an alias.
    async fn lookup_canonical_name(&self, name: &str) -> Result<LookupResult, LookupError>;

    /// Textual addresses of `name`.
    async fn lookup_host_addresses(&self, name: &str) -> Result<LookupResult, LookupError>;

    /// Mail exchangers of `name` in server order.
    async fn lookup_mail_exchangers(&self, name: &str) -> Result<LookupResult, LookupError>;

    /// Nameservers of `name`.
    async fn lookup_name_servers(&self, name: &str) -> Result<LookupResult, LookupError>;

    /// Names bound to the address literal `ip`.
    async fn lookup_pointer(&self, ip: &str) -> Result<LookupResult, LookupError>;

    /// SRV records of `_service._protocol.name`, with the service's canonical name.
    async fn lookup_service(
        &self,
        service: &str,
        protocol: &str,
        name: &str,
    ) -> Result<LookupResult, LookupError>;

    /// TXT strings of `name`, one entry per character-string.
    async fn lookup_text(&self, name: &str) -> Result<LookupResult, LookupError>;
}

/// Resolution engine backed by `hickory-resolver`.
#[derive(Clone)]
pub struct DnsEngine {
    resolver: Arc<LookupResolver>,
}

impl DnsEngine {
    /// Creates an engine around an initialized resolver.
    pub fn new(resolver: Arc<LookupResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl ResolutionEngine for DnsEngine {
    async fn lookup_address(&self, name: &str) -> Result<LookupResult, LookupError> {
        let addresses = resolve_host_addresses(name, &self.resolver).await?;
        Ok(LookupResult::from_strings(QueryKind::A, addresses))
    }

    async fn lookup_ipv6_address(&self, name: &str) -> Result<LookupResult, LookupError> {
        let addresses = resolve_ipv6_addresses(name, &self.resolver).await?;
        Ok(LookupResult::from_strings(QueryKind::Aaaa, addresses))
    }

    async fn lookup_canonical_name(&self, name: &str) -> Result<LookupResult, LookupError> {
        let cname = lookup_canonical_name(name, &self.resolver).await?;
        Ok(LookupResult::from_strings(QueryKind::Cname, [cname]))
    }

    async fn lookup_host_addresses(&self, name: &str) -> Result<LookupResult, LookupError> {
        let addresses = resolve_host_addresses(name, &self.resolver).await?;
        Ok(LookupResult::from_strings(QueryKind::Host, addresses))
    }

    async fn lookup_mail_exchangers(&self, name: &str) -> Result<LookupResult, LookupError> {
        let exchangers = lookup_mx_records(name, &self.resolver).await?;
        Ok(LookupResult::new(
            QueryKind::Mx,
            exchangers.into_iter().map(ResolvedRecord::Weighted).collect(),
        ))
    }

    async fn lookup_name_servers(&self, name: &str) -> Result<LookupResult, LookupError> {
        let nameservers = lookup_ns_records(name, &self.resolver).await?;
        Ok(LookupResult::from_strings(QueryKind::Ns, nameservers))
    }

    async fn lookup_pointer(&self, ip: &str) -> Result<LookupResult, LookupError> {
        let names = reverse_dns_lookup(ip, &self.resolver).await?;
        Ok(LookupResult::from_strings(QueryKind::Ptr, names))
    }

    async fn lookup_service(
        &self,
        service: &str,
        protocol: &str,
        name: &str,
    ) -> Result<LookupResult, LookupError> {
        let (cname, records) = lookup_srv_records(service, protocol, name, &self.resolver).await?;
        Ok(LookupResult::new(
            QueryKind::Srv,
            records.into_iter().map(ResolvedRecord::Service).collect(),
        )
        .with_canonical_name(cname))
    }

    async fn lookup_text(&self, name: &str) -> Result<LookupResult, LookupError> {
        let strings = lookup_txt_records(name, &self.resolver).await?;
        Ok(LookupResult::from_strings(QueryKind::Txt, strings))
    }
}
