//! DNS resolver initialization.
//!
//! This module builds the resolver the resolution engine queries through, from
//! an explicit [`TransportConfig`] rather than process-wide state.

use std::net::SocketAddr;
use std::sync::Arc;

use hickory_resolver::config::{
    LookupIpStrategy, NameServerConfig, NameServerConfigGroup, ResolverConfig, ResolverOpts,
};
use hickory_resolver::name_server::GenericConnector;
use hickory_resolver::AsyncResolver;

use crate::config::{Protocol, TransportConfig, FALLBACK_NAMESERVER, QUERY_ATTEMPTS};
use crate::error_handling::InitializationError;
use crate::transport::TransportRuntimeProvider;

/// Resolver type used by the resolution engine.
pub type LookupResolver = AsyncResolver<GenericConnector<TransportRuntimeProvider>>;

/// Initializes the DNS resolver described by `transport`.
///
/// With `prefer_custom_resolver` the resolver knows exactly one nameserver,
/// `transport.nameserver_address`, reached over `transport.protocol`, and the
/// hosts file is bypassed. Otherwise the system configuration is read
/// (`/etc/resolv.conf` or the platform equivalent); if that fails the
/// resolver falls back to the configured fallback nameserver.
///
/// Every query is bounded by `transport.timeout` and attempted once.
///
/// # Returns
///
/// A resolver wrapped in `Arc` so it can be shared read-only across tasks.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the configuration is
/// unusable (zero timeout).
pub fn init_resolver(transport: &TransportConfig) -> Result<Arc<LookupResolver>, InitializationError> {
    if transport.timeout.is_zero() {
        return Err(InitializationError::DnsResolverError(
            "timeout must be greater than zero".to_string(),
        ));
    }

    let (config, mut opts) = if transport.prefer_custom_resolver {
        log::debug!(
            "Using nameserver {} over {}",
            transport.nameserver_address,
            transport.protocol
        );
        let mut opts = ResolverOpts::default();
        opts.use_hosts_file = false;
        (
            single_nameserver_config(transport.nameserver_address, transport.protocol),
            opts,
        )
    } else {
        match hickory_resolver::system_conf::read_system_conf() {
            Ok((config, opts)) => {
                let config = restrict_to_protocol(config, transport.protocol);
                log::debug!(
                    "Using system resolver configuration ({} nameservers over {})",
                    config.name_servers().len(),
                    transport.protocol
                );
                (config, opts)
            }
            Err(e) => {
                log::warn!(
                    "Failed to read system resolver configuration: {e}. Falling back to {FALLBACK_NAMESERVER}"
                );
                (
                    single_nameserver_config(FALLBACK_NAMESERVER, transport.protocol),
                    ResolverOpts::default(),
                )
            }
        }
    };

    opts.timeout = transport.timeout;
    opts.attempts = QUERY_ATTEMPTS;
    // Names are queried as given, without search-domain expansion
    opts.ndots = 0;
    opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;

    let provider = TransportRuntimeProvider::new(transport.clone());
    Ok(Arc::new(AsyncResolver::new(
        config,
        opts,
        GenericConnector::new(provider),
    )))
}

fn single_nameserver_config(addr: SocketAddr, protocol: Protocol) -> ResolverConfig {
    let mut config = ResolverConfig::new();
    config.add_name_server(NameServerConfig::new(addr, protocol.into()));
    config
}

/// Keeps only the nameserver entries reached over `protocol`.
///
/// The system configuration lists each nameserver once per protocol. If no
/// entry uses `protocol` the configuration is kept as read.
fn restrict_to_protocol(config: ResolverConfig, protocol: Protocol) -> ResolverConfig {
    let wanted = hickory_resolver::config::Protocol::from(protocol);
    let name_servers: Vec<NameServerConfig> = config
        .name_servers()
        .iter()
        .filter(|ns| ns.protocol == wanted)
        .cloned()
        .collect();

    if name_servers.is_empty() {
        log::warn!(
            "System resolver configuration has no {protocol} nameservers; --protocol {protocol} is ignored"
        );
        return config;
    }

    ResolverConfig::from_parts(
        config.domain().cloned(),
        config.search().to_vec(),
        NameServerConfigGroup::from(name_servers),
    )
}
