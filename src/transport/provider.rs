//! Runtime provider that dials the configured nameserver.

use std::future::Future;
use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::name_server::{RuntimeProvider, TokioRuntimeProvider};

use crate::config::TransportConfig;

type DialFuture<T> = Pin<Box<dyn Send + Future<Output = io::Result<T>>>>;

/// Tokio runtime provider whose dial operations honour a [`TransportConfig`].
///
/// With `prefer_custom_resolver` set, the address the engine asks for is
/// ignored and the configured nameserver is dialed instead. Connection
/// establishment is bounded by the configured timeout; exceeding it yields an
/// `io::ErrorKind::TimedOut` error, which surfaces as
/// `LookupError::TransportTimeout`. Sockets are owned by the returned futures
/// and closed on drop, so a cancelled or timed out dial leaks nothing.
#[derive(Clone)]
pub struct TransportRuntimeProvider {
    inner: TokioRuntimeProvider,
    config: Arc<TransportConfig>,
}

impl TransportRuntimeProvider {
    /// Creates a provider for the given transport configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self {
            inner: TokioRuntimeProvider::new(),
            config: Arc::new(config),
        }
    }
}

impl RuntimeProvider for TransportRuntimeProvider {
    type Handle = <TokioRuntimeProvider as RuntimeProvider>::Handle;
    type Timer = <TokioRuntimeProvider as RuntimeProvider>::Timer;
    type Udp = <TokioRuntimeProvider as RuntimeProvider>::Udp;
    type Tcp = <TokioRuntimeProvider as RuntimeProvider>::Tcp;

    fn create_handle(&self) -> Self::Handle {
        self.inner.create_handle()
    }

    fn connect_tcp(&self, server_addr: SocketAddr) -> DialFuture<Self::Tcp> {
        let target = self.config.dial_target(server_addr);
        if target != server_addr {
            log::debug!("Redirecting TCP dial from {server_addr} to {target}");
        }
        let connect = self.inner.connect_tcp(target);
        Box::pin(within_timeout(self.config.timeout, target, connect))
    }

    fn bind_udp(&self, local_addr: SocketAddr, server_addr: SocketAddr) -> DialFuture<Self::Udp> {
        let target = self.config.dial_target(server_addr);
        let local = local_addr_for(local_addr, target);
        let bind = self.inner.bind_udp(local, target);
        Box::pin(within_timeout(self.config.timeout, target, bind))
    }
}

/// Keeps the local port but matches the address family of `target`.
fn local_addr_for(local_addr: SocketAddr, target: SocketAddr) -> SocketAddr {
    if local_addr.is_ipv4() == target.is_ipv4() {
        return local_addr;
    }
    let ip = if target.is_ipv4() {
        IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    } else {
        IpAddr::V6(Ipv6Addr::UNSPECIFIED)
    };
    SocketAddr::new(ip, local_addr.port())
}

async fn within_timeout<T, F>(timeout: Duration, target: SocketAddr, dial: F) -> io::Result<T>
where
    F: Future<Output = io::Result<T>>,
{
    match tokio::time::timeout(timeout, dial).await {
        Ok(result) => result,
        Err(_) => Err(io::Error::new(
            io::ErrorKind::TimedOut,
            format!(
                "connection to {target} timed out after {}ms",
                timeout.as_millis()
            ),
        )),
    }
}
