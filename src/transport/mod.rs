//! Transport layer for the resolution engine.
//!
//! The engine never opens sockets through the platform defaults on its own:
//! every connection goes through [`TransportRuntimeProvider`], which applies
//! the nameserver override and the connection timeout of a
//! [`TransportConfig`](crate::config::TransportConfig).

mod provider;

pub use provider::TransportRuntimeProvider;
