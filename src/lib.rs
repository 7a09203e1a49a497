//! nslookup library: record-type specific DNS lookups
//!
//! This library resolves a command tag plus positional arguments (`mx
//! example.com`, `srv xmpp-server tcp example.com`, ...) into one DNS lookup
//! and renders the answer as display lines. All lookups go through a resolver
//! built from an explicit [`TransportConfig`]: either the system resolver
//! configuration, or a single custom nameserver reached over UDP or TCP with a
//! bounded timeout.
//!
//! # Example
//!
//! ```no_run
//! use nslookup::{run_lookup, TransportConfig};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = TransportConfig::custom(
//!     "8.8.8.8:53".parse()?,
//!     nslookup::config::Protocol::Udp,
//!     std::time::Duration::from_secs(2),
//! );
//! let argv = vec!["mx".to_string(), "gmail.com".to_string()];
//! for line in run_lookup(&transport, &argv, &CancellationToken::new()).await? {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod dispatch;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod normalize;
pub mod transport;

// Re-export public API
pub use config::{LogFormat, LogLevel, Opt, TransportConfig};
pub use dispatch::Dispatcher;
pub use dns::{DnsEngine, LookupResult, QueryKind, ResolutionEngine};
pub use error_handling::{DispatchError, LookupError};
pub use normalize::normalize;
pub use run::run_lookup;

// Internal run module (one lookup from argument vector to display lines)
mod run {
    use anyhow::{Context, Result};
    use log::debug;
    use tokio_util::sync::CancellationToken;

    use crate::config::TransportConfig;
    use crate::dispatch::{parse_argv, Dispatcher};
    use crate::dns::DnsEngine;
    use crate::initialization::init_resolver;
    use crate::normalize::normalize;

    /// Runs one lookup and returns its display lines.
    ///
    /// Arguments are validated before the resolver is built, so usage errors
    /// never touch the network.
    ///
    /// # Arguments
    ///
    /// * `transport` - Nameserver, protocol and timeout to query with
    /// * `argv` - Command tag followed by its positional arguments
    /// * `cancel` - Cancels the in-flight query when triggered
    ///
    /// # Errors
    ///
    /// The returned error wraps a `DispatchError` (usage, help or lookup
    /// failure) or an `InitializationError`; use
    /// [`exit_code_for`](crate::app::exit_code_for) to map it to a status.
    pub async fn run_lookup(
        transport: &TransportConfig,
        argv: &[String],
        cancel: &CancellationToken,
    ) -> Result<Vec<String>> {
        let request = parse_argv(argv)?;
        let resolver = init_resolver(transport).context("Failed to initialize DNS resolver")?;
        let dispatcher = Dispatcher::new(DnsEngine::new(resolver));

        let result = dispatcher.execute_with_cancellation(&request, cancel).await?;
        debug!(
            "{} lookup of {} returned {} record(s)",
            request.kind(),
            request.target(),
            result.records.len()
        );
        Ok(normalize(&result))
    }
}
