//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and for configuring the transport the resolution engine talks through.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT, DEFAULT_TIMEOUT_MS, DNS_PORT, FALLBACK_NAMESERVER};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Network protocol used to reach the nameserver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Protocol {
    /// Datagrams over UDP (default)
    Udp,
    /// Length-prefixed messages over a TCP stream
    Tcp,
}

impl Protocol {
    /// Lowercase name of the protocol, as it appears on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Udp => "udp",
            Protocol::Tcp => "tcp",
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Protocol> for hickory_resolver::config::Protocol {
    fn from(p: Protocol) -> Self {
        match p {
            Protocol::Udp => hickory_resolver::config::Protocol::Udp,
            Protocol::Tcp => hickory_resolver::config::Protocol::Tcp,
        }
    }
}

/// Transport settings handed to the resolution engine.
///
/// Built once at startup and only read afterwards. When
/// `prefer_custom_resolver` is false the engine uses the platform's resolver
/// configuration and `nameserver_address` only serves as the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Nameserver every query is sent to when the custom resolver is preferred
    pub nameserver_address: SocketAddr,
    /// Protocol used to reach the nameserver
    pub protocol: Protocol,
    /// Bound on connection establishment and on each query
    pub timeout: Duration,
    /// Route all traffic to `nameserver_address` instead of the system configuration
    pub prefer_custom_resolver: bool,
}

impl TransportConfig {
    /// Configuration that defers to the system resolver.
    pub fn system(timeout: Duration) -> Self {
        Self {
            nameserver_address: FALLBACK_NAMESERVER,
            protocol: Protocol::Udp,
            timeout,
            prefer_custom_resolver: false,
        }
    }

    /// Configuration that sends every query to `nameserver_address`.
    pub fn custom(nameserver_address: SocketAddr, protocol: Protocol, timeout: Duration) -> Self {
        Self {
            nameserver_address,
            protocol,
            timeout,
            prefer_custom_resolver: true,
        }
    }

    /// Address a connection is actually opened to when the engine asks for `requested`.
    ///
    /// With the custom resolver preferred the requested address is ignored.
    pub fn dial_target(&self, requested: SocketAddr) -> SocketAddr {
        if self.prefer_custom_resolver {
            self.nameserver_address
        } else {
            requested
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::system(DEFAULT_TIMEOUT)
    }
}

/// Parses a nameserver given as `ip` or `ip:port` (`[v6]:port` for IPv6).
///
/// A bare address gets the standard DNS port.
pub fn parse_nameserver(value: &str) -> Result<SocketAddr, String> {
    let value = value.trim();
    if let Ok(addr) = value.parse::<SocketAddr>() {
        return Ok(addr);
    }
    value
        .trim_start_matches('[')
        .trim_end_matches(']')
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DNS_PORT))
        .map_err(|_| format!("invalid nameserver address '{value}' (expected ip or ip:port)"))
}

/// Command-line options.
///
/// Options come first; everything from the first positional argument on is the
/// lookup command and its arguments, handed to the dispatcher untouched.
///
/// # Examples
///
/// ```bash
/// # System resolver
/// nslookup mx gmail.com
///
/// # Dedicated nameserver over TCP with a 2 second timeout
/// nslookup --nameserver 8.8.8.8 --protocol tcp --timeout-ms 2000 srv xmpp-server tcp google.com
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "nslookup",
    about = "Looks up DNS records of a given type.",
    disable_help_subcommand = true
)]
pub struct Opt {
    /// Nameserver to send every query to (ip or ip:port); the system resolver is used when absent
    #[arg(long, value_parser = parse_nameserver)]
    pub nameserver: Option<SocketAddr>,

    /// Protocol used to reach the nameserver: udp|tcp
    #[arg(long, value_enum, default_value_t = Protocol::Udp)]
    pub protocol: Protocol,

    /// Connection and query timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Command followed by its arguments (a, aaaa, cname, host, mx, ns, ptr, srv, txt, help)
    #[arg(trailing_var_arg = true)]
    pub args: Vec<String>,
}

impl Opt {
    /// Builds the transport configuration described by the options.
    pub fn transport_config(&self) -> TransportConfig {
        let timeout = Duration::from_millis(self.timeout_ms);
        match self.nameserver {
            Some(addr) => TransportConfig::custom(addr, self.protocol, timeout),
            None => TransportConfig {
                protocol: self.protocol,
                ..TransportConfig::system(timeout)
            },
        }
    }
}
