//! Query and result types shared by the engine, the dispatcher and the normalizer.

use std::fmt;

use strum_macros::EnumIter;

/// Record type a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum QueryKind {
    /// IPv4 and IPv6 addresses
    A,
    /// IPv6 addresses only
    Aaaa,
    /// Canonical name
    Cname,
    /// Host addresses in textual form
    Host,
    /// Mail exchangers
    Mx,
    /// Nameservers
    Ns,
    /// Reverse lookup of an address
    Ptr,
    /// Service locations
    Srv,
    /// Text strings
    Txt,
}

impl QueryKind {
    /// Record type name as shown in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::A => "A",
            QueryKind::Aaaa => "AAAA",
            QueryKind::Cname => "CNAME",
            QueryKind::Host => "HOST",
            QueryKind::Mx => "MX",
            QueryKind::Ns => "NS",
            QueryKind::Ptr => "PTR",
            QueryKind::Srv => "SRV",
            QueryKind::Txt => "TXT",
        }
    }

    /// Whether an empty answer is shown as the `no record` placeholder.
    ///
    /// CNAME answers are never empty (a name without alias resolves to
    /// itself), HOST prints nothing when empty and SRV always prints its
    /// canonical name line.
    pub fn reports_empty(&self) -> bool {
        !matches!(self, QueryKind::Cname | QueryKind::Host | QueryKind::Srv)
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service and protocol of an SRV query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceQuery {
    /// Service name without the leading underscore
    pub service: String,
    /// `tcp` or `udp`
    pub protocol: String,
}

/// A validated lookup request, built once per invocation.
///
/// The constructors keep the SRV invariant: a request of kind SRV always
/// carries its service and protocol, and no other kind carries one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub(crate) kind: QueryKind,
    pub(crate) target: String,
    pub(crate) extra: Option<ServiceQuery>,
}

impl QueryRequest {
    /// Request for any kind other than SRV.
    ///
    /// Returns `None` for `QueryKind::Srv`, which needs [`service`](Self::service).
    pub fn new(kind: QueryKind, target: impl Into<String>) -> Option<Self> {
        if kind == QueryKind::Srv {
            return None;
        }
        Some(Self {
            kind,
            target: target.into(),
            extra: None,
        })
    }

    /// SRV request for `_service._protocol.name`.
    pub fn service(
        service: impl Into<String>,
        protocol: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            kind: QueryKind::Srv,
            target: name.into(),
            extra: Some(ServiceQuery {
                service: service.into(),
                protocol: protocol.into(),
            }),
        }
    }

    /// Record type to look up.
    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    /// Name to query, or the address for PTR.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Service and protocol; only present for SRV.
    pub fn service_query(&self) -> Option<&ServiceQuery> {
        self.extra.as_ref()
    }
}

/// Mail exchanger with its preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedRecord {
    /// Exchanger host name
    pub host: String,
    /// Lower is more preferred
    pub priority: u16,
}

/// One SRV record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    /// Host providing the service
    pub target: String,
    /// Port the service listens on
    pub port: u16,
    /// Lower is tried first
    pub priority: u16,
    /// Relative share among records of equal priority
    pub weight: u16,
    /// Canonical name of the queried service
    pub cname: String,
}

/// A record as produced by the resolution engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedRecord {
    /// Addresses, names and text strings
    PlainString(String),
    /// MX records
    Weighted(WeightedRecord),
    /// SRV records
    Service(ServiceRecord),
}

impl fmt::Display for ResolvedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedRecord::PlainString(value) => f.write_str(value),
            ResolvedRecord::Weighted(mx) => write!(f, "{} {}", mx.host, mx.priority),
            ResolvedRecord::Service(srv) => write!(
                f,
                "{}:{}:{}:{}",
                srv.target, srv.port, srv.priority, srv.weight
            ),
        }
    }
}

/// Outcome of a successful lookup.
///
/// `empty` is true exactly when the engine returned zero records, which is a
/// successful answer and distinct from a failed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    /// Record type this result answers
    pub kind: QueryKind,
    /// Records in engine order
    pub records: Vec<ResolvedRecord>,
    /// True when `records` is empty
    pub empty: bool,
    /// Canonical name of the queried service (SRV only)
    pub canonical_name: Option<String>,
}

impl LookupResult {
    /// Result holding `records`, with `empty` derived from them.
    pub fn new(kind: QueryKind, records: Vec<ResolvedRecord>) -> Self {
        Self {
            kind,
            empty: records.is_empty(),
            records,
            canonical_name: None,
        }
    }

    /// Result made of plain strings, in the given order.
    pub fn from_strings<I, S>(kind: QueryKind, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            kind,
            values
                .into_iter()
                .map(|value| ResolvedRecord::PlainString(value.into()))
                .collect(),
        )
    }

    /// Attaches the canonical name shown before SRV records.
    pub fn with_canonical_name(mut self, cname: impl Into<String>) -> Self {
        self.canonical_name = Some(cname.into());
        self
    }
}
