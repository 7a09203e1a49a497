//! Query dispatch.
//!
//! Maps a command tag and its positional arguments to exactly one resolution
//! engine operation. Dispatch is stateless: the only thing a [`Dispatcher`]
//! holds is the engine it calls.

mod table;

pub use table::{find_command, Command, CommandEntry, COMMAND_TABLE};

use tokio_util::sync::CancellationToken;

use crate::dns::{LookupResult, QueryKind, QueryRequest, ResolutionEngine};
use crate::error_handling::{DispatchError, LookupError};

/// Validates a command and its arguments into a request.
///
/// # Errors
///
/// - `DispatchError::UsageError` for an unrecognized tag, too few arguments,
///   or an empty SRV service or protocol
/// - `DispatchError::HelpRequested` for `help`
///
/// Arguments beyond the required count are ignored.
pub fn parse_request(tag: &str, args: &[String]) -> Result<QueryRequest, DispatchError> {
    let entry = find_command(tag)
        .ok_or_else(|| DispatchError::UsageError(format!("unknown command '{tag}'")))?;

    if args.len() < entry.arity {
        return Err(DispatchError::UsageError(format!(
            "'{tag}' expects {} argument{} ({}), got {}",
            entry.arity,
            if entry.arity == 1 { "" } else { "s" },
            entry.params,
            args.len()
        )));
    }
    if args.len() > entry.arity {
        log::debug!(
            "Ignoring {} extra argument(s) to '{tag}'",
            args.len() - entry.arity
        );
    }

    let kind = match entry.command {
        Command::Help => return Err(DispatchError::HelpRequested),
        Command::Lookup(kind) => kind,
    };

    if kind == QueryKind::Srv {
        let (service, protocol, name) = (&args[0], &args[1], &args[2]);
        if service.is_empty() || protocol.is_empty() {
            return Err(srv_usage_error());
        }
        return Ok(QueryRequest::service(service, protocol, name));
    }

    QueryRequest::new(kind, args[0].clone()).ok_or_else(srv_usage_error)
}

fn srv_usage_error() -> DispatchError {
    DispatchError::UsageError("'srv' requires a non-empty service and protocol".to_string())
}

/// Dispatches lookup commands to a resolution engine.
pub struct Dispatcher<E> {
    engine: E,
}

impl<E: ResolutionEngine> Dispatcher<E> {
    /// Creates a dispatcher calling `engine`.
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    #[cfg(test)]
    fn engine(&self) -> &E {
        &self.engine
    }

    /// Runs `tag` with its positional `args`.
    ///
    /// Returns the un-normalized engine result; the engine is not called when
    /// the arguments do not validate.
    pub async fn dispatch(&self, tag: &str, args: &[String]) -> Result<LookupResult, DispatchError> {
        let request = parse_request(tag, args)?;
        self.execute(&request).await
    }

    /// Issues the engine call for `request` unless `cancel` fires first, in
    /// which case the lookup fails with `LookupError::Cancelled`.
    ///
    /// The in-flight query future is dropped on cancellation, which releases
    /// its socket.
    pub async fn execute_with_cancellation(
        &self,
        request: &QueryRequest,
        cancel: &CancellationToken,
    ) -> Result<LookupResult, DispatchError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log::debug!("{} lookup of {} cancelled", request.kind(), request.target());
                Err(LookupError::Cancelled.into())
            }
            result = self.execute(request) => result,
        }
    }

    /// Issues the single engine call matching the request's kind.
    ///
    /// # Errors
    ///
    /// `DispatchError::Lookup` when the engine fails, or
    /// `DispatchError::UsageError` for an SRV request without service and
    /// protocol.
    pub async fn execute(&self, request: &QueryRequest) -> Result<LookupResult, DispatchError> {
        let target = request.target();
        let result = match request.kind() {
            QueryKind::A => self.engine.lookup_address(target).await,
            QueryKind::Aaaa => self.engine.lookup_ipv6_address(target).await,
            QueryKind::Cname => self.engine.lookup_canonical_name(target).await,
            QueryKind::Host => self.engine.lookup_host_addresses(target).await,
            QueryKind::Mx => self.engine.lookup_mail_exchangers(target).await,
            QueryKind::Ns => self.engine.lookup_name_servers(target).await,
            QueryKind::Ptr => self.engine.lookup_pointer(target).await,
            QueryKind::Srv => {
                let extra = request.service_query().ok_or_else(srv_usage_error)?;
                self.engine
                    .lookup_service(&extra.service, &extra.protocol, target)
                    .await
            }
            QueryKind::Txt => self.engine.lookup_text(target).await,
        };

        if let Err(e) = &result {
            log::debug!("{} lookup of {target} failed ({}): {e}", request.kind(), e.as_str());
        }
        Ok(result?)
    }
}

/// Validates a full argument vector, command tag first.
///
/// # Errors
///
/// `DispatchError::UsageError` when the vector has fewer than two elements,
/// except for a lone `help`, which gives `DispatchError::HelpRequested`.
/// Otherwise as [`parse_request`].
pub fn parse_argv(argv: &[String]) -> Result<QueryRequest, DispatchError> {
    match argv {
        [tag] if tag == "help" => Err(DispatchError::HelpRequested),
        [tag, args @ ..] if !args.is_empty() => parse_request(tag, args),
        _ => Err(DispatchError::UsageError(
            "expected a command followed by its arguments".to_string(),
        )),
    }
}
