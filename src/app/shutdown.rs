//! Ctrl-C handling.

use tokio_util::sync::CancellationToken;

/// Cancels `cancel` when the process receives Ctrl-C.
///
/// The returned task ends on its own once the token is cancelled by anyone,
/// so it never outlives the lookup.
pub fn cancel_on_ctrl_c(cancel: CancellationToken) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                match result {
                    Ok(()) => log::info!("Interrupted, cancelling lookup"),
                    Err(e) => {
                        log::warn!("Failed to listen for Ctrl-C: {e}");
                        return;
                    }
                }
                cancel.cancel();
            }
            _ = cancel.cancelled() => {}
        }
    })
}
