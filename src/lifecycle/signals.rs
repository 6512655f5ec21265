//! OS signal handling.
//!
//! Translates interrupt/terminate signals into a shutdown trigger
//! instead of terminating the process, so the loop stays runnable
//! in-process and the caller decides the exit code.

use crate::lifecycle::Shutdown;

/// Wait for SIGINT or SIGTERM, then trigger shutdown.
///
/// Takes ownership of the coordinator; if a handler cannot be
/// installed this task parks forever rather than dropping the sender,
/// which subscribers would observe as a closed channel.
#[cfg(unix)]
pub async fn shutdown_on_signal(shutdown: Shutdown) {
    use tokio::signal::unix::{signal, SignalKind};

    let interrupt = signal(SignalKind::interrupt());
    let terminate = signal(SignalKind::terminate());

    let (mut interrupt, mut terminate) = match (interrupt, terminate) {
        (Ok(i), Ok(t)) => (i, t),
        (i, t) => {
            if let Err(e) = i {
                tracing::error!(error = %e, "failed to install SIGINT handler");
            }
            if let Err(e) = t {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
            }
            let _park = shutdown;
            std::future::pending::<()>().await;
            unreachable!()
        }
    };

    tokio::select! {
        _ = interrupt.recv() => tracing::info!("received SIGINT, shutting down"),
        _ = terminate.recv() => tracing::info!("received SIGTERM, shutting down"),
    }

    shutdown.trigger();
}

/// Wait for ctrl-c, then trigger shutdown.
#[cfg(not(unix))]
pub async fn shutdown_on_signal(shutdown: Shutdown) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        let _park = shutdown;
        std::future::pending::<()>().await;
        unreachable!()
    }

    tracing::info!("received interrupt, shutting down");
    shutdown.trigger();
}
