//! Graceful shutdown on Ctrl+C or SIGTERM.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    io,
};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

/// The signal that asked the server to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl Display for ShutdownSignal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Interrupt => f.write_str("ctrl_c"),
            Self::Terminate => f.write_str("terminate"),
        }
    }
}

#[cfg(unix)]
async fn terminate() -> Result<(), ShutdownSignalError> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownSignalError::SigTerm)?
        .recv()
        .await;

    Ok(())
}

#[cfg(not(unix))]
async fn terminate() -> Result<(), ShutdownSignalError> {
    std::future::pending().await
}

async fn wait_for_signal() -> Result<ShutdownSignal, ShutdownSignalError> {
    tokio::select! {
        result = signal::ctrl_c() => {
            result.map_err(ShutdownSignalError::CtrlC)?;

            Ok(ShutdownSignal::Interrupt)
        }
        result = terminate() => {
            result?;

            Ok(ShutdownSignal::Terminate)
        }
    }
}

/// Stop accepting connections once a signal arrives, letting in-flight requests finish.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let received = wait_for_signal().await?;

    info!(signal = %received, "shutdown signal received, draining requests");

    handle.stop_graceful(None);

    Ok(())
}
