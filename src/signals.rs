use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info};

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

use crate::catalog::MaterialCatalog;

/// Shutdown signal types
#[derive(Debug, Clone, Copy)]
pub enum ShutdownSignal {
    /// Graceful shutdown (drain connections)
    Graceful,
}

/// Setup signal handlers for the server
///
/// Returns a broadcast sender for shutdown signals and a join handle for the signal task
///
/// Handles:
/// - SIGTERM/SIGINT: Graceful shutdown
/// - SIGHUP: Re-fetch the material catalog
#[cfg(unix)]
pub fn setup_signal_handlers(
    catalog: Arc<MaterialCatalog>,
) -> (broadcast::Sender<ShutdownSignal>, tokio::task::JoinHandle<()>) {
    let (shutdown_tx, _) = broadcast::channel(16);
    let tx_clone = shutdown_tx.clone();

    let handle = tokio::spawn(async move {
        if let Err(e) = wait_for_signals(catalog, tx_clone).await {
            error!("Failed to install signal handlers: {}", e);
        }
    });

    (shutdown_tx, handle)
}

#[cfg(unix)]
async fn wait_for_signals(
    catalog: Arc<MaterialCatalog>,
    shutdown_tx: broadcast::Sender<ShutdownSignal>,
) -> std::io::Result<()> {
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sighup = signal(SignalKind::hangup())?;

    loop {
        tokio::select! {
            _ = sigterm.recv() => {
                info!("SIGTERM received, initiating graceful shutdown");
                let _ = shutdown_tx.send(ShutdownSignal::Graceful);
                break;
            }
            _ = sigint.recv() => {
                info!("SIGINT received, initiating graceful shutdown");
                let _ = shutdown_tx.send(ShutdownSignal::Graceful);
                break;
            }
            _ = sighup.recv() => {
                info!("SIGHUP received, refreshing material catalog");
                let snapshot = catalog.refresh().await;
                info!(
                    source = snapshot.source.as_str(),
                    materials = snapshot.materials.len(),
                    "Material catalog refreshed"
                );
            }
        }
    }

    Ok(())
}

/// Non-unix platforms: only Ctrl+C is supported
#[cfg(not(unix))]
pub fn setup_signal_handlers(
    _catalog: Arc<MaterialCatalog>,
) -> (broadcast::Sender<ShutdownSignal>, tokio::task::JoinHandle<()>) {
    let (shutdown_tx, _) = broadcast::channel(16);
    let tx_clone = shutdown_tx.clone();

    let handle = tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl+C received, initiating shutdown");
                let _ = tx_clone.send(ShutdownSignal::Graceful);
            }
            Err(e) => {
                error!("Failed to listen for Ctrl+C: {}", e);
            }
        }
    });

    (shutdown_tx, handle)
}
