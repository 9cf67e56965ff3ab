use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::signal::ctrl_c;
use tokio::sync::Notify;
use tracing::{info, warn};

#[derive(Clone, Default)]
pub struct ShutdownManager {
    requested: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownManager {
    pub async fn wait_for_shutdown(&self) {
        self.notify.notified().await;
    }

    pub fn shutdown(&self) {
        if !self.requested.swap(true, Ordering::SeqCst) {
            info!("Shutdown signal received, initiating graceful shutdown");
            self.notify.notify_waiters();
        }
    }
}

/// Installs a ctrl-c listener that trips the returned manager.
pub fn setup_shutdown_handler() -> ShutdownManager {
    let manager = ShutdownManager::default();

    let listener = manager.clone();
    tokio::spawn(async move {
        match ctrl_c().await {
            Ok(()) => listener.shutdown(),
            Err(e) => warn!(error = %e, "failed to install ctrl-c handler"),
        }
    });

    manager
}
