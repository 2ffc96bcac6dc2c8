//! Shutdown signal helpers.
//!
//! Shutdown is a `watch` channel carrying `true` once raised. A dropped
//! sender counts as raised, so tasks never outlive their owner.

use tokio::sync::watch;

/// Resolves once shutdown is raised or the sender is gone.
pub async fn shutdown_requested(shutdown: &mut watch::Receiver<bool>) {
    let _ = shutdown.wait_for(|stop| *stop).await;
}

/// Non-blocking check of the shutdown signal.
#[must_use]
pub fn is_shutdown(shutdown: &watch::Receiver<bool>) -> bool {
    *shutdown.borrow() || shutdown.has_changed().is_err()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn raised_signal_resolves_immediately() {
        let (tx, mut rx) = watch::channel(false);
        assert!(!is_shutdown(&rx));

        tx.send_replace(true);
        shutdown_requested(&mut rx).await;
        assert!(is_shutdown(&rx));
    }

    #[tokio::test]
    async fn dropped_sender_counts_as_shutdown() {
        let (tx, mut rx) = watch::channel(false);
        drop(tx);

        shutdown_requested(&mut rx).await;
        assert!(is_shutdown(&rx));
    }
}
