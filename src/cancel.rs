//! Cancellation signal shared between the CLI and the job poller.

use tokio::sync::watch;

/// Triggers cancellation. Cancelling is idempotent.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

/// Observes cancellation; cheap to clone.
#[derive(Debug, Clone)]
pub struct Cancellation {
    rx: watch::Receiver<bool>,
}

pub fn cancellation() -> (CancelHandle, Cancellation) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, Cancellation { rx })
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl Cancellation {
    /// A signal that never fires.
    pub fn never() -> Self {
        let (_, cancellation) = cancellation();
        cancellation
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancelled. Pends forever if the handle is dropped first.
    pub async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_cancel_is_observed() {
        let (handle, cancellation) = cancellation();
        assert!(!cancellation.is_cancelled());
        handle.cancel();
        handle.cancel();
        assert!(cancellation.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_resolves_after_cancel() {
        let (handle, mut cancellation) = cancellation();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            handle.cancel();
        });
        tokio::time::timeout(Duration::from_secs(5), cancellation.cancelled())
            .await
            .expect("cancellation should resolve");
    }

    #[tokio::test(start_paused = true)]
    async fn test_never_does_not_resolve() {
        let mut cancellation = Cancellation::never();
        assert!(!cancellation.is_cancelled());
        let waited = tokio::time::timeout(Duration::from_secs(60), cancellation.cancelled()).await;
        assert!(waited.is_err());
    }
}
