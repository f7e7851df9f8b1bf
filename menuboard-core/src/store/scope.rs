//! Cancellation scopes for in-flight store actions.
//!
//! A view that starts an action wraps it in [`Scope::run`]. Cancelling the
//! scope drops the pending future, which aborts the HTTP request and
//! guarantees its completion never touches the cache.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct Scope {
    cancelled: Arc<watch::Sender<bool>>,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    pub fn new() -> Self {
        let (cancelled, _) = watch::channel(false);
        Self {
            cancelled: Arc::new(cancelled),
        }
    }

    /// Cancels every pending and future `run` on this scope (and its clones).
    pub fn cancel(&self) {
        self.cancelled.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.borrow()
    }

    /// Drives `action` to completion unless the scope is cancelled first.
    ///
    /// Returns `None` when cancelled; the action's future is dropped.
    pub async fn run<F: Future>(&self, action: F) -> Option<F::Output> {
        let mut cancelled = self.cancelled.subscribe();
        if *cancelled.borrow_and_update() {
            return None;
        }

        tokio::select! {
            biased;
            _ = cancelled.wait_for(|c| *c) => None,
            output = action => Some(output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_run_completes_when_not_cancelled() {
        let scope = Scope::new();
        assert_eq!(scope.run(async { 42 }).await, Some(42));
    }

    #[tokio::test]
    async fn test_cancelled_scope_skips_action() {
        let scope = Scope::new();
        scope.cancel();

        let ran = AtomicBool::new(false);
        let result = scope
            .run(async {
                ran.store(true, Ordering::SeqCst);
            })
            .await;

        assert!(result.is_none());
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_cancel_during_flight_drops_completion() {
        let scope = Scope::new();
        let applied = AtomicBool::new(false);

        let pending = scope.run(async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            applied.store(true, Ordering::SeqCst);
        });
        let canceller = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            scope.clone().cancel();
        };

        let (result, _) = tokio::join!(pending, canceller);
        assert!(result.is_none());
        assert!(!applied.load(Ordering::SeqCst));
        assert!(scope.is_cancelled());
    }
}
