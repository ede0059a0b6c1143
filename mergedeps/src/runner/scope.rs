//! Shared cancellation scope.

use crate::error::MergeError;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

/// Cancellation signal shared by every task of a run.
///
/// Once cancelled it stays cancelled. Tasks observe it at their next
/// suspension point via [`CancelScope::run`].
#[derive(Debug, Clone)]
pub struct CancelScope {
    cancelled_tx: Arc<watch::Sender<bool>>,
}

impl CancelScope {
    /// Creates a scope that is not cancelled.
    pub fn new() -> Self {
        let (cancelled_tx, _) = watch::channel(false);
        Self {
            cancelled_tx: Arc::new(cancelled_tx),
        }
    }

    /// Cancels the scope.
    pub fn cancel(&self) {
        self.cancelled_tx.send_replace(true);
    }

    /// Returns true once the scope is cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.cancelled_tx.borrow()
    }

    /// Completes when the scope is cancelled.
    pub async fn cancelled(&self) {
        let mut cancelled_rx = self.cancelled_tx.subscribe();
        // The sender lives as long as `self`, so this only returns on cancellation.
        let _ = cancelled_rx.wait_for(|cancelled| *cancelled).await;
    }

    /// Runs `future` unless the scope is cancelled first.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Cancelled`] if the scope is cancelled before
    /// `future` completes.
    pub async fn run<F: Future>(&self, future: F) -> Result<F::Output, MergeError> {
        tokio::select! {
            biased;
            () = self.cancelled() => Err(MergeError::Cancelled),
            output = future => Ok(output),
        }
    }

    /// Cancels the scope if `result` is an error, then passes it through.
    pub fn fail_on_error<T>(&self, result: Result<T, MergeError>) -> Result<T, MergeError> {
        if result.is_err() {
            self.cancel();
        }
        result
    }
}

impl Default for CancelScope {
    fn default() -> Self {
        Self::new()
    }
}
