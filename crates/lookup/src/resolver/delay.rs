//! Cancellable debounced delay primitive.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// A single-slot delayed action.
///
/// At most one pending action exists per instance: scheduling again before
/// the delay elapses cancels the previous timer and replaces it. Dropping
/// the instance cancels any pending timer, so teardown is a guaranteed
/// release on every exit path.
#[derive(Debug, Default)]
pub struct DebouncedDelay {
    pending: Option<JoinHandle<()>>,
}

impl DebouncedDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer: run `action` after `delay`, replacing any pending action.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, delay: Duration, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
    }

    /// Clear any pending timer. Safe to call when nothing is pending.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a timer is currently armed and has not yet fired.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DebouncedDelay {
    fn drop(&mut self) {
        self.cancel();
    }
}
