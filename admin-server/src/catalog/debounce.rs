//! Resettable debounce timer
//!
//! Filter changes re-query from page 1 after a short quiet period; rapid
//! successive changes within the window supersede the pending call instead
//! of issuing overlapping requests. Decoupled from any rendering lifecycle.

use std::future::Future;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// Default quiet period for filter changes
pub const FILTER_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Default)]
pub struct Debouncer {
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to run after `delay`, cancelling any previously
    /// scheduled task that has not fired yet.
    ///
    /// Abort is best-effort: a task past its sleep may already have issued
    /// a request. That race is closed downstream by the feed's generation
    /// check, which discards any result that is no longer the newest.
    pub fn debounce<F>(&self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut pending = self.pending.lock();
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    /// Cancel the pending task, if any
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn later_calls_supersede_pending_ones() {
        let debouncer = Debouncer::new();
        let fired = Arc::new(AtomicUsize::new(0));

        for i in 0..5 {
            let fired = fired.clone();
            debouncer.debounce(Duration::from_millis(30), async move {
                fired.store(i + 1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        tokio::time::sleep(Duration::from_millis(60)).await;
        // Only the last scheduled task fires
        assert_eq!(fired.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn cancel_suppresses_the_pending_task() {
        let debouncer = Debouncer::new();
        let fired = Arc::new(AtomicUsize::new(0));

        {
            let fired = fired.clone();
            debouncer.debounce(Duration::from_millis(20), async move {
                fired.fetch_add(1, Ordering::SeqCst);
            });
        }
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
