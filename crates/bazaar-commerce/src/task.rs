//! Simulated latency for native hosts.
//!
//! A [`DelayedTask`] runs a closure after a fixed delay on the tokio
//! runtime. Dropping the task aborts it, so nothing is delivered to an owner
//! that has gone away.

use std::time::Duration;

use tokio::task::JoinHandle;

use crate::config::{CheckoutConfig, SearchConfig};
use crate::error::CommerceError;
use crate::ids::OrderId;

/// A value produced after an artificial delay.
#[derive(Debug)]
pub struct DelayedTask<T> {
    handle: Option<JoinHandle<T>>,
}

impl<T: Send + 'static> DelayedTask<T> {
    /// Spawn `f` to run after `delay`. Must be called inside a tokio runtime.
    pub fn spawn<F>(delay: Duration, f: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            f()
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Wait for the value.
    pub async fn join(mut self) -> Result<T, CommerceError> {
        let handle = self.handle.take().ok_or(CommerceError::TaskCancelled)?;
        handle.await.map_err(|e| {
            tracing::debug!(error = %e, "delayed task did not complete");
            CommerceError::TaskCancelled
        })
    }

    /// Abort the pending work.
    pub fn cancel(mut self) {
        self.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !handle.is_finished() {
                tracing::debug!("delayed task cancelled");
            }
            handle.abort();
        }
    }
}

impl<T> Drop for DelayedTask<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Simulated order submission: yields a synthetic order id after the
/// configured delay.
pub fn submit_order(config: &CheckoutConfig) -> DelayedTask<OrderId> {
    tracing::info!(delay_ms = config.submit_delay_ms, "submitting order");
    DelayedTask::spawn(
        Duration::from_millis(config.submit_delay_ms),
        OrderId::synthetic,
    )
}

/// Simulated search latency behind the loading indicator.
pub fn search_latency(config: &SearchConfig) -> DelayedTask<()> {
    DelayedTask::spawn(Duration::from_millis(config.loading_delay_ms), || ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_submit_order_yields_synthetic_id() {
        let config = CheckoutConfig { submit_delay_ms: 5 };
        let id = submit_order(&config).join().await.unwrap();
        assert!(id.as_str().starts_with("ORD-"));
    }

    #[tokio::test]
    async fn test_drop_cancels_pending_work() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        let task = DelayedTask::spawn(Duration::from_millis(20), move || {
            flag.store(true, Ordering::SeqCst);
        });
        drop(task);
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_cancel() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        let task = DelayedTask::spawn(Duration::from_millis(20), move || {
            flag.store(true, Ordering::SeqCst);
        });
        assert!(!task.is_finished());
        task.cancel();
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_search_latency_completes() {
        let config = SearchConfig {
            loading_delay_ms: 1,
            per_page: 12,
        };
        assert!(search_latency(&config).join().await.is_ok());
    }
}
