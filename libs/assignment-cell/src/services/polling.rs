use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Notify, RwLock};
use tokio::time::Duration;
use tracing::{debug, warn};

/// Fixed-interval refresh cache with manual invalidation, the polling client
/// behind the staffing summary endpoint. The UI tier gets near-real-time
/// state without push notifications: a background task refetches on a timer,
/// and every successful mutation calls `invalidate()` to pull the refresh
/// forward.
///
/// Injected where needed rather than held as an ambient singleton, so tests
/// control timing deterministically. A refresh in flight completes even if
/// the caller that triggered it is gone; there is no cancellation.
pub struct PollingCache<T> {
    latest: RwLock<Option<T>>,
    refresh: Notify,
}

impl<T: Clone + Send + Sync + 'static> PollingCache<T> {
    /// Spawn the refresh loop. A failed fetch is logged and the last good
    /// value stays served until the next tick succeeds.
    pub fn spawn<F, Fut>(interval: Duration, fetch: F) -> Arc<Self>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<T>> + Send,
    {
        let cache = Arc::new(Self {
            latest: RwLock::new(None),
            refresh: Notify::new(),
        });

        let worker = cache.clone();
        tokio::spawn(async move {
            loop {
                match fetch().await {
                    Ok(value) => {
                        *worker.latest.write().await = Some(value);
                        debug!("Polling cache refreshed");
                    }
                    Err(e) => {
                        warn!("Polling cache refresh failed, keeping last value: {}", e);
                    }
                }

                tokio::select! {
                    _ = tokio::time::sleep(interval) => {}
                    _ = worker.refresh.notified() => {
                        debug!("Polling cache invalidated, refreshing early");
                    }
                }
            }
        });

        cache
    }

    /// Last successfully fetched value; `None` until the first refresh lands.
    pub async fn latest(&self) -> Option<T> {
        self.latest.read().await.clone()
    }

    /// Pull the next refresh forward. Called after a successful mutation so
    /// derived views catch up without waiting a full interval.
    pub fn invalidate(&self) {
        self.refresh.notify_one();
    }
}
