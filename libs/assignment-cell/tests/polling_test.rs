use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::time::{sleep, Duration};

use assignment_cell::services::PollingCache;

/// Poll for a condition instead of relying on exact timings.
async fn wait_for<T: Clone + Send + Sync + 'static>(
    cache: &PollingCache<T>,
    predicate: impl Fn(&Option<T>) -> bool,
) {
    for _ in 0..200 {
        let latest = cache.latest().await;
        if predicate(&latest) {
            return;
        }
        sleep(Duration::from_millis(10)).await;
    }
    panic!("cache never reached the expected state");
}

#[tokio::test]
async fn first_refresh_populates_the_cache() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let counter = fetches.clone();

    let cache = PollingCache::spawn(Duration::from_secs(3600), move || {
        let counter = counter.clone();
        async move { Ok(counter.fetch_add(1, Ordering::SeqCst) + 1) }
    });

    wait_for(&cache, |latest| *latest == Some(1)).await;
}

#[tokio::test]
async fn invalidate_pulls_the_next_refresh_forward() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let counter = fetches.clone();

    // Hour-long interval: any second refresh can only come from invalidate.
    let cache = PollingCache::spawn(Duration::from_secs(3600), move || {
        let counter = counter.clone();
        async move { Ok(counter.fetch_add(1, Ordering::SeqCst) + 1) }
    });

    wait_for(&cache, |latest| *latest == Some(1)).await;

    cache.invalidate();
    wait_for(&cache, |latest| *latest == Some(2)).await;
}

#[tokio::test]
async fn failed_refresh_keeps_the_last_good_value() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let counter = fetches.clone();

    let cache = PollingCache::spawn(Duration::from_secs(3600), move || {
        let counter = counter.clone();
        async move {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            if n == 1 {
                Ok(n)
            } else {
                Err(anyhow::anyhow!("store unreachable"))
            }
        }
    });

    wait_for(&cache, |latest| *latest == Some(1)).await;

    cache.invalidate();
    // Give the failing refresh time to run, then confirm the stale value
    // is still served.
    while fetches.load(Ordering::SeqCst) < 2 {
        sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(cache.latest().await, Some(1));
}
