use dashmap::DashMap;
use resolvd_domain::DomainError;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Rolling-window request counter per client identity.
///
/// Every admitted request schedules a one-shot reset of its identity's
/// counter one window after that request, not on a shared wall-clock
/// boundary. Bursts straddling a window edge can therefore exceed the
/// nominal limit.
pub struct RateLimiter {
    counters: Arc<DashMap<Arc<str>, u32, FxBuildHasher>>,
    limit: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            counters: Arc::new(DashMap::with_hasher(FxBuildHasher::default())),
            limit,
            window,
        }
    }

    /// Counts the request against `identity` and admits or rejects it.
    /// The request that pushes the counter past the limit is rejected
    /// without reaching the resolver and schedules no reset of its own.
    pub fn admit(&self, identity: &str) -> Result<(), DomainError> {
        let key: Arc<str> = Arc::from(identity);

        let count = {
            let mut entry = self.counters.entry(Arc::clone(&key)).or_insert(0);
            *entry += 1;
            *entry
        };

        if count > self.limit {
            warn!(identity = %key, count = count, limit = self.limit, "Rate limit exceeded");
            return Err(DomainError::RateLimited);
        }

        debug!(identity = %key, count = count, "Request admitted");

        let counters = Arc::clone(&self.counters);
        let window = self.window;
        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            counters.remove(&key);
        });

        Ok(())
    }

    /// Number of identities currently tracked.
    pub fn tracked_identities(&self) -> usize {
        self.counters.len()
    }
}
