use super::CacheKey;
use dashmap::DashMap;
use resolvd_domain::ResourceRecord;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

#[derive(Debug, Default)]
pub struct CacheMetrics {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub insertions: AtomicU64,
    pub evictions: AtomicU64,
}

struct CacheEntry {
    records: Arc<[ResourceRecord]>,
    expires_at: Instant,
    generation: u64,
}

/// Answer cache keyed by (domain, record type), with one fixed lifetime
/// for every entry regardless of the records' own TTLs.
///
/// Each store schedules a one-shot eviction task. The generation counter
/// keeps a stale timer from evicting an entry that was re-stored in the
/// interim; reads additionally check the deadline so an entry past its
/// lifetime is indistinguishable from an absent one even before its
/// eviction task runs.
pub struct ResolutionCache {
    entries: Arc<DashMap<CacheKey, CacheEntry, FxBuildHasher>>,
    ttl: Duration,
    generation: AtomicU64,
    metrics: Arc<CacheMetrics>,
}

impl ResolutionCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::with_hasher(FxBuildHasher::default())),
            ttl,
            generation: AtomicU64::new(0),
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn lookup(&self, key: &CacheKey) -> Option<Arc<[ResourceRecord]>> {
        match self.entries.get(key) {
            Some(entry) if Instant::now() < entry.expires_at => {
                self.metrics.hits.fetch_add(1, Ordering::Relaxed);
                Some(Arc::clone(&entry.records))
            }
            _ => {
                self.metrics.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub fn store(&self, key: CacheKey, records: Arc<[ResourceRecord]>) {
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        let expires_at = Instant::now() + self.ttl;

        self.entries.insert(
            key.clone(),
            CacheEntry {
                records,
                expires_at,
                generation,
            },
        );
        self.metrics.insertions.fetch_add(1, Ordering::Relaxed);

        let entries = Arc::clone(&self.entries);
        let metrics = Arc::clone(&self.metrics);
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            // A refreshed entry carries a newer generation; leave it alone.
            let removed = entries.remove_if(&key, |_, entry| entry.generation == generation);
            if removed.is_some() {
                metrics.evictions.fetch_add(1, Ordering::Relaxed);
                debug!(domain = %key.domain, record_type = %key.record_type, "Cache entry expired");
            }
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }
}
