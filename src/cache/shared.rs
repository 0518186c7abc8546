//! Shared Response Cache
//!
//! Thread-safe handle over a [`CacheStore`] used by the request layer and the
//! background reaper.

use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::RwLock;
use tokio::time::Duration;
use tracing::trace;

use crate::cache::{CacheStats, CacheStore};
use crate::tasks::{spawn_reaper, ReaperHandle};

// == Response Cache ==
/// Cloneable handle to a shared cache store.
///
/// `put` and sweeps take the write lock, `get` takes the read lock. The lock
/// is only held for the map access itself, never across network I/O.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    store: Arc<RwLock<CacheStore>>,
    ttl: Duration,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates a cache without a reaper. Entries are only removed by
    /// explicit calls to [`ResponseCache::sweep_expired`].
    pub fn new(ttl: Duration) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::new(ttl))),
            ttl,
        }
    }

    /// Creates a cache and immediately starts its reaper.
    ///
    /// The reaper ticks every `ttl`. Must be called inside a tokio runtime.
    pub fn start(ttl: Duration) -> (Self, ReaperHandle) {
        let cache = Self::new(ttl);
        let reaper = spawn_reaper(cache.clone(), ttl);
        (cache, reaper)
    }

    /// Returns the configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Put ==
    /// Inserts or replaces the body stored under `key`.
    pub async fn put(&self, key: impl Into<String>, value: Bytes) {
        let key = key.into();
        trace!(key = %key, bytes = value.len(), "cache put");
        self.store.write().await.put(key, value);
    }

    // == Get ==
    /// Returns the body stored under `key`, if any, without checking its age.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        self.store.read().await.get(key)
    }

    // == Sweep ==
    /// Runs one expiry sweep and returns the number of entries removed.
    pub async fn sweep_expired(&self) -> usize {
        self.store.write().await.sweep_expired()
    }

    // == Introspection ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Keeps the write lock for `duration`, stalling any sweep that starts meanwhile.
    #[cfg(test)]
    pub(crate) async fn hold_write_lock(&self, duration: Duration) {
        let _guard = self.store.write().await;
        tokio::time::sleep(duration).await;
    }
}
