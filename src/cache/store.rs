//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with an expiry queue.

use std::collections::HashMap;

use bytes::Bytes;
use tokio::time::{Duration, Instant};

use crate::cache::{CacheEntry, CacheStats, ExpiryQueue, StatsCounters};

// == Cache Store ==
/// Key to response-body storage with sweep-based TTL expiration.
///
/// Lookups never check freshness. Stale entries stay visible until a sweep
/// removes them.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Creation-ordered keys for sweeping
    expiry: ExpiryQueue,
    /// Performance statistics
    stats: StatsCounters,
    /// Age at which an entry becomes eligible for removal
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            expiry: ExpiryQueue::new(),
            stats: StatsCounters::new(),
            ttl,
        }
    }

    /// Returns the configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Put ==
    /// Inserts or replaces the entry for `key`, stamped with the current time.
    pub fn put(&mut self, key: String, value: Bytes) {
        self.put_at(key, value, Instant::now());
    }

    /// Inserts or replaces the entry for `key` with an explicit timestamp.
    pub fn put_at(&mut self, key: String, value: Bytes, created_at: Instant) {
        self.expiry.push(&key, created_at);
        self.entries
            .insert(key, CacheEntry::with_created_at(value, created_at));
    }

    // == Get ==
    /// Returns the stored body if `key` is present, regardless of its age.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Sweep Expired ==
    /// Removes every entry whose age is at least the TTL as of now.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        self.sweep_expired_at(Instant::now())
    }

    /// Removes every entry whose age is at least the TTL as of `now`.
    ///
    /// Only expired heads of the expiry queue are inspected. A popped pair
    /// whose timestamp differs from the live entry belongs to a replaced
    /// insert and is dropped without touching the map.
    pub fn sweep_expired_at(&mut self, now: Instant) -> usize {
        let mut removed = 0;

        while let Some((created_at, key)) = self.expiry.pop_expired(now, self.ttl) {
            let is_current = self
                .entries
                .get(&key)
                .is_some_and(|entry| entry.created_at == created_at);

            if is_current {
                self.entries.remove(&key);
                removed += 1;
            }
        }

        self.stats.record_evictions(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(300);

    fn body(s: &'static str) -> Bytes {
        Bytes::from_static(s.as_bytes())
    }

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(TTL);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl(), TTL);
    }

    #[test]
    fn test_store_put_and_get() {
        let mut store = CacheStore::new(TTL);

        store.put("key1".to_string(), body("value1"));

        assert_eq!(store.get("key1"), Some(body("value1")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let store = CacheStore::new(TTL);
        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_get_ignores_age() {
        let start = Instant::now();
        let mut store = CacheStore::new(TTL);

        store.put_at("stale".to_string(), body("old"), start);

        // No sweep has run, so the entry is still served
        assert_eq!(store.get("stale"), Some(body("old")));
    }

    #[test]
    fn test_sweep_removes_at_boundary_only() {
        let start = Instant::now();
        let mut store = CacheStore::new(TTL);

        store.put_at("A".to_string(), body("a"), start);

        assert_eq!(store.sweep_expired_at(start + TTL - Duration::from_millis(1)), 0);
        assert!(store.get("A").is_some());

        assert_eq!(store.sweep_expired_at(start + TTL), 1);
        assert!(store.get("A").is_none());
    }

    #[test]
    fn test_replace_resets_age() {
        let start = Instant::now();
        let mut store = CacheStore::new(TTL);

        store.put_at("key".to_string(), body("v1"), start);
        store.put_at("key".to_string(), body("v2"), start + Duration::from_secs(200));

        // The first insert's pair expires here but the live entry is newer
        assert_eq!(store.sweep_expired_at(start + TTL), 0);
        assert_eq!(store.get("key"), Some(body("v2")));
        assert_eq!(store.len(), 1);

        assert_eq!(store.sweep_expired_at(start + Duration::from_secs(500)), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_sweep_keeps_fresh_entries() {
        let start = Instant::now();
        let mut store = CacheStore::new(TTL);

        store.put_at("old".to_string(), body("1"), start);
        store.put_at("new".to_string(), body("2"), start + Duration::from_secs(100));

        assert_eq!(store.sweep_expired_at(start + TTL), 1);
        assert!(store.get("old").is_none());
        assert_eq!(store.get("new"), Some(body("2")));
    }

    #[test]
    fn test_store_stats() {
        let start = Instant::now();
        let mut store = CacheStore::new(TTL);

        store.put_at("key1".to_string(), body("value1"), start);
        store.get("key1"); // hit
        store.get("nonexistent"); // miss
        store.sweep_expired_at(start + TTL);

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.total_entries, 0);
    }
}
