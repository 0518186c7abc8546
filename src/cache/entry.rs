//! Cache Entry Module
//!
//! Defines a single cached response body and its creation timestamp.

use bytes::Bytes;
use tokio::time::{Duration, Instant};

// == Cache Entry ==
/// A raw response body stored in the cache.
///
/// Entries are immutable once inserted. Replacing a key stores a brand new
/// entry, so the age is always measured from the most recent insert.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored response body
    pub value: Bytes,
    /// Monotonic creation time
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Bytes) -> Self {
        Self::with_created_at(value, Instant::now())
    }

    /// Creates an entry with an explicit creation time.
    pub fn with_created_at(value: Bytes, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Returns how long the entry has existed as of `now`.
    ///
    /// Saturates to zero if `now` is before the creation time.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is eligible for removal at `now`.
    ///
    /// Boundary condition: once the full TTL has elapsed the entry is expired,
    /// so an entry created at T with TTL d is expired at exactly T + d.
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        self.age_at(now) >= ttl
    }
}
