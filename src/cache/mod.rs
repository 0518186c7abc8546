//! Cache Module
//!
//! Provides the in-memory response cache with sweep-based TTL expiration.

mod entry;
mod expiry;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiry::ExpiryQueue;
pub use shared::ResponseCache;
pub use stats::{CacheStats, StatsCounters};
pub use store::CacheStore;

// == Public Constants ==
/// Default time an entry may live before a sweep removes it
pub const DEFAULT_TTL_SECS: u64 = 5 * 60;
