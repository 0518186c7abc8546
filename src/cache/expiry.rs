//! Expiry Queue Module
//!
//! Orders cache keys by creation time so sweeps only inspect expired heads.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tokio::time::{Duration, Instant};

// == Expiry Queue ==
/// Min-heap of `(created_at, key)` pairs.
///
/// Replacing a key pushes a new pair without removing the old one. Old pairs
/// are detected when popped: the store compares the popped timestamp with the
/// live entry and discards the pair if they differ.
#[derive(Debug, Default)]
pub struct ExpiryQueue {
    heap: BinaryHeap<Reverse<(Instant, String)>>,
}

impl ExpiryQueue {
    // == Constructor ==
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    // == Push ==
    /// Records that `key` was inserted at `created_at`.
    pub fn push(&mut self, key: &str, created_at: Instant) {
        self.heap.push(Reverse((created_at, key.to_string())));
    }

    // == Pop Expired ==
    /// Removes and returns the oldest pair if it has expired at `now`.
    ///
    /// Returns None once the head is still fresh or the queue is empty.
    pub fn pop_expired(&mut self, now: Instant, ttl: Duration) -> Option<(Instant, String)> {
        let Reverse((created_at, _)) = self.heap.peek()?;
        if now.saturating_duration_since(*created_at) < ttl {
            return None;
        }
        self.heap.pop().map(|Reverse(pair)| pair)
    }

    // == Length ==
    /// Returns the number of tracked pairs, including superseded ones.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
