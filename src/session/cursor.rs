//! Pagination Cursor
//!
//! Tracks which page of location areas `map` shows next.

use std::sync::atomic::{AtomicU32, Ordering};

/// Offset of the next location-area page to display.
///
/// Only the navigation commands move it. It never goes below zero.
#[derive(Debug)]
pub struct PageCursor {
    next_offset: AtomicU32,
    page_size: u32,
}

impl PageCursor {
    pub fn new(page_size: u32) -> Self {
        Self {
            next_offset: AtomicU32::new(0),
            page_size,
        }
    }

    /// Offset of the page `map` will show.
    pub fn next_offset(&self) -> u32 {
        self.next_offset.load(Ordering::SeqCst)
    }

    /// Offset of the page `mapb` will show, or None when the user has not
    /// moved past the first page.
    pub fn previous_offset(&self) -> Option<u32> {
        self.next_offset()
            .checked_sub(self.page_size.saturating_mul(2))
    }

    /// Records that the page at `offset` was displayed.
    pub fn shown(&self, offset: u32) {
        self.next_offset
            .store(offset.saturating_add(self.page_size), Ordering::SeqCst);
    }
}
