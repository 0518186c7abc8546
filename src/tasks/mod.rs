//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the client.
//!
//! # Tasks
//! - Reaper: Removes expired cache entries on a fixed tick

mod reaper;

pub use reaper::{spawn_reaper, ReaperHandle};
