//! Cache Reaper Task
//!
//! Background task that periodically sweeps expired entries out of the
//! response cache.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::ResponseCache;

// == Reaper Handle ==
/// Owns the reaper task and its shutdown signal.
///
/// Dropping the handle without calling [`ReaperHandle::stop`] also ends the
/// loop, since the shutdown sender closes.
#[derive(Debug)]
pub struct ReaperHandle {
    shutdown: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl ReaperHandle {
    /// Signals the reaper to exit and waits for it to finish.
    ///
    /// Calling it again after the task has been joined does nothing.
    pub async fn stop(&mut self) {
        // The receiver may already be gone if the task ended on its own.
        let _ = self.shutdown.send(true);

        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!("Reaper task ended abnormally: {}", e);
            }
        }
    }

    /// Returns true once the reaper task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

/// Spawns a background task that sweeps `cache` every `interval`.
///
/// Ticks follow a fixed schedule starting one full interval after the call.
/// A slow sweep does not push later ticks back. Each sweep takes the cache
/// write lock only for the duration of the sweep itself.
///
/// # Example
/// ```ignore
/// let cache = ResponseCache::new(Duration::from_secs(300));
/// let mut reaper = spawn_reaper(cache.clone(), Duration::from_secs(300));
/// // Later, during shutdown:
/// reaper.stop().await;
/// ```
pub fn spawn_reaper(cache: ResponseCache, interval: Duration) -> ReaperHandle {
    let (shutdown, mut shutdown_rx) = watch::channel(false);
    let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let task = tokio::spawn(async move {
        info!(
            "Starting cache reaper with interval of {} seconds",
            interval.as_secs_f64()
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                // Resolves on stop() and errors once the handle is dropped
                _ = shutdown_rx.wait_for(|stop| *stop) => break,
            }

            let removed = cache.sweep_expired().await;

            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }

            let stats = cache.stats().await;
            debug!(
                "Cache stats: {} entries, hit rate {:.2}, {} evictions",
                stats.total_entries,
                stats.hit_rate(),
                stats.evictions
            );
        }

        info!("Cache reaper stopped");
    });

    ReaperHandle {
        shutdown,
        task: Some(task),
    }
}
