//! Application Context
//!
//! Everything a command needs, constructed once at startup and passed
//! explicitly to the REPL.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cache::ResponseCache;
use crate::client::ApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::{PageCursor, Pokedex};
use crate::tasks::ReaperHandle;

/// Shared state for one REPL session.
pub struct AppContext {
    /// Read-through client for the upstream API
    pub api: ApiClient,
    /// Captured pokemon
    pub pokedex: Pokedex,
    /// Location-area pagination
    pub cursor: PageCursor,
    /// Source of catch rolls
    rng: Mutex<StdRng>,
}

impl AppContext {
    /// Creates a context around an existing client.
    pub fn new(api: ApiClient, rng: StdRng) -> Self {
        let cursor = PageCursor::new(api.page_size());
        Self {
            api,
            pokedex: Pokedex::new(),
            cursor,
            rng: Mutex::new(rng),
        }
    }

    /// Builds the cache, starts its reaper, and wires up the client.
    ///
    /// The returned handle must be stopped on shutdown.
    pub fn from_config(config: &Config) -> Result<(Self, ReaperHandle)> {
        config.validate()?;

        let (cache, mut reaper) = ResponseCache::start(config.cache_ttl());
        let api = match ApiClient::from_config(config, cache) {
            Ok(api) => api,
            Err(e) => {
                // Do not leave the reaper running behind a failed startup
                tokio::spawn(async move { reaper.stop().await });
                return Err(e);
            }
        };

        Ok((Self::new(api, StdRng::from_entropy()), reaper))
    }

    /// Runs `f` with exclusive access to the catch RNG.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PokedexError;

    #[tokio::test(start_paused = true)]
    async fn test_from_config_rejects_zero_ttl() {
        let config = Config {
            cache_ttl: 0,
            ..Config::default()
        };

        let result = AppContext::from_config(&config);
        assert!(matches!(result.err(), Some(PokedexError::Config(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_from_config_starts_and_stops_reaper() {
        let config = Config {
            base_url: "http://127.0.0.1:9".to_string(),
            cache_ttl: 60,
            page_size: 5,
        };

        let Ok((ctx, mut reaper)) = AppContext::from_config(&config) else {
            panic!("valid config should build a context");
        };
        assert_eq!(ctx.api.page_size(), 5);
        assert_eq!(ctx.api.cache().ttl(), config.cache_ttl());
        assert_eq!(ctx.cursor.next_offset(), 0);
        assert!(!reaper.is_finished());

        reaper.stop().await;
        assert!(reaper.is_finished());
    }
}
