//! Configuration Module
//!
//! Handles loading and validating client configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_TTL_SECS;
use crate::error::{PokedexError, Result};

/// Default upstream API root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Default number of results per page
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream API root, always ending with `/`
    pub base_url: String,
    /// Seconds a cached response lives; also the reaper tick
    pub cache_ttl: u64,
    /// `limit` query parameter sent with every request
    pub page_size: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2/)
    /// - `CACHE_TTL_SECS` - Cache TTL in seconds (default: 300)
    /// - `PAGE_SIZE` - Results per page (default: 20)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(normalize_base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            cache_ttl: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECS),
            page_size: env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.cache_ttl == 0 {
            return Err(PokedexError::Config(
                "CACHE_TTL_SECS must be greater than zero".to_string(),
            ));
        }
        if self.page_size == 0 {
            return Err(PokedexError::Config(
                "PAGE_SIZE must be greater than zero".to_string(),
            ));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(PokedexError::Config(format!(
                "POKEAPI_BASE_URL must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Returns the cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl: DEFAULT_TTL_SECS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Ensures the base URL ends with a slash so endpoints can be appended.
pub fn normalize_base_url(url: impl Into<String>) -> String {
    let mut url = url.into();
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
