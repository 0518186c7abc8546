//! Read-Through API Client
//!
//! Resolves request descriptors to URLs, serves decodable cached bodies, and
//! falls back to a single network attempt on a miss.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::ResponseCache;
use crate::config::{normalize_base_url, Config};
use crate::error::{PokedexError, Result};
use crate::models::{HttpMethod, RequestDescriptor};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// == Api Client ==
/// HTTP client that treats the response cache as a transparent layer.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    cache: ResponseCache,
    base_url: String,
    page_size: u32,
}

impl ApiClient {
    // == Constructor ==
    /// Creates a client for `base_url` that reads through `cache`.
    pub fn new(base_url: impl Into<String>, page_size: u32, cache: ResponseCache) -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            cache,
            base_url: normalize_base_url(base_url),
            page_size,
        })
    }

    /// Creates a client from configuration.
    pub fn from_config(config: &Config, cache: ResponseCache) -> Result<Self> {
        Self::new(config.base_url.clone(), config.page_size, cache)
    }

    /// Returns the shared response cache.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the cache key `request` resolves to.
    pub fn cache_key(&self, request: &RequestDescriptor) -> String {
        request.resolve(&self.base_url, self.page_size)
    }

    // == Fetch ==
    /// Fetches and decodes `request`, consulting the cache first.
    ///
    /// A cached body that fails to decode is treated as a miss. A fresh body
    /// that fails to decode is reported as [`PokedexError::UnexpectedShape`]
    /// and is not cached. Non-success statuses and transport failures are
    /// never cached.
    pub async fn fetch<T: DeserializeOwned>(&self, request: &RequestDescriptor) -> Result<T> {
        let url = self.cache_key(request);

        if let Some(cached) = self.cache.get(&url).await {
            match serde_json::from_slice::<T>(&cached) {
                Ok(decoded) => {
                    debug!(url = %url, "cache hit");
                    return Ok(decoded);
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "cached body failed to decode, refetching");
                }
            }
        } else {
            debug!(url = %url, "cache miss");
        }

        let body = self.send(request, &url).await?;

        let decoded = serde_json::from_slice::<T>(&body).map_err(|source| {
            PokedexError::UnexpectedShape {
                url: url.clone(),
                source,
            }
        })?;

        self.cache.put(url, body).await;
        Ok(decoded)
    }

    // == Send ==
    /// Performs exactly one network attempt and returns the raw body.
    async fn send(&self, request: &RequestDescriptor, url: &str) -> Result<Bytes> {
        debug!(method = %request.method, url = %url, "sending request");

        let builder = match request.method {
            HttpMethod::Get => self.http.get(url),
            HttpMethod::Post => match &request.body {
                Some(body) => self.http.post(url).json(body),
                None => self.http.post(url),
            },
        };

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::models::LocationAreaPage;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(base_url, 20, ResponseCache::new(Duration::from_secs(300))).unwrap()
    }

    #[test]
    fn test_cache_key_uses_resolved_url() {
        let client = client("http://localhost:9");
        let request = RequestDescriptor::get("location-area/").with_offset(20);

        assert_eq!(
            client.cache_key(&request),
            "http://localhost:9/location-area/?offset=20&limit=20"
        );
    }

    #[tokio::test]
    async fn test_cached_body_served_without_network() {
        // Nothing listens on this port, so any network attempt would fail
        let client = client("http://127.0.0.1:9");
        let request = RequestDescriptor::get("location-area/");
        client
            .cache()
            .put(
                client.cache_key(&request),
                Bytes::from_static(br#"{"results":[{"name":"a","url":"u"}]}"#),
            )
            .await;

        let page: LocationAreaPage = client.fetch(&request).await.unwrap();
        assert_eq!(page.results[0].name, "a");
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces() {
        let client = client("http://127.0.0.1:9");
        let request = RequestDescriptor::get("location-area/");

        let result = client.fetch::<LocationAreaPage>(&request).await;
        assert!(matches!(result, Err(PokedexError::Http(_))));
        assert!(client.cache().is_empty().await);
    }
}
