//! Typed endpoint helpers
//!
//! One method per upstream resource the commands use.

use crate::client::ApiClient;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, PokemonDetail, RequestDescriptor};

impl ApiClient {
    /// Fetches one page of location areas starting at `offset`.
    pub async fn location_areas(&self, offset: u32) -> Result<LocationAreaPage> {
        self.fetch(&RequestDescriptor::get("location-area/").with_offset(offset))
            .await
    }

    /// Fetches a single location area and its encounters.
    pub async fn location_area(&self, name: &str) -> Result<LocationAreaDetail> {
        self.fetch(&RequestDescriptor::get(resource_path("location-area", name)?))
            .await
    }

    /// Fetches a single pokemon.
    pub async fn pokemon(&self, name: &str) -> Result<PokemonDetail> {
        self.fetch(&RequestDescriptor::get(resource_path("pokemon", name)?))
            .await
    }
}

// == Resource Path ==
/// Joins `collection` and a user-supplied `name` into an endpoint path.
///
/// Names are limited to ASCII letters, digits, `-` and `_`, so a name is
/// always exactly one path segment and cannot carry a query or fragment
/// into the request URL or its cache key.
fn resource_path(collection: &str, name: &str) -> Result<String> {
    let is_segment = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if !is_segment {
        return Err(PokedexError::InvalidName(name.to_string()));
    }

    Ok(format!("{}/{}", collection, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::cache::ResponseCache;

    #[test]
    fn test_resource_path_accepts_api_names() {
        for name in ["pikachu", "mr-mime", "canalave-city-area", "nidoran_f", "25"] {
            assert_eq!(
                resource_path("pokemon", name).unwrap(),
                format!("pokemon/{}", name)
            );
        }
    }

    #[test]
    fn test_resource_path_rejects_url_syntax() {
        for name in ["pikachu?x", "pikachu#top", "../berry", "a/b", "pika%3F", "", "mr.mime"] {
            assert!(
                matches!(resource_path("pokemon", name), Err(PokedexError::InvalidName(_))),
                "{:?} should be rejected",
                name
            );
        }
    }

    #[tokio::test]
    async fn test_invalid_name_never_reaches_cache_or_network() {
        // Nothing listens on this port, so a network attempt would be an Http error
        let cache = ResponseCache::new(Duration::from_secs(300));
        let client = ApiClient::new("http://127.0.0.1:9", 20, cache).unwrap();

        let result = client.pokemon("pikachu?x").await;
        assert!(matches!(result, Err(PokedexError::InvalidName(name)) if name == "pikachu?x"));

        let result = client.location_area("canalave?offset=0").await;
        assert!(matches!(result, Err(PokedexError::InvalidName(_))));

        let stats = client.cache().stats().await;
        assert_eq!(stats.hits + stats.misses, 0);
        assert!(client.cache().is_empty().await);
    }
}
