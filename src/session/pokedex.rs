//! Captured Pokemon Registry
//!
//! Process-lifetime store of everything the user has caught.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

/// A pokemon the user has caught
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedPokemon {
    pub name: String,
    pub base_experience: u32,
    pub caught_at: DateTime<Utc>,
}

// == Pokedex ==
/// Thread-safe registry of captured pokemon, keyed by name.
///
/// Reads take the shared lock, `capture` takes the exclusive lock. Entries
/// never expire.
#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    entries: Arc<RwLock<HashMap<String, CapturedPokemon>>>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    // == Capture ==
    /// Records `name` as caught, replacing any earlier capture.
    pub async fn capture(&self, name: impl Into<String>, base_experience: u32) -> CapturedPokemon {
        let name = name.into();
        let captured = CapturedPokemon {
            name: name.clone(),
            base_experience,
            caught_at: Utc::now(),
        };

        self.entries.write().await.insert(name, captured.clone());
        captured
    }

    // == Lookup ==
    /// Returns the capture record for `name`, if any.
    pub async fn lookup(&self, name: &str) -> Option<CapturedPokemon> {
        self.entries.read().await.get(name).cloned()
    }

    // == List ==
    /// Returns every captured pokemon sorted by name, or None when empty.
    pub async fn list(&self) -> Option<Vec<CapturedPokemon>> {
        let entries = self.entries.read().await;
        if entries.is_empty() {
            return None;
        }

        let mut all: Vec<CapturedPokemon> = entries.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Some(all)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
