//! Pokedex CLI - An interactive client for the Pokemon API
//!
//! Upstream responses are served through a read-through cache whose entries
//! are swept out by a background reaper once their TTL has elapsed.

pub mod cache;
pub mod client;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod repl;
pub mod session;
pub mod tasks;

pub use cache::ResponseCache;
pub use client::ApiClient;
pub use config::Config;
pub use context::AppContext;
pub use error::{PokedexError, Result};
pub use tasks::{spawn_reaper, ReaperHandle};
