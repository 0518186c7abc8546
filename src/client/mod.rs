//! Client Module
//!
//! The read-through request layer and typed endpoint helpers for the
//! upstream Pokemon API.

mod endpoints;
mod http;

pub use http::ApiClient;
