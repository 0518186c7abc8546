//! Request descriptors for the upstream API
//!
//! Describes an outgoing request independently of how it is sent.

use std::fmt;

use serde_json::Value;

/// HTTP method of an upstream request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// A request against the upstream API.
///
/// # Fields
/// - `method`: GET or POST
/// - `endpoint`: path relative to the API root, e.g. `location-area/`
/// - `body`: JSON body, only sent with POST
/// - `offset`: pagination offset
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub endpoint: String,
    pub body: Option<Value>,
    pub offset: u32,
}

impl RequestDescriptor {
    /// Creates a GET request for `endpoint` at offset 0.
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            endpoint: endpoint.into(),
            body: None,
            offset: 0,
        }
    }

    /// Creates a POST request carrying `body`.
    pub fn post(endpoint: impl Into<String>, body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            endpoint: endpoint.into(),
            body: Some(body),
            offset: 0,
        }
    }

    /// Sets the pagination offset.
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    // == Resolve ==
    /// Builds the full request URL.
    ///
    /// The resolved URL doubles as the cache key, so two descriptors that
    /// resolve to the same URL share one cache entry.
    pub fn resolve(&self, base_url: &str, page_size: u32) -> String {
        format!(
            "{}{}?offset={}&limit={}",
            base_url, self.endpoint, self.offset, page_size
        )
    }
}
