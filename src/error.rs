//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.

use reqwest::StatusCode;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the client.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The request never produced a response (DNS, TLS, connection, body read)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream answered with a non-success status
    #[error("unexpected status {status} from {url}")]
    Status { status: StatusCode, url: String },

    /// A freshly fetched body did not match the expected schema
    #[error("unexpected response shape from {url}: {source}")]
    UnexpectedShape {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A name argument that cannot be used as a single URL path segment
    #[error("'{0}' is not a valid name")]
    InvalidName(String),

    /// Wrong number of arguments for a command
    #[error("incorrect arguments. Use '{0}'")]
    Usage(String),

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Terminal read/write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the client.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_message() {
        let err = PokedexError::Usage("explore <area>".to_string());
        assert_eq!(err.to_string(), "incorrect arguments. Use 'explore <area>'");
    }

    #[test]
    fn test_invalid_name_message() {
        let err = PokedexError::InvalidName("pikachu?x".to_string());
        assert_eq!(err.to_string(), "'pikachu?x' is not a valid name");
    }

    #[test]
    fn test_status_message() {
        let err = PokedexError::Status {
            status: StatusCode::NOT_FOUND,
            url: "https://pokeapi.co/api/v2/pokemon/missingno".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("missingno"));
    }

    #[test]
    fn test_unexpected_shape_keeps_source() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = PokedexError::UnexpectedShape {
            url: "u".to_string(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
