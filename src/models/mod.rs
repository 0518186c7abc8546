//! Request and response models for the upstream API
//!
//! Request descriptors on one side, typed response schemas on the other.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{HttpMethod, RequestDescriptor};
pub use responses::{
    LocationAreaDetail, LocationAreaPage, NamedResource, PokemonDetail, PokemonEncounter,
};
