//! Response schemas for the upstream API
//!
//! Only the fields the client reads are modelled. Unknown fields are ignored,
//! but a missing or mistyped modelled field fails decoding.

use serde::Deserialize;

/// A `{ name, url }` reference to another resource
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of `GET location-area/`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationAreaPage {
    #[serde(default)]
    pub count: Option<u32>,
    pub results: Vec<NamedResource>,
}

/// `GET location-area/{name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationAreaDetail {
    pub name: String,
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A pokemon that can be met in a location area
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// `GET pokemon/{name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonDetail {
    pub name: String,
    pub base_experience: u32,
}
