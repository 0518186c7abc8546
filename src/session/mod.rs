//! Session State Module
//!
//! In-memory state that lives for one REPL session.

mod cursor;
mod pokedex;

pub use cursor::PageCursor;
pub use pokedex::{CapturedPokemon, Pokedex};
