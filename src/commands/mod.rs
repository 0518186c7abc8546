//! Commands Module
//!
//! Input tokenization, the command table, and the command handlers.

pub mod catch;
mod handlers;
mod parse;
mod table;

pub use catch::{attempt_catch, catch_probability, CATCH_SCALE};
pub use handlers::{execute, CommandOutcome};
pub use parse::clean_input;
pub use table::{command_table, find_command, CommandKind, CommandSpec};
