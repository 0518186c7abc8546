//! Command Table
//!
//! The fixed set of REPL commands with their usage and help text.

/// Every command the REPL understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

/// Static description of one command
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub kind: CommandKind,
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    /// Number of positional arguments (zero or one)
    pub arity: usize,
}

const COMMANDS: [CommandSpec; 8] = [
    CommandSpec {
        kind: CommandKind::Help,
        name: "help",
        usage: "help",
        description: "Display a help message",
        arity: 0,
    },
    CommandSpec {
        kind: CommandKind::Exit,
        name: "exit",
        usage: "exit",
        description: "Exit the Pokedex",
        arity: 0,
    },
    CommandSpec {
        kind: CommandKind::Map,
        name: "map",
        usage: "map",
        description: "Display the next page of location areas",
        arity: 0,
    },
    CommandSpec {
        kind: CommandKind::MapBack,
        name: "mapb",
        usage: "mapb",
        description: "Display the previous page of location areas",
        arity: 0,
    },
    CommandSpec {
        kind: CommandKind::Explore,
        name: "explore",
        usage: "explore <area>",
        description: "List the Pokemon found in a location area",
        arity: 1,
    },
    CommandSpec {
        kind: CommandKind::Catch,
        name: "catch",
        usage: "catch <pokemon_name>",
        description: "Try to catch a Pokemon",
        arity: 1,
    },
    CommandSpec {
        kind: CommandKind::Inspect,
        name: "inspect",
        usage: "inspect <pokemon_name>",
        description: "Show details about a Pokemon in your Pokedex",
        arity: 1,
    },
    CommandSpec {
        kind: CommandKind::Pokedex,
        name: "pokedex",
        usage: "pokedex",
        description: "List the Pokemon in your Pokedex",
        arity: 0,
    },
];

/// Returns every command in help order.
pub fn command_table() -> &'static [CommandSpec] {
    &COMMANDS
}

/// Finds the command named `name`.
pub fn find_command(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = command_table().iter().map(|c| c.name).collect();
        assert_eq!(names.len(), command_table().len());
    }

    #[test]
    fn test_find_command() {
        assert_eq!(find_command("mapb").map(|c| c.kind), Some(CommandKind::MapBack));
        assert_eq!(find_command("explore").map(|c| c.arity), Some(1));
        assert!(find_command("fly").is_none());
    }

    #[test]
    fn test_usage_starts_with_name() {
        for spec in command_table() {
            assert!(spec.usage.starts_with(spec.name));
            assert!(spec.arity <= 1);
        }
    }
}
