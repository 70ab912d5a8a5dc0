//! Command-line argument parsing for the keymap tool
//!
//! Supports:
//! - Listing functions with their bindings
//! - Binding and unbinding a function's slot
//! - Restoring the default keymap
//! - Printing the keymap file location

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::GameConfig;
use crate::keymap::KeyMappingSlot;

/// Inspect and edit game key bindings
#[derive(Parser, Debug)]
#[command(name = "bindery", version, about = "Inspect and edit game key bindings")]
pub struct CliArgs {
    /// Keymap file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub keymap: Option<PathBuf>,

    /// Start from the default bindings, ignoring the keymap file
    #[arg(long, global = true)]
    pub defaults: bool,

    /// Show debug logs from bindery on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// List functions sorted by display name
    List {
        /// Include hidden and debug functions
        #[arg(long)]
        all: bool,
    },
    /// Bind a key to a function, clearing any other holder
    Bind {
        /// Function name, e.g. QuickSave
        function: String,
        /// Key string, e.g. ctrl+s, F7, "KP +", mouse_x1
        key: String,
        /// Use the secondary slot
        #[arg(long)]
        secondary: bool,
    },
    /// Clear a function's binding
    Unbind {
        function: String,
        #[arg(long)]
        secondary: bool,
    },
    /// Restore every default binding
    Reset,
    /// Print the keymap file location
    Path {
        /// Print the current log file instead
        #[arg(long)]
        logs: bool,
    },
}

impl CliCommand {
    /// Slot addressed by `bind`/`unbind`
    pub fn slot(&self) -> Option<KeyMappingSlot> {
        match self {
            CliCommand::Bind { secondary, .. } | CliCommand::Unbind { secondary, .. } => {
                Some(slot_for(*secondary))
            }
            _ => None,
        }
    }

    /// Whether the command changes the keymap file
    pub fn writes_keymap(&self) -> bool {
        matches!(
            self,
            CliCommand::Bind { .. } | CliCommand::Unbind { .. } | CliCommand::Reset
        )
    }
}

fn slot_for(secondary: bool) -> KeyMappingSlot {
    if secondary {
        KeyMappingSlot::Secondary
    } else {
        KeyMappingSlot::Primary
    }
}

impl CliArgs {
    /// Keymap file in effect: `--keymap`, else the config's choice
    pub fn keymap_path(&self, config: &GameConfig) -> Option<PathBuf> {
        self.keymap.clone().or_else(|| config.keymap_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_list_defaults() {
        let args = parse(&["bindery", "list"]);
        assert_eq!(args.command, CliCommand::List { all: false });
        assert!(args.keymap.is_none());
        assert!(!args.defaults);
        assert!(!args.verbose);
    }

    #[test]
    fn test_bind_secondary() {
        let args = parse(&["bindery", "bind", "QuickSave", "ctrl+s", "--secondary"]);
        assert_eq!(
            args.command,
            CliCommand::Bind {
                function: "QuickSave".to_string(),
                key: "ctrl+s".to_string(),
                secondary: true,
            }
        );
        assert_eq!(args.command.slot(), Some(KeyMappingSlot::Secondary));
        assert!(args.command.writes_keymap());
    }

    #[test]
    fn test_global_keymap_after_subcommand() {
        let args = parse(&["bindery", "unbind", "CentreOnBase", "--keymap", "/tmp/k.json", "-v"]);
        assert_eq!(args.keymap, Some(PathBuf::from("/tmp/k.json")));
        assert!(args.verbose);
        assert_eq!(args.command.slot(), Some(KeyMappingSlot::Primary));
    }

    #[test]
    fn test_keymap_flag_overrides_config() {
        let config = GameConfig {
            keymap_file: Some(PathBuf::from("/etc/game/keymap.json")),
            debug_mappings: false,
        };

        let args = parse(&["bindery", "path"]);
        assert_eq!(args.command, CliCommand::Path { logs: false });
        assert_eq!(args.keymap_path(&config), Some(PathBuf::from("/etc/game/keymap.json")));

        let args = parse(&["bindery", "--keymap", "mine.json", "path"]);
        assert_eq!(args.keymap_path(&config), Some(PathBuf::from("mine.json")));
        assert!(!args.command.writes_keymap());
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(CliArgs::try_parse_from(["bindery"]).is_err());
        assert!(CliArgs::try_parse_from(["bindery", "bind", "QuickSave"]).is_err());
    }
}
