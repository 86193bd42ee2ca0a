//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::display::OutputFormat;

/// Show command arguments.
#[derive(Debug, Default, Args)]
pub struct ShowCommand {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_command_default() {
        let cmd = ShowCommand::default();
        assert!(cmd.format.is_none());
    }

    #[test]
    fn test_show_command_debug() {
        let cmd = ShowCommand {
            format: Some(OutputFormat::Table),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("format"));
        assert!(debug_str.contains("Table"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
