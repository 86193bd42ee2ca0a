//! Command-line interface for people.
//!
//! This module provides the CLI structure for the `people` binary. Running
//! the binary without a subcommand is the same as `people show`.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, ShowCommand};

/// people - Build and print a roster of person records
#[derive(Debug, Parser)]
#[command(name = "people")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (defaults to `show`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the roster
    Show(ShowCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }

    /// The command to run, with a bare invocation meaning `show`.
    #[must_use]
    pub fn command_or_default(self) -> Command {
        self.command.unwrap_or_else(|| Command::Show(ShowCommand::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::OutputFormat;
    use crate::logging::Verbosity;
    use clap::CommandFactory;

    fn cli(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: None,
        }
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "people");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(cli(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli(2, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli(2, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_no_arguments() {
        let cli = Cli::try_parse_from(["people"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(
            cli.command_or_default(),
            Command::Show(ShowCommand { format: None })
        ));
    }

    #[test]
    fn test_parse_show_with_format() {
        let cli = Cli::try_parse_from(["people", "show", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Show(ShowCommand {
                format: Some(OutputFormat::Json)
            }))
        ));
    }

    #[test]
    fn test_parse_show_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["people", "show", "-f", "xml"]).is_err());
    }

    #[test]
    fn test_parse_config_show() {
        let cli = Cli::try_parse_from(["people", "config", "show", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config(ConfigCommand::Show { json: true }))
        ));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli =
            Cli::try_parse_from(["people", "config", "validate", "-f", "/tmp/people.toml"])
                .unwrap();
        match cli.command {
            Some(Command::Config(ConfigCommand::Validate { file })) => {
                assert_eq!(file, Some(PathBuf::from("/tmp/people.toml")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["people", "-c", "/custom/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["people", "show", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["people", "show", "-q"]).unwrap();
        assert!(cli.quiet);
    }
}
