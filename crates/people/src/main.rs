//! `people` - CLI for the people roster
//!
//! Running the binary with no arguments builds the default roster and prints
//! it to stdout in the configured format.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use people::cli::{Cli, Command, ConfigCommand, ShowCommand};
use people::{display, init_logging, Config, People};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Only commands that read the config load it; `config path` and
    // `config validate` must still run when the global file is broken.
    let config_path = cli.config.clone();
    match cli.command_or_default() {
        Command::Show(show_cmd) => handle_show(&load_config(config_path)?, &show_cmd),
        Command::Config(config_cmd) => handle_config(config_path, config_cmd),
    }
}

fn load_config(config_path: Option<PathBuf>) -> anyhow::Result<Config> {
    Config::load_from(config_path).context("loading configuration")
}

fn handle_show(config: &Config, cmd: &ShowCommand) -> anyhow::Result<()> {
    let display_config = config.display_with(cmd.format);
    debug!(format = %display_config.format, "showing roster");

    let people = People::assemble();
    display(&people, &display_config)?;
    Ok(())
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = load_config(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Display]");
                println!("  Format:             {}", config.display.format);
                println!("  Pretty JSON:        {}", config.display.pretty_json);
                println!("  Indent:             {}", config.display.indent);
            }
        }
        ConfigCommand::Path => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path)).context("configuration is invalid")?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
