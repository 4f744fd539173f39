//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod convert;
pub mod records;

use clap::{Parser, Subcommand};

/// threadvast - discussion thread to VAST converter
#[derive(Debug, Parser)]
#[command(name = "threadvast")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a parsed markup tree into a VAST document
    Convert(convert::ConvertArgs),

    /// Dump the extracted flat comment records without reconstructing
    Records(records::RecordsArgs),
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = load_config(cli.config.as_deref())?;

    // Dispatch to command handler
    match cli.command {
        Commands::Convert(args) => convert::execute(args, config),
        Commands::Records(args) => records::execute(args, config),
    }
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<tv_core::config::Config> {
    use anyhow::Context;

    match path {
        Some(path) => tv_core::config::Config::load(path)
            .context(format!("Failed to load config from {}", path.display())),
        None => Ok(tv_core::config::Config::default()),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }
}
