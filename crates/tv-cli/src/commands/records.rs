//! Records command
//!
//! Dump the extracted flat comment records as JSON, skipping
//! reconstruction. Useful for checking selectors against a new page layout.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use tv_core::comment::CommentExtractor;
use tv_core::config::Config;

use super::convert::read_markup;

/// Arguments for the records command
#[derive(Debug, Args)]
pub struct RecordsArgs {
    /// Markup tree JSON file (stdin if not specified)
    pub input: Option<PathBuf>,
}

/// Execute the records command
pub fn execute(args: RecordsArgs, config: Config) -> Result<()> {
    use colored::Colorize;

    let markup = read_markup(args.input.as_deref())?;

    let extractor = CommentExtractor::new(&config.selectors)?;
    let records = extractor.extract(&markup).context("Extraction failed")?;

    eprintln!("{} {} records", "✓".green(), records.len());
    println!("{}", serde_json::to_string_pretty(&records)?);

    Ok(())
}
