//! Convert command
//!
//! Convert a parsed markup tree into a VAST document.

use anyhow::{Context, Result};
use clap::Args;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::info;

use tv_core::config::Config;
use tv_core::markup::MarkupNode;
use tv_core::vast::JsonWriter;
use tv_core::Converter;

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Markup tree JSON file (stdin if not specified)
    pub input: Option<PathBuf>,

    /// Source document identifier (defaults to the input file stem)
    #[arg(long, short)]
    pub source: Option<String>,

    /// Output file path (stdout if not specified)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Emit compact JSON regardless of configuration
    #[arg(long)]
    pub compact: bool,
}

/// Execute the convert command
pub fn execute(args: ConvertArgs, config: Config) -> Result<()> {
    use colored::Colorize;

    let markup = read_markup(args.input.as_deref())?;
    let source = resolve_source(args.source.as_deref(), args.input.as_deref());

    let pretty = config.output.pretty && !args.compact;
    let converter = Converter::new(config);
    let document = converter
        .convert(&markup, &source)
        .context("Conversion failed")?;
    info!(
        source = %source,
        top_level = document.vast.children.len(),
        "assembled document"
    );

    eprintln!(
        "Converting {} ({} top-level comments)...",
        source.cyan(),
        document.vast.children.len().to_string().yellow()
    );

    let output = JsonWriter::new(pretty).write(&document)?;

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, &output)
            .context(format!("Failed to write to {}", output_path.display()))?;
        eprintln!("{} Wrote {}", "✓".green(), output_path.display());
    } else {
        std::io::stdout()
            .write_all(output.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

/// Read a markup tree from a file or stdin.
///
/// Accepts either a JSON array of nodes or a single root node.
pub fn read_markup(path: Option<&std::path::Path>) -> Result<Vec<MarkupNode>> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)
            .context(format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let value: serde_json::Value =
        serde_json::from_str(&content).context("Input is not valid JSON")?;
    let markup = if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value::<MarkupNode>(value).map(|node| vec![node])
    };
    markup.context("Input is not a markup tree")
}

/// Source identifier: explicit flag, else the input file stem, else "stdin"
pub fn resolve_source(source: Option<&str>, input: Option<&std::path::Path>) -> String {
    if let Some(source) = source {
        return source.to_string();
    }
    input
        .and_then(|p| p.file_stem())
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "stdin".to_string())
}
