//! Configuration management for threadvast

use crate::error::{Result, ThreadvastError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Selectors used to locate comment structure in the markup
    pub selectors: SelectorConfig,
    /// Output settings
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selectors: SelectorConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ThreadvastError::Toml(e.to_string()))
    }
}

/// Selectors for the comment container, text element and indent marker
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Selector matching a comment container element
    pub container: String,
    /// Selector matching the comment text element inside a container
    pub text: String,
    /// Selector matching the indent marker (the element itself or a cell
    /// holding an `img` whose width is the indent signal)
    pub indent: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            container: "tr.athing.comtr".to_string(),
            text: ".commtext".to_string(),
            indent: "td.ind".to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print the emitted JSON document
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}
