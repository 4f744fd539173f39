//! Conversion pipeline
//!
//! Strictly forward, single-threaded hand-off: markup tree → flat records →
//! nested comment tree → VAST node tree → document envelope. Each call
//! builds fresh state; nothing persists between runs.

use crate::comment::{reconstruct, CommentExtractor};
use crate::config::Config;
use crate::error::Result;
use crate::markup::MarkupNode;
use crate::vast::{project, VastDocument};
use tracing::debug;

/// Runs the full markup-to-document conversion
pub struct Converter {
    config: Config,
}

impl Converter {
    /// Create a converter with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Convert a parsed markup tree into a VAST document.
    ///
    /// `source` is the source document identifier carried into the envelope
    /// and into per-comment references as `<source>#<id>`.
    pub fn convert(&self, markup: &[MarkupNode], source: &str) -> Result<VastDocument> {
        let extractor = CommentExtractor::new(&self.config.selectors)?;
        let records = extractor.extract(markup)?;

        let tree = reconstruct(records)?;
        debug!(
            comments = tree.len(),
            top_level = tree.roots.len(),
            "reconstructed comment tree"
        );

        let root = project(&tree, source);
        Ok(VastDocument::assemble(source, root))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
