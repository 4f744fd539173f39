//! Comment record extraction
//!
//! Walks the markup tree, locates every comment container and flattens it
//! into a `CommentRecord`. A container that cannot be fully resolved fails
//! the whole extraction: a structurally incomplete input cannot be safely
//! nested later.

use crate::comment::model::CommentRecord;
use crate::config::SelectorConfig;
use crate::error::{Result, ThreadvastError};
use crate::markup::{find_all, find_first, Element, MarkupNode, Selector};
use tracing::debug;

/// Extracts flat comment records from a parsed markup tree
pub struct CommentExtractor {
    container: Selector,
    text: Selector,
    indent: Selector,
    img: Selector,
}

impl CommentExtractor {
    /// Create an extractor from configured selectors
    pub fn new(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            container: Selector::parse(&config.container)?,
            text: Selector::parse(&config.text)?,
            indent: Selector::parse(&config.indent)?,
            img: Selector::parse("img")?,
        })
    }

    /// Extract every comment record, in document order
    pub fn extract(&self, roots: &[MarkupNode]) -> Result<Vec<CommentRecord>> {
        let containers = find_all(roots, &self.container);
        let container_count = containers.len();
        let records: Vec<CommentRecord> = containers
            .into_iter()
            .map(|c| self.extract_record(c))
            .collect::<Result<_>>()?;

        debug!(
            containers = container_count,
            records = records.len(),
            "extracted comment records"
        );
        Ok(records)
    }

    fn extract_record(&self, container: &Element) -> Result<CommentRecord> {
        let id = container.attr("id").unwrap_or_default().to_string();

        let text_el = find_first(container, &self.text)
            .ok_or_else(|| ThreadvastError::malformed(&id, "no comment text element"))?;
        let indent = self.read_indent(container, &id)?;

        let mut record = CommentRecord::new(id, indent);
        record.text = fragments(text_el);
        Ok(record)
    }

    /// Resolve the indent marker and read its width as the indent signal.
    ///
    /// The configured selector may address the spacer `img` itself or a
    /// wrapper cell; in the latter case the first `img` beneath it is the
    /// marker.
    fn read_indent(&self, container: &Element, id: &str) -> Result<i64> {
        let marker = find_first(container, &self.indent)
            .ok_or_else(|| ThreadvastError::malformed(id, "no indent marker element"))?;
        let marker = if marker.tag == "img" {
            marker
        } else {
            find_first(marker, &self.img)
                .ok_or_else(|| ThreadvastError::malformed(id, "indent marker has no img"))?
        };

        let width = marker
            .attr("width")
            .ok_or_else(|| ThreadvastError::malformed(id, "indent marker has no width"))?;
        let indent: i64 = width.trim().parse().map_err(|_| {
            ThreadvastError::malformed(id, format!("non-numeric indent width '{}'", width))
        })?;
        if indent < 0 {
            return Err(ThreadvastError::malformed(
                id,
                format!("negative indent width {}", indent),
            ));
        }
        Ok(indent)
    }
}

/// Collect paragraph fragments from the text element's immediate children.
///
/// A text child contributes its content directly; a `p` wrapper contributes
/// its first child's text content. Whitespace-only fragments are dropped.
fn fragments(text_el: &Element) -> Vec<String> {
    let mut out = Vec::new();
    for child in &text_el.children {
        match child {
            MarkupNode::Text { text } => out.push(text.clone()),
            MarkupNode::Element(el) if el.tag == "p" => out.push(el.first_child_text()),
            MarkupNode::Element(_) => {}
        }
    }
    out.retain(|f| !f.trim().is_empty());
    out
}
