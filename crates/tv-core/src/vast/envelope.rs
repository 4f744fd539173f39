//! VAST document envelope

use crate::vast::node::{NodeKind, VastNode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire format tag
pub const VAST_FORMAT: &str = "vast";
/// Wire format version (semver)
pub const VAST_VERSION: &str = "1.0.0";

/// The fixed kind-to-color legend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorLegend {
    pub paragraph: String,
    pub content: String,
    pub comment: String,
    pub topic: String,
}

impl Default for ColorLegend {
    fn default() -> Self {
        Self {
            paragraph: NodeKind::Paragraph.color().to_string(),
            content: NodeKind::Content.color().to_string(),
            comment: NodeKind::Comment.color().to_string(),
            topic: NodeKind::Topic.color().to_string(),
        }
    }
}

/// The complete serialized document: format metadata wrapped around the
/// projected node tree. Assembled once at the end of a run, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VastDocument {
    /// Always [`VAST_FORMAT`]
    pub format: String,
    /// Always [`VAST_VERSION`]
    pub version: String,
    /// Source document identifier
    pub source: String,
    /// Kind-to-color legend
    pub colors: ColorLegend,
    /// Generation timestamp (RFC 3339 on the wire)
    pub timestamp: DateTime<Utc>,
    /// The projected node tree
    pub vast: VastNode,
}

impl VastDocument {
    /// Assemble an envelope stamped with the current time
    pub fn assemble(source: impl Into<String>, root: VastNode) -> Self {
        Self::assemble_at(source, root, Utc::now())
    }

    /// Assemble an envelope with an explicit timestamp
    pub fn assemble_at(
        source: impl Into<String>,
        root: VastNode,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            format: VAST_FORMAT.to_string(),
            version: VAST_VERSION.to_string(),
            source: source.into(),
            colors: ColorLegend::default(),
            timestamp,
            vast: root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn empty_topic() -> VastNode {
        VastNode {
            reference: Some("s".to_string()),
            name: None,
            kind: NodeKind::Topic,
            size: None,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_assemble_constants() {
        let doc = VastDocument::assemble("item?id=7", empty_topic());
        assert_eq!(doc.format, "vast");
        assert_eq!(doc.version, "1.0.0");
        assert_eq!(doc.source, "item?id=7");
    }

    #[test]
    fn test_envelope_round_trip() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let doc = VastDocument::assemble_at("s", empty_topic(), ts);

        let json = serde_json::to_string(&doc).unwrap();
        let doc2: VastDocument = serde_json::from_str(&json).unwrap();

        assert_eq!(doc, doc2);
        assert_eq!(doc2.colors, ColorLegend::default());
        assert_eq!(doc2.format, VAST_FORMAT);
        assert_eq!(doc2.version, VAST_VERSION);
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let doc = VastDocument::assemble_at("s", empty_topic(), ts);
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"timestamp\":\"2024-05-01T12:00:00Z\""));
    }

    #[test]
    fn test_legend_has_four_distinct_colors() {
        let legend = ColorLegend::default();
        let colors = [
            &legend.paragraph,
            &legend.content,
            &legend.comment,
            &legend.topic,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
