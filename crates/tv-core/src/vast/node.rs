//! VAST node shapes

use serde::{Deserialize, Serialize};

/// Node kind in the VAST tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A text fragment leaf carrying a character-count size
    Paragraph,
    /// The synthetic text container under a comment
    Content,
    /// One comment
    Comment,
    /// The document root
    Topic,
}

impl NodeKind {
    /// All kinds, legend order
    pub const ALL: [NodeKind; 4] = [
        NodeKind::Paragraph,
        NodeKind::Content,
        NodeKind::Comment,
        NodeKind::Topic,
    ];

    /// Wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Paragraph => "paragraph",
            NodeKind::Content => "content",
            NodeKind::Comment => "comment",
            NodeKind::Topic => "topic",
        }
    }

    /// Legend color for the kind
    pub fn color(&self) -> &'static str {
        match self {
            NodeKind::Paragraph => "#d8d8d8",
            NodeKind::Content => "#a3c9e8",
            NodeKind::Comment => "#e8a33d",
            NodeKind::Topic => "#5b8c5a",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A node in the generic labeled output tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VastNode {
    /// Link back to the source (document, or document#fragment)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Node kind
    pub kind: NodeKind,
    /// Character count, for paragraph leaves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    /// Ordered child nodes
    #[serde(default)]
    pub children: Vec<VastNode>,
}

impl VastNode {
    /// A paragraph leaf of the given size
    pub fn paragraph(size: usize) -> Self {
        Self {
            reference: None,
            name: Some("p".to_string()),
            kind: NodeKind::Paragraph,
            size: Some(size),
            children: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&NodeKind::Topic).unwrap(), "\"topic\"");
        assert_eq!(
            serde_json::from_str::<NodeKind>("\"paragraph\"").unwrap(),
            NodeKind::Paragraph
        );
    }

    #[test]
    fn test_optional_fields_omitted() {
        let node = VastNode {
            reference: None,
            name: None,
            kind: NodeKind::Content,
            size: None,
            children: Vec::new(),
        };
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, "{\"kind\":\"content\",\"children\":[]}");
    }

    #[test]
    fn test_paragraph_leaf_shape() {
        let leaf = VastNode::paragraph(5);
        assert_eq!(leaf.size, Some(5));
        assert_eq!(leaf.name.as_deref(), Some("p"));
        assert!(leaf.children.is_empty());
    }

    #[test]
    fn test_every_kind_has_a_color() {
        for kind in NodeKind::ALL {
            assert!(kind.color().starts_with('#'));
            assert_eq!(kind.color().len(), 7);
        }
    }
}
