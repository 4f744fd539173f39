//! Comment data models

use serde::{Deserialize, Serialize};

/// A flat comment record extracted from one container element.
///
/// `indent` is a relative depth signal (the rendered width of the indent
/// spacer), not a depth count: only its ordering relative to neighbouring
/// records carries meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Opaque identifier from the container's `id` attribute; may be empty
    pub id: String,
    /// Non-empty paragraph fragments, in document order
    pub text: Vec<String>,
    /// Indentation signal; non-negative for every extracted record
    pub indent: i64,
}

impl CommentRecord {
    /// Create a record without text fragments
    pub fn new(id: impl Into<String>, indent: i64) -> Self {
        Self {
            id: id.into(),
            text: Vec::new(),
            indent,
        }
    }
}

/// A comment with its nested replies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentNode {
    /// The record this node was built from
    pub record: CommentRecord,
    /// Replies, in document order
    pub children: Vec<CommentNode>,
}

impl CommentNode {
    /// Wrap a record as a childless node
    pub fn new(record: CommentRecord) -> Self {
        Self {
            record,
            children: Vec::new(),
        }
    }
}

/// The reconstructed comment forest.
///
/// Holds the children of the synthetic sentinel root; the sentinel itself
/// never leaves the reconstructor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommentTree {
    /// Top-level comments, in document order
    pub roots: Vec<CommentNode>,
}

impl CommentTree {
    /// Total number of comments in the tree
    pub fn len(&self) -> usize {
        fn count(node: &CommentNode) -> usize {
            1 + node.children.iter().map(count).sum::<usize>()
        }
        self.roots.iter().map(count).sum()
    }

    /// Whether the tree holds no comments at all
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_len() {
        let mut a = CommentNode::new(CommentRecord::new("a", 0));
        a.children.push(CommentNode::new(CommentRecord::new("b", 40)));
        let tree = CommentTree {
            roots: vec![a, CommentNode::new(CommentRecord::new("c", 0))],
        };
        assert_eq!(tree.len(), 3);
        assert!(!tree.is_empty());
        assert!(CommentTree::default().is_empty());
    }

    #[test]
    fn test_record_serialization() {
        let mut record = CommentRecord::new("c91", 80);
        record.text.push("hello".to_string());
        let json = serde_json::to_string(&record).unwrap();
        let record2: CommentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, record2);
    }
}
