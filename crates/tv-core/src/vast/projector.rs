//! Comment tree to VAST node projection

use crate::comment::model::{CommentNode, CommentTree};
use crate::vast::node::{NodeKind, VastNode};

/// Project a reconstructed comment tree into the VAST node shape.
///
/// The result is a `topic` root referencing the bare source identifier; the
/// synthetic reconstruction root itself contributes nothing beyond its
/// children. A pure function of its inputs.
pub fn project(tree: &CommentTree, source: &str) -> VastNode {
    VastNode {
        reference: Some(source.to_string()),
        name: None,
        kind: NodeKind::Topic,
        size: None,
        children: tree
            .roots
            .iter()
            .map(|node| project_comment(node, source))
            .collect(),
    }
}

/// One `comment` node per `CommentNode`: a leading synthetic `content`
/// node holding the paragraph leaves, then the projected replies in order.
fn project_comment(node: &CommentNode, source: &str) -> VastNode {
    let paragraphs = node
        .record
        .text
        .iter()
        .map(|fragment| VastNode::paragraph(fragment.chars().count()))
        .collect();
    let content = VastNode {
        reference: None,
        name: Some("text".to_string()),
        kind: NodeKind::Content,
        size: None,
        children: paragraphs,
    };

    let mut children = vec![content];
    children.extend(node.children.iter().map(|c| project_comment(c, source)));

    VastNode {
        reference: Some(format!("{}#{}", source, node.record.id)),
        name: Some(node.record.id.clone()),
        kind: NodeKind::Comment,
        size: None,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::model::{CommentNode, CommentRecord};
    use pretty_assertions::assert_eq;

    fn node(id: &str, indent: i64, text: &[&str], children: Vec<CommentNode>) -> CommentNode {
        let mut record = CommentRecord::new(id, indent);
        record.text = text.iter().map(|s| s.to_string()).collect();
        CommentNode { record, children }
    }

    #[test]
    fn test_topic_root_shape() {
        let tree = CommentTree {
            roots: vec![node("a", 0, &["hi"], vec![])],
        };
        let root = project(&tree, "item?id=1");
        assert_eq!(root.kind, NodeKind::Topic);
        assert_eq!(root.reference.as_deref(), Some("item?id=1"));
        assert_eq!(root.name, None);
        assert_eq!(root.size, None);
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_comment_node_projection() {
        let tree = CommentTree {
            roots: vec![node("a", 0, &["hi", "there"], vec![])],
        };
        let root = project(&tree, "thread");
        let comment = &root.children[0];
        assert_eq!(comment.kind, NodeKind::Comment);
        assert_eq!(comment.reference.as_deref(), Some("thread#a"));
        assert_eq!(comment.name.as_deref(), Some("a"));

        // First child is the synthetic content node with one paragraph per
        // fragment.
        let content = &comment.children[0];
        assert_eq!(content.kind, NodeKind::Content);
        assert_eq!(content.name.as_deref(), Some("text"));
        let sizes: Vec<usize> = content.children.iter().filter_map(|p| p.size).collect();
        assert_eq!(sizes, vec![2, 5]);
        assert!(content
            .children
            .iter()
            .all(|p| p.kind == NodeKind::Paragraph && p.children.is_empty()));
    }

    #[test]
    fn test_replies_follow_content_in_order() {
        let tree = CommentTree {
            roots: vec![node(
                "a",
                0,
                &["root"],
                vec![
                    node("b", 40, &["first reply"], vec![]),
                    node("c", 40, &["second reply"], vec![]),
                ],
            )],
        };
        let root = project(&tree, "t");
        let a = &root.children[0];
        assert_eq!(a.children.len(), 3);
        assert_eq!(a.children[0].kind, NodeKind::Content);
        assert_eq!(a.children[1].name.as_deref(), Some("b"));
        assert_eq!(a.children[2].name.as_deref(), Some("c"));
    }

    #[test]
    fn test_size_counts_unicode_scalars() {
        let tree = CommentTree {
            roots: vec![node("a", 0, &["héllo"], vec![])],
        };
        let root = project(&tree, "t");
        assert_eq!(root.children[0].children[0].children[0].size, Some(5));
    }

    #[test]
    fn test_projection_is_idempotent() {
        let tree = CommentTree {
            roots: vec![node(
                "a",
                0,
                &["x"],
                vec![node("b", 40, &["y", "z"], vec![])],
            )],
        };
        assert_eq!(project(&tree, "s"), project(&tree, "s"));
    }

    #[test]
    fn test_empty_tree_projects_to_bare_topic() {
        let root = project(&CommentTree::default(), "s");
        assert_eq!(root.kind, NodeKind::Topic);
        assert!(root.children.is_empty());
    }
}
