//! Markup tree data model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A node in the parsed markup tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MarkupNode {
    /// An element with tag, attributes and children
    Element(Element),
    /// A run of character data
    Text { text: String },
}

impl MarkupNode {
    /// The element behind this node, if it is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            MarkupNode::Element(el) => Some(el),
            MarkupNode::Text { .. } => None,
        }
    }

    /// Full text content of this node (deep, document order)
    pub fn text_content(&self) -> String {
        match self {
            MarkupNode::Text { text } => text.clone(),
            MarkupNode::Element(el) => el.text_content(),
        }
    }
}

/// A markup element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name
    pub tag: String,
    /// Attribute map
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attrs: HashMap<String, String>,
    /// Ordered child nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MarkupNode>,
}

impl Element {
    /// Create an element with no attributes or children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: HashMap::new(),
            children: Vec::new(),
        }
    }

    /// Look up an attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(|s| s.as_str())
    }

    /// Whitespace-separated entries of the `class` attribute
    pub fn class_list(&self) -> Vec<&str> {
        self.attr("class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Deep text content of every text descendant, in document order
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                MarkupNode::Text { text } => out.push_str(text),
                MarkupNode::Element(el) => out.push_str(&el.text_content()),
            }
        }
        out
    }

    /// Text content of the first child node only; empty when childless
    pub fn first_child_text(&self) -> String {
        self.children
            .first()
            .map(|n| n.text_content())
            .unwrap_or_default()
    }
}
