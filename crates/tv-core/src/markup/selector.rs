//! Dotted selector matching and depth-first lookup
//!
//! A selector has the form `tag.class1.class2…`. The tag segment may be
//! empty (`.commtext` matches any tag); listed classes are matched as set
//! membership against the element's `class` attribute, order-independent.

use crate::error::{Result, ThreadvastError};
use crate::markup::model::{Element, MarkupNode};

/// A parsed dotted selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Required tag name; `None` matches any tag
    tag: Option<String>,
    /// Classes that must all be present
    classes: Vec<String>,
}

impl Selector {
    /// Parse a `tag.class1.class2…` selector string
    pub fn parse(input: &str) -> Result<Self> {
        let mut segments = input.split('.');
        let tag = match segments.next() {
            Some("") => None,
            Some(tag) => Some(tag.to_string()),
            None => None,
        };
        let classes: Vec<String> = segments.map(|s| s.to_string()).collect();

        if tag.is_none() && classes.is_empty() {
            return Err(ThreadvastError::Selector {
                selector: input.to_string(),
                reason: "selector needs a tag or at least one class".to_string(),
            });
        }
        if classes.iter().any(|c| c.is_empty()) {
            return Err(ThreadvastError::Selector {
                selector: input.to_string(),
                reason: "empty class segment".to_string(),
            });
        }

        Ok(Self { tag, classes })
    }

    /// Whether an element satisfies this selector
    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if element.tag != *tag {
                return false;
            }
        }
        let class_list = element.class_list();
        self.classes
            .iter()
            .all(|c| class_list.contains(&c.as_str()))
    }
}

/// Collect every matching element under `roots`, depth-first pre-order.
///
/// Descends into matched elements as well, so nested matches are reported
/// in document order.
pub fn find_all<'a>(roots: &'a [MarkupNode], selector: &Selector) -> Vec<&'a Element> {
    let mut found = Vec::new();
    for node in roots {
        collect(node, selector, &mut found);
    }
    found
}

fn collect<'a>(node: &'a MarkupNode, selector: &Selector, found: &mut Vec<&'a Element>) {
    if let MarkupNode::Element(el) = node {
        if selector.matches(el) {
            found.push(el);
        }
        for child in &el.children {
            collect(child, selector, found);
        }
    }
}

/// First matching element strictly beneath `element`, depth-first,
/// unlimited depth.
pub fn find_first<'a>(element: &'a Element, selector: &Selector) -> Option<&'a Element> {
    for child in &element.children {
        if let MarkupNode::Element(el) = child {
            if selector.matches(el) {
                return Some(el);
            }
            if let Some(hit) = find_first(el, selector) {
                return Some(hit);
            }
        }
    }
    None
}
