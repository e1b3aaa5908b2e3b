//! AST Snapshot - a normalized intermediate representation of the tree
//!
//! This module provides a canonical, format-agnostic representation of the
//! document tree suitable for serialization to any data format (JSON, YAML).
//!
//! The snapshot captures the complete tree structure with node types, labels,
//! attributes, and children - allowing each serializer to focus solely on
//! presentation without reimplementing traversal logic. Serializers consume
//! the output of [`snapshot_from_root`] rather than walking the tree
//! themselves.
//!
//! A snapshot owns its strings, so it outlives the source buffer the tree
//! borrows from; it is the hand-off point between the borrowed world of the
//! tree and owned serialized output.

use super::elements::{FlowContent, Heading, Link, Paragraph, PhrasingContent, Root, Text};
use super::traits::AstNode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of an AST node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstSnapshot {
    /// The type of node (e.g. "Heading", "Link")
    pub node_type: String,

    /// The primary label or text content of the node
    pub label: String,

    /// Additional attributes specific to the node type
    pub attributes: BTreeMap<String, String>,

    /// Child nodes in the tree
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    /// Create a new snapshot with the given node type and label
    pub fn new(node_type: String, label: String) -> Self {
        Self {
            node_type,
            label,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute to this snapshot
    pub fn with_attribute(mut self, key: String, value: String) -> Self {
        self.attributes.insert(key, value);
        self
    }

    /// Add a child snapshot
    pub fn with_child(mut self, child: AstSnapshot) -> Self {
        self.children.push(child);
        self
    }
}

// ============================================================================
// Snapshot Building Functions
// ============================================================================

/// Build a snapshot of the whole tree, starting at the root.
pub fn snapshot_from_root(root: &Root<'_>) -> AstSnapshot {
    let mut snapshot = AstSnapshot::new("Root".to_string(), root.display_label());
    for child in &root.children {
        snapshot.children.push(snapshot_from_flow(child));
    }
    snapshot
}

/// Build a snapshot from a block-level node.
pub fn snapshot_from_flow(flow: &FlowContent<'_>) -> AstSnapshot {
    match flow {
        FlowContent::Heading(heading) => build_heading_snapshot(heading),
        FlowContent::Paragraph(paragraph) => build_paragraph_snapshot(paragraph),
    }
}

fn snapshot_from_phrasing(phrasing: &PhrasingContent<'_>) -> AstSnapshot {
    match phrasing {
        PhrasingContent::Text(text) => build_text_snapshot(text),
        PhrasingContent::Link(link) => build_link_snapshot(link),
    }
}

fn build_heading_snapshot(heading: &Heading<'_>) -> AstSnapshot {
    let mut snapshot = AstSnapshot::new("Heading".to_string(), heading.display_label())
        .with_attribute("depth".to_string(), heading.depth.to_string());
    for child in &heading.children {
        snapshot.children.push(snapshot_from_phrasing(child));
    }
    snapshot
}

fn build_paragraph_snapshot(paragraph: &Paragraph<'_>) -> AstSnapshot {
    let mut snapshot = AstSnapshot::new("Paragraph".to_string(), paragraph.display_label());
    for child in &paragraph.children {
        snapshot.children.push(snapshot_from_phrasing(child));
    }
    snapshot
}

fn build_text_snapshot(text: &Text<'_>) -> AstSnapshot {
    AstSnapshot::new("Text".to_string(), text.display_label())
}

fn build_link_snapshot(link: &Link<'_>) -> AstSnapshot {
    let mut snapshot = AstSnapshot::new("Link".to_string(), link.display_label())
        .with_attribute("url".to_string(), link.url.as_str().to_string());
    // An absent title is omitted entirely; an empty one appears as "".
    if let Some(title) = &link.title {
        snapshot = snapshot.with_attribute("title".to_string(), title.as_str().to_string());
    }
    for child in &link.children {
        snapshot.children.push(snapshot_from_phrasing(child));
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use super::super::sequence::NodeSeq;
    use super::*;
    use crate::markdown::span::Span;

    #[test]
    fn snapshot_of_empty_root() {
        let root = Root::new();
        let snapshot = snapshot_from_root(&root);

        assert_eq!(snapshot.node_type, "Root");
        assert_eq!(snapshot.label, "0 item(s)");
        assert!(snapshot.children.is_empty());
    }

    #[test]
    fn snapshot_preserves_structure() {
        let mut root = Root::new();
        root.children.push(FlowContent::Heading(Heading::new(
            2,
            vec![PhrasingContent::Text(Text::new(Span::new("Hi")))].into(),
        )));
        root.children.push(FlowContent::Paragraph(Paragraph::new(
            vec![PhrasingContent::Text(Text::new(Span::new("Body")))].into(),
        )));

        let snapshot = snapshot_from_root(&root);

        assert_eq!(snapshot.children.len(), 2);
        assert_eq!(snapshot.children[0].node_type, "Heading");
        assert_eq!(
            snapshot.children[0].attributes.get("depth"),
            Some(&"2".to_string())
        );
        assert_eq!(snapshot.children[1].node_type, "Paragraph");
        assert_eq!(snapshot.children[1].children[0].label, "Body");
    }

    #[test]
    fn link_title_attribute_tracks_presence() {
        let bare = Link::new(NodeSeq::new(), Span::new("http://x"), None);
        let titled = Link::new(
            NodeSeq::new(),
            Span::new("http://x"),
            Some(Span::new("")),
        );

        let bare_snapshot = build_link_snapshot(&bare);
        let titled_snapshot = build_link_snapshot(&titled);

        assert!(!bare_snapshot.attributes.contains_key("title"));
        assert_eq!(titled_snapshot.attributes.get("title"), Some(&String::new()));
    }
}
