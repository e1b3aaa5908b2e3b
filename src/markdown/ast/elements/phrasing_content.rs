//! Phrasing content
//!
//! `PhrasingContent` is the closed union of inline elements. Block nodes and
//! link labels hold ordered sequences of it. Like the flow union, it is
//! matched exhaustively everywhere.

use super::super::traits::{AstNode, Visitor};
use super::link::Link;
use super::text::Text;
use std::fmt;

/// An inline node: a text run or a link.
#[derive(Debug, Clone, PartialEq)]
pub enum PhrasingContent<'a> {
    Text(Text<'a>),
    Link(Link<'a>),
}

impl<'a> PhrasingContent<'a> {
    /// Flatten this node to plain text: a text run's bytes, or a link's
    /// label flattened recursively.
    pub fn plain_text(&self) -> String {
        match self {
            PhrasingContent::Text(t) => t.value.as_str().to_string(),
            PhrasingContent::Link(l) => l.text(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, PhrasingContent::Text(_))
    }

    pub fn is_link(&self) -> bool {
        matches!(self, PhrasingContent::Link(_))
    }

    pub fn as_text(&self) -> Option<&Text<'a>> {
        if let PhrasingContent::Text(t) = self {
            Some(t)
        } else {
            None
        }
    }

    pub fn as_link(&self) -> Option<&Link<'a>> {
        if let PhrasingContent::Link(l) = self {
            Some(l)
        } else {
            None
        }
    }
}

impl AstNode for PhrasingContent<'_> {
    fn node_type(&self) -> &'static str {
        match self {
            PhrasingContent::Text(t) => t.node_type(),
            PhrasingContent::Link(l) => l.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            PhrasingContent::Text(t) => t.display_label(),
            PhrasingContent::Link(l) => l.display_label(),
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            PhrasingContent::Text(t) => t.accept(visitor),
            PhrasingContent::Link(l) => l.accept(visitor),
        }
    }
}

impl fmt::Display for PhrasingContent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhrasingContent::Text(t) => fmt::Display::fmt(t, f),
            PhrasingContent::Link(l) => fmt::Display::fmt(l, f),
        }
    }
}
