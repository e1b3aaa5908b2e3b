//! Flow content
//!
//! `FlowContent` is the closed union of block-level elements. The root's
//! children are flow content; tooling that operates on mixed block sequences
//! dispatches through this type. Matching is exhaustive at every site, so a
//! block of an unknown kind cannot reach a consumer.

use super::super::sequence::NodeSeq;
use super::super::traits::{AstNode, Visitor};
use super::heading::Heading;
use super::paragraph::Paragraph;
use super::phrasing_content::PhrasingContent;
use std::fmt;

/// A block-level node: heading or paragraph.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowContent<'a> {
    Heading(Heading<'a>),
    Paragraph(Paragraph<'a>),
}

impl<'a> FlowContent<'a> {
    /// The node's phrasing children. Both block kinds have them.
    pub fn children(&self) -> &NodeSeq<PhrasingContent<'a>> {
        match self {
            FlowContent::Heading(h) => &h.children,
            FlowContent::Paragraph(p) => &p.children,
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, FlowContent::Heading(_))
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self, FlowContent::Paragraph(_))
    }

    pub fn as_heading(&self) -> Option<&Heading<'a>> {
        if let FlowContent::Heading(h) = self {
            Some(h)
        } else {
            None
        }
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph<'a>> {
        if let FlowContent::Paragraph(p) = self {
            Some(p)
        } else {
            None
        }
    }
}

impl AstNode for FlowContent<'_> {
    fn node_type(&self) -> &'static str {
        match self {
            FlowContent::Heading(h) => h.node_type(),
            FlowContent::Paragraph(p) => p.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            FlowContent::Heading(h) => h.display_label(),
            FlowContent::Paragraph(p) => p.display_label(),
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            FlowContent::Heading(h) => h.accept(visitor),
            FlowContent::Paragraph(p) => p.accept(visitor),
        }
    }
}

impl fmt::Display for FlowContent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowContent::Heading(h) => fmt::Display::fmt(h, f),
            FlowContent::Paragraph(p) => fmt::Display::fmt(p, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::text::Text;
    use super::*;
    use crate::markdown::span::Span;

    #[test]
    fn accessors_match_the_variant() {
        let heading = FlowContent::Heading(Heading::new(
            1,
            vec![PhrasingContent::Text(Text::new(Span::new("Hi")))].into(),
        ));

        assert!(heading.is_heading());
        assert!(!heading.is_paragraph());
        assert!(heading.as_heading().is_some());
        assert!(heading.as_paragraph().is_none());
        assert_eq!(heading.node_type(), "Heading");
        assert_eq!(heading.children().len(), 1);
    }
}
