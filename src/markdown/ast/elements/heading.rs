//! Heading element
//!
//! A heading is a block introduced by a run of `#` markers; the run length is
//! the heading's depth and the rest of the line is its inline content.
//!
//! Parsing Structure:
//!
//! | Element | Prec. Blank | Head                    | Tail        |
//! |---------|-------------|-------------------------|-------------|
//! | Heading | Optional    | `#` run + space + text  | End of line |
//!
//! The model stores depth as an unbounded positive integer. The parser only
//! produces depths 1 through 6, but a producer constructing trees by hand may
//! store any positive value and the tree will carry and render it unchanged.

use super::super::sequence::NodeSeq;
use super::super::traits::{visit_children, AstNode, Visitor};
use super::phrasing_content::PhrasingContent;
use std::fmt;

/// A heading with a marker depth and inline content.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading<'a> {
    pub depth: usize,
    pub children: NodeSeq<PhrasingContent<'a>>,
}

impl<'a> Heading<'a> {
    /// Create a heading. `depth` must be positive.
    pub fn new(depth: usize, children: NodeSeq<PhrasingContent<'a>>) -> Self {
        debug_assert!(depth > 0, "heading depth must be positive");
        Self { depth, children }
    }

    /// The heading's content flattened to plain text.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .map(PhrasingContent::plain_text)
            .collect()
    }
}

impl AstNode for Heading<'_> {
    fn node_type(&self) -> &'static str {
        "Heading"
    }

    fn display_label(&self) -> String {
        format!("depth {}: {}", self.depth, self.text())
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_heading(self);
        visit_children(visitor, &self.children);
        visitor.leave_heading(self);
    }
}

impl fmt::Display for Heading<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Heading(depth {}, {} items)", self.depth, self.children.len())
    }
}

#[cfg(test)]
mod tests {
    use super::super::link::Link;
    use super::super::text::Text;
    use super::*;
    use crate::markdown::span::Span;

    #[test]
    fn flattens_inline_content_to_text() {
        let heading = Heading::new(
            2,
            vec![
                PhrasingContent::Text(Text::new(Span::new("See "))),
                PhrasingContent::Link(Link::new(
                    vec![PhrasingContent::Text(Text::new(Span::new("docs")))].into(),
                    Span::new("http://x"),
                    None,
                )),
            ]
            .into(),
        );

        assert_eq!(heading.text(), "See docs");
        assert_eq!(heading.display_label(), "depth 2: See docs");
    }

    #[test]
    fn empty_heading_is_allowed() {
        let heading = Heading::new(3, NodeSeq::new());
        assert_eq!(heading.text(), "");
        assert!(heading.children.is_empty());
    }
}
