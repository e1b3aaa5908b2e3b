//! AST traits - Common interfaces for uniform node access
//!
//! This module defines the common traits that provide uniform access
//! to AST node information across all node types.

use super::elements::{Heading, Link, Paragraph, Root, Text};
use super::sequence::NodeSeq;

/// Visitor trait for traversing the AST
///
/// Implement this trait to walk the tree read-only, depth-first, in document
/// order. Each visit method corresponds to a node type; `leave_*` methods
/// fire after a node's children have been visited. Default implementations
/// are empty, so you only need to override the methods you care about.
///
/// # Example
///
/// ```ignore
/// struct HeadingCounter(usize);
///
/// impl Visitor for HeadingCounter {
///     fn visit_heading(&mut self, _heading: &Heading<'_>) {
///         self.0 += 1;
///     }
/// }
///
/// let mut visitor = HeadingCounter(0);
/// root.accept(&mut visitor);
/// ```
pub trait Visitor {
    fn visit_root(&mut self, _root: &Root<'_>) {}
    fn leave_root(&mut self, _root: &Root<'_>) {}

    fn visit_heading(&mut self, _heading: &Heading<'_>) {}
    fn leave_heading(&mut self, _heading: &Heading<'_>) {}

    fn visit_paragraph(&mut self, _paragraph: &Paragraph<'_>) {}
    fn leave_paragraph(&mut self, _paragraph: &Paragraph<'_>) {}

    fn visit_link(&mut self, _link: &Link<'_>) {}
    fn leave_link(&mut self, _link: &Link<'_>) {}

    fn visit_text(&mut self, _text: &Text<'_>) {}
    fn leave_text(&mut self, _text: &Text<'_>) {}
}

/// Helper function to visit every node in a child sequence
pub fn visit_children<T: AstNode>(visitor: &mut dyn Visitor, children: &NodeSeq<T>) {
    for child in children {
        child.accept(visitor);
    }
}

/// Common interface for all AST nodes
pub trait AstNode {
    /// Stable name of this node's kind (e.g. "Heading", "Link")
    fn node_type(&self) -> &'static str;

    /// Short human-readable label for tree displays
    fn display_label(&self) -> String;

    /// Accept a visitor for traversing this node and its children
    fn accept(&self, visitor: &mut dyn Visitor);
}

#[cfg(test)]
mod tests {
    use super::super::elements::{FlowContent, PhrasingContent};
    use super::*;
    use crate::markdown::span::Span;

    struct CountingVisitor {
        headings: usize,
        paragraphs: usize,
        links: usize,
        texts: usize,
        left_links: usize,
    }

    impl CountingVisitor {
        fn new() -> Self {
            Self {
                headings: 0,
                paragraphs: 0,
                links: 0,
                texts: 0,
                left_links: 0,
            }
        }
    }

    impl Visitor for CountingVisitor {
        fn visit_heading(&mut self, _: &Heading<'_>) {
            self.headings += 1;
        }
        fn visit_paragraph(&mut self, _: &Paragraph<'_>) {
            self.paragraphs += 1;
        }
        fn visit_link(&mut self, _: &Link<'_>) {
            self.links += 1;
        }
        fn leave_link(&mut self, _: &Link<'_>) {
            self.left_links += 1;
        }
        fn visit_text(&mut self, _: &Text<'_>) {
            self.texts += 1;
        }
    }

    #[test]
    fn visitor_reaches_nested_nodes() {
        let link = Link::new(
            vec![PhrasingContent::Text(Text::new(Span::new("here")))].into(),
            Span::new("http://x"),
            None,
        );
        let paragraph = Paragraph::new(
            vec![
                PhrasingContent::Text(Text::new(Span::new("See "))),
                PhrasingContent::Link(link),
            ]
            .into(),
        );
        let mut root = Root::new();
        root.children.push(FlowContent::Paragraph(paragraph));

        let mut visitor = CountingVisitor::new();
        root.accept(&mut visitor);

        assert_eq!(visitor.headings, 0);
        assert_eq!(visitor.paragraphs, 1);
        assert_eq!(visitor.links, 1);
        assert_eq!(visitor.left_links, 1);
        // "See " plus the link's inner "here"
        assert_eq!(visitor.texts, 2);
    }
}
