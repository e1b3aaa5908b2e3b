//! Paragraph element
//!
//! A paragraph is a block of one or more contiguous text lines; blank lines
//! separate paragraphs. The paragraph itself carries no text - its content is
//! the phrasing sequence parsed from the block's source region, with interior
//! line breaks preserved inside the text runs.
//!
//! Parsing Structure:
//!
//! | Element   | Prec. Blank | Head     | Tail                     |
//! |-----------|-------------|----------|--------------------------|
//! | Paragraph | Optional    | Any line | Blank line or heading    |

use super::super::sequence::NodeSeq;
use super::super::traits::{visit_children, AstNode, Visitor};
use super::phrasing_content::PhrasingContent;
use std::fmt;

/// A paragraph holding inline content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph<'a> {
    pub children: NodeSeq<PhrasingContent<'a>>,
}

impl<'a> Paragraph<'a> {
    pub fn new(children: NodeSeq<PhrasingContent<'a>>) -> Self {
        Self { children }
    }

    /// The paragraph's content flattened to plain text.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .map(PhrasingContent::plain_text)
            .collect()
    }
}

impl AstNode for Paragraph<'_> {
    fn node_type(&self) -> &'static str {
        "Paragraph"
    }

    fn display_label(&self) -> String {
        format!("{} item(s)", self.children.len())
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_paragraph(self);
        visit_children(visitor, &self.children);
        visitor.leave_paragraph(self);
    }
}

impl fmt::Display for Paragraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paragraph({} items)", self.children.len())
    }
}
