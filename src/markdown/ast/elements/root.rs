//! Root element
//!
//! The root node owns the document's flow-content sequence and, through it,
//! the entire tree. It is created once by the parser with every child fully
//! formed, and is read-only from then on; dropping the root releases the
//! whole tree (the borrowed source buffer stays with its owner).

use super::super::sequence::NodeSeq;
use super::super::traits::{visit_children, AstNode, Visitor};
use super::flow_content::FlowContent;
use std::fmt;

/// The document root: an ordered sequence of flow content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Root<'a> {
    pub children: NodeSeq<FlowContent<'a>>,
}

impl<'a> Root<'a> {
    /// Create an empty root, ready for the parser to populate.
    pub fn new() -> Self {
        Self {
            children: NodeSeq::new(),
        }
    }

    /// Create a root holding the given children.
    pub fn with_children(children: NodeSeq<FlowContent<'a>>) -> Self {
        Self { children }
    }
}

impl AstNode for Root<'_> {
    fn node_type(&self) -> &'static str {
        "Root"
    }

    fn display_label(&self) -> String {
        format!("{} item(s)", self.children.len())
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_root(self);
        visit_children(visitor, &self.children);
        visitor.leave_root(self);
    }
}

impl fmt::Display for Root<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Root({} items)", self.children.len())
    }
}
