//! Outline formatter - headings only
//!
//! Renders just the document's headings, one per line, each prefixed by its
//! marker run. Useful for a quick look at a document's structure without the
//! full tree dump:
//!
//!   # Title
//!   ## Section
//!   ## Another section
//!
//! Implemented as a [Visitor](crate::markdown::ast::Visitor) rather than a
//! hand-rolled walk: the outline only cares about one node kind, which is
//! exactly the case the visitor's empty defaults are for.

use crate::markdown::ast::{AstNode, Heading, Root, Visitor};
use std::fmt::Write;

#[derive(Default)]
struct OutlineVisitor {
    output: String,
}

impl Visitor for OutlineVisitor {
    fn visit_heading(&mut self, heading: &Heading<'_>) {
        // Writing to a String cannot fail.
        let _ = writeln!(
            self.output,
            "{} {}",
            "#".repeat(heading.depth),
            heading.text()
        );
    }
}

/// Render the heading outline of a tree.
pub fn outline_to_string(root: &Root<'_>) -> String {
    let mut visitor = OutlineVisitor::default();
    root.accept(&mut visitor);
    visitor.output
}

/// Formatter implementation for the outline format
pub struct OutlineFormatter;

impl super::registry::Formatter for OutlineFormatter {
    fn name(&self) -> &str {
        "outline"
    }

    fn serialize(&self, root: &Root<'_>) -> Result<String, super::registry::FormatError> {
        Ok(outline_to_string(root))
    }

    fn description(&self) -> &str {
        "Heading outline of the document"
    }
}
