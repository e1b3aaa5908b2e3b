//! Text element
//!
//! A text run: a contiguous region of source text with no inline structure.
//! The value is a span into the source buffer, so a text node never owns or
//! copies its content. Runs are maximal - two text nodes are never adjacent
//! in a phrasing sequence without a link between them.

use super::super::traits::{AstNode, Visitor};
use crate::markdown::span::Span;
use std::fmt;

/// A plain text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Text<'a> {
    pub value: Span<'a>,
}

impl<'a> Text<'a> {
    pub fn new(value: Span<'a>) -> Self {
        Self { value }
    }
}

impl AstNode for Text<'_> {
    fn node_type(&self) -> &'static str {
        "Text"
    }

    fn display_label(&self) -> String {
        self.value.as_str().to_string()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_text(self);
        visitor.leave_text(self);
    }
}

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text('{}')", self.value)
    }
}
