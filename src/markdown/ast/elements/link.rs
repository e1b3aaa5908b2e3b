//! Link element
//!
//! A link carries a destination url, an optional title, and a label. The
//! label is phrasing content in its own right, so a link may contain text
//! runs and further links; the model places no restriction on that nesting.
//!
//! The title distinguishes absent from empty: `[x](u)` has no title, while
//! `[x](u "")` has a present, zero-length one. Both spans cover the exact
//! source text with the delimiting syntax excluded.

use super::super::sequence::NodeSeq;
use super::super::traits::{visit_children, AstNode, Visitor};
use super::phrasing_content::PhrasingContent;
use crate::markdown::span::Span;
use std::fmt;

/// A link with a label, a destination, and an optional title.
#[derive(Debug, Clone, PartialEq)]
pub struct Link<'a> {
    pub children: NodeSeq<PhrasingContent<'a>>,
    pub url: Span<'a>,
    pub title: Option<Span<'a>>,
}

impl<'a> Link<'a> {
    pub fn new(
        children: NodeSeq<PhrasingContent<'a>>,
        url: Span<'a>,
        title: Option<Span<'a>>,
    ) -> Self {
        Self {
            children,
            url,
            title,
        }
    }

    /// The label flattened to plain text.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .map(PhrasingContent::plain_text)
            .collect()
    }
}

impl AstNode for Link<'_> {
    fn node_type(&self) -> &'static str {
        "Link"
    }

    fn display_label(&self) -> String {
        self.url.as_str().to_string()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_link(self);
        visit_children(visitor, &self.children);
        visitor.leave_link(self);
    }
}

impl fmt::Display for Link<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Link('{}', {} items)", self.url, self.children.len())
    }
}

#[cfg(test)]
mod tests {
    use super::super::text::Text;
    use super::*;

    #[test]
    fn absent_and_empty_title_differ() {
        let bare = Link::new(NodeSeq::new(), Span::new("http://x"), None);
        let empty = Link::new(NodeSeq::new(), Span::new("http://x"), Some(Span::new("")));

        assert!(bare.title.is_none());
        assert!(empty.title.is_some());
        assert!(empty.title.unwrap().is_empty());
        assert_ne!(bare, empty);
    }

    #[test]
    fn labels_can_nest_links() {
        let inner = Link::new(
            vec![PhrasingContent::Text(Text::new(Span::new("deep")))].into(),
            Span::new("http://inner"),
            None,
        );
        let outer = Link::new(
            vec![PhrasingContent::Link(inner)].into(),
            Span::new("http://outer"),
            None,
        );

        assert_eq!(outer.text(), "deep");
        assert_eq!(outer.children.len(), 1);
    }
}
