//! Tree formatter - the indented structural dump
//!
//! One line per fact about the tree, indentation encoding nesting: two
//! spaces per level, one level per nesting step, restored on return from
//! each subtree (the indentation counter lives on the call stack, not in
//! shared state). Rendering is a pure, read-only, depth-first pre-order
//! traversal; output goes to a caller-supplied sink.
//!
//! The format is:
//!
//!   Flow Content 0:
//!     Heading (depth: 1):
//!       Children:
//!         Text: Hello
//!   Flow Content 1:
//!     Paragraph:
//!       Children:
//!         Text: See
//!         Link:
//!           Children:
//!             Text: here
//!           URL: http://x
//!           Title: (none)
//!
//! Span bytes are emitted verbatim - no escaping, no transformation - and
//! an absent link title renders as the fixed placeholder "(none)".
//!
//! Child access goes through the sequence's checked `get`, with indices
//! derived from `len()`. A failed access means the tree is inconsistent;
//! rendering stops right there and the error is returned, never papered
//! over with partial output presented as complete.

use crate::markdown::ast::sequence::OutOfBounds;
use crate::markdown::ast::{
    FlowContent, Heading, Link, NodeSeq, Paragraph, PhrasingContent, Root, Text,
};
use std::fmt::{self, Write};

/// The fixed-width indentation unit.
const INDENTATION: &str = "  ";

/// Error that can occur while rendering a tree
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A child sequence failed to yield an element it claims to hold
    Inconsistent(OutOfBounds),
    /// The output sink rejected a write
    Sink(fmt::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Inconsistent(err) => write!(f, "inconsistent tree: {}", err),
            RenderError::Sink(_) => write!(f, "failed to write rendered output"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Inconsistent(err) => Some(err),
            RenderError::Sink(err) => Some(err),
        }
    }
}

impl From<OutOfBounds> for RenderError {
    fn from(err: OutOfBounds) -> Self {
        RenderError::Inconsistent(err)
    }
}

impl From<fmt::Error> for RenderError {
    fn from(err: fmt::Error) -> Self {
        RenderError::Sink(err)
    }
}

/// Render the whole tree into `out`.
pub fn render_root<W: Write>(root: &Root<'_>, out: &mut W) -> Result<(), RenderError> {
    for index in 0..root.children.len() {
        let child = root.children.get(index)?;
        indent(out, 0)?;
        writeln!(out, "Flow Content {}:", index)?;
        render_flow(child, out, 1)?;
    }
    Ok(())
}

/// Render the whole tree to a fresh string.
pub fn render_to_string(root: &Root<'_>) -> Result<String, RenderError> {
    let mut out = String::new();
    render_root(root, &mut out)?;
    Ok(out)
}

fn render_flow<W: Write>(
    flow: &FlowContent<'_>,
    out: &mut W,
    level: usize,
) -> Result<(), RenderError> {
    match flow {
        FlowContent::Heading(heading) => render_heading(heading, out, level),
        FlowContent::Paragraph(paragraph) => render_paragraph(paragraph, out, level),
    }
}

fn render_heading<W: Write>(
    heading: &Heading<'_>,
    out: &mut W,
    level: usize,
) -> Result<(), RenderError> {
    indent(out, level)?;
    writeln!(out, "Heading (depth: {}):", heading.depth)?;
    indent(out, level + 1)?;
    writeln!(out, "Children:")?;
    render_children(&heading.children, out, level + 2)
}

fn render_paragraph<W: Write>(
    paragraph: &Paragraph<'_>,
    out: &mut W,
    level: usize,
) -> Result<(), RenderError> {
    indent(out, level)?;
    writeln!(out, "Paragraph:")?;
    indent(out, level + 1)?;
    writeln!(out, "Children:")?;
    render_children(&paragraph.children, out, level + 2)
}

fn render_children<W: Write>(
    children: &NodeSeq<PhrasingContent<'_>>,
    out: &mut W,
    level: usize,
) -> Result<(), RenderError> {
    for index in 0..children.len() {
        render_phrasing(children.get(index)?, out, level)?;
    }
    Ok(())
}

fn render_phrasing<W: Write>(
    phrasing: &PhrasingContent<'_>,
    out: &mut W,
    level: usize,
) -> Result<(), RenderError> {
    match phrasing {
        PhrasingContent::Text(text) => render_text(text, out, level),
        PhrasingContent::Link(link) => render_link(link, out, level),
    }
}

fn render_text<W: Write>(text: &Text<'_>, out: &mut W, level: usize) -> Result<(), RenderError> {
    indent(out, level)?;
    writeln!(out, "Text: {}", text.value)?;
    Ok(())
}

fn render_link<W: Write>(link: &Link<'_>, out: &mut W, level: usize) -> Result<(), RenderError> {
    indent(out, level)?;
    writeln!(out, "Link:")?;
    indent(out, level + 1)?;
    writeln!(out, "Children:")?;
    render_children(&link.children, out, level + 2)?;
    indent(out, level + 1)?;
    writeln!(out, "URL: {}", link.url)?;
    indent(out, level + 1)?;
    match &link.title {
        Some(title) => writeln!(out, "Title: {}", title)?,
        None => writeln!(out, "Title: (none)")?,
    }
    Ok(())
}

fn indent<W: Write>(out: &mut W, level: usize) -> Result<(), RenderError> {
    for _ in 0..level {
        out.write_str(INDENTATION)?;
    }
    Ok(())
}

/// Formatter implementation for the tree format
pub struct TreeFormatter;

impl super::registry::Formatter for TreeFormatter {
    fn name(&self) -> &str {
        "tree"
    }

    fn serialize(&self, root: &Root<'_>) -> Result<String, super::registry::FormatError> {
        render_to_string(root)
            .map_err(|err| super::registry::FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "Indented structural dump of the document tree"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::span::Span;

    fn text(value: &'static str) -> PhrasingContent<'static> {
        PhrasingContent::Text(Text::new(Span::new(value)))
    }

    #[test]
    fn renders_a_heading() {
        let mut root = Root::new();
        root.children
            .push(FlowContent::Heading(Heading::new(2, vec![text("Hi")].into())));

        let output = render_to_string(&root).unwrap();
        assert_eq!(
            output,
            "Flow Content 0:\n  Heading (depth: 2):\n    Children:\n      Text: Hi\n"
        );
    }

    #[test]
    fn renders_a_paragraph_with_a_bare_link() {
        let link = Link::new(
            vec![text("here")].into(),
            Span::new("http://x"),
            None,
        );
        let mut root = Root::new();
        root.children.push(FlowContent::Paragraph(Paragraph::new(
            vec![text("See"), PhrasingContent::Link(link)].into(),
        )));

        let output = render_to_string(&root).unwrap();
        let expected = "\
Flow Content 0:
  Paragraph:
    Children:
      Text: See
      Link:
        Children:
          Text: here
        URL: http://x
        Title: (none)
";
        assert_eq!(output, expected);
    }

    #[test]
    fn present_titles_render_verbatim() {
        let link = Link::new(
            vec![text("x")].into(),
            Span::new("u"),
            Some(Span::new("the title")),
        );
        let mut root = Root::new();
        root.children.push(FlowContent::Paragraph(Paragraph::new(
            vec![PhrasingContent::Link(link)].into(),
        )));

        let output = render_to_string(&root).unwrap();
        assert!(output.contains("        Title: the title\n"));
    }

    #[test]
    fn empty_title_renders_as_empty_not_placeholder() {
        let link = Link::new(vec![].into(), Span::new("u"), Some(Span::new("")));
        let mut root = Root::new();
        root.children.push(FlowContent::Paragraph(Paragraph::new(
            vec![PhrasingContent::Link(link)].into(),
        )));

        let output = render_to_string(&root).unwrap();
        assert!(output.contains("        Title: \n"));
        assert!(!output.contains("(none)"));
    }

    #[test]
    fn empty_root_renders_nothing() {
        let root = Root::new();
        assert_eq!(render_to_string(&root).unwrap(), "");
    }

    #[test]
    fn text_bytes_are_not_escaped() {
        let mut root = Root::new();
        root.children.push(FlowContent::Paragraph(Paragraph::new(
            vec![text("a\tb\"c")].into(),
        )));

        let output = render_to_string(&root).unwrap();
        assert!(output.contains("      Text: a\tb\"c\n"));
    }
}
