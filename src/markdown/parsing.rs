//! Block parsing - assembling classified lines into the document tree
//!
//!     This is the last stage of the pipeline: [lexing](super::lexing)
//!     produced classified lines, and this module folds them into flow
//!     content in a single pass. The grammar is strictly line based, so the
//!     pass needs no backtracking:
//!
//!         - A heading line becomes a [Heading](super::ast::Heading); its
//!           marker run and the whitespace after it are stripped and the rest
//!           of the line is inline-parsed.
//!         - A maximal run of consecutive text lines becomes one
//!           [Paragraph](super::ast::Paragraph). The lines' tokens are
//!           rejoined with their newline tokens so the paragraph's region is
//!           contiguous in the source, then inline-parsed as a whole.
//!         - Blank lines close the current paragraph and are otherwise
//!           dropped.
//!
//!     Parsing is total: every input buffer yields a tree, and every node in
//!     it is fully formed before it is appended to its parent.

use super::ast::{FlowContent, Heading, Paragraph, Root};
use super::inlines::parse_phrasing;
use super::lexing::{group_lines, tokenize, Line, LineKind, Token};
use std::ops::Range;

/// Parse a markdown source buffer into a document tree.
///
/// The returned root borrows from `source` and owns the rest of the tree.
pub fn parse(source: &str) -> Root<'_> {
    let tokens = tokenize(source);
    let lines = group_lines(&tokens);
    build_root(source, &lines)
}

fn build_root<'a>(source: &'a str, lines: &[Line]) -> Root<'a> {
    let mut root = Root::new();
    let mut index = 0;

    while index < lines.len() {
        match lines[index].kind {
            LineKind::Blank => {
                index += 1;
            }
            LineKind::Heading { depth } => {
                root.children
                    .push(FlowContent::Heading(build_heading(source, &lines[index], depth)));
                index += 1;
            }
            LineKind::Text => {
                let start = index;
                while index < lines.len() && lines[index].kind == LineKind::Text {
                    index += 1;
                }
                root.children.push(FlowContent::Paragraph(build_paragraph(
                    source,
                    &lines[start..index],
                )));
            }
        }
    }

    root
}

fn build_heading<'a>(source: &'a str, line: &Line, depth: usize) -> Heading<'a> {
    Heading::new(depth, parse_phrasing(source, heading_content(line)))
}

/// The heading line's content tokens: marker run, its delimiting whitespace,
/// and trailing whitespace stripped.
fn heading_content(line: &Line) -> &[(Token, Range<usize>)] {
    let mut tokens: &[(Token, Range<usize>)] = &line.tokens;

    if let [(Token::Hashes, _), rest @ ..] = tokens {
        tokens = rest;
    }
    if let [(Token::Whitespace, _), rest @ ..] = tokens {
        tokens = rest;
    }
    while let [rest @ .., (Token::Whitespace, _)] = tokens {
        tokens = rest;
    }

    tokens
}

fn build_paragraph<'a>(source: &'a str, lines: &[Line]) -> Paragraph<'a> {
    let mut tokens: Vec<(Token, Range<usize>)> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        tokens.extend(line.tokens.iter().cloned());
        // Interior line breaks are part of the paragraph's content region.
        if index + 1 < lines.len() {
            if let Some(newline) = &line.newline {
                tokens.push((Token::Newline, newline.clone()));
            }
        }
    }

    Paragraph::new(parse_phrasing(source, &tokens))
}
