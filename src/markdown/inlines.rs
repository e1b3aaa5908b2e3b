//! Inline parsing primitives
//!
//!     This module parses the phrasing content of a block: the token region
//!     of a heading line or a paragraph becomes an ordered sequence of text
//!     runs and links. Inline parsing is much simpler than block parsing -
//!     it has formal start/end tokens and no structural elements - so it is
//!     a single cursor pass with one recursive case (link labels).
//!
//!     The link form is `[label](url)` or `[label](url "title")`. A
//!     candidate that does not complete the whole form degrades to literal
//!     text: the opening bracket is absorbed into the surrounding text run
//!     and scanning continues after it. Degrading instead of erroring keeps
//!     the parser total - every input yields a tree.
//!
//!     Text runs are maximal. A run's span covers everything from its first
//!     to its last byte, so bytes no token claimed (the newlines between a
//!     paragraph's lines) are included by construction, and two text nodes
//!     never sit adjacent in a sequence.

use super::ast::{Link, NodeSeq, PhrasingContent, Text};
use super::lexing::Token;
use super::span::Span;
use std::ops::Range;

/// Parse the phrasing content of a token region.
///
/// Token ranges must be byte ranges into `source`, in source order.
pub fn parse_phrasing<'a>(
    source: &'a str,
    tokens: &[(Token, Range<usize>)],
) -> NodeSeq<PhrasingContent<'a>> {
    let mut children = NodeSeq::new();
    let mut run: Option<Range<usize>> = None;
    let mut index = 0;

    while index < tokens.len() {
        let (token, range) = &tokens[index];

        if *token == Token::OpenBracket {
            if let Some((link, consumed)) = try_parse_link(source, tokens, index) {
                flush_run(source, &mut run, &mut children);
                children.push(PhrasingContent::Link(link));
                index += consumed;
                continue;
            }
        }

        extend_run(&mut run, range);
        index += 1;
    }

    flush_run(source, &mut run, &mut children);
    children
}

fn extend_run(run: &mut Option<Range<usize>>, range: &Range<usize>) {
    match run {
        Some(current) => current.end = range.end,
        None => *run = Some(range.clone()),
    }
}

fn flush_run<'a>(
    source: &'a str,
    run: &mut Option<Range<usize>>,
    children: &mut NodeSeq<PhrasingContent<'a>>,
) {
    if let Some(range) = run.take() {
        children.push(PhrasingContent::Text(Text::new(Span::from_range(
            source, range,
        ))));
    }
}

/// Attempt to parse a complete link starting at the opening bracket.
///
/// Returns the link and the number of tokens consumed, or `None` when the
/// region starting here is not a complete link form.
fn try_parse_link<'a>(
    source: &'a str,
    tokens: &[(Token, Range<usize>)],
    start: usize,
) -> Option<(Link<'a>, usize)> {
    let close_bracket = matching_bracket(tokens, start)?;

    // The destination must open immediately after the label.
    let open_paren = close_bracket + 1;
    if !matches!(tokens.get(open_paren), Some((Token::OpenParen, _))) {
        return None;
    }

    let mut cursor = open_paren + 1;
    let url = take_url(source, tokens, &mut cursor)?;

    while matches!(
        tokens.get(cursor),
        Some((Token::Whitespace | Token::Newline, _))
    ) {
        cursor += 1;
    }

    let title = if matches!(tokens.get(cursor), Some((Token::Quote, _))) {
        let title = take_title(source, tokens, &mut cursor)?;
        while matches!(
            tokens.get(cursor),
            Some((Token::Whitespace | Token::Newline, _))
        ) {
            cursor += 1;
        }
        Some(title)
    } else {
        None
    };

    if !matches!(tokens.get(cursor), Some((Token::CloseParen, _))) {
        return None;
    }

    let children = parse_phrasing(source, &tokens[start + 1..close_bracket]);
    Some((Link::new(children, url, title), cursor - start + 1))
}

/// Find the bracket closing the one at `start`, counting nested pairs.
fn matching_bracket(tokens: &[(Token, Range<usize>)], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (index, (token, _)) in tokens.iter().enumerate().skip(start) {
        match token {
            Token::OpenBracket => depth += 1,
            Token::CloseBracket => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }
    None
}

/// Consume the destination: everything up to whitespace or the closing paren.
fn take_url<'a>(
    source: &'a str,
    tokens: &[(Token, Range<usize>)],
    cursor: &mut usize,
) -> Option<Span<'a>> {
    let first = tokens.get(*cursor)?;
    let url_start = first.1.start;
    let mut url_end = url_start;

    while let Some((token, range)) = tokens.get(*cursor) {
        match token {
            Token::CloseParen | Token::Whitespace | Token::Newline => break,
            _ => {
                url_end = range.end;
                *cursor += 1;
            }
        }
    }

    Some(Span::from_range(source, url_start..url_end))
}

/// Consume a quoted title, cursor sitting on the opening quote.
fn take_title<'a>(
    source: &'a str,
    tokens: &[(Token, Range<usize>)],
    cursor: &mut usize,
) -> Option<Span<'a>> {
    let title_start = tokens[*cursor].1.end;
    *cursor += 1;
    let mut title_end = title_start;

    while let Some((token, range)) = tokens.get(*cursor) {
        if *token == Token::Quote {
            *cursor += 1;
            return Some(Span::from_range(source, title_start..title_end));
        }
        title_end = range.end;
        *cursor += 1;
    }

    // Unterminated title: the whole candidate degrades to text.
    None
}
