//! Line grouping and classification
//!
//! Splits the flat token stream on newline tokens into [`Line`] groups and
//! classifies each one. Classification drives block building:
//!
//!     - Blank: no tokens, or only whitespace. Separates paragraphs.
//!     - Heading: a 1-6 long marker run as the first token, followed by
//!       whitespace or the end of the line. Longer runs, and runs glued to
//!       their text, are not headings - the line falls back to text.
//!     - Text: anything else. Consecutive text lines form one paragraph.
//!
//! Each line keeps its tokens (terminating newline excluded) and the byte
//! range of that newline, so the block builder can reassemble a multi-line
//! paragraph region with its interior line breaks intact.

use super::tokens::Token;
use std::ops::Range;

/// Deepest heading the grammar recognizes; longer marker runs are text.
pub const MAX_HEADING_DEPTH: usize = 6;

/// Classification of a single source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Heading { depth: usize },
    Text,
}

/// A single source line as a group of tokens
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Tokens on this line, excluding the terminating newline
    pub tokens: Vec<(Token, Range<usize>)>,
    /// Byte range of the terminating newline, when the line has one
    pub newline: Option<Range<usize>>,
    pub kind: LineKind,
}

impl Line {
    fn from_tokens(tokens: Vec<(Token, Range<usize>)>, newline: Option<Range<usize>>) -> Self {
        let kind = classify(&tokens);
        Self {
            tokens,
            newline,
            kind,
        }
    }
}

/// Split a token stream into classified lines.
pub fn group_lines(tokens: &[(Token, Range<usize>)]) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current: Vec<(Token, Range<usize>)> = Vec::new();

    for (token, range) in tokens {
        if *token == Token::Newline {
            lines.push(Line::from_tokens(
                std::mem::take(&mut current),
                Some(range.clone()),
            ));
        } else {
            current.push((*token, range.clone()));
        }
    }

    // A final line without a terminating newline still counts.
    if !current.is_empty() {
        lines.push(Line::from_tokens(current, None));
    }

    lines
}

fn classify(tokens: &[(Token, Range<usize>)]) -> LineKind {
    if tokens.iter().all(|(token, _)| token.is_whitespace()) {
        return LineKind::Blank;
    }

    if let Some((Token::Hashes, range)) = tokens.first() {
        let depth = range.end - range.start;
        let marker_is_delimited = match tokens.get(1) {
            None => true,
            Some((Token::Whitespace, _)) => true,
            Some(_) => false,
        };
        if depth <= MAX_HEADING_DEPTH && marker_is_delimited {
            return LineKind::Heading { depth };
        }
    }

    LineKind::Text
}
