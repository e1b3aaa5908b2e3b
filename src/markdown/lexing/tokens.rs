//! Token definitions for the markdown subset
//!
//! This module defines all the tokens that can be produced by the lexer.
//! The tokens are defined using the logos derive macro for efficient
//! tokenization. Only the characters that can open or close structure get
//! their own kinds; everything else pools into text runs.

use logos::Logos;
use std::ops::Range;

/// All possible tokens in the modeled markdown subset
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Run of heading markers
    #[regex(r"#+")]
    Hashes,

    // Link syntax delimiters
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("\"")]
    Quote,

    // Line breaks
    #[regex(r"\r?\n")]
    Newline,

    /// Horizontal whitespace (excluding newlines)
    #[regex(r"[ \t\r]+")]
    Whitespace,

    /// Text content (catch-all for non-special characters)
    #[regex(r#"[^#\[\]()"\n \t\r]+"#)]
    Text,
}

impl Token {
    /// Check if this token is whitespace of any kind
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace | Token::Newline)
    }

    /// Check if this token is text content
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text)
    }
}

/// Tokenize a source buffer, keeping each token's byte range.
pub fn tokenize(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn heading_markers_group_into_one_token() {
        assert_eq!(
            kinds("## Hi"),
            vec![Token::Hashes, Token::Whitespace, Token::Text]
        );
        let tokens = tokenize("### x");
        assert_eq!(tokens[0], (Token::Hashes, 0..3));
    }

    #[test]
    fn link_delimiters_are_individual_tokens() {
        assert_eq!(
            kinds("[a](b)"),
            vec![
                Token::OpenBracket,
                Token::Text,
                Token::CloseBracket,
                Token::OpenParen,
                Token::Text,
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn quotes_delimit_titles() {
        assert_eq!(
            kinds("\"t\""),
            vec![Token::Quote, Token::Text, Token::Quote]
        );
    }

    #[test]
    fn newlines_absorb_carriage_returns() {
        let tokens = tokenize("a\r\nb");
        assert_eq!(
            tokens,
            vec![
                (Token::Text, 0..1),
                (Token::Newline, 1..3),
                (Token::Text, 3..4),
            ]
        );
    }

    #[test]
    fn ranges_cover_the_source_exactly() {
        let source = "# Hello [world](http://x \"t\")\n";
        let tokens = tokenize(source);
        let mut cursor = 0;
        for (_, range) in &tokens {
            assert_eq!(range.start, cursor);
            cursor = range.end;
        }
        assert_eq!(cursor, source.len());
    }
}
