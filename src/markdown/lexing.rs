//! Lexer
//!
//!     This module covers the first stage of the parsing pipeline: turning a
//!     source buffer into classified lines of tokens.
//!
//!     Tokenization itself is a vanilla logos lexer over the whole buffer.
//!     Every token carries the byte range of its source text; that range is
//!     never altered by any later stage, since it is what the tree's spans
//!     are ultimately cut from. Nothing downstream looks at token text - only
//!     at token kinds and ranges.
//!
//! The Lexing Pipeline
//!
//!     The pipeline consists of:
//!         1. Core tokenization using the logos lexer. See [tokens](tokens).
//!            Heading markers, link delimiters, newlines, horizontal
//!            whitespace and text runs each become one token kind.
//!
//!         2. Line grouping. See [lines](lines). The flat token stream is
//!            split on newline tokens into lines, and each line is classified
//!            as blank, heading, or text. Block structure in this grammar is
//!            strictly line based, so classification needs no lookahead.
//!
//!     At this point lexing is complete; the block builder consumes the
//!     classified lines directly.

pub mod lines;
pub mod tokens;

pub use lines::{group_lines, Line, LineKind};
pub use tokens::{tokenize, Token};
