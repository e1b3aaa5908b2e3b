//! # mdview
//!
//! A parser and tree viewer for a small markdown subset.
//!
//! The crate models a markdown document as a strongly-typed tree built over
//! non-owning views into the source text, and renders that tree by
//! deterministic traversal. The modeled subset is deliberately small: a
//! document root, headings, paragraphs, plain text runs, and links. Nothing
//! else is parsed or represented.
//!
//! The global input is a markdown source buffer; the global output is the
//! document tree, plus whatever serialization of it a consumer asks for.
//! Everything in between lives in the [markdown] module: lexing, line
//! grouping, block building, inline parsing, and the output formats.

#![allow(rustdoc::invalid_html_tags)]

pub mod markdown;
