//! AST definitions and utilities for the markdown subset
//!
//!     This module provides the core Abstract Syntax Tree definitions for the
//!     modeled markdown subset, along with the traversal traits and the
//!     normalized snapshot representation used by serializers.
//!
//! Document structure
//!
//!     The tree has two levels of content, following the usual markdown
//!     vocabulary:
//!
//!         - Flow content: block-level nodes. A [Root](elements::Root) holds
//!           an ordered sequence of them. The modeled kinds are
//!           [Heading](elements::Heading) and [Paragraph](elements::Paragraph).
//!         - Phrasing content: inline nodes inside a block. The modeled kinds
//!           are [Text](elements::Text) and [Link](elements::Link). A link's
//!           label is itself phrasing content, so links can nest.
//!
//!     Both unions are closed enums. Every dispatch site matches
//!     exhaustively, so a node of an unknown kind cannot exist at runtime;
//!     the type system carries that invariant.
//!
//! Ownership and lifecycle
//!
//!     All user text in the tree is a [Span](super::span::Span) borrowed from
//!     the source buffer, so the tree is parameterized over the buffer's
//!     lifetime. Nodes are built fully formed by the parser, appended to
//!     their parent sequence once, and never mutated, deleted, or re-parented
//!     afterwards. The whole tree is owned by the root and released with it.
//!
//! Sequences
//!
//!     Every parent stores its children in a [NodeSeq](sequence::NodeSeq), an
//!     ordered growable container with a checked `get`. Insertion order is
//!     document order and is semantically meaningful. See the
//!     [sequence](sequence) module for the access contract.
//!
//! ## Modules
//!
//! - `elements` - AST node type definitions organized by element type
//! - `sequence` - Ordered growable child containers with checked access
//! - `snapshot` - Normalized intermediate representation for serialization
//! - `traits` - Common traits for AST nodes (AstNode, Visitor)

pub mod elements;
pub mod sequence;
pub mod snapshot;
pub mod traits;

// Re-export commonly used types at module root
pub use elements::{FlowContent, Heading, Link, Paragraph, PhrasingContent, Root, Text};
pub use sequence::{NodeSeq, OutOfBounds};
pub use snapshot::{snapshot_from_root, AstSnapshot};
pub use traits::{visit_children, AstNode, Visitor};
