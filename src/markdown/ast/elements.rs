//! Element-specific AST node definitions for the markdown subset
//!
//!     This module defines all AST element types for the modeled subset. It
//!     serves as the entry point for understanding how a document structures
//!     content into a tree.
//!
//! Element Types
//!
//!     There are two levels of elements:
//!
//!     Flow content:
//!         Block-level elements. These are line based, each taking at least a
//!         full source line. The modeled kinds are headings (a marker run
//!         plus inline content) and paragraphs (one or more contiguous text
//!         lines). See [heading](heading) and [paragraph](paragraph).
//!
//!     Phrasing content:
//!         Inline elements inside a block. These do not affect document
//!         structure; they subdivide a block's text. The modeled kinds are
//!         plain text runs and links. A link's label is itself phrasing
//!         content, which is the one place the inline level nests.
//!         See [text](text) and [link](link).
//!
//! Unions
//!
//!     Each level has a closed union type: [FlowContent](flow_content) and
//!     [PhrasingContent](phrasing_content). The unions delegate the common
//!     node interface to their variants and are matched exhaustively
//!     everywhere, so no dispatch site has a fallback arm for an unknown
//!     kind.
//!
//!     The [Root](root) element owns the flow-content sequence and with it
//!     the entire tree.

pub mod flow_content;
pub mod heading;
pub mod link;
pub mod paragraph;
pub mod phrasing_content;
pub mod root;
pub mod text;

pub use flow_content::FlowContent;
pub use heading::Heading;
pub use link::Link;
pub use paragraph::Paragraph;
pub use phrasing_content::PhrasingContent;
pub use root::Root;
pub use text::Text;
