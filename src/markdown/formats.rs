//! Output formats for document trees
//!
//! Each format implements the [Formatter](registry::Formatter) trait and is
//! registered with the [FormatRegistry](registry::FormatRegistry). The
//! built-in formats are:
//!
//!     - `tree` - the indented structural dump (the default). See [tree].
//!     - `outline` - the heading outline. See [outline].
//!     - `json` / `yaml` - data serializations of the AST snapshot. See
//!       [data]. These are conveniences for other tooling, not round-trip
//!       formats; nothing promises to parse them back into a tree.

pub mod data;
pub mod outline;
pub mod registry;
pub mod tree;

pub use data::{JsonFormatter, YamlFormatter};
pub use outline::OutlineFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use tree::{render_root, render_to_string, RenderError, TreeFormatter};
