//! Non-owning views into the source buffer
//!
//!     Every piece of user text the tree carries is a [`Span`]: a borrowed
//!     view over a contiguous region of the original source. Spans never
//!     allocate and never copy; the parser cuts them out of the buffer it was
//!     handed and the tree keeps referring to that buffer for its whole life.
//!     The borrow checker enforces the one structural rule that matters here:
//!     the buffer must outlive every span derived from it.
//!
//!     Absence is expressed one level up, as `Option<Span>`. A present-but-
//!     empty span and an absent one are different states (a link with
//!     `title=""` is not a link without a title), so no sentinel value is
//!     ever stored inside the span itself.

use std::fmt;
use std::ops::Range;

/// A borrowed view over a contiguous byte region of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span<'a> {
    text: &'a str,
}

impl<'a> Span<'a> {
    /// View an entire string slice.
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Cut a span out of `source` at the given byte range.
    ///
    /// # Panics
    /// Panics when the range is outside `source` or not on character
    /// boundaries, with the same rules as string slicing.
    pub fn from_range(source: &'a str, range: Range<usize>) -> Self {
        Self {
            text: &source[range],
        }
    }

    /// The viewed text.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// The viewed bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    /// Length of the view in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the view covers zero bytes.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Sub-slice this span. The result views the same underlying buffer;
    /// a sub-span can never reach outside its parent's region.
    ///
    /// # Panics
    /// Same rules as string slicing.
    pub fn slice(&self, range: Range<usize>) -> Span<'a> {
        Span {
            text: &self.text[range],
        }
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl<'a> From<&'a str> for Span<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl AsRef<str> for Span<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}
