//! Node colors for the red-black tree.

use std::fmt as StdFmt;

/// Color of a tree node.
///
/// The nil sentinel that terminates every leaf position is always
/// [`Color::Black`] and can never be recolored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// A red node. A red node never has a red child.
    Red,

    /// A black node. Every path from a node down to the sentinel crosses the
    /// same number of black nodes.
    Black,
}

impl Color {
    /// Return `true` for [`Color::Red`].
    #[inline]
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Red)
    }

    /// Return `true` for [`Color::Black`].
    #[inline]
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }

    /// Upper-case label used in status lines (`"RED"` / `"BLACK"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Black => "BLACK",
        }
    }
}

impl StdFmt::Display for Color {
    fn fmt(&self, f: &mut StdFmt::Formatter<'_>) -> StdFmt::Result {
        // `pad` so width/alignment flags apply to the label.
        f.pad(self.as_str())
    }
}
