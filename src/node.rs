//! Filepath: src/node.rs
//!
//! Tree nodes and the links between them.
//!
//! Nodes live in a [`NodeAllocator`](crate::alloc::NodeAllocator) arena and
//! refer to each other by [`NodeId`]. A [`Link`] of `None` is the nil
//! sentinel: it has no storage, is always black, and cannot be written to.
//! Parent links are plain indices, so the arena (not any node) owns every
//! node's lifetime.

use crate::color::Color;

/// Key type stored in the tree.
pub type Key = i64;

/// Index of a live node inside its tree's allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Wrap a raw arena slot index.
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Raw arena slot index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A relation to another node, or `None` for the nil sentinel.
pub type Link = Option<NodeId>;

/// The nil sentinel.
pub const NIL: Link = None;

/// Which child relation of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    /// The mirror side.
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A single tree node: a key, a color, and three relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub(crate) key: Key,
    pub(crate) color: Color,
    pub(crate) parent: Link,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    /// A fresh red node with no parent and sentinel children.
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            color: Color::Red,
            parent: NIL,
            left: NIL,
            right: NIL,
        }
    }

    /// The node's key.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> Key {
        self.key
    }

    /// The node's color.
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Parent relation. `None` only for the root.
    #[inline]
    #[must_use]
    pub const fn parent(&self) -> Link {
        self.parent
    }

    /// Left child relation.
    #[inline]
    #[must_use]
    pub const fn left(&self) -> Link {
        self.left
    }

    /// Right child relation.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> Link {
        self.right
    }

    /// Return `true` if both children are the sentinel.
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) const fn set_child(&mut self, side: Side, link: Link) {
        match side {
            Side::Left => self.left = link,
            Side::Right => self.right = link,
        }
    }
}
