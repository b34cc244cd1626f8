//! Depth-first traversals.
//!
//! Each iterator keeps its own stack of node ids, so traversal depth is not
//! bounded by the call stack. Items are [`TraversalEntry`] values carrying a
//! key and its color; [`Iter`] yields bare keys in ascending order.

use std::fmt as StdFmt;
use std::iter::FusedIterator;

use crate::alloc::{ArenaAllocator, NodeAllocator};
use crate::color::Color;
use crate::node::{Key, Link, Node, NodeId};

use super::RedBlackTree;

// ============================================================================
//  TraversalEntry
// ============================================================================

/// One visited node: its key and its color.
///
/// Displays as the key left-aligned in 8 columns followed by the color name
/// right-aligned in 7.
///
/// ```rust
/// use redblack::{Color, TraversalEntry};
///
/// let entry = TraversalEntry { key: 17, color: Color::Red };
/// assert_eq!(entry.to_string(), "17          RED");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraversalEntry {
    /// The node's key.
    pub key: Key,

    /// The node's color at the time of the visit.
    pub color: Color,
}

impl From<&Node> for TraversalEntry {
    fn from(node: &Node) -> Self {
        Self {
            key: node.key,
            color: node.color,
        }
    }
}

impl StdFmt::Display for TraversalEntry {
    fn fmt(&self, f: &mut StdFmt::Formatter<'_>) -> StdFmt::Result {
        write!(f, "{:<8}{:>7}", self.key, self.color.as_str())
    }
}

// ============================================================================
//  Preorder
// ============================================================================

/// Node, then left subtree, then right subtree.
pub struct Preorder<'a, A: NodeAllocator = ArenaAllocator> {
    tree: &'a RedBlackTree<A>,
    stack: Vec<NodeId>,
}

impl<'a, A: NodeAllocator> Preorder<'a, A> {
    pub(super) fn new(tree: &'a RedBlackTree<A>, start: Link) -> Self {
        Self {
            tree,
            stack: start.into_iter().collect(),
        }
    }
}

impl<A: NodeAllocator> Iterator for Preorder<'_, A> {
    type Item = TraversalEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let id: NodeId = self.stack.pop()?;
        let node: &Node = self.tree.node(id);

        // Right first so left pops first.
        self.stack.extend(node.right);
        self.stack.extend(node.left);

        Some(TraversalEntry::from(node))
    }
}

impl<A: NodeAllocator> FusedIterator for Preorder<'_, A> {}

impl<A: NodeAllocator> Clone for Preorder<'_, A> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
        }
    }
}

// ============================================================================
//  Inorder
// ============================================================================

/// Left subtree, then node, then right subtree. Keys come out ascending.
pub struct Inorder<'a, A: NodeAllocator = ArenaAllocator> {
    tree: &'a RedBlackTree<A>,
    stack: Vec<NodeId>,
    cursor: Link,
}

impl<'a, A: NodeAllocator> Inorder<'a, A> {
    pub(super) const fn new(tree: &'a RedBlackTree<A>, start: Link) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            cursor: start,
        }
    }
}

impl<A: NodeAllocator> Iterator for Inorder<'_, A> {
    type Item = TraversalEntry;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.cursor {
            self.stack.push(id);
            self.cursor = self.tree.node(id).left;
        }

        let id: NodeId = self.stack.pop()?;
        let node: &Node = self.tree.node(id);
        self.cursor = node.right;

        Some(TraversalEntry::from(node))
    }
}

impl<A: NodeAllocator> FusedIterator for Inorder<'_, A> {}

impl<A: NodeAllocator> Clone for Inorder<'_, A> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
            cursor: self.cursor,
        }
    }
}

// ============================================================================
//  Postorder
// ============================================================================

/// Left subtree, then right subtree, then node.
pub struct Postorder<'a, A: NodeAllocator = ArenaAllocator> {
    tree: &'a RedBlackTree<A>,

    /// `(id, children_pushed)`. A node is emitted on its second pop.
    stack: Vec<(NodeId, bool)>,
}

impl<'a, A: NodeAllocator> Postorder<'a, A> {
    pub(super) fn new(tree: &'a RedBlackTree<A>, start: Link) -> Self {
        Self {
            tree,
            stack: start.into_iter().map(|id| (id, false)).collect(),
        }
    }
}

impl<A: NodeAllocator> Iterator for Postorder<'_, A> {
    type Item = TraversalEntry;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, expanded)) = self.stack.pop() {
            let node: &Node = self.tree.node(id);

            if expanded {
                return Some(TraversalEntry::from(node));
            }

            self.stack.push((id, true));
            self.stack.extend(node.right.map(|r| (r, false)));
            self.stack.extend(node.left.map(|l| (l, false)));
        }

        None
    }
}

impl<A: NodeAllocator> FusedIterator for Postorder<'_, A> {}

impl<A: NodeAllocator> Clone for Postorder<'_, A> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
        }
    }
}

// ============================================================================
//  Iter
// ============================================================================

/// Ascending keys of the whole tree.
pub struct Iter<'a, A: NodeAllocator = ArenaAllocator> {
    inner: Inorder<'a, A>,
    remaining: usize,
}

impl<A: NodeAllocator> Iterator for Iter<'_, A> {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        let entry: TraversalEntry = self.inner.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(entry.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<A: NodeAllocator> ExactSizeIterator for Iter<'_, A> {}

impl<A: NodeAllocator> FusedIterator for Iter<'_, A> {}

impl<A: NodeAllocator> Clone for Iter<'_, A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            remaining: self.remaining,
        }
    }
}

// ============================================================================
//  Tree entry points
// ============================================================================

impl<A: NodeAllocator> RedBlackTree<A> {
    /// Pre-order traversal of the whole tree. Empty tree yields nothing.
    #[must_use]
    pub fn preorder(&self) -> Preorder<'_, A> {
        Preorder::new(self, self.root)
    }

    /// In-order traversal of the whole tree, keys ascending.
    #[must_use]
    pub const fn inorder(&self) -> Inorder<'_, A> {
        Inorder::new(self, self.root)
    }

    /// Post-order traversal of the whole tree.
    #[must_use]
    pub fn postorder(&self) -> Postorder<'_, A> {
        Postorder::new(self, self.root)
    }

    /// Iterate keys in ascending order.
    #[must_use]
    pub const fn iter(&self) -> Iter<'_, A> {
        Iter {
            inner: self.inorder(),
            remaining: self.len,
        }
    }
}
