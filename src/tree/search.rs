//! Lookups: search, extremes, and in-order neighbors.
//!
//! All lookups compare keys numerically and run in O(h). Results are
//! [`NodeRef`] views that borrow the tree, so they cannot outlive the next
//! mutation.

use std::cmp::Ordering;
use std::fmt as StdFmt;

use crate::alloc::{ArenaAllocator, NodeAllocator};
use crate::color::Color;
use crate::error::TreeError;
use crate::node::{Key, Link, Node, NodeId, Side};
use crate::tracing_helpers::trace_log;

use super::RedBlackTree;
use super::traverse::{Inorder, Postorder, Preorder};

// ============================================================================
//  NodeRef
// ============================================================================

/// Read-only view of a live node.
///
/// Borrows the tree, so the view is valid until the next mutating call.
pub struct NodeRef<'a, A: NodeAllocator = ArenaAllocator> {
    tree: &'a RedBlackTree<A>,
    id: NodeId,
}

impl<A: NodeAllocator> Clone for NodeRef<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: NodeAllocator> Copy for NodeRef<'_, A> {}

impl<A: NodeAllocator> PartialEq for NodeRef<'_, A> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<A: NodeAllocator> Eq for NodeRef<'_, A> {}

impl<A: NodeAllocator> StdFmt::Debug for NodeRef<'_, A> {
    fn fmt(&self, f: &mut StdFmt::Formatter<'_>) -> StdFmt::Result {
        f.debug_struct("NodeRef")
            .field("key", &self.key())
            .field("color", &self.color())
            .finish_non_exhaustive()
    }
}

impl<'a, A: NodeAllocator> NodeRef<'a, A> {
    #[inline]
    pub(super) const fn new(tree: &'a RedBlackTree<A>, id: NodeId) -> Self {
        Self { tree, id }
    }

    #[inline]
    fn link(self, link: Link) -> Option<Self> {
        link.map(|id| Self::new(self.tree, id))
    }

    /// Arena id of the node.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The underlying node.
    #[inline]
    #[must_use]
    pub fn node(&self) -> &'a Node {
        self.tree.node(self.id)
    }

    /// The node's key.
    #[inline]
    #[must_use]
    pub fn key(&self) -> Key {
        self.node().key
    }

    /// The node's color.
    #[inline]
    #[must_use]
    pub fn color(&self) -> Color {
        self.node().color
    }

    /// Parent node, or `None` for the root.
    #[must_use]
    pub fn parent(self) -> Option<Self> {
        self.link(self.node().parent)
    }

    /// Left child, or `None` for the sentinel.
    #[must_use]
    pub fn left(self) -> Option<Self> {
        self.link(self.node().left)
    }

    /// Right child, or `None` for the sentinel.
    #[must_use]
    pub fn right(self) -> Option<Self> {
        self.link(self.node().right)
    }

    /// Return `true` if this node is the tree's root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }

    /// Smallest key in the subtree rooted here.
    #[must_use]
    pub fn subtree_minimum(self) -> Self {
        Self::new(self.tree, self.tree.extreme(self.id, Side::Left))
    }

    /// Largest key in the subtree rooted here.
    #[must_use]
    pub fn subtree_maximum(self) -> Self {
        Self::new(self.tree, self.tree.extreme(self.id, Side::Right))
    }

    /// In-order predecessor, or `None` if this is the minimum.
    #[must_use]
    pub fn predecessor(self) -> Option<Self> {
        self.link(self.tree.neighbor(self.id, Side::Left))
    }

    /// In-order successor, or `None` if this is the maximum.
    #[must_use]
    pub fn successor(self) -> Option<Self> {
        self.link(self.tree.neighbor(self.id, Side::Right))
    }

    /// Pre-order traversal of the subtree rooted here.
    #[must_use]
    pub fn preorder(self) -> Preorder<'a, A> {
        Preorder::new(self.tree, Some(self.id))
    }

    /// In-order traversal of the subtree rooted here.
    #[must_use]
    pub fn inorder(self) -> Inorder<'a, A> {
        Inorder::new(self.tree, Some(self.id))
    }

    /// Post-order traversal of the subtree rooted here.
    #[must_use]
    pub fn postorder(self) -> Postorder<'a, A> {
        Postorder::new(self.tree, Some(self.id))
    }
}

// ============================================================================
//  SearchStatus
// ============================================================================

/// Outcome of [`RedBlackTree::search_status`], printable as a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The key is stored.
    Found(Key),

    /// The key is not stored.
    NotFound(Key),
}

impl SearchStatus {
    /// Return `true` for [`SearchStatus::Found`].
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The key that was searched for.
    #[must_use]
    pub const fn key(&self) -> Key {
        match *self {
            Self::Found(key) | Self::NotFound(key) => key,
        }
    }
}

impl StdFmt::Display for SearchStatus {
    fn fmt(&self, f: &mut StdFmt::Formatter<'_>) -> StdFmt::Result {
        match self {
            Self::Found(key) => write!(f, "{key:<8}is FOUND."),
            Self::NotFound(key) => write!(f, "{key:<8}is NOT FOUND."),
        }
    }
}

// ============================================================================
//  Tree lookups
// ============================================================================

impl<A: NodeAllocator> RedBlackTree<A> {
    /// Locate the node holding `key`.
    pub(super) fn find(&self, key: Key) -> Link {
        let mut cursor: Link = self.root;

        while let Some(id) = cursor {
            let node: &Node = self.node(id);
            cursor = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }

        trace_log!(key, "search: NOT_FOUND");
        None
    }

    /// In-order neighbor of `id` on `side` (`Left` = predecessor).
    ///
    /// If `id` has a child on `side`, the answer is the extreme of that
    /// subtree toward the other side. Otherwise climb while the current node
    /// hangs on `side` of its parent; the first parent reached from the other
    /// side is the neighbor. Reaching the root without a turn means none exists.
    pub(super) fn neighbor(&self, id: NodeId, side: Side) -> Link {
        if let Some(child) = self.child(id, side) {
            return Some(self.extreme(child, side.opposite()));
        }

        let mut node: NodeId = id;
        let mut parent: Link = self.parent(node);

        while let Some(p) = parent {
            if self.child(p, side) != Some(node) {
                break;
            }
            node = p;
            parent = self.parent(p);
        }

        parent
    }

    /// Look up a key.
    ///
    /// Returns a view of the node holding `key`, or `None` if it is absent.
    #[must_use]
    pub fn search(&self, key: Key) -> Option<NodeRef<'_, A>> {
        self.find(key).map(|id| NodeRef::new(self, id))
    }

    /// Look up a key and report the result as a [`SearchStatus`].
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let tree: RedBlackTree = [5].into_iter().collect();
    /// assert_eq!(tree.search_status(5).to_string(), "5       is FOUND.");
    /// assert_eq!(tree.search_status(6).to_string(), "6       is NOT FOUND.");
    /// ```
    #[must_use]
    pub fn search_status(&self, key: Key) -> SearchStatus {
        if self.find(key).is_some() {
            SearchStatus::Found(key)
        } else {
            SearchStatus::NotFound(key)
        }
    }

    /// Check if `key` is stored.
    #[must_use]
    pub fn contains(&self, key: Key) -> bool {
        self.find(key).is_some()
    }

    /// View of the root node, or `None` when empty.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, A>> {
        self.root.map(|id| NodeRef::new(self, id))
    }

    /// Node holding the smallest key, or `None` when empty.
    #[must_use]
    pub fn minimum(&self) -> Option<NodeRef<'_, A>> {
        self.root().map(NodeRef::subtree_minimum)
    }

    /// Node holding the largest key, or `None` when empty.
    #[must_use]
    pub fn maximum(&self) -> Option<NodeRef<'_, A>> {
        self.root().map(NodeRef::subtree_maximum)
    }

    /// In-order predecessor of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if `key` is not stored. `Ok(None)`
    /// means `key` is the minimum and has no predecessor.
    pub fn predecessor(&self, key: Key) -> Result<Option<NodeRef<'_, A>>, TreeError> {
        self.search(key)
            .map(NodeRef::predecessor)
            .ok_or(TreeError::KeyNotFound(key))
    }

    /// In-order successor of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if `key` is not stored. `Ok(None)`
    /// means `key` is the maximum and has no successor.
    pub fn successor(&self, key: Key) -> Result<Option<NodeRef<'_, A>>, TreeError> {
        self.search(key)
            .map(NodeRef::successor)
            .ok_or(TreeError::KeyNotFound(key))
    }
}

// ============================================================================
//  Tests
// ============================================================================

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Fail fast in tests")]
mod tests {
    use super::*;

    fn sample() -> RedBlackTree {
        [10, 18, 7, 15, 16, 30, 25, 40, 60, 2, 17, 6]
            .into_iter()
            .collect()
    }

    fn key_of(node: Option<NodeRef<'_>>) -> Option<Key> {
        node.map(|n| n.key())
    }

    #[test]
    fn test_search_on_empty_tree() {
        let tree = RedBlackTree::new();

        assert!(tree.search(0).is_none());
        assert!(tree.search(Key::MAX).is_none());
        assert!(!tree.contains(1));
        assert!(tree.minimum().is_none());
        assert!(tree.maximum().is_none());
    }

    #[test]
    fn test_search_finds_every_key() {
        let tree = sample();

        for key in [10, 18, 7, 15, 16, 30, 25, 40, 60, 2, 17, 6] {
            let node = tree.search(key);
            assert_eq!(key_of(node), Some(key));
        }

        for key in [0, 1, 3, 11, 61, -10] {
            assert!(tree.search(key).is_none(), "unexpected hit for {key}");
        }
    }

    #[test]
    fn test_search_uses_numeric_order() {
        // Lexical order would put "10" before "9" and "100" before "20".
        let tree: RedBlackTree = [9, 10, 100, 20, 2, -1].into_iter().collect();

        assert_eq!(tree.iter().collect::<Vec<_>>(), vec![-1, 2, 9, 10, 20, 100]);
        assert!(tree.contains(100));
        assert_eq!(key_of(tree.minimum()), Some(-1));
        assert_eq!(key_of(tree.maximum()), Some(100));
    }

    #[test]
    fn test_search_status_lines() {
        let tree = sample();

        let found = tree.search_status(15);
        assert!(found.is_found());
        assert_eq!(found.key(), 15);
        assert_eq!(found.to_string(), "15      is FOUND.");

        let missing = tree.search_status(99);
        assert!(!missing.is_found());
        assert_eq!(missing.to_string(), "99      is NOT FOUND.");
    }

    #[test]
    fn test_minimum_maximum() {
        let tree = sample();

        assert_eq!(key_of(tree.minimum()), Some(2));
        assert_eq!(key_of(tree.maximum()), Some(60));
    }

    #[test]
    fn test_subtree_extremes() {
        let tree = sample();
        let root = tree.root().unwrap();

        assert_eq!(root.subtree_minimum().key(), 2);
        assert_eq!(root.subtree_maximum().key(), 60);

        if let Some(left) = root.left() {
            assert!(left.subtree_maximum().key() < root.key());
        }
        if let Some(right) = root.right() {
            assert!(right.subtree_minimum().key() > root.key());
        }
    }

    #[test]
    fn test_predecessor_successor_walk() {
        let tree = sample();
        let sorted = [2, 6, 7, 10, 15, 16, 17, 18, 25, 30, 40, 60];

        for pair in sorted.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            assert_eq!(key_of(tree.successor(lo).unwrap()), Some(hi));
            assert_eq!(key_of(tree.predecessor(hi).unwrap()), Some(lo));
        }
    }

    #[test]
    fn test_extremes_have_no_outer_neighbor() {
        let tree = sample();

        assert!(tree.predecessor(2).unwrap().is_none());
        assert!(tree.successor(60).unwrap().is_none());
    }

    #[test]
    fn test_neighbor_of_missing_key() {
        let tree = sample();

        assert_eq!(tree.predecessor(3).unwrap_err(), TreeError::KeyNotFound(3));
        assert_eq!(tree.successor(3).unwrap_err(), TreeError::KeyNotFound(3));
    }

    #[test]
    fn test_single_node_neighbors() {
        let tree: RedBlackTree = [42].into_iter().collect();

        assert!(tree.predecessor(42).unwrap().is_none());
        assert!(tree.successor(42).unwrap().is_none());
        assert!(tree.root().unwrap().is_root());
    }

    #[test]
    fn test_node_ref_relations_agree() {
        let tree = sample();

        for node in tree.inorder().map(|entry| tree.search(entry.key).unwrap()) {
            if let Some(left) = node.left() {
                assert_eq!(left.parent(), Some(node));
            }
            if let Some(right) = node.right() {
                assert_eq!(right.parent(), Some(node));
            }
        }
    }

    #[test]
    fn test_node_ref_debug() {
        let tree: RedBlackTree = [1].into_iter().collect();
        let root = tree.root().unwrap();

        assert_eq!(format!("{root:?}"), "NodeRef { key: 1, color: Black, .. }");
    }
}
