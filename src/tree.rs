//! Filepath: src/tree.rs
//!
//! `RedBlackTree` - an ordered integer set on a self-balancing binary tree.
//!
//! This module provides the tree type and its lifecycle. The operations live
//! in submodules:
//!
//! - `rotate`: rotations and `transplant`
//! - `search`: lookups, extremes, predecessor/successor, [`NodeRef`]
//! - `insert`: insertion and the red-red fixup
//! - `remove`: deletion and the double-black fixup
//! - `traverse`: pre/in/post-order iterators
//! - `validate`: invariant checker

use std::fmt as StdFmt;

use crate::alloc::{ArenaAllocator, NodeAllocator};
use crate::color::Color;
use crate::node::{Key, Link, Node, NodeId, Side};
use crate::tracing_helpers::debug_log;

mod insert;
mod remove;
mod rotate;
mod search;
mod traverse;
mod validate;

pub use search::{NodeRef, SearchStatus};
pub use traverse::{Inorder, Iter, Postorder, Preorder, TraversalEntry};
pub use validate::InvariantViolation;

// ============================================================================
//  RedBlackTree
// ============================================================================

/// An ordered set of integer keys kept balanced by red-black coloring.
///
/// Every public operation leaves the tree satisfying:
///
/// 1. In-order keys are strictly ascending.
/// 2. The root is black (the nil sentinel is black by construction).
/// 3. No red node has a red child.
/// 4. Every path from a node to a descendant sentinel has the same number of
///    black nodes.
/// 5. Keys are unique.
///
/// so the height stays within `2 * log2(n + 1)`.
///
/// # Type Parameters
///
/// - `A` - Node storage (must implement [`NodeAllocator`]). Defaults to
///   [`ArenaAllocator`].
///
/// # Example
///
/// ```rust
/// use redblack::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// for key in [10, 18, 7, 15, 16] {
///     tree.insert(key).unwrap();
/// }
///
/// assert_eq!(tree.minimum().map(|n| n.key()), Some(7));
/// assert_eq!(tree.successor(10).unwrap().map(|n| n.key()), Some(15));
///
/// tree.delete(18).unwrap();
/// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![7, 10, 15, 16]);
/// ```
pub struct RedBlackTree<A: NodeAllocator = ArenaAllocator> {
    /// Owns every live node.
    allocator: A,

    /// Root node, or the sentinel when empty.
    root: Link,

    /// Number of keys in the tree.
    len: usize,
}

impl RedBlackTree<ArenaAllocator> {
    /// Create a new empty tree backed by an [`ArenaAllocator`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_allocator(ArenaAllocator::new())
    }

    /// Create an empty tree with arena room for `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_allocator(ArenaAllocator::with_capacity(capacity))
    }
}

impl<A: NodeAllocator> RedBlackTree<A> {
    /// Create a new empty tree that stores its nodes in `allocator`.
    ///
    /// The allocator should be empty; nodes already in it are never visited.
    #[must_use]
    pub const fn with_allocator(allocator: A) -> Self {
        Self {
            allocator,
            root: None,
            len: 0,
        }
    }

    /// Number of keys in the tree.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check if the tree is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Borrow the node allocator.
    #[inline]
    #[must_use]
    pub const fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Remove every key, releasing each node exactly once.
    ///
    /// Uses an explicit work-list, so teardown depth does not depend on
    /// tree shape.
    pub fn clear(&mut self) {
        self.teardown();
    }

    /// Release all nodes reachable from the root and return how many were freed.
    fn teardown(&mut self) -> usize {
        let mut work: Vec<NodeId> = self.root.into_iter().collect();
        let mut released: usize = 0;

        self.root = None;
        self.len = 0;

        while let Some(id) = work.pop() {
            if let Some(node) = self.allocator.dealloc(id) {
                work.extend(node.left);
                work.extend(node.right);
                released += 1;
            }
        }

        debug_log!(released, "teardown: released nodes");
        released
    }

    // ========================================================================
    //  Link helpers
    //
    //  The sentinel is `None`: reads of its color yield black, writes to it
    //  are dropped.
    // ========================================================================

    #[inline]
    fn node(&self, id: NodeId) -> &Node {
        self.allocator.node(id)
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.allocator.node_mut(id)
    }

    #[inline]
    fn color_of(&self, link: Link) -> Color {
        link.map_or(Color::Black, |id| self.node(id).color)
    }

    #[inline]
    fn is_red(&self, link: Link) -> bool {
        self.color_of(link).is_red()
    }

    #[inline]
    fn set_color(&mut self, link: Link, color: Color) {
        if let Some(id) = link {
            self.node_mut(id).color = color;
        }
    }

    #[inline]
    fn parent(&self, id: NodeId) -> Link {
        self.node(id).parent
    }

    #[inline]
    fn set_parent(&mut self, link: Link, parent: Link) {
        if let Some(id) = link {
            self.node_mut(id).parent = parent;
        }
    }

    #[inline]
    fn child(&self, id: NodeId, side: Side) -> Link {
        self.node(id).child(side)
    }

    #[inline]
    fn set_child(&mut self, id: NodeId, side: Side, link: Link) {
        self.node_mut(id).set_child(side, link);
    }

    /// Which child of `parent` the relation `link` is. A sentinel `link` is
    /// matched against `parent`'s sentinel slot on the left first.
    #[inline]
    fn side_of(&self, link: Link, parent: NodeId) -> Side {
        if self.node(parent).left == link {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Descend from `id` toward `side` until the next step would be the sentinel.
    fn extreme(&self, mut id: NodeId, side: Side) -> NodeId {
        while let Some(next) = self.child(id, side) {
            id = next;
        }
        id
    }
}

impl Default for RedBlackTree<ArenaAllocator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: NodeAllocator> Drop for RedBlackTree<A> {
    fn drop(&mut self) {
        // Release through the allocator so custom allocators see every node.
        self.teardown();
    }
}

impl<A: NodeAllocator> StdFmt::Debug for RedBlackTree<A> {
    fn fmt(&self, f: &mut StdFmt::Formatter<'_>) -> StdFmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Key> for RedBlackTree<ArenaAllocator> {
    /// Build a tree from keys. Duplicates are skipped.
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<A: NodeAllocator> Extend<Key> for RedBlackTree<A> {
    /// Insert every key. Duplicates are skipped.
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            let _ = self.insert(key);
        }
    }
}

impl<'k, A: NodeAllocator> Extend<&'k Key> for RedBlackTree<A> {
    fn extend<I: IntoIterator<Item = &'k Key>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, A: NodeAllocator> IntoIterator for &'a RedBlackTree<A> {
    type Item = Key;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
//  Tests
// ============================================================================

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Fail fast in tests")]
mod tests {
    use super::*;
    use crate::TreeError;

    // RedBlackTree is Send + Sync when its allocator is.
    fn _assert_send_sync()
    where
        RedBlackTree: Send + Sync,
    {
    }

    /// Allocator wrapper that counts releases, to prove single release.
    #[derive(Debug, Default)]
    struct CountingAllocator {
        inner: ArenaAllocator,
        allocs: usize,
        deallocs: usize,
    }

    impl NodeAllocator for CountingAllocator {
        fn alloc(&mut self, node: Node) -> NodeId {
            self.allocs += 1;
            self.inner.alloc(node)
        }

        fn dealloc(&mut self, id: NodeId) -> Option<Node> {
            let node = self.inner.dealloc(id);
            assert!(node.is_some(), "node {id:?} released twice");
            self.deallocs += 1;
            node
        }

        fn node(&self, id: NodeId) -> &Node {
            self.inner.node(id)
        }

        fn node_mut(&mut self, id: NodeId) -> &mut Node {
            self.inner.node_mut(id)
        }

        fn live_count(&self) -> usize {
            self.inner.live_count()
        }
    }

    // ========================================================================
    //  Lifecycle
    // ========================================================================

    #[test]
    fn test_new_tree_is_empty() {
        let tree = RedBlackTree::new();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.root().is_none());
        assert_eq!(tree.validate(), Ok(0));
    }

    #[test]
    fn test_default_trait() {
        let tree: RedBlackTree = RedBlackTree::default();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_with_capacity() {
        let tree = RedBlackTree::with_capacity(64);

        assert!(tree.is_empty());
        assert!(tree.allocator().capacity() >= 64);
    }

    #[test]
    fn test_len_tracks_inserts_and_deletes() {
        let mut tree = RedBlackTree::new();

        for key in 0..20 {
            tree.insert(key).unwrap();
        }
        assert_eq!(tree.len(), 20);

        for key in (0..20).step_by(2) {
            tree.delete(key).unwrap();
        }
        assert_eq!(tree.len(), 10);
        assert_eq!(tree.allocator().live_count(), 10);
    }

    #[test]
    fn test_clear_releases_every_node() {
        let mut tree = RedBlackTree::new();
        tree.extend(1..=50);

        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.allocator().live_count(), 0);
        assert_eq!(tree.validate(), Ok(0));

        // Reusable after clear.
        tree.insert(3).unwrap();
        assert_eq!(tree.iter().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_each_node_released_exactly_once() {
        let mut tree = RedBlackTree::with_allocator(CountingAllocator::default());

        for key in 0..200 {
            tree.insert(key).unwrap();
        }
        for key in 50..120 {
            tree.delete(key).unwrap();
        }

        assert_eq!(tree.allocator().allocs, 200);
        assert_eq!(tree.allocator().deallocs, 70);

        tree.clear();

        assert_eq!(tree.allocator().deallocs, 200);
        assert_eq!(tree.allocator().live_count(), 0);
    }

    #[test]
    fn test_drop_tears_down_through_allocator() {
        let mut tree = RedBlackTree::with_allocator(CountingAllocator::default());
        tree.extend([5, 3, 8, 1, 4]);

        // CountingAllocator asserts on double release during drop.
        drop(tree);
    }

    // ========================================================================
    //  Collection traits
    // ========================================================================

    #[test]
    fn test_from_iter_skips_duplicates() {
        let tree: RedBlackTree = [4, 2, 4, 9, 2, 7].into_iter().collect();

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.iter().collect::<Vec<_>>(), vec![2, 4, 7, 9]);
    }

    #[test]
    fn test_extend_by_reference() {
        let mut tree = RedBlackTree::new();
        let keys = vec![3, 1, 2];
        tree.extend(&keys);

        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_into_iterator_for_ref() {
        let tree: RedBlackTree = (1..=5).rev().collect();

        let mut seen = Vec::new();
        for key in &tree {
            seen.push(key);
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_debug_prints_key_set() {
        let tree: RedBlackTree = [2, 1, 3].into_iter().collect();
        assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
    }

    #[test]
    fn test_duplicate_insert_is_rejected() {
        let mut tree = RedBlackTree::new();
        tree.insert(10).unwrap();

        assert_eq!(tree.insert(10), Err(TreeError::DuplicateKey(10)));
        assert_eq!(tree.len(), 1);
    }

    // ========================================================================
    //  Sentinel handling
    // ========================================================================

    #[test]
    fn test_sentinel_color_is_black_and_immutable() {
        let mut tree = RedBlackTree::new();

        assert_eq!(tree.color_of(None), Color::Black);
        tree.set_color(None, Color::Red);
        assert_eq!(tree.color_of(None), Color::Black);
    }
}
