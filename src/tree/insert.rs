//! Filepath: src/tree/insert.rs
//!
//! Insertion: BST descent, attach a red leaf, then repair red-red conflicts.

use std::cmp::Ordering;

use crate::alloc::NodeAllocator;
use crate::color::Color;
use crate::error::TreeError;
use crate::node::{Key, Link, Node, NodeId, Side};
use crate::tracing_helpers::{debug_log, trace_log};

use super::RedBlackTree;

impl<A: NodeAllocator> RedBlackTree<A> {
    /// Insert `key`.
    ///
    /// Runs in O(log n) with at most two rotations.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::DuplicateKey`] if `key` is already stored. The
    /// tree is left unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use redblack::{RedBlackTree, TreeError};
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1).unwrap();
    ///
    /// assert_eq!(tree.insert(1), Err(TreeError::DuplicateKey(1)));
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub fn insert(&mut self, key: Key) -> Result<(), TreeError> {
        let mut parent: Link = None;
        let mut side: Side = Side::Left;
        let mut cursor: Link = self.root;

        while let Some(id) = cursor {
            let existing: Key = self.node(id).key;
            side = match key.cmp(&existing) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    debug_log!(key, "insert: duplicate rejected");
                    return Err(TreeError::DuplicateKey(key));
                }
            };
            parent = Some(id);
            cursor = self.child(id, side);
        }

        let mut node: Node = Node::new(key);
        node.parent = parent;
        let id: NodeId = self.allocator.alloc(node);

        match parent {
            None => self.root = Some(id),
            Some(p) => self.set_child(p, side, Some(id)),
        }
        self.len += 1;

        self.insert_fixup(id);
        self.check_invariants();

        Ok(())
    }

    /// Restore the coloring after attaching the red leaf `node`.
    ///
    /// While `node`'s parent is red (so a grandparent exists, the root being
    /// black):
    ///
    /// - red uncle: push the grandparent's black down one level and continue
    ///   from the grandparent.
    /// - black uncle, `node` on the inner side: rotate the parent outward so
    ///   the conflict lies on the outer side.
    /// - black uncle, outer side: recolor and rotate the grandparent toward
    ///   the uncle. This terminates.
    ///
    /// Finally the root is painted black.
    fn insert_fixup(&mut self, mut node: NodeId) {
        while let Some(mut parent) = self.parent(node) {
            if !self.is_red(Some(parent)) {
                break;
            }

            // A red parent is never the root.
            let Some(grandparent) = self.parent(parent) else {
                break;
            };

            let parent_side: Side = self.side_of(Some(parent), grandparent);
            let uncle: Link = self.child(grandparent, parent_side.opposite());

            if self.is_red(uncle) {
                trace_log!(?node, "insert_fixup: recolor");
                self.set_color(Some(parent), Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(Some(grandparent), Color::Red);
                node = grandparent;
                continue;
            }

            if self.child(parent, parent_side.opposite()) == Some(node) {
                trace_log!(?node, "insert_fixup: inner child, rotate parent");
                self.rotate(parent, parent_side);
                std::mem::swap(&mut node, &mut parent);
            }

            trace_log!(?node, "insert_fixup: rotate grandparent");
            self.set_color(Some(parent), Color::Black);
            self.set_color(Some(grandparent), Color::Red);
            self.rotate(grandparent, parent_side.opposite());
        }

        self.set_color(self.root, Color::Black);
    }
}
