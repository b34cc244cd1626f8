//! Filepath: src/tree/remove.rs
//!
//! Deletion: splice the node out, then repair a missing black.
//!
//! The node that replaces the removed one may be the sentinel, which has no
//! storage to carry a parent relation. The fixup therefore tracks that parent
//! explicitly instead of reading it off the sentinel.

use crate::alloc::NodeAllocator;
use crate::color::Color;
use crate::error::TreeError;
use crate::node::{Key, Link, NodeId, Side};
use crate::tracing_helpers::{debug_log, trace_log};

use super::RedBlackTree;

impl<A: NodeAllocator> RedBlackTree<A> {
    /// Delete `key`.
    ///
    /// Runs in O(log n) with at most three rotations. The removed node is
    /// released through the allocator exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::CannotDelete`] if `key` is not stored. The tree is
    /// left unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use redblack::{RedBlackTree, TreeError};
    ///
    /// let mut tree: RedBlackTree = [1, 2, 3].into_iter().collect();
    ///
    /// tree.delete(2).unwrap();
    /// assert_eq!(tree.delete(2), Err(TreeError::CannotDelete(2)));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub fn delete(&mut self, key: Key) -> Result<(), TreeError> {
        let Some(target) = self.find(key) else {
            debug_log!(key, "delete: key could not be deleted");
            return Err(TreeError::CannotDelete(key));
        };

        let (x, x_parent, removed_color) = self.splice(target);

        let freed = self.allocator.dealloc(target);
        debug_assert!(freed.is_some(), "deleted node was already released");
        self.len -= 1;

        if removed_color.is_black() {
            self.delete_fixup(x, x_parent);
        }
        self.check_invariants();

        Ok(())
    }

    /// Unlink `target` from the tree without releasing it.
    ///
    /// Returns the relation that moved into the vacated position, its parent,
    /// and the color that left the tree. With two children, `target`'s
    /// successor takes over `target`'s position and color, so the color lost
    /// is the successor's.
    fn splice(&mut self, target: NodeId) -> (Link, Link, Color) {
        let left: Link = self.child(target, Side::Left);
        let right: Link = self.child(target, Side::Right);

        match (left, right) {
            (None, _) => {
                let parent: Link = self.parent(target);
                self.transplant(target, right);
                (right, parent, self.node(target).color)
            }

            (_, None) => {
                let parent: Link = self.parent(target);
                self.transplant(target, left);
                (left, parent, self.node(target).color)
            }

            (Some(left), Some(right)) => {
                let successor: NodeId = self.extreme(right, Side::Left);
                let removed_color: Color = self.node(successor).color;
                let x: Link = self.child(successor, Side::Right);

                let x_parent: Link = if successor == right {
                    Some(successor)
                } else {
                    let parent: Link = self.parent(successor);
                    self.transplant(successor, x);
                    self.set_child(successor, Side::Right, Some(right));
                    self.set_parent(Some(right), Some(successor));
                    parent
                };

                self.transplant(target, Some(successor));
                self.set_child(successor, Side::Left, Some(left));
                self.set_parent(Some(left), Some(successor));

                let target_color: Color = self.node(target).color;
                self.set_color(Some(successor), target_color);

                (x, x_parent, removed_color)
            }
        }
    }

    /// Push the extra black carried by `x` up or resolve it by rotation.
    ///
    /// `parent` is `x`'s parent, passed in because `x` may be the sentinel.
    /// With `s` the sibling on the `far` side:
    ///
    /// - red sibling: rotate it above the parent so the sibling is black.
    /// - black sibling with two black children: paint it red and move the
    ///   extra black to the parent.
    /// - black sibling whose far child is black: rotate the near child up so
    ///   the far child is red.
    /// - black sibling whose far child is red: rotate the parent toward `x`,
    ///   recolor, and stop.
    fn delete_fixup(&mut self, mut x: Link, mut parent: Link) {
        while x != self.root && !self.is_red(x) {
            let Some(p) = parent else {
                break;
            };

            let side: Side = self.side_of(x, p);
            let far: Side = side.opposite();
            let mut sibling: Link = self.child(p, far);

            if self.is_red(sibling) {
                trace_log!(?p, "delete_fixup: red sibling");
                self.set_color(sibling, Color::Black);
                self.set_color(Some(p), Color::Red);
                self.rotate(p, side);
                sibling = self.child(p, far);
            }

            // A black-height deficit on x's side means the sibling subtree
            // holds at least one black node.
            let Some(s) = sibling else {
                unreachable!("delete_fixup: node {p:?} has no sibling opposite {side:?}");
            };

            let near_child: Link = self.child(s, side);
            let far_child: Link = self.child(s, far);

            if !self.is_red(near_child) && !self.is_red(far_child) {
                trace_log!(?s, "delete_fixup: black sibling, black children");
                self.set_color(Some(s), Color::Red);
                x = Some(p);
                parent = self.parent(p);
                continue;
            }

            let mut s: NodeId = s;
            if !self.is_red(far_child) {
                trace_log!(?s, "delete_fixup: near child red, rotate sibling");
                self.set_color(near_child, Color::Black);
                self.set_color(Some(s), Color::Red);
                self.rotate(s, far);
                if let Some(near) = near_child {
                    s = near;
                }
            }

            trace_log!(?s, "delete_fixup: far child red, rotate parent");
            let parent_color: Color = self.node(p).color;
            self.set_color(Some(s), parent_color);
            self.set_color(Some(p), Color::Black);
            let far_child: Link = self.child(s, far);
            self.set_color(far_child, Color::Black);
            self.rotate(p, side);

            x = self.root;
            parent = None;
        }

        self.set_color(x, Color::Black);
    }
}
