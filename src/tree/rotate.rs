//! Local restructuring primitives: rotations and `transplant`.
//!
//! All three are O(1) and preserve the in-order key sequence. They never
//! touch colors.

use crate::alloc::NodeAllocator;
use crate::node::{Link, NodeId, Side};
use crate::tracing_helpers::trace_log;

use super::RedBlackTree;

impl<A: NodeAllocator> RedBlackTree<A> {
    /// Rotate `node` down toward `dir`. The child on the opposite side (the
    /// pivot) moves up into `node`'s position, reseating the root if `node`
    /// had no parent.
    ///
    /// `Side::Left` is the classic left rotation:
    ///
    /// ```text
    ///     node               pivot
    ///    /    \             /     \
    ///   a    pivot   =>   node     c
    ///       /     \      /    \
    ///      b       c    a      b
    /// ```
    ///
    /// and `Side::Right` its mirror image.
    pub(super) fn rotate(&mut self, node: NodeId, dir: Side) {
        let up: Side = dir.opposite();

        let Some(pivot) = self.child(node, up) else {
            unreachable!("rotate: node {node:?} has no child on {up:?} to rotate up");
        };

        // pivot's inner subtree changes hands.
        let inner: Link = self.child(pivot, dir);
        self.set_child(node, up, inner);
        self.set_parent(inner, Some(node));

        // pivot takes node's slot under node's parent (or becomes root).
        let parent: Link = self.parent(node);
        self.node_mut(pivot).parent = parent;
        self.replace_child(parent, node, Some(pivot));

        self.set_child(pivot, dir, Some(node));
        self.node_mut(node).parent = Some(pivot);

        trace_log!(?node, ?pivot, ?dir, "rotate");
    }

    /// Replace `old` with `new` in `old`'s parent relation and fix `new`'s
    /// parent. `new` may be the sentinel.
    pub(super) fn transplant(&mut self, old: NodeId, new: Link) {
        let parent: Link = self.parent(old);
        self.replace_child(parent, old, new);
        self.set_parent(new, parent);
    }

    /// Point whichever child relation of `parent` held `old` at `new`. A
    /// missing `parent` means `old` was the root.
    fn replace_child(&mut self, parent: Link, old: NodeId, new: Link) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let side: Side = self.side_of(Some(old), p);
                self.set_child(p, side, new);
            }
        }
    }
}
