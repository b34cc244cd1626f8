//! Filepath: src/tree/validate.rs
//!
//! Structural checker for the red-black invariants.
//!
//! [`RedBlackTree::validate`] walks the whole tree and reports the first
//! violation found. Debug builds (and builds with the `validate` feature) run
//! it after every insert and delete.

use std::fmt as StdFmt;

use crate::alloc::NodeAllocator;
use crate::node::{Key, Link, Node, NodeId};
use crate::tracing_helpers::error_log;

use super::RedBlackTree;

/// A broken red-black or bookkeeping invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The root is red.
    RedRoot {
        /// Key at the root.
        key: Key,
    },

    /// The root has a parent relation.
    RootHasParent {
        /// Key at the root.
        key: Key,
    },

    /// A key sits outside the range its ancestors allow, or repeats one.
    OrderViolation {
        /// Offending key.
        key: Key,
    },

    /// A red node has a red child.
    RedRedViolation {
        /// Key of the red parent.
        parent: Key,

        /// Key of the red child.
        child: Key,
    },

    /// Two sibling subtrees disagree on black height.
    BlackHeightMismatch {
        /// Key of the node whose subtrees disagree.
        key: Key,

        /// Black height of the left subtree.
        left: usize,

        /// Black height of the right subtree.
        right: usize,
    },

    /// A child's parent relation does not point back at its parent.
    ParentMismatch {
        /// Key of the child.
        key: Key,
    },

    /// Reachable nodes disagree with the tree's length or the allocator's
    /// live count.
    CountMismatch {
        /// Nodes reachable from the root.
        reachable: usize,

        /// Recorded key count.
        len: usize,

        /// Nodes live in the allocator.
        live: usize,
    },
}

impl StdFmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut StdFmt::Formatter<'_>) -> StdFmt::Result {
        match self {
            Self::RedRoot { key } => write!(f, "root {key} is red"),

            Self::RootHasParent { key } => write!(f, "root {key} has a parent"),

            Self::OrderViolation { key } => write!(f, "key {key} is out of order"),

            Self::RedRedViolation { parent, child } => {
                write!(f, "red node {parent} has red child {child}")
            }

            Self::BlackHeightMismatch { key, left, right } => write!(
                f,
                "node {key} has black height {left} on the left and {right} on the right"
            ),

            Self::ParentMismatch { key } => {
                write!(f, "node {key} does not point back at its parent")
            }

            Self::CountMismatch {
                reachable,
                len,
                live,
            } => write!(
                f,
                "{reachable} nodes reachable, but len is {len} and {live} nodes are live"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Open key interval `(lower, upper)`; `None` is unbounded.
#[derive(Clone, Copy)]
struct Bounds {
    lower: Option<Key>,
    upper: Option<Key>,
}

impl Bounds {
    const UNBOUNDED: Self = Self {
        lower: None,
        upper: None,
    };

    fn admits(self, key: Key) -> bool {
        self.lower.is_none_or(|lo| key > lo) && self.upper.is_none_or(|hi| key < hi)
    }
}

impl<A: NodeAllocator> RedBlackTree<A> {
    /// Check every invariant and return the black height.
    ///
    /// The black height counts black nodes on any root-to-sentinel path,
    /// root included and sentinel excluded, so an empty tree reports 0 and a
    /// single node reports 1.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        let mut reachable: usize = 0;

        let black_height: usize = match self.root {
            None => 0,
            Some(root) => {
                let node: &Node = self.node(root);
                if node.color.is_red() {
                    return Err(InvariantViolation::RedRoot { key: node.key });
                }
                if node.parent.is_some() {
                    return Err(InvariantViolation::RootHasParent { key: node.key });
                }
                self.check_subtree(root, Bounds::UNBOUNDED, &mut reachable)?
            }
        };

        let live: usize = self.allocator.live_count();
        if reachable != self.len || reachable != live {
            return Err(InvariantViolation::CountMismatch {
                reachable,
                len: self.len,
                live,
            });
        }

        Ok(black_height)
    }

    /// Validate the subtree at `id` and return its black height.
    fn check_subtree(
        &self,
        id: NodeId,
        bounds: Bounds,
        reachable: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        let node: &Node = self.node(id);

        // More nodes than the allocator holds means a cycle.
        *reachable += 1;
        let live: usize = self.allocator.live_count();
        if *reachable > live {
            return Err(InvariantViolation::CountMismatch {
                reachable: *reachable,
                len: self.len,
                live,
            });
        }

        if !bounds.admits(node.key) {
            return Err(InvariantViolation::OrderViolation { key: node.key });
        }

        let left: usize = self.check_child(id, node.left, bounds.lower, Some(node.key), reachable)?;
        let right: usize =
            self.check_child(id, node.right, Some(node.key), bounds.upper, reachable)?;

        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch {
                key: node.key,
                left,
                right,
            });
        }

        Ok(left + usize::from(node.color.is_black()))
    }

    fn check_child(
        &self,
        parent: NodeId,
        child: Link,
        lower: Option<Key>,
        upper: Option<Key>,
        reachable: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        let Some(child) = child else {
            return Ok(0);
        };

        let parent_node: &Node = self.node(parent);
        let child_node: &Node = self.node(child);

        if child_node.parent != Some(parent) {
            return Err(InvariantViolation::ParentMismatch {
                key: child_node.key,
            });
        }
        if parent_node.color.is_red() && child_node.color.is_red() {
            return Err(InvariantViolation::RedRedViolation {
                parent: parent_node.key,
                child: child_node.key,
            });
        }

        self.check_subtree(child, Bounds { lower, upper }, reachable)
    }

    /// Number of nodes on the longest root-to-leaf path. 0 when empty.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut deepest: usize = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();

        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node: &Node = self.node(id);
            stack.extend(node.left.map(|l| (l, depth + 1)));
            stack.extend(node.right.map(|r| (r, depth + 1)));
        }

        deepest
    }

    /// Black nodes on the leftmost root-to-sentinel path.
    ///
    /// Equals [`validate`](Self::validate)'s result on a valid tree without
    /// walking the whole tree.
    #[must_use]
    pub fn black_height(&self) -> usize {
        let mut count: usize = 0;
        let mut cursor: Link = self.root;

        while let Some(id) = cursor {
            let node: &Node = self.node(id);
            count += usize::from(node.color.is_black());
            cursor = node.left;
        }

        count
    }

    /// Panic if the tree is broken. Only runs in debug builds or with the
    /// `validate` feature.
    pub(super) fn check_invariants(&self) {
        if cfg!(any(debug_assertions, feature = "validate")) {
            if let Err(violation) = self.validate() {
                error_log!(%violation, "invariant violated");
                panic!("red-black invariant violated: {violation}");
            }
        }
    }
}
