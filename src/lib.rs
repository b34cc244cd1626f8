//! # `redblack`
//!
//! An ordered set of `i64` keys backed by a red-black tree.
//!
//! Every node carries a color, and insert/delete repair the coloring with
//! local rotations so the tree height stays within `2 * log2(n + 1)`. Search,
//! insert, delete, minimum/maximum and predecessor/successor all run in
//! O(log n).
//!
//! ## Layout
//!
//! - Nodes live in an arena ([`ArenaAllocator`]) and refer to each other by
//!   [`NodeId`]. The nil sentinel is `None`: black, storage-free, never
//!   written.
//! - Storage goes through the [`NodeAllocator`] trait, so tests can count
//!   allocations and releases.
//! - Lookups return [`NodeRef`] views borrowing the tree.
//!
//! ## Example
//!
//! ```rust
//! use redblack::{Color, RedBlackTree, TreeError};
//!
//! let mut tree = RedBlackTree::new();
//! for key in [10, 18, 7, 15, 16, 30, 25, 40, 60, 2, 17, 6] {
//!     tree.insert(key).unwrap();
//! }
//!
//! assert_eq!(tree.root().map(|n| n.color()), Some(Color::Black));
//! assert!(tree.search_status(25).is_found());
//! assert_eq!(tree.predecessor(15).unwrap().map(|n| n.key()), Some(10));
//!
//! tree.delete(18).unwrap();
//! assert_eq!(tree.delete(18), Err(TreeError::CannotDelete(18)));
//!
//! for entry in tree.preorder() {
//!     println!("{entry}");
//! }
//! ```
//!
//! ## Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `tracing` | Emit `tracing` spans and events from tree operations |
//! | `validate` | Check every invariant after each mutation in release builds |
//!
//! Debug builds always run the invariant check.

#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod alloc;
pub mod color;
pub mod error;
pub mod node;
pub mod tree;

mod tracing_helpers;

// Re-export main types for convenience
pub use alloc::{ArenaAllocator, NodeAllocator};
pub use color::Color;
pub use error::TreeError;
pub use node::{Key, Link, NIL, Node, NodeId};
pub use tree::{
    Inorder, InvariantViolation, Iter, NodeRef, Postorder, Preorder, RedBlackTree, SearchStatus,
    TraversalEntry,
};
