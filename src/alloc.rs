//! Node allocation abstraction for [`RedBlackTree`](crate::RedBlackTree).
//!
//! This module provides the [`NodeAllocator`] trait that abstracts how nodes
//! are stored and released. The default [`ArenaAllocator`] keeps nodes in a
//! slot vector and recycles freed slots through an intrusive free list, so a
//! [`NodeId`] stays valid until its node is deallocated.

use crate::node::{Node, NodeId};

/// Trait for allocating and deallocating tree nodes.
///
/// Implementations must guarantee:
///
/// 1. **Id stability**: a returned [`NodeId`] addresses the same node until
///    `dealloc` is called with it.
///
/// 2. **Single release**: `dealloc` hands the node back exactly once. A
///    second call with the same id returns `None`.
///
/// The tree is the only caller, and it never touches an id after releasing it.
pub trait NodeAllocator {
    /// Store `node` and return its id.
    fn alloc(&mut self, node: Node) -> NodeId;

    /// Release the node behind `id` and return it.
    ///
    /// Returns `None` if `id` is not live (never allocated, or already freed).
    fn dealloc(&mut self, id: NodeId) -> Option<Node>;

    /// Borrow a live node.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not live. The tree only passes ids reachable from
    /// its root, so this indicates a broken tree.
    fn node(&self, id: NodeId) -> &Node;

    /// Mutably borrow a live node.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not live.
    fn node_mut(&mut self, id: NodeId) -> &mut Node;

    /// Number of live nodes.
    fn live_count(&self) -> usize;
}

/// One arena cell.
#[derive(Debug, Clone)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<usize> },
}

/// Slot-vector node allocator.
///
/// Nodes are stored inline in a `Vec<Slot>`. Freed slots form a singly linked
/// free list threaded through the vacant cells and are reused first, so the
/// arena never grows past the peak number of live nodes.
///
/// # Example
///
/// ```rust
/// use redblack::alloc::{ArenaAllocator, NodeAllocator};
/// use redblack::node::Node;
///
/// let mut arena = ArenaAllocator::new();
/// let id = arena.alloc(Node::new(5));
/// assert_eq!(arena.node(id).key(), 5);
///
/// assert!(arena.dealloc(id).is_some());
/// assert!(arena.dealloc(id).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArenaAllocator {
    /// Node storage, indexed by [`NodeId`].
    slots: Vec<Slot>,

    /// Head of the free list.
    free_head: Option<usize>,

    /// Number of occupied slots.
    live: usize,
}

impl ArenaAllocator {
    /// Create an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            live: 0,
        }
    }

    /// Create an empty arena with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            live: 0,
        }
    }

    /// Number of slots ever handed out (live + free).
    #[inline]
    #[must_use]
    pub const fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of vacant slots waiting for reuse.
    #[inline]
    #[must_use]
    pub const fn free_count(&self) -> usize {
        self.slots.len() - self.live
    }

    /// Reserved storage, in nodes.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }
}

impl NodeAllocator for ArenaAllocator {
    fn alloc(&mut self, node: Node) -> NodeId {
        self.live += 1;

        if let Some(index) = self.free_head {
            let next_free: Option<usize> = match self.slots.get(index) {
                Some(Slot::Vacant { next_free }) => *next_free,
                _ => None,
            };

            self.free_head = next_free;
            self.slots[index] = Slot::Occupied(node);
            return NodeId::from_index(index);
        }

        self.slots.push(Slot::Occupied(node));
        NodeId::from_index(self.slots.len() - 1)
    }

    fn dealloc(&mut self, id: NodeId) -> Option<Node> {
        let index: usize = id.index();

        let slot: &mut Slot = self.slots.get_mut(index)?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }

        let released: Slot = std::mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(index);
        self.live -= 1;

        match released {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        match self.slots.get(id.index()) {
            Some(Slot::Occupied(node)) => node,
            _ => panic!("node {id:?} is not live"),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        match self.slots.get_mut(id.index()) {
            Some(Slot::Occupied(node)) => node,
            _ => panic!("node {id:?} is not live"),
        }
    }

    #[inline]
    fn live_count(&self) -> usize {
        self.live
    }
}

// ============================================================================
//  Tests
// ============================================================================
