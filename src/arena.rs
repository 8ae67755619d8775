//! Arena allocation for theorem tree nodes.
//!
//! Provides `TheoremId` (a dense, total-orderable identifier) and `NodeArena`
//! (contiguous, append-only storage). The arena stores node data of a generic
//! type `T`.
//!
//! # Determinism
//! - `TheoremId` ordering is by its inner `u32`.
//! - Iteration order over slots is by index, which is allocation order.
//! - Nodes are never freed, so the same sequence of allocations always yields
//!   the same identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense node identifier for arena-allocated trees.
///
/// `TheoremId(u32)` is `Copy`, `Eq`, `Ord`, `Hash`. The inner value is an
/// index into the arena's slot array.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TheoremId(u32);

impl TheoremId {
    /// Creates a new `TheoremId` from a raw `u32`.
    ///
    /// The caller must ensure the index is within bounds of the arena that
    /// holds this node; lookups with a foreign id return `None`.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw `u32` index.
    #[inline]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Returns the index as a `usize`, for slicing.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TheoremId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TheoremId({})", self.0)
    }
}

/// Append-only contiguous storage for node data.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct NodeArena<T> {
    slots: Vec<T>,
}

impl<T> NodeArena<T> {
    /// Creates a new empty arena.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates an empty arena with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Allocates a new slot holding `data` and returns its `TheoremId`.
    ///
    /// # Panics
    /// Panics if the arena already holds `u32::MAX` nodes.
    pub fn allocate(&mut self, data: T) -> TheoremId {
        let idx = u32::try_from(self.slots.len()).expect("theorem arena exhausted the u32 id space");
        self.slots.push(data);
        TheoremId(idx)
    }

    /// Returns a reference to the data stored at `id`, if present.
    #[inline]
    pub fn get(&self, id: TheoremId) -> Option<&T> {
        self.slots.get(id.index())
    }

    /// Returns a mutable reference to the data stored at `id`, if present.
    #[inline]
    pub fn get_mut(&mut self, id: TheoremId) -> Option<&mut T> {
        self.slots.get_mut(id.index())
    }

    /// Returns `true` if `id` refers to a slot in this arena.
    #[inline]
    pub fn contains(&self, id: TheoremId) -> bool {
        id.index() < self.slots.len()
    }

    /// Returns the number of allocated nodes.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if nothing has been allocated yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over all nodes in allocation order.
    ///
    /// Yields `(TheoremId, &T)` pairs.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (TheoremId, &T)> + ExactSizeIterator {
        self.slots
            .iter()
            .enumerate()
            .map(|(idx, data)| (TheoremId(idx as u32), data))
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::ops::Index<TheoremId> for NodeArena<T> {
    type Output = T;

    fn index(&self, id: TheoremId) -> &T {
        &self.slots[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_basic() {
        let mut arena: NodeArena<&'static str> = NodeArena::new();
        assert!(arena.is_empty());

        let id1 = arena.allocate("MI");
        assert_eq!(id1.as_u32(), 0);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(id1), Some(&"MI"));

        let id2 = arena.allocate("MIU");
        assert_eq!(id2.as_u32(), 1);
        assert_eq!(arena[id2], "MIU");
        assert!(arena.contains(id2));
        assert!(!arena.contains(TheoremId::new(2)));
        assert_eq!(arena.get(TheoremId::new(7)), None);
    }

    #[test]
    fn iteration_follows_allocation_order() {
        let mut arena: NodeArena<i32> = NodeArena::with_capacity(4);
        for value in [30, 10, 20] {
            arena.allocate(value);
        }
        if let Some(slot) = arena.get_mut(TheoremId::new(1)) {
            *slot += 1;
        }
        let collected: Vec<_> = arena.iter().map(|(id, &val)| (id.as_u32(), val)).collect();
        assert_eq!(collected, vec![(0, 30), (1, 11), (2, 20)]);
    }
}
