//! Lazy traversals over a [`TheoremTree`].
//!
//! Both iterators borrow the tree and hold only a small queue or stack of ids,
//! so they are cheap to clone and restart. Each item is the node id together
//! with the node; the node carries its own level.

use super::{TheoremNode, TheoremTree};
use crate::arena::TheoremId;
use std::collections::VecDeque;

/// Breadth-first traversal: level by level, children in discovery order.
#[derive(Debug, Clone)]
pub struct Bfs<'a> {
    tree: &'a TheoremTree,
    queue: VecDeque<TheoremId>,
}

impl<'a> Bfs<'a> {
    /// Starts a traversal at `start`. An id outside the tree yields nothing.
    pub fn new(tree: &'a TheoremTree, start: TheoremId) -> Self {
        let mut queue = VecDeque::new();
        if tree.get(start).is_some() {
            queue.push_back(start);
        }
        Self { tree, queue }
    }
}

impl<'a> Iterator for Bfs<'a> {
    type Item = (TheoremId, &'a TheoremNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        let node = self.tree.get(id)?;
        self.queue.extend(node.children.iter().copied());
        Some((id, node))
    }
}

/// Depth-first pre-order traversal: a node, then each child subtree in order.
#[derive(Debug, Clone)]
pub struct Dfs<'a> {
    tree: &'a TheoremTree,
    stack: Vec<TheoremId>,
}

impl<'a> Dfs<'a> {
    /// Starts a traversal at `start`. An id outside the tree yields nothing.
    pub fn new(tree: &'a TheoremTree, start: TheoremId) -> Self {
        let mut stack = Vec::new();
        if tree.get(start).is_some() {
            stack.push(start);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for Dfs<'a> {
    type Item = (TheoremId, &'a TheoremNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.get(id)?;
        // Reversed so the first child is popped next.
        self.stack.extend(node.children.iter().rev().copied());
        Some((id, node))
    }
}
