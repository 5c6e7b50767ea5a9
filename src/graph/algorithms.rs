//! Terminating traversals for `AdjacencyGraph`.
//!
//! Unlike the edge-following walk in [`traversal`](super::traversal), these
//! traversals visit each node at most once and therefore always finish, even
//! on graphs full of cycles.

use crate::error::GraphError;
use crate::graph::access::visited::VisitedSet;
use crate::graph::adj_list::AdjacencyGraph;

/// An iterator for Depth-First Search (DFS).
///
/// Yields each node reachable from the start node exactly once, in the
/// preorder a recursive DFS would produce: the start node first, then the
/// subtree of its first unvisited neighbor, and so on.
///
/// Neighbors are pushed in reverse and marked when popped, which keeps the
/// order identical to the recursive one.
#[derive(Debug)]
pub struct Dfs<'g> {
    graph: &'g AdjacencyGraph,
    visited: VisitedSet,
    stack: Vec<usize>,
}

impl<'g> Dfs<'g> {
    /// Creates a DFS iterator starting from `start`.
    ///
    /// Yields nothing if `start` is not a node.
    pub fn new(graph: &'g AdjacencyGraph, start: usize) -> Self {
        let mut dfs = Self {
            graph,
            visited: VisitedSet::new(graph.node_count()),
            stack: Vec::new(),
        };
        dfs.restart(start);
        dfs
    }

    /// Creates a DFS iterator, rejecting an invalid start node.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfBounds`] if `start` is not a node.
    pub fn try_new(graph: &'g AdjacencyGraph, start: usize) -> Result<Self, GraphError> {
        graph.neighbors(start)?;
        Ok(Self::new(graph, start))
    }

    /// Forgets every visit and starts over from `start`.
    pub fn restart(&mut self, start: usize) {
        self.visited.clear();
        self.stack.clear();
        if start < self.visited.len() {
            self.stack.push(start);
        }
    }

    /// Returns the number of nodes yielded so far.
    pub fn visited_count(&self) -> usize {
        self.visited.count()
    }

    /// Returns `true` if `node` has been yielded.
    pub fn is_visited(&self, node: usize) -> bool {
        self.visited.is_visited(node)
    }
}

impl Iterator for Dfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let u = self.stack.pop()?;
            if !self.visited.try_visit(u) {
                continue;
            }

            for &v in self.graph.adjacency()[u].iter().rev() {
                if !self.visited.is_visited(v) {
                    self.stack.push(v);
                }
            }
            return Some(u);
        }
    }
}

/// Counts the nodes reachable from `start`, including `start` itself.
///
/// Returns 0 if `start` is not a node.
pub fn reachable_count(graph: &AdjacencyGraph, start: usize) -> usize {
    let count = Dfs::new(graph, start).count();
    tracing::debug!(start, count, "reachable count");
    count
}
