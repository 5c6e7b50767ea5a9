//! A fixed-size adjacency-list directed graph.
//!
//! Nodes are the indices `0..node_count`; each node owns an ordered list of
//! out-neighbors. The node set is fixed at construction. Edges can be added
//! afterwards, but every endpoint is checked against the node count, so the
//! graph never holds an index outside `0..node_count`.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_edge` | \(O(1)\) amortized | Appends to the source list, duplicates allowed |
//! | `neighbors` | \(O(1)\) | Borrows the list as a slice |
//! | `out_degree` | \(O(1)\) | Returns `Vec::len` |
//! | `has_edge` | \(O(\text{out-degree})\) | Linear scan |
//! | `edge_count` | \(O(n)\) | Sums list lengths |

use crate::error::GraphError;

/// A directed graph stored as one neighbor list per node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    /// Creates a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Creates a graph in which node `i` has exactly one neighbor, `i` itself.
    ///
    /// Any walk that follows edges from a node of this graph is cyclic.
    pub fn with_self_loops(node_count: usize) -> Self {
        let adjacency = (0..node_count).map(|i| vec![i]).collect();
        tracing::debug!(node_count, "built self-loop graph");
        Self { adjacency }
    }

    /// Creates a graph from adjacency lists, keeping the list order.
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeOutOfBounds`] for the first neighbor index
    /// that is not a valid node.
    pub fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Result<Self, GraphError> {
        let node_count = adjacency.len();
        for (from, nbrs) in adjacency.iter().enumerate() {
            if let Some(&to) = nbrs.iter().find(|&&to| to >= node_count) {
                return Err(GraphError::EdgeOutOfBounds { from, to, node_count });
            }
        }
        Ok(Self { adjacency })
    }

    /// Appends the directed edge `from -> to` to `from`'s list.
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeOutOfBounds`] if either endpoint is not a node.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(), GraphError> {
        let node_count = self.node_count();
        if from >= node_count || to >= node_count {
            return Err(GraphError::EdgeOutOfBounds { from, to, node_count });
        }
        self.adjacency[from].push(to);
        Ok(())
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns `true` if the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the out-neighbors of `node` in insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfBounds`] if `node` is not a node.
    #[inline]
    pub fn neighbors(&self, node: usize) -> Result<&[usize], GraphError> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or(GraphError::NodeOutOfBounds {
                node,
                node_count: self.node_count(),
            })
    }

    /// Returns the out-degree of `node`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfBounds`] if `node` is not a node.
    pub fn out_degree(&self, node: usize) -> Result<usize, GraphError> {
        self.neighbors(node).map(<[usize]>::len)
    }

    /// Checks whether the edge `from -> to` exists.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfBounds`] if `from` is not a node.
    pub fn has_edge(&self, from: usize, to: usize) -> Result<bool, GraphError> {
        Ok(self.neighbors(from)?.contains(&to))
    }

    /// Returns every adjacency list, indexed by node.
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }
}
