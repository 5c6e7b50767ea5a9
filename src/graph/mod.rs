//! Adjacency-list graphs and the traversals that run over them.
//!
//! - `adj_list`: the fixed-size adjacency-list graph
//! - `traversal`: edge-following walks that record a trace, bounded explicitly
//! - `algorithms`: visited-set traversals that always terminate

pub mod adj_list;
pub mod algorithms;
pub mod traversal;
pub(crate) mod access;

pub use adj_list::AdjacencyGraph;
pub use algorithms::{reachable_count, Dfs};
pub use traversal::{trace_walk, TraceWalker, VisitTrace, WalkBound};
