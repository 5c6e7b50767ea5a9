//! # `walktrace` - Recorded Preorder Walks
//!
//! Builds adjacency-list graphs and walks them depth-first in preorder,
//! recording the target of every followed edge.
//!
//! ## Walk Semantics
//!
//! Two traversals are provided:
//!
//! 1. **Edge-following walk** ([`TraceWalker`]):
//!    - Follows every out-edge in list order and re-enters nodes freely
//!    - Runs on an explicit frame stack, never on the call stack
//!    - Stops only when a [`WalkBound`] (depth or trace length) is reached,
//!      so cyclic graphs need a bound to finish
//!
//! 2. **Visited-set DFS** ([`Dfs`]):
//!    - Yields each reachable node once, in recursive preorder
//!    - Always terminates
//!
//! ## Entry Protocol
//!
//! [`run`](run::run) reads a node count `n` from a stream, builds a graph in
//! which node `i` has the single neighbor `i`, and walks it from node 0 when
//! `n > 0`. Input without a usable count is treated as `n = 0`.
//!
//! ## Example
//!
//! ```rust
//! use walktrace::{AdjacencyGraph, TraceWalker, WalkBound};
//!
//! let graph = AdjacencyGraph::with_self_loops(3);
//! let mut walker = TraceWalker::new(&graph, WalkBound::depth(5));
//! walker.traverse(0).unwrap();
//!
//! assert_eq!(walker.trace().as_slice(), &[0, 0, 0, 0, 0]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod graph;
pub mod input;
pub mod run;

pub use config::{OutputFormat, WalkConfig, WalkMode};
pub use error::{ConfigError, GraphError, InputError, RunError};
pub use graph::{
    reachable_count, trace_walk, AdjacencyGraph, Dfs, TraceWalker, VisitTrace, WalkBound,
};
pub use run::{run, walk_graph, WalkReport};
