//! Edge-following preorder walks with a recorded trace.
//!
//! A walk from node `v` follows each out-edge `v -> to` in list order: it
//! appends `to` to the trace and walks `to` before moving to the next edge.
//! Nothing stops a walk from re-entering a node, so on cyclic graphs the
//! walk only ends when a [`WalkBound`] says so.
//!
//! The recursion is kept on an explicit frame stack, so the call stack stays
//! flat no matter how deep the walk goes.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::adj_list::AdjacencyGraph;

/// Limits applied to an edge-following walk.
///
/// `None` disables a limit. The default has no limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkBound {
    /// Edges are followed only from nodes whose depth is below this value.
    /// The entry node has depth 0.
    pub max_depth: Option<usize>,
    /// The walk stops once the trace holds this many entries.
    pub max_trace_len: Option<usize>,
}

impl WalkBound {
    /// No limits. A walk over a reachable cycle never finishes.
    pub const fn unbounded() -> Self {
        Self {
            max_depth: None,
            max_trace_len: None,
        }
    }

    /// Limits only the depth.
    pub const fn depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            max_trace_len: None,
        }
    }

    /// Limits only the trace length.
    pub const fn trace_len(max_trace_len: usize) -> Self {
        Self {
            max_depth: None,
            max_trace_len: Some(max_trace_len),
        }
    }

    /// Returns `true` if neither limit is set.
    pub const fn is_unbounded(&self) -> bool {
        self.max_depth.is_none() && self.max_trace_len.is_none()
    }
}

/// The node indices a walk appended, in the order the edges were followed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitTrace(Vec<usize>);

impl VisitTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub(crate) fn push(&mut self, node: usize) {
        self.0.push(node);
    }

    /// Returns the number of recorded entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the entries as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Consumes the trace and returns its entries.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl From<Vec<usize>> for VisitTrace {
    fn from(nodes: Vec<usize>) -> Self {
        Self(nodes)
    }
}

impl PartialEq<[usize]> for VisitTrace {
    fn eq(&self, other: &[usize]) -> bool {
        self.0 == other
    }
}

/// Space-separated indices on one line.
impl fmt::Display for VisitTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut nodes = self.0.iter();
        if let Some(first) = nodes.next() {
            write!(f, "{first}")?;
            for node in nodes {
                write!(f, " {node}")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    node: usize,
    next_edge: usize,
}

/// Runs edge-following walks over a borrowed graph and owns their trace.
///
/// Successive calls to [`traverse`](Self::traverse) append to the same trace.
#[derive(Debug)]
pub struct TraceWalker<'g> {
    graph: &'g AdjacencyGraph,
    bound: WalkBound,
    trace: VisitTrace,
    frames: Vec<Frame>,
    truncated: bool,
}

impl<'g> TraceWalker<'g> {
    /// Creates a walker with an empty trace.
    pub fn new(graph: &'g AdjacencyGraph, bound: WalkBound) -> Self {
        Self {
            graph,
            bound,
            trace: VisitTrace::new(),
            frames: Vec::new(),
            truncated: false,
        }
    }

    /// Walks from `node`, appending every followed edge's target to the trace.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfBounds`] if `node` is not a node; the
    /// trace is left untouched in that case.
    pub fn traverse(&mut self, node: usize) -> Result<(), GraphError> {
        let graph = self.graph;
        graph.neighbors(node)?;

        let recorded_before = self.trace.len();
        self.frames.clear();
        self.frames.push(Frame { node, next_edge: 0 });

        while let Some(depth) = self.frames.len().checked_sub(1) {
            let frame = &mut self.frames[depth];
            let Some(&to) = graph.neighbors(frame.node)?.get(frame.next_edge) else {
                self.frames.pop();
                continue;
            };

            if self.bound.max_trace_len.is_some_and(|k| self.trace.len() >= k) {
                self.truncated = true;
                break;
            }
            if self.bound.max_depth.is_some_and(|d| depth >= d) {
                self.truncated = true;
                self.frames.pop();
                continue;
            }

            frame.next_edge += 1;
            tracing::trace!(from = frame.node, to, depth, "follow edge");
            self.trace.push(to);
            self.frames.push(Frame { node: to, next_edge: 0 });
        }
        self.frames.clear();

        tracing::debug!(
            start = node,
            recorded = self.trace.len() - recorded_before,
            truncated = self.truncated,
            "walk finished"
        );
        Ok(())
    }

    /// Returns the trace recorded so far.
    pub fn trace(&self) -> &VisitTrace {
        &self.trace
    }

    /// Consumes the walker and returns its trace.
    pub fn into_trace(self) -> VisitTrace {
        self.trace
    }

    /// Returns `true` if a bound stopped any walk before it ran out of edges.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Returns the bound applied to every walk.
    pub fn bound(&self) -> WalkBound {
        self.bound
    }

    /// Returns the graph being walked.
    pub fn graph(&self) -> &'g AdjacencyGraph {
        self.graph
    }
}

/// Walks from `start` once and returns the trace.
///
/// # Errors
/// Returns [`GraphError::NodeOutOfBounds`] if `start` is not a node.
pub fn trace_walk(
    graph: &AdjacencyGraph,
    start: usize,
    bound: WalkBound,
) -> Result<VisitTrace, GraphError> {
    let mut walker = TraceWalker::new(graph, bound);
    walker.traverse(start)?;
    Ok(walker.into_trace())
}
