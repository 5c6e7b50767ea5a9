//! The entry protocol: read a node count, build the self-loop graph, walk from node 0.

use std::io::BufRead;

use serde::Serialize;

use crate::config::{OutputFormat, WalkConfig, WalkMode};
use crate::error::{GraphError, RunError};
use crate::graph::{AdjacencyGraph, Dfs, TraceWalker, VisitTrace};
use crate::input::read_node_count;

/// Node every run starts from.
pub const ENTRY_NODE: usize = 0;

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkReport {
    /// Number of nodes the graph was built with.
    pub node_count: usize,
    /// Traversal semantics used.
    pub mode: WalkMode,
    /// Targets of the followed edges, in order.
    pub trace: VisitTrace,
    /// `true` if the bound cut the walk short.
    pub truncated: bool,
}

impl WalkReport {
    /// Formats the report for output.
    ///
    /// # Errors
    /// Returns the serializer error if JSON encoding fails.
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Plain => Ok(self.trace.to_string()),
            OutputFormat::Json => serde_json::to_string(self),
        }
    }
}

/// Walks `graph` from [`ENTRY_NODE`] as configured.
///
/// An empty graph has no entry node, so nothing is walked and the trace is
/// empty. In visited mode the trace holds every node discovered after the
/// entry node, in preorder, which are exactly the targets of the tree edges.
///
/// # Errors
/// Returns [`GraphError::NodeOutOfBounds`] if the walk leaves the graph.
pub fn walk_graph(graph: &AdjacencyGraph, config: &WalkConfig) -> Result<WalkReport, GraphError> {
    let node_count = graph.node_count();
    if graph.is_empty() {
        tracing::debug!("empty graph, skipping traversal");
        return Ok(WalkReport {
            node_count,
            mode: config.mode,
            trace: VisitTrace::new(),
            truncated: false,
        });
    }

    let (trace, truncated) = match config.mode {
        WalkMode::Literal => {
            if config.bound.is_unbounded() {
                tracing::warn!("literal walk without a bound does not finish on cyclic graphs");
            }
            let mut walker = TraceWalker::new(graph, config.bound);
            walker.traverse(ENTRY_NODE)?;
            let truncated = walker.is_truncated();
            (walker.into_trace(), truncated)
        }
        WalkMode::Visited => {
            let order: Vec<usize> = Dfs::try_new(graph, ENTRY_NODE)?.skip(1).collect();
            (VisitTrace::from(order), false)
        }
    };

    tracing::info!(
        node_count,
        mode = ?config.mode,
        trace_len = trace.len(),
        truncated,
        "traversal complete"
    );
    Ok(WalkReport {
        node_count,
        mode: config.mode,
        trace,
        truncated,
    })
}

/// Runs the entry protocol over `input`.
///
/// A stream that holds no integer, or a negative one, is treated as a
/// count of zero.
///
/// # Errors
/// Returns [`RunError::Input`] if reading the stream fails, and
/// [`RunError::Graph`] if the walk leaves the graph.
pub fn run<R: BufRead>(input: &mut R, config: &WalkConfig) -> Result<WalkReport, RunError> {
    let node_count = match read_node_count(input) {
        Ok(count) => count,
        Err(err) if err.is_malformed() => {
            tracing::warn!(error = %err, "treating node count as 0");
            0
        }
        Err(err) => return Err(err.into()),
    };

    let graph = AdjacencyGraph::with_self_loops(node_count);
    Ok(walk_graph(&graph, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WalkBound;
    use std::io::Cursor;

    fn literal(bound: WalkBound) -> WalkConfig {
        WalkConfig {
            bound,
            ..WalkConfig::default()
        }
    }

    #[test]
    fn zero_nodes_skips_traversal() {
        let report = run(&mut Cursor::new("0"), &WalkConfig::default()).unwrap();
        assert_eq!(report.node_count, 0);
        assert!(report.trace.is_empty());
        assert!(!report.truncated);
    }

    #[test]
    fn three_nodes_depth_five() {
        let report = run(&mut Cursor::new("3\n"), &literal(WalkBound::depth(5))).unwrap();
        assert_eq!(report.node_count, 3);
        assert_eq!(report.trace.as_slice(), &[0, 0, 0, 0, 0]);
        assert!(report.truncated);
    }

    #[test]
    fn garbage_input_behaves_like_zero() {
        for input in ["abc", "", "   ", "-5"] {
            let report = run(&mut Cursor::new(input), &WalkConfig::default()).unwrap();
            assert_eq!(report.node_count, 0, "input {input:?}");
            assert!(report.trace.is_empty());
        }
    }

    #[test]
    fn out_of_range_counts_behave_like_zero() {
        for input in ["9223372036854775807", "2147483648"] {
            let report = run(&mut Cursor::new(input), &WalkConfig::default()).unwrap();
            assert_eq!(report.node_count, 0, "input {input:?}");
            assert!(report.trace.is_empty());
        }
    }

    #[test]
    fn visited_mode_finishes_with_empty_trace_on_self_loops() {
        let config = WalkConfig {
            mode: WalkMode::Visited,
            ..WalkConfig::default()
        };
        let report = run(&mut Cursor::new("4"), &config).unwrap();
        assert_eq!(report.node_count, 4);
        assert!(report.trace.is_empty());
        assert!(!report.truncated);
    }

    #[test]
    fn visited_mode_records_tree_edge_targets() {
        let graph = AdjacencyGraph::from_adjacency(vec![vec![2, 1], vec![0], vec![1]]).unwrap();
        let config = WalkConfig {
            mode: WalkMode::Visited,
            ..WalkConfig::default()
        };
        let report = walk_graph(&graph, &config).unwrap();
        assert_eq!(report.trace.as_slice(), &[2, 1]);
    }

    #[test]
    fn render_formats() {
        let report = WalkReport {
            node_count: 2,
            mode: WalkMode::Literal,
            trace: VisitTrace::from(vec![0, 0]),
            truncated: true,
        };
        assert_eq!(report.render(OutputFormat::Plain).unwrap(), "0 0");
        assert_eq!(
            report.render(OutputFormat::Json).unwrap(),
            r#"{"node_count":2,"mode":"literal","trace":[0,0],"truncated":true}"#
        );
    }
}
