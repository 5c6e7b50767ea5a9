//! Error types for graph construction, traversal, input parsing and configuration.

use core::fmt;
use std::io;

/// Errors raised by graph construction and traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A node index was not in `0..node_count`.
    NodeOutOfBounds {
        /// The offending index.
        node: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// An edge endpoint was not in `0..node_count`.
    EdgeOutOfBounds {
        /// Source of the rejected edge.
        from: usize,
        /// Target of the rejected edge.
        to: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NodeOutOfBounds { node, node_count } => {
                write!(f, "node {node} out of bounds for n={node_count}")
            }
            Self::EdgeOutOfBounds { from, to, node_count } => {
                write!(f, "edge {from}->{to} out of bounds for n={node_count}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Errors raised while reading the node count.
#[derive(Debug)]
pub enum InputError {
    /// The underlying reader failed.
    Io(io::Error),
    /// The stream held no token at all.
    Empty,
    /// The first token is not an integer.
    NotAnInteger(String),
    /// The first token is a negative integer.
    Negative(i64),
}

impl InputError {
    /// Returns `true` for errors caused by the stream content rather than the reader.
    ///
    /// These are the cases the entry protocol tolerates by treating the count as zero.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read node count: {err}"),
            Self::Empty => f.write_str("input holds no node count"),
            Self::NotAnInteger(token) => write!(f, "node count {token:?} is not an integer"),
            Self::Negative(value) => write!(f, "node count {value} is negative"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Errors raised while loading a [`WalkConfig`](crate::config::WalkConfig).
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io(io::Error),
    /// The config file is not valid JSON for a `WalkConfig`.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Errors that end a run of the entry protocol.
#[derive(Debug)]
pub enum RunError {
    /// The node count could not be read from the stream.
    Input(InputError),
    /// The traversal touched a node outside the graph.
    Graph(GraphError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(err) => fmt::Display::fmt(err, f),
            Self::Graph(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(err) => std::error::Error::source(err),
            Self::Graph(_) => None,
        }
    }
}

impl From<InputError> for RunError {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}

impl From<GraphError> for RunError {
    fn from(err: GraphError) -> Self {
        Self::Graph(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_error_messages_name_the_bounds() {
        let err = GraphError::NodeOutOfBounds { node: 4, node_count: 3 };
        assert_eq!(err.to_string(), "node 4 out of bounds for n=3");

        let err = GraphError::EdgeOutOfBounds { from: 0, to: 9, node_count: 2 };
        assert_eq!(err.to_string(), "edge 0->9 out of bounds for n=2");
    }

    #[test]
    fn only_io_input_errors_are_fatal() {
        assert!(InputError::Empty.is_malformed());
        assert!(InputError::NotAnInteger("x".into()).is_malformed());
        assert!(InputError::Negative(-1).is_malformed());
        assert!(!InputError::Io(io::Error::new(io::ErrorKind::Other, "boom")).is_malformed());
    }
}
