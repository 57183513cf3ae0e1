// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use std::fmt::Debug;
use thiserror::Error;

/// Failure modes of graph operations and algorithms.
///
/// Lookup failures carry the offending identifier rendered with `Debug`, which
/// keeps the error type independent of the graph's node type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GraphError {
    #[error("Node {node} not found")]
    NotFound { node: String },

    #[error("Edge {from} -> {to} not found")]
    EdgeNotFound { from: String, to: String },

    /// Edge insertion referenced a missing source node.
    #[error("Edge source {node} not found")]
    SourceNotFound { node: String },

    /// Edge insertion referenced a missing target node.
    #[error("Edge target {node} not found")]
    TargetNotFound { node: String },

    #[error("Graph is not bipartite")]
    NotBipartite,

    #[error("Graph contains a cycle")]
    HasCycle,

    #[error("Graph is disconnected")]
    DisconnectedGraph,

    #[error("Negative cycle reachable from source")]
    NegativeCycle,

    #[error("Target is unreachable from source")]
    Unreachable,

    /// Degree parity or connectivity rules out an Eulerian circuit/path.
    #[error("Graph has no Eulerian {kind}")]
    NotEulerian { kind: &'static str },
}

impl GraphError {
    pub fn not_found<N: Debug>(node: &N) -> Self {
        GraphError::NotFound {
            node: format!("{node:?}"),
        }
    }

    pub fn edge_not_found<N: Debug>(from: &N, to: &N) -> Self {
        GraphError::EdgeNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub fn source_not_found<N: Debug>(node: &N) -> Self {
        GraphError::SourceNotFound {
            node: format!("{node:?}"),
        }
    }

    pub fn target_not_found<N: Debug>(node: &N) -> Self {
        GraphError::TargetNotFound {
            node: format!("{node:?}"),
        }
    }

    /// Whether this is one of the "referenced element is absent" variants.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GraphError::NotFound { .. }
                | GraphError::EdgeNotFound { .. }
                | GraphError::SourceNotFound { .. }
                | GraphError::TargetNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_render_node_ids() {
        assert_eq!(GraphError::not_found(&7).to_string(), "Node 7 not found");
        assert_eq!(
            GraphError::edge_not_found(&"a", &"b").to_string(),
            "Edge \"a\" -> \"b\" not found"
        );
        assert_eq!(
            GraphError::NotEulerian { kind: "circuit" }.to_string(),
            "Graph has no Eulerian circuit"
        );
    }

    #[test]
    fn test_not_found_family() {
        assert!(GraphError::source_not_found(&1).is_not_found());
        assert!(GraphError::target_not_found(&1).is_not_found());
        assert!(!GraphError::HasCycle.is_not_found());
    }
}
