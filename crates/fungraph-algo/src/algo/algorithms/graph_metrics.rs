// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Structural counts and undirected shape checks.

use crate::algo::algorithms::has_cycle_undirected;
use crate::algo::traversal::{Bfs, BfsConfig, Direction};
use fungraph_common::{Graph, NodeId, Result};

pub fn node_count<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> usize {
    graph.size()
}

/// Number of distinct undirected edges.
///
/// `u -> v` and `v -> u` count once; a self-loop counts once.
pub fn edge_count<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> usize {
    graph.fold_nodes(0, |acc, ctx| {
        acc + ctx
            .neighbors()
            .into_iter()
            .filter(|other| *other >= ctx.id())
            .count()
    })
}

/// Undirected degree of `id`: distinct neighbors, plus two for a self-loop.
pub fn undirected_degree<N: NodeId, L: Clone, E: Clone>(
    graph: &Graph<N, L, E>,
    id: &N,
) -> Result<usize> {
    let ctx = graph.get_node(id)?;
    let others = ctx.neighbors().into_iter().filter(|n| *n != id).count();
    Ok(if ctx.has_self_loop() { others + 2 } else { others })
}

/// True if every node reaches every other ignoring edge direction.
/// The empty graph is connected.
pub fn is_connected<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> bool {
    let Some(first) = graph.node_ids().next() else {
        return true;
    };
    let config = BfsConfig {
        direction: Direction::Both,
        max_depth: None,
    };
    match Bfs::new(graph, first, config) {
        Ok(walk) => walk.count() == graph.size(),
        Err(_) => false,
    }
}

/// Undirected tree: `edges == nodes - 1`, connected and acyclic. Graphs with
/// zero or one node are trees.
pub fn is_tree<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> bool {
    let n = graph.size();
    if n <= 1 {
        return true;
    }
    edge_count(graph) == n - 1 && is_connected(graph) && !has_cycle_undirected(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::build_test_graph;

    #[test]
    fn test_counts() {
        let graph = build_test_graph(&[9], &[(1, 2), (2, 1), (2, 3), (3, 3)]);
        assert_eq!(node_count(&graph), 4);
        // {1,2}, {2,3}, {3,3}
        assert_eq!(edge_count(&graph), 3);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_undirected_degree() {
        let graph = build_test_graph(&[9], &[(1, 2), (2, 1), (2, 3), (3, 3)]);
        assert_eq!(undirected_degree(&graph, &1).unwrap(), 1);
        assert_eq!(undirected_degree(&graph, &2).unwrap(), 2);
        assert_eq!(undirected_degree(&graph, &3).unwrap(), 3);
        assert_eq!(undirected_degree(&graph, &9).unwrap(), 0);
        assert!(undirected_degree(&graph, &4).is_err());
    }

    #[test]
    fn test_is_connected_ignores_direction() {
        let graph = build_test_graph(&[], &[(1, 2), (3, 2)]);
        assert!(is_connected(&graph));
        assert!(!is_connected(&graph.ensure_node(4)));
        assert!(is_connected(&build_test_graph(&[], &[])));
    }

    #[test]
    fn test_is_tree() {
        let star = build_test_graph(&[], &[(1, 2), (1, 3), (4, 1)]);
        assert!(is_tree(&star));

        let triangle = build_test_graph(&[], &[(1, 2), (2, 3), (3, 1)]);
        assert!(!is_tree(&triangle));

        let forest = build_test_graph(&[], &[(1, 2), (3, 4)]);
        assert!(!is_tree(&forest));

        assert!(is_tree(&build_test_graph(&[], &[])));
        assert!(is_tree(&build_test_graph(&[5], &[])));
    }

    #[test]
    fn test_bidirectional_path_is_tree() {
        let graph = build_test_graph(&[], &[(1, 2), (2, 1), (2, 3), (3, 2)]);
        assert!(is_tree(&graph));
    }
}
