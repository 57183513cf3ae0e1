// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Connected Components (edges read as undirected).

use crate::algo::traversal::{Bfs, BfsConfig, Direction};
use fungraph_common::{Graph, NodeId, Result};
use fxhash::FxHashSet;
use tracing::{debug, instrument};

fn undirected() -> BfsConfig {
    BfsConfig {
        direction: Direction::Both,
        max_depth: None,
    }
}

/// Partition the nodes into connected components.
///
/// Components are ordered by their smallest node and each is sorted, so
/// the result is a deterministic, complete, non-overlapping partition.
#[instrument(skip_all, level = "debug", fields(nodes = graph.size()))]
pub fn connected_components<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> Vec<Vec<N>> {
    let mut seen: FxHashSet<N> = FxHashSet::default();
    let mut components = Vec::new();

    for root in graph.node_ids() {
        if seen.contains(root) {
            continue;
        }
        let Ok(walk) = Bfs::new(graph, root, undirected()) else {
            continue;
        };
        let mut component: Vec<N> = walk.map(|(node, _)| node).collect();
        component.sort_unstable();
        seen.extend(component.iter().cloned());
        components.push(component);
    }

    debug!(count = components.len(), "Connected components");
    components
}

/// Sorted members of the component containing `id`.
pub fn component_of<N: NodeId, L: Clone, E: Clone>(
    graph: &Graph<N, L, E>,
    id: &N,
) -> Result<Vec<N>> {
    let mut component: Vec<N> = Bfs::new(graph, id, undirected())?
        .map(|(node, _)| node)
        .collect();
    component.sort_unstable();
    Ok(component)
}

/// Whether `a` and `b` are joined by some undirected path.
pub fn same_component<N: NodeId, L: Clone, E: Clone>(
    graph: &Graph<N, L, E>,
    a: &N,
    b: &N,
) -> Result<bool> {
    graph.get_node(b)?;
    Ok(Bfs::new(graph, a, undirected())?.any(|(node, _)| node == *b))
}

pub fn component_count<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> usize {
    connected_components(graph).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::build_test_graph;
    use fungraph_common::GraphError;

    #[test]
    fn test_wcc_partition() {
        // 1 -> 2 <- 3, 4 -> 5, 6 alone
        let graph = build_test_graph(&[6], &[(1, 2), (3, 2), (5, 4)]);
        let components = connected_components(&graph);
        assert_eq!(components, vec![vec![1, 2, 3], vec![4, 5], vec![6]]);
        assert_eq!(component_count(&graph), 3);
    }

    #[test]
    fn test_membership() {
        let graph = build_test_graph(&[6], &[(1, 2), (3, 2), (5, 4)]);
        assert_eq!(component_of(&graph, &3).unwrap(), vec![1, 2, 3]);
        assert!(same_component(&graph, &1, &3).unwrap());
        assert!(!same_component(&graph, &1, &4).unwrap());
        assert!(matches!(
            same_component(&graph, &1, &9),
            Err(GraphError::NotFound { .. })
        ));
        assert!(component_of(&graph, &9).is_err());
    }

    #[test]
    fn test_empty_graph() {
        let graph = build_test_graph(&[], &[]);
        assert!(connected_components(&graph).is_empty());
        assert_eq!(component_count(&graph), 0);
    }
}
