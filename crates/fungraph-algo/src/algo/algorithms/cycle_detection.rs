// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Cycle detection for directed and undirected readings of a graph.

use crate::algo::algorithms::{ColoredDfs, colored_dfs};
use fungraph_common::{Graph, NodeId};
use fxhash::FxHashSet;
use tracing::{instrument, trace};

/// True if some back edge reaches a node still on the DFS stack.
pub fn has_cycle_directed<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> bool {
    find_cycle(graph).is_some()
}

/// The first directed cycle found, as a closed node sequence
/// (`first == last`). A self-loop on `u` is reported as `[u, u]`.
#[instrument(skip_all, level = "debug", fields(nodes = graph.size()))]
pub fn find_cycle<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> Option<Vec<N>> {
    match colored_dfs(graph) {
        ColoredDfs::Cycle(cycle) => Some(cycle),
        ColoredDfs::Acyclic(_) => None,
    }
}

pub fn is_dag<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> bool {
    !has_cycle_directed(graph)
}

/// Cycle check treating every edge as undirected.
///
/// `u -> v` together with `v -> u` is one undirected edge and does not form
/// a cycle on its own; a self-loop does.
#[instrument(skip_all, level = "debug", fields(nodes = graph.size()))]
pub fn has_cycle_undirected<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> bool {
    let mut visited: FxHashSet<N> = FxHashSet::default();

    for root in graph.node_ids() {
        if !visited.insert(root.clone()) {
            continue;
        }

        let mut stack: Vec<(N, Option<N>)> = vec![(root.clone(), None)];
        while let Some((node, parent)) = stack.pop() {
            let Some(ctx) = graph.context(&node) else {
                continue;
            };
            if ctx.has_self_loop() {
                trace!(node = ?node, "Self-loop");
                return true;
            }
            for next in ctx.neighbors() {
                if parent.as_ref() == Some(next) {
                    continue;
                }
                // marked on push: a marked non-parent neighbor closes a cycle
                if !visited.insert(next.clone()) {
                    trace!(from = ?node, to = ?next, "Non-tree edge");
                    return true;
                }
                stack.push((next.clone(), Some(node.clone())));
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::build_test_graph;

    #[test]
    fn test_directed_cycle() {
        let graph = build_test_graph(&[1, 2, 3], &[(1, 2), (2, 3), (3, 1)]);
        assert!(has_cycle_directed(&graph));
        assert!(!is_dag(&graph));
        assert_eq!(find_cycle(&graph), Some(vec![1, 2, 3, 1]));
    }

    #[test]
    fn test_directed_acyclic() {
        // diamond: no directed cycle, but one undirected cycle
        let graph = build_test_graph(&[], &[(1, 2), (1, 3), (2, 4), (3, 4)]);
        assert!(!has_cycle_directed(&graph));
        assert!(is_dag(&graph));
        assert_eq!(find_cycle(&graph), None);
        assert!(has_cycle_undirected(&graph));
    }

    #[test]
    fn test_self_loop() {
        let graph = build_test_graph(&[], &[(1, 2), (2, 2)]);
        assert_eq!(find_cycle(&graph), Some(vec![2, 2]));
        assert!(has_cycle_undirected(&graph));
    }

    #[test]
    fn test_undirected_path_is_acyclic() {
        let graph = build_test_graph(&[], &[(1, 2), (3, 2), (3, 4)]);
        assert!(!has_cycle_undirected(&graph));
    }

    #[test]
    fn test_antiparallel_pair_is_not_undirected_cycle() {
        let graph = build_test_graph(&[], &[(1, 2), (2, 1)]);
        assert!(has_cycle_directed(&graph));
        assert!(!has_cycle_undirected(&graph));
    }

    #[test]
    fn test_undirected_cycle_in_second_component() {
        let graph = build_test_graph(&[0], &[(5, 6), (6, 7), (7, 5)]);
        assert!(has_cycle_undirected(&graph));
    }

    #[test]
    fn test_empty_graph() {
        let graph = build_test_graph(&[], &[]);
        assert!(is_dag(&graph));
        assert!(!has_cycle_undirected(&graph));
    }
}
