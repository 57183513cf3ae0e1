// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Dijkstra's Shortest Path Algorithm.
//!
//! Weights are read through [`EdgeWeight`]; unit and `None` labels weigh 0.
//! Weights must be non-negative. This is not checked: with negative weights
//! the search still terminates but its distances may be wrong.

use crate::algo::algorithms::{Cost, ShortestPath, ShortestPaths};
use crate::algo::traversal::reconstruct_path;
use fungraph_collections::PriorityQueue;
use fungraph_common::{EdgeWeight, Graph, GraphError, NodeId, Result};
use fxhash::{FxHashMap, FxHashSet};
use tracing::{debug, instrument, trace};

#[derive(Debug, Clone, Default)]
pub struct DijkstraConfig {
    /// Nodes farther than this are neither expanded nor reported.
    pub max_distance: Option<f64>,
}

/// Tentative distances and predecessors left behind by [`best_first`].
pub(crate) struct Frontier<N> {
    pub(crate) dist: FxHashMap<N, f64>,
    pub(crate) pred: FxHashMap<N, N>,
}

/// Options for the best-first search shared by Dijkstra and A*.
pub(crate) struct Search<'a, N, H> {
    pub(crate) goal: Option<&'a N>,
    pub(crate) heuristic: H,
    /// Settle each node once (Dijkstra). When false a node is re-expanded
    /// whenever a cheaper route to it turns up (A*).
    pub(crate) settle_once: bool,
    pub(crate) max_distance: Option<f64>,
}

/// Best-first search from `start`, ordered by `g(n) + h(n)`.
pub(crate) fn best_first<N, L, E, H>(
    graph: &Graph<N, L, E>,
    start: &N,
    search: Search<'_, N, H>,
) -> Frontier<N>
where
    N: NodeId,
    L: Clone,
    E: Clone + EdgeWeight,
    H: Fn(&N) -> f64,
{
    let Search {
        goal,
        heuristic,
        settle_once,
        max_distance,
    } = search;

    let mut dist: FxHashMap<N, f64> = FxHashMap::default();
    let mut pred: FxHashMap<N, N> = FxHashMap::default();
    let mut settled: FxHashSet<N> = FxHashSet::default();
    let mut queue = PriorityQueue::new();

    dist.insert(start.clone(), 0.0);
    queue.push(start.clone(), Cost(heuristic(start)));

    while let Some((u, Cost(f))) = queue.pop() {
        let Some(&g) = dist.get(&u) else {
            continue;
        };
        if settle_once {
            if !settled.insert(u.clone()) {
                continue;
            }
        } else if f > g + heuristic(&u) {
            // stale entry
            continue;
        }

        if goal == Some(&u) {
            trace!(goal = ?u, distance = g, "Goal settled");
            break;
        }
        if max_distance.is_some_and(|max| g > max) {
            continue;
        }

        let Some(ctx) = graph.context(&u) else {
            continue;
        };
        for (v, edge) in ctx.out_edges().iter() {
            if settle_once && settled.contains(v) {
                continue;
            }
            let candidate = g + edge.weight();
            if dist.get(v).is_none_or(|&known| candidate < known) {
                dist.insert(v.clone(), candidate);
                pred.insert(v.clone(), u.clone());
                queue.push(v.clone(), Cost(candidate + heuristic(v)));
            }
        }
    }

    Frontier { dist, pred }
}

/// Cheapest path from `start` to `goal`.
///
/// `start == goal` returns the trivial path without searching. Fails with
/// `NotFound` for a missing endpoint and `Unreachable` when no path exists.
#[instrument(skip_all, level = "debug", fields(start = ?start, goal = ?goal))]
pub fn dijkstra<N, L, E>(graph: &Graph<N, L, E>, start: &N, goal: &N) -> Result<ShortestPath<N>>
where
    N: NodeId,
    L: Clone,
    E: Clone + EdgeWeight,
{
    graph.get_node(start)?;
    graph.get_node(goal)?;
    if start == goal {
        return Ok(ShortestPath::trivial(start.clone()));
    }

    let frontier = best_first(
        graph,
        start,
        Search {
            goal: Some(goal),
            heuristic: |_: &N| 0.0,
            settle_once: true,
            max_distance: None,
        },
    );

    let distance = frontier
        .dist
        .get(goal)
        .copied()
        .ok_or(GraphError::Unreachable)?;
    let path = reconstruct_path(|n| frontier.pred.get(n).cloned(), start, goal);
    debug!(distance, hops = path.len().saturating_sub(1), "Path found");
    Ok(ShortestPath { path, distance })
}

/// Distances and predecessors from `start` to every reachable node.
pub fn dijkstra_all<N, L, E>(graph: &Graph<N, L, E>, start: &N) -> Result<ShortestPaths<N>>
where
    N: NodeId,
    L: Clone,
    E: Clone + EdgeWeight,
{
    dijkstra_all_with(graph, start, &DijkstraConfig::default())
}

#[instrument(skip_all, level = "debug", fields(start = ?start, max_distance = ?config.max_distance))]
pub fn dijkstra_all_with<N, L, E>(
    graph: &Graph<N, L, E>,
    start: &N,
    config: &DijkstraConfig,
) -> Result<ShortestPaths<N>>
where
    N: NodeId,
    L: Clone,
    E: Clone + EdgeWeight,
{
    graph.get_node(start)?;

    let Frontier { dist, pred } = best_first(
        graph,
        start,
        Search {
            goal: None,
            heuristic: |_: &N| 0.0,
            settle_once: true,
            max_distance: config.max_distance,
        },
    );

    let within = |d: f64| config.max_distance.is_none_or(|max| d <= max);
    let distances: std::collections::BTreeMap<N, f64> =
        dist.into_iter().filter(|(_, d)| within(*d)).collect();
    let predecessors = pred
        .into_iter()
        .filter(|(node, _)| distances.contains_key(node))
        .collect();

    debug!(reached = distances.len(), "Single-source distances");
    Ok(ShortestPaths {
        source: start.clone(),
        distances,
        predecessors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_test_graph, build_weighted_graph};

    fn sample() -> Graph<u32, (), f64> {
        // 0 -> 1 (1.0), 1 -> 2 (2.0), 0 -> 2 (5.0), 2 -> 3 (1.0)
        build_weighted_graph(&[4], &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0), (2, 3, 1.0)])
    }

    #[test]
    fn test_dijkstra_weighted_path() {
        let path = dijkstra(&sample(), &0, &3).unwrap();
        assert_eq!(path.path, vec![0, 1, 2, 3]);
        assert_eq!(path.distance, 4.0);
    }

    #[test]
    fn test_dijkstra_trivial_and_errors() {
        let graph = sample();
        assert_eq!(dijkstra(&graph, &2, &2).unwrap(), ShortestPath::trivial(2));
        assert_eq!(dijkstra(&graph, &0, &4), Err(GraphError::Unreachable));
        assert_eq!(dijkstra(&graph, &3, &0), Err(GraphError::Unreachable));
        assert!(matches!(
            dijkstra(&graph, &0, &7),
            Err(GraphError::NotFound { .. })
        ));
    }

    #[test]
    fn test_unlabelled_edges_weigh_zero() {
        let graph = build_test_graph(&[], &[(1, 2), (2, 3)]);
        let path = dijkstra(&graph, &1, &3).unwrap();
        assert_eq!(path.path, vec![1, 2, 3]);
        assert_eq!(path.distance, 0.0);
    }

    #[test]
    fn test_optional_labels() {
        let graph: Graph<u32, (), Option<u32>> =
            Graph::from_edges([(1, 2, Some(4)), (2, 3, None), (1, 3, Some(5))]);
        let path = dijkstra(&graph, &1, &3).unwrap();
        assert_eq!(path.path, vec![1, 2, 3]);
        assert_eq!(path.distance, 4.0);
    }

    #[test]
    fn test_dijkstra_all() {
        let paths = dijkstra_all(&sample(), &0).unwrap();
        assert_eq!(paths.distance_to(&2), Some(3.0));
        assert_eq!(paths.distance_to(&3), Some(4.0));
        assert_eq!(paths.distance_to(&4), None);
        assert_eq!(paths.path_to(&3).unwrap().path, vec![0, 1, 2, 3]);
        assert_eq!(paths.reached(), 4);
    }

    #[test]
    fn test_max_distance_cutoff() {
        let config = DijkstraConfig {
            max_distance: Some(3.0),
        };
        let paths = dijkstra_all_with(&sample(), &0, &config).unwrap();
        assert_eq!(paths.distance_to(&2), Some(3.0));
        assert_eq!(paths.distance_to(&3), None);
        assert!(!paths.predecessors.contains_key(&3));
    }

    #[test]
    fn test_negative_cycle_terminates() {
        let graph = build_weighted_graph(&[], &[(1, 2, 1.0), (2, 1, -5.0), (2, 3, 1.0)]);
        assert!(dijkstra(&graph, &1, &3).is_ok());
    }
}
