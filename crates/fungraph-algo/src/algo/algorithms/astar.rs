// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! A* Search Algorithm.

use crate::algo::algorithms::ShortestPath;
use crate::algo::algorithms::dijkstra::{Frontier, Search, best_first};
use crate::algo::traversal::reconstruct_path;
use fungraph_common::{EdgeWeight, Graph, GraphError, NodeId, Result};
use tracing::{debug, instrument};

/// Cheapest path from `start` to `goal`, guided by `heuristic`.
///
/// The queue is ordered by `g(n) + heuristic(n)`. The result is optimal when
/// the heuristic never overestimates the remaining cost; that is up to the
/// caller and is not checked. A zero heuristic behaves like Dijkstra.
#[instrument(skip_all, level = "debug", fields(start = ?start, goal = ?goal))]
pub fn astar<N, L, E, H>(
    graph: &Graph<N, L, E>,
    start: &N,
    goal: &N,
    heuristic: H,
) -> Result<ShortestPath<N>>
where
    N: NodeId,
    L: Clone,
    E: Clone + EdgeWeight,
    H: Fn(&N) -> f64,
{
    graph.get_node(start)?;
    graph.get_node(goal)?;
    if start == goal {
        return Ok(ShortestPath::trivial(start.clone()));
    }

    let Frontier { dist, pred } = best_first(
        graph,
        start,
        Search {
            goal: Some(goal),
            heuristic,
            settle_once: false,
            max_distance: None,
        },
    );

    let distance = dist.get(goal).copied().ok_or(GraphError::Unreachable)?;
    let path = reconstruct_path(|n| pred.get(n).cloned(), start, goal);
    debug!(distance, expanded = dist.len(), "Path found");
    Ok(ShortestPath { path, distance })
}
