// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Bellman-Ford Algorithm.
//!
//! Handles negative edge weights and reports a negative cycle reachable from
//! the source instead of returning distances.

use crate::algo::IdMap;
use crate::algo::algorithms::{ShortestPath, ShortestPaths};
use fungraph_common::{EdgeWeight, Graph, GraphError, NodeId, Result};
use tracing::{debug, instrument, warn};

/// Distances and predecessors from `start` to every reachable node.
///
/// Relaxes every edge up to `|V| - 1` times, stopping early once a round
/// changes nothing, then makes one more pass: if any distance still
/// improves, fails with `NegativeCycle`.
#[instrument(skip_all, level = "debug", fields(start = ?start, nodes = graph.size()))]
pub fn bellman_ford_all<N, L, E>(graph: &Graph<N, L, E>, start: &N) -> Result<ShortestPaths<N>>
where
    N: NodeId,
    L: Clone,
    E: Clone + EdgeWeight,
{
    let ids = IdMap::from_graph(graph);
    let source = ids.to_slot(start).ok_or_else(|| GraphError::not_found(start))? as usize;

    let mut edges = Vec::with_capacity(graph.edge_count());
    for (from, to, label) in graph.edges() {
        if let (Some(u), Some(v)) = (ids.to_slot(from), ids.to_slot(to)) {
            edges.push((u as usize, v as usize, label.weight()));
        }
    }

    let n = ids.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    dist[source] = 0.0;

    let mut rounds = 0;
    for _ in 1..n {
        rounds += 1;
        let mut changed = false;
        for &(u, v, w) in &edges {
            if dist[u] == f64::INFINITY {
                continue;
            }
            let candidate = dist[u] + w;
            if candidate < dist[v] {
                dist[v] = candidate;
                prev[v] = Some(u);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    debug!(rounds, edges = edges.len(), "Relaxation finished");

    let improvable = edges
        .iter()
        .any(|&(u, v, w)| dist[u] != f64::INFINITY && dist[u] + w < dist[v]);
    if improvable {
        warn!("Negative cycle reachable from source");
        return Err(GraphError::NegativeCycle);
    }

    let mut paths = ShortestPaths {
        source: start.clone(),
        distances: Default::default(),
        predecessors: Default::default(),
    };
    for (slot, id) in ids.iter() {
        let slot = slot as usize;
        if dist[slot] == f64::INFINITY {
            continue;
        }
        paths.distances.insert(id.clone(), dist[slot]);
        if let Some(p) = prev[slot] {
            paths
                .predecessors
                .insert(id.clone(), ids.to_id_unchecked(p as u32).clone());
        }
    }
    Ok(paths)
}

/// Cheapest path from `start` to `goal` under arbitrary weights.
///
/// Fails with `NegativeCycle` if one is reachable from `start`, otherwise
/// with `Unreachable` when `goal` cannot be reached.
pub fn bellman_ford<N, L, E>(graph: &Graph<N, L, E>, start: &N, goal: &N) -> Result<ShortestPath<N>>
where
    N: NodeId,
    L: Clone,
    E: Clone + EdgeWeight,
{
    graph.get_node(goal)?;
    bellman_ford_all(graph, start)?
        .path_to(goal)
        .ok_or(GraphError::Unreachable)
}
