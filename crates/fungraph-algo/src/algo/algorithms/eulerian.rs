// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Eulerian circuits and paths (Hierholzer's algorithm).
//!
//! Edges are read as undirected: antiparallel edges form one undirected edge
//! and a self-loop is one edge adding two to its node's degree. A graph with
//! no edges has neither a circuit nor a path.

use crate::algo::algorithms::undirected_degree;
use crate::algo::traversal::{Bfs, BfsConfig, Direction};
use fungraph_common::{Graph, GraphError, NodeId, Result};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

struct DegreeSummary<N> {
    /// Smallest node with at least one edge.
    first_edge_node: Option<N>,
    /// Nodes of odd undirected degree, ascending.
    odd: Vec<N>,
    edge_nodes: usize,
}

fn summarize<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> DegreeSummary<N> {
    let mut summary = DegreeSummary {
        first_edge_node: None,
        odd: Vec::new(),
        edge_nodes: 0,
    };
    for id in graph.node_ids() {
        let degree = undirected_degree(graph, id).unwrap_or(0);
        if degree == 0 {
            continue;
        }
        summary.edge_nodes += 1;
        if summary.first_edge_node.is_none() {
            summary.first_edge_node = Some(id.clone());
        }
        if degree % 2 == 1 {
            summary.odd.push(id.clone());
        }
    }
    summary
}

/// Every edge-bearing node is reachable from `start`, ignoring direction.
fn edges_connected<N: NodeId, L: Clone, E: Clone>(
    graph: &Graph<N, L, E>,
    start: &N,
    edge_nodes: usize,
) -> bool {
    let config = BfsConfig {
        direction: Direction::Both,
        max_depth: None,
    };
    // isolated nodes are never reached, so the walk covers only edge nodes
    match Bfs::new(graph, start, config) {
        Ok(walk) => walk.count() == edge_nodes,
        Err(_) => false,
    }
}

fn check<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>, max_odd: usize) -> Option<N> {
    let summary = summarize(graph);
    let first = summary.first_edge_node?;
    if summary.odd.len() > max_odd || !edges_connected(graph, &first, summary.edge_nodes) {
        return None;
    }
    // a path starts at an odd node when there is one
    Some(summary.odd.into_iter().next().unwrap_or(first))
}

/// True if some closed walk uses every edge exactly once: edge-bearing nodes
/// are connected and every degree is even.
pub fn has_eulerian_circuit<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> bool {
    check(graph, 0).is_some()
}

/// True if some walk uses every edge exactly once: edge-bearing nodes are
/// connected and zero or two degrees are odd.
pub fn has_eulerian_path<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> bool {
    check(graph, 2).is_some()
}

/// Closed walk using every undirected edge once, first node repeated at the
/// end. Fails with `NotEulerian` when no circuit exists.
#[instrument(skip_all, level = "debug", fields(nodes = graph.size()))]
pub fn find_eulerian_circuit<N: NodeId, L: Clone, E: Clone>(
    graph: &Graph<N, L, E>,
) -> Result<Vec<N>> {
    let start = check(graph, 0).ok_or(GraphError::NotEulerian { kind: "circuit" })?;
    Ok(hierholzer(graph, start))
}

/// Walk using every undirected edge once. Starts at the smallest odd-degree
/// node if there is one. Fails with `NotEulerian` when no path exists.
#[instrument(skip_all, level = "debug", fields(nodes = graph.size()))]
pub fn find_eulerian_path<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> Result<Vec<N>> {
    let start = check(graph, 2).ok_or(GraphError::NotEulerian { kind: "path" })?;
    Ok(hierholzer(graph, start))
}

fn hierholzer<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>, start: N) -> Vec<N> {
    // working copy, each list descending so pop() yields the smallest neighbor
    let mut adjacency: BTreeMap<N, Vec<N>> = graph
        .nodes()
        .map(|ctx| {
            let mut neighbors: Vec<N> = ctx.neighbors().into_iter().cloned().collect();
            neighbors.reverse();
            (ctx.id().clone(), neighbors)
        })
        .collect();

    let mut stack = vec![start];
    let mut walk = Vec::new();

    while let Some(top) = stack.last().cloned() {
        match adjacency.get_mut(&top).and_then(Vec::pop) {
            Some(next) => {
                // consume the mirror entry as well
                if next != top
                    && let Some(back) = adjacency.get_mut(&next)
                    && let Some(pos) = back.iter().position(|n| *n == top)
                {
                    back.remove(pos);
                }
                stack.push(next);
            }
            None => {
                stack.pop();
                walk.push(top);
            }
        }
    }

    walk.reverse();
    debug!(len = walk.len(), "Eulerian walk built");
    walk
}
