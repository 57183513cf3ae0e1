// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Minimum Spanning Tree (Kruskal and Prim).
//!
//! Both read the directed graph as an undirected one: `u -> v` and `v -> u`
//! form one edge weighing the cheaper of the two labels, and self-loops are
//! ignored.

use crate::algo::IdMap;
use crate::algo::algorithms::{Cost, SpanningTree};
use fungraph_collections::{DisjointSet, PriorityQueue};
use fungraph_common::{Context, EdgeWeight, Graph, GraphError, NodeId, Result};
use fxhash::FxHashSet;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct PrimConfig<N> {
    /// Node to grow the tree from. Defaults to the smallest node id.
    pub start: Option<N>,
}

impl<N> Default for PrimConfig<N> {
    fn default() -> Self {
        Self { start: None }
    }
}

/// Distinct undirected edges `(u, v, weight)` with `u < v`, ordered by
/// `(u, v)`.
fn undirected_edges<N, L, E>(graph: &Graph<N, L, E>) -> Vec<(N, N, f64)>
where
    N: NodeId,
    L: Clone,
    E: Clone + EdgeWeight,
{
    let mut cheapest: BTreeMap<(N, N), f64> = BTreeMap::new();
    for (from, to, label) in graph.edges() {
        if from == to {
            continue;
        }
        let key = if from < to {
            (from.clone(), to.clone())
        } else {
            (to.clone(), from.clone())
        };
        let weight = label.weight();
        cheapest
            .entry(key)
            .and_modify(|w| *w = w.min(weight))
            .or_insert(weight);
    }
    cheapest.into_iter().map(|((u, v), w)| (u, v, w)).collect()
}

/// Kruskal's algorithm.
///
/// Edges are taken by ascending weight, ties by `(u, v)`; an edge joining two
/// nodes already in one tree is rejected. Stops once `|V| - 1` edges are in.
/// Fails with `DisconnectedGraph` if fewer can be found.
#[instrument(skip_all, level = "debug", fields(nodes = graph.size()))]
pub fn kruskal<N, L, E>(graph: &Graph<N, L, E>) -> Result<SpanningTree<N>>
where
    N: NodeId,
    L: Clone,
    E: Clone + EdgeWeight,
{
    let n = graph.size();
    if n <= 1 {
        return Ok(SpanningTree::with_capacity(0));
    }

    let mut edges = undirected_edges(graph);
    // stable: equal weights keep (u, v) order
    edges.sort_by(|a, b| a.2.total_cmp(&b.2));

    let ids = IdMap::from_graph(graph);
    let mut forest = DisjointSet::new(n);
    let mut tree = SpanningTree::with_capacity(n - 1);

    for (u, v, weight) in edges {
        let (Some(a), Some(b)) = (ids.to_slot(&u), ids.to_slot(&v)) else {
            continue;
        };
        if forest.union(a as usize, b as usize) {
            tree.push(u, v, weight);
            if tree.len() == n - 1 {
                break;
            }
        }
    }

    if tree.len() < n - 1 {
        debug!(accepted = tree.len(), needed = n - 1, "Graph is disconnected");
        return Err(GraphError::DisconnectedGraph);
    }
    debug!(total_weight = tree.total_weight, "Spanning tree built");
    Ok(tree)
}

/// Cheaper of the two directed labels between `ctx` and `other`.
fn undirected_weight<N, L, E>(ctx: &Context<N, L, E>, other: &N) -> Option<f64>
where
    N: NodeId,
    L: Clone,
    E: Clone + EdgeWeight,
{
    let out = ctx.out_edges().get(other).map(EdgeWeight::weight);
    let inc = ctx.in_edges().get(other).map(EdgeWeight::weight);
    match (out, inc) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Add `ctx` to the tree and queue its edges to nodes outside it.
fn push_frontier<N, L, E>(
    ctx: &Context<N, L, E>,
    in_tree: &mut FxHashSet<N>,
    queue: &mut PriorityQueue<(N, N), Cost>,
) where
    N: NodeId,
    L: Clone,
    E: Clone + EdgeWeight,
{
    in_tree.insert(ctx.id().clone());
    for other in ctx.neighbors() {
        if in_tree.contains(other) {
            continue;
        }
        if let Some(weight) = undirected_weight(ctx, other) {
            queue.push((ctx.id().clone(), other.clone()), Cost(weight));
        }
    }
}

/// Prim's algorithm from `start`, or from the smallest node id.
pub fn prim<N, L, E>(graph: &Graph<N, L, E>, start: Option<&N>) -> Result<SpanningTree<N>>
where
    N: NodeId,
    L: Clone,
    E: Clone + EdgeWeight,
{
    prim_with(
        graph,
        &PrimConfig {
            start: start.cloned(),
        },
    )
}

/// Prim's algorithm.
///
/// Repeatedly takes the cheapest edge leaving the tree. Edges are reported
/// as `(tree node, new node, weight)`. Fails with `NotFound` for a missing
/// start node and with `DisconnectedGraph` if the queue runs dry before
/// every node is in the tree.
#[instrument(skip_all, level = "debug", fields(nodes = graph.size(), start = ?config.start))]
pub fn prim_with<N, L, E>(graph: &Graph<N, L, E>, config: &PrimConfig<N>) -> Result<SpanningTree<N>>
where
    N: NodeId,
    L: Clone,
    E: Clone + EdgeWeight,
{
    let n = graph.size();
    let root = match &config.start {
        Some(start) => graph.get_node(start)?,
        None => match graph.nodes().next() {
            Some(ctx) => ctx,
            None => return Ok(SpanningTree::with_capacity(0)),
        },
    };

    let mut in_tree: FxHashSet<N> = FxHashSet::default();
    let mut queue: PriorityQueue<(N, N), Cost> = PriorityQueue::new();
    let mut tree = SpanningTree::with_capacity(n.saturating_sub(1));

    push_frontier(root, &mut in_tree, &mut queue);

    while in_tree.len() < n {
        let Some(((from, to), Cost(weight))) = queue.pop() else {
            break;
        };
        if in_tree.contains(&to) {
            continue;
        }
        let Some(ctx) = graph.context(&to) else {
            continue;
        };
        tree.push(from, to, weight);
        push_frontier(ctx, &mut in_tree, &mut queue);
    }

    if in_tree.len() < n {
        debug!(reached = in_tree.len(), nodes = n, "Graph is disconnected");
        return Err(GraphError::DisconnectedGraph);
    }
    debug!(total_weight = tree.total_weight, "Spanning tree built");
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_test_graph, build_undirected_graph, build_weighted_graph};

    #[test]
    fn test_triangle() {
        let graph = build_weighted_graph(&[1, 2, 3], &[(1, 2, 1.0), (2, 3, 2.0), (1, 3, 3.0)]);

        let k = kruskal(&graph).unwrap();
        assert_eq!(k.total_weight, 3.0);
        assert_eq!(k.edges, vec![(1, 2, 1.0), (2, 3, 2.0)]);

        let p = prim(&graph, None).unwrap();
        assert_eq!(p.total_weight, 3.0);
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn test_disconnected() {
        let graph = build_weighted_graph(&[1, 2], &[]);
        assert_eq!(kruskal(&graph), Err(GraphError::DisconnectedGraph));
        assert_eq!(prim(&graph, None), Err(GraphError::DisconnectedGraph));
    }

    #[test]
    fn test_antiparallel_edges_use_cheaper_weight() {
        let graph = build_weighted_graph(&[], &[(1, 2, 5.0), (2, 1, 2.0), (2, 3, 1.0), (3, 3, -9.0)]);
        assert_eq!(undirected_edges(&graph), vec![(1, 2, 2.0), (2, 3, 1.0)]);
        assert_eq!(kruskal(&graph).unwrap().total_weight, 3.0);
        assert_eq!(prim(&graph, Some(&3)).unwrap().total_weight, 3.0);
    }

    #[test]
    fn test_prim_reports_tree_edges_outward() {
        let graph = build_undirected_graph(&[], &[(0, 1, 4.0), (0, 2, 1.0), (2, 1, 2.0), (1, 3, 5.0), (2, 3, 8.0)]);
        let config = PrimConfig { start: Some(0) };
        let tree = prim_with(&graph, &config).unwrap();
        assert_eq!(tree.edges, vec![(0, 2, 1.0), (2, 1, 2.0), (1, 3, 5.0)]);
        assert_eq!(kruskal(&graph).unwrap().total_weight, tree.total_weight);
    }

    #[test]
    fn test_prim_missing_start() {
        let graph = build_weighted_graph(&[], &[(0, 1, 1.0)]);
        assert!(matches!(
            prim(&graph, Some(&7)),
            Err(GraphError::NotFound { .. })
        ));
    }

    #[test]
    fn test_trivial_graphs() {
        let empty = build_weighted_graph(&[], &[]);
        assert!(kruskal(&empty).unwrap().is_empty());
        assert!(prim(&empty, None).unwrap().is_empty());

        let single = build_test_graph(&[4], &[]);
        assert!(kruskal(&single).unwrap().is_empty());
        assert!(prim(&single, None).unwrap().is_empty());
    }

    #[test]
    fn test_unweighted_tree_has_zero_weight() {
        let graph = build_test_graph(&[], &[(1, 2), (2, 3), (3, 1)]);
        let tree = kruskal(&graph).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.total_weight, 0.0);
    }
}
