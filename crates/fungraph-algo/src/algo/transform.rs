// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Structural rewrites built on the graph's write contract.

use fungraph_common::{Context, Graph, NodeId, Result};
use std::collections::BTreeSet;
use tracing::{instrument, trace};

/// Graph with every edge turned around. Labels travel with their edges.
pub fn reverse<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> Graph<N, L, E> {
    graph.map_nodes(Context::reversed)
}

/// Merge `v` into `u`.
///
/// Every edge between `v` and a third node is moved onto `u`; where `u`
/// already has an edge in that position, `u`'s label wins. Edges between
/// `u` and `v`, and a self-loop on `v`, are dropped. A self-loop already on
/// `u` survives. `u` keeps its label. Contracting a node into itself returns
/// the graph unchanged. Fails with `NotFound` if either node is absent.
#[instrument(skip_all, level = "debug", fields(u = ?u, v = ?v))]
pub fn contract_edge<N: NodeId, L: Clone, E: Clone>(
    graph: &Graph<N, L, E>,
    u: &N,
    v: &N,
) -> Result<Graph<N, L, E>> {
    graph.get_node(u)?;
    graph.get_node(v)?;
    if u == v {
        return Ok(graph.clone());
    }

    let (merged, mut next) = graph.decompose(v)?;
    let (_, _, in_edges, out_edges) = merged.into_parts();

    for (pred, label) in in_edges {
        if pred == *u || pred == *v || next.has_edge(&pred, u) {
            continue;
        }
        next = next.add_edge(pred, u.clone(), label)?;
    }
    for (succ, label) in out_edges {
        if succ == *u || succ == *v || next.has_edge(u, &succ) {
            continue;
        }
        next = next.add_edge(u.clone(), succ, label)?;
    }

    trace!(nodes = next.size(), "Contracted");
    Ok(next)
}

/// Induced subgraph on `ids`. Ids not in the graph are ignored.
pub fn subgraph<N, L, E, I>(graph: &Graph<N, L, E>, ids: I) -> Graph<N, L, E>
where
    N: NodeId,
    L: Clone,
    E: Clone,
    I: IntoIterator<Item = N>,
{
    let keep: BTreeSet<N> = ids.into_iter().collect();
    graph.filter_nodes(|ctx| keep.contains(ctx.id()))
}

/// Graph without its zero-degree nodes. A node whose only edge is a
/// self-loop is kept.
pub fn clear_isolated<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> Graph<N, L, E> {
    graph.filter_nodes(|ctx| ctx.degree() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_test_graph, build_weighted_graph};
    use fungraph_common::GraphError;

    #[test]
    fn test_reverse() {
        let graph = build_weighted_graph(&[], &[(1, 2, 1.5), (2, 3, 2.5), (3, 3, 0.5)]);
        let reversed = reverse(&graph);
        assert!(reversed.is_consistent());
        assert_eq!(reversed.get_edge(&2, &1), Ok(&1.5));
        assert_eq!(reversed.get_edge(&3, &2), Ok(&2.5));
        assert!(reversed.has_edge(&3, &3));
        assert!(!reversed.has_edge(&1, &2));
        assert_eq!(reverse(&reversed), graph);
    }

    #[test]
    fn test_contract_edge() {
        // 0 -> 1 -> 2, 1 -> 3, 3 -> 1, 4 -> 2
        let graph = build_weighted_graph(
            &[],
            &[(0, 1, 1.0), (1, 2, 2.0), (1, 3, 3.0), (3, 1, 4.0), (4, 2, 5.0)],
        );
        let merged = contract_edge(&graph, &1, &2).unwrap();
        assert!(merged.is_consistent());
        assert!(!merged.has_node(&2));
        // 4 -> 2 moved onto 1, 1 -> 2 dropped
        assert_eq!(merged.get_edge(&4, &1), Ok(&5.0));
        assert!(!merged.has_edge(&1, &1));
        assert_eq!(merged.edge_count(), 4);
    }

    #[test]
    fn test_contract_keeps_u_label_on_conflict() {
        // both 1 and 2 point at 3
        let graph = build_weighted_graph(&[], &[(1, 3, 1.0), (2, 3, 9.0), (3, 2, 7.0)]);
        let merged = contract_edge(&graph, &1, &2).unwrap();
        assert_eq!(merged.get_edge(&1, &3), Ok(&1.0));
        assert_eq!(merged.get_edge(&3, &1), Ok(&7.0));
    }

    #[test]
    fn test_contract_self_loops() {
        let graph = build_test_graph(&[], &[(1, 1), (2, 2), (1, 2), (2, 1)]);
        let merged = contract_edge(&graph, &1, &2).unwrap();
        assert_eq!(merged.size(), 1);
        assert!(merged.has_edge(&1, &1));
        assert_eq!(merged.edge_count(), 1);

        assert_eq!(contract_edge(&graph, &1, &1).unwrap(), graph);
    }

    #[test]
    fn test_contract_missing() {
        let graph = build_test_graph(&[], &[(1, 2)]);
        assert!(matches!(
            contract_edge(&graph, &1, &5),
            Err(GraphError::NotFound { .. })
        ));
        assert!(contract_edge(&graph, &5, &1).is_err());
    }

    #[test]
    fn test_subgraph() {
        let graph = build_test_graph(&[], &[(1, 2), (2, 3), (3, 1), (3, 4)]);
        let sub = subgraph(&graph, [1, 3, 4, 99]);
        assert!(sub.is_consistent());
        assert_eq!(sub.node_ids().copied().collect::<Vec<_>>(), vec![1, 3, 4]);
        assert!(sub.has_edge(&3, &1));
        assert!(sub.has_edge(&3, &4));
        assert_eq!(sub.edge_count(), 2);
    }

    #[test]
    fn test_clear_isolated() {
        let graph = build_test_graph(&[7, 8], &[(1, 2), (5, 5)]);
        let cleared = clear_isolated(&graph);
        assert_eq!(cleared.node_ids().copied().collect::<Vec<_>>(), vec![1, 2, 5]);
        assert_eq!(clear_isolated(&cleared), cleared);
    }
}
