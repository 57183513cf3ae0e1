// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Property-based tests for the persistent graph model.
//!
//! Uses proptest to verify invariants across randomly generated operation
//! sequences.

use fungraph_common::Graph;
use proptest::prelude::*;
use std::collections::BTreeSet;

// -----------------------------------------------------------------------------
// Operation strategies
// -----------------------------------------------------------------------------

/// Strategy to generate a small node id so operations collide often.
fn small_id_strategy() -> impl Strategy<Value = u8> {
    0u8..12
}

#[derive(Debug, Clone)]
enum GraphOp {
    EnsureNode(u8),
    PutNode(u8, i32),
    AddEdge(u8, u8, i32),
    RemoveEdge(u8, u8),
    RemoveNode(u8),
    DecomposeEmbed(u8),
}

fn graph_op_strategy() -> impl Strategy<Value = GraphOp> {
    prop_oneof![
        small_id_strategy().prop_map(GraphOp::EnsureNode),
        (small_id_strategy(), any::<i32>()).prop_map(|(id, l)| GraphOp::PutNode(id, l)),
        (small_id_strategy(), small_id_strategy(), -50i32..50)
            .prop_map(|(a, b, w)| GraphOp::AddEdge(a, b, w)),
        (small_id_strategy(), small_id_strategy()).prop_map(|(a, b)| GraphOp::RemoveEdge(a, b)),
        small_id_strategy().prop_map(GraphOp::RemoveNode),
        small_id_strategy().prop_map(GraphOp::DecomposeEmbed),
    ]
}

fn apply(graph: &Graph<u8, i32, i32>, op: &GraphOp) -> Graph<u8, i32, i32> {
    match *op {
        GraphOp::EnsureNode(id) => graph.ensure_node(id),
        GraphOp::PutNode(id, label) => graph.put_node(id, label),
        GraphOp::AddEdge(a, b, w) => match graph.add_edge(a, b, w) {
            Ok(next) => next,
            Err(_) => graph.clone(),
        },
        GraphOp::RemoveEdge(a, b) => graph.remove_edge(&a, &b),
        GraphOp::RemoveNode(id) => graph.remove_node(&id),
        GraphOp::DecomposeEmbed(id) => match graph.decompose(&id) {
            Ok((ctx, rest)) => rest.embed(ctx),
            Err(_) => graph.clone(),
        },
    }
}

fn build(ops: &[GraphOp]) -> Graph<u8, i32, i32> {
    ops.iter().fold(Graph::empty(), |g, op| apply(&g, op))
}

// -----------------------------------------------------------------------------
// Invariants
// -----------------------------------------------------------------------------

proptest! {
    /// Every out-edge is mirrored by an in-edge with the same label.
    #[test]
    fn adjacency_stays_bidirectional(ops in prop::collection::vec(graph_op_strategy(), 0..60)) {
        let graph = build(&ops);
        prop_assert!(graph.is_consistent());

        for (from, to, label) in graph.edges() {
            let mirror = graph.get_node(to).unwrap().in_edges().get(from);
            prop_assert_eq!(mirror, Some(label));
        }
    }

    /// Embedding a decomposed context restores an equal graph.
    #[test]
    fn decompose_embed_roundtrip(
        ops in prop::collection::vec(graph_op_strategy(), 0..60),
        id in small_id_strategy(),
    ) {
        let graph = build(&ops);
        if let Ok((ctx, rest)) = graph.decompose(&id) {
            prop_assert!(!rest.has_node(&id));
            prop_assert!(rest.is_consistent());
            prop_assert!(rest.edges().all(|(a, b, _)| *a != id && *b != id));
            prop_assert_eq!(rest.embed(ctx), graph);
        } else {
            prop_assert!(!graph.has_node(&id));
        }
    }

    /// ensure_node applied twice equals ensure_node applied once.
    #[test]
    fn ensure_node_idempotent(
        ops in prop::collection::vec(graph_op_strategy(), 0..40),
        id in small_id_strategy(),
    ) {
        let graph = build(&ops);
        let once = graph.ensure_node(id);
        prop_assert_eq!(once.ensure_node(id), once);
    }

    /// A failed edge insertion leaves the graph unchanged; the receiver of a
    /// successful one is unchanged too.
    #[test]
    fn edge_insertion_never_mutates_receiver(
        ops in prop::collection::vec(graph_op_strategy(), 0..40),
        a in small_id_strategy(),
        b in small_id_strategy(),
    ) {
        let graph = build(&ops);
        let snapshot = graph.clone();
        match graph.add_edge(a, b, 7) {
            Ok(next) => {
                prop_assert_eq!(next.get_edge(&a, &b).ok(), Some(&7));
            }
            Err(err) => {
                prop_assert!(err.is_not_found());
            }
        }
        prop_assert_eq!(graph, snapshot);
    }

    /// Degree counts distinct neighbors over both directions.
    #[test]
    fn degree_matches_neighbor_union(ops in prop::collection::vec(graph_op_strategy(), 0..60)) {
        let graph = build(&ops);
        for id in graph.node_ids() {
            let mut expected: BTreeSet<u8> = graph.out_neighbors(id).unwrap().into_iter().collect();
            expected.extend(graph.in_neighbors(id).unwrap());
            prop_assert_eq!(graph.degree(id).unwrap(), expected.len());
            prop_assert_eq!(graph.neighbors(id).unwrap(), expected.into_iter().collect::<Vec<_>>());
        }
    }
}
