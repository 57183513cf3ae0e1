// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Strongly Connected Components (Kosaraju's two-pass algorithm).
//!
//! Pass one records the DFS finishing order over out-edges. Pass two walks
//! in-edges, which is the transposed graph, taking roots in reverse finishing
//! order; every tree it grows is exactly one component.

use crate::algo::traversal::{Direction, postorder_from};
use fungraph_common::{Graph, NodeId, Result};
use fxhash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Strongly connected components, each sorted.
///
/// Components come out in topological order of the condensation: no edge
/// leads from a later component into an earlier one.
#[instrument(skip_all, level = "debug", fields(nodes = graph.size()))]
pub fn strongly_connected_components<N: NodeId, L: Clone, E: Clone>(
    graph: &Graph<N, L, E>,
) -> Vec<Vec<N>> {
    let mut visited = FxHashSet::default();
    let mut finish_order = Vec::with_capacity(graph.size());
    for root in graph.node_ids() {
        postorder_from(graph, root, Direction::Outgoing, &mut visited, &mut finish_order);
    }

    visited.clear();
    let mut components = Vec::new();
    for root in finish_order.iter().rev() {
        let mut component = Vec::new();
        postorder_from(graph, root, Direction::Incoming, &mut visited, &mut component);
        if !component.is_empty() {
            component.sort_unstable();
            components.push(component);
        }
    }

    debug!(count = components.len(), "Strongly connected components");
    components
}

/// Sorted members of the component containing `id`: every node that both
/// reaches `id` and is reached from it.
pub fn scc_of<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>, id: &N) -> Result<Vec<N>> {
    graph.get_node(id)?;

    let mut forward = Vec::new();
    postorder_from(graph, id, Direction::Outgoing, &mut FxHashSet::default(), &mut forward);
    let forward: BTreeSet<N> = forward.into_iter().collect();

    let mut backward = Vec::new();
    postorder_from(graph, id, Direction::Incoming, &mut FxHashSet::default(), &mut backward);

    let mut component: Vec<N> = backward
        .into_iter()
        .filter(|node| forward.contains(node))
        .collect();
    component.sort_unstable();
    Ok(component)
}

pub fn same_scc<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>, a: &N, b: &N) -> Result<bool> {
    graph.get_node(b)?;
    Ok(scc_of(graph, a)?.binary_search(b).is_ok())
}

pub fn scc_count<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> usize {
    strongly_connected_components(graph).len()
}

/// True if every node reaches every other. The empty graph qualifies.
pub fn is_strongly_connected<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> bool {
    scc_count(graph) <= 1
}

/// Collapse each strongly connected component to one node.
///
/// Node `i` stands for the `i`-th component of
/// [`strongly_connected_components`] and is labelled with its members. An
/// edge `i -> j` exists when some original edge leads from component `i` to
/// a different component `j`. The result is always a DAG.
#[instrument(skip_all, level = "debug", fields(nodes = graph.size()))]
pub fn condensation_graph<N: NodeId, L: Clone, E: Clone>(
    graph: &Graph<N, L, E>,
) -> Graph<usize, Vec<N>, ()> {
    let components = strongly_connected_components(graph);

    let mut owner: FxHashMap<&N, usize> = FxHashMap::default();
    for (index, members) in components.iter().enumerate() {
        for node in members {
            owner.insert(node, index);
        }
    }

    let mut links: BTreeSet<(usize, usize)> = BTreeSet::new();
    for (from, to, _) in graph.edges() {
        if let (Some(&a), Some(&b)) = (owner.get(from), owner.get(to))
            && a != b
        {
            links.insert((a, b));
        }
    }
    debug!(
        components = components.len(),
        links = links.len(),
        "Condensation built"
    );

    let skeleton: Graph<usize, Vec<N>, ()> =
        Graph::from_edges(links.into_iter().map(|(a, b)| (a, b, ())));
    components
        .into_iter()
        .enumerate()
        .fold(skeleton, |g, (index, members)| g.put_node(index, members))
}
