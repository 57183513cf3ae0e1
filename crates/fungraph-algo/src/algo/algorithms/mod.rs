// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Algorithm suite and the result types shared between algorithms.

use crate::algo::traversal::reconstruct_path;
use fungraph_common::NodeId;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Priority key for float costs.
///
/// Ordered with `f64::total_cmp`, so negative weights order correctly and
/// the heap never sees an incomparable value.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cost(pub(crate) f64);

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0).is_eq()
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// A single path and its total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<N> {
    /// Nodes from start to goal, both included.
    pub path: Vec<N>,
    pub distance: f64,
}

impl<N> ShortestPath<N> {
    /// Path consisting of `node` alone, at zero cost.
    pub fn trivial(node: N) -> Self {
        Self {
            path: vec![node],
            distance: 0.0,
        }
    }

    /// Number of nodes on the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Single-source distances and the predecessor tree that realizes them.
///
/// Only reachable nodes appear in `distances`. The source has no
/// predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<N> {
    pub source: N,
    pub distances: BTreeMap<N, f64>,
    pub predecessors: BTreeMap<N, N>,
}

impl<N: NodeId> ShortestPaths<N> {
    pub fn distance_to(&self, node: &N) -> Option<f64> {
        self.distances.get(node).copied()
    }

    /// Path from the source to `node`, or `None` if it was not reached.
    pub fn path_to(&self, node: &N) -> Option<ShortestPath<N>> {
        let distance = self.distance_to(node)?;
        let path = reconstruct_path(
            |n| self.predecessors.get(n).cloned(),
            &self.source,
            node,
        );
        Some(ShortestPath { path, distance })
    }

    /// Number of reached nodes, the source included.
    pub fn reached(&self) -> usize {
        self.distances.len()
    }
}

/// Edges of a spanning tree as undirected `(u, v, weight)` triples.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<N> {
    pub edges: Vec<(N, N, f64)>,
    pub total_weight: f64,
}

impl<N> SpanningTree<N> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            total_weight: 0.0,
        }
    }

    pub(crate) fn push(&mut self, u: N, v: N, weight: f64) {
        self.total_weight += weight;
        self.edges.push((u, v, weight));
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

mod topological_sort;
pub use topological_sort::topological_sort;
pub(crate) use topological_sort::{ColoredDfs, colored_dfs};

mod cycle_detection;
pub use cycle_detection::{find_cycle, has_cycle_directed, has_cycle_undirected, is_dag};

mod bipartite_check;
pub use bipartite_check::{Bipartition, bipartite_partition, is_bipartite};

mod graph_metrics;
pub use graph_metrics::{edge_count, is_connected, is_tree, node_count, undirected_degree};

mod eulerian;
pub use eulerian::{
    find_eulerian_circuit, find_eulerian_path, has_eulerian_circuit, has_eulerian_path,
};

mod wcc;
pub use wcc::{component_count, component_of, connected_components, same_component};

mod scc;
pub use scc::{
    condensation_graph, is_strongly_connected, same_scc, scc_count, scc_of,
    strongly_connected_components,
};

mod dijkstra;
pub use dijkstra::{DijkstraConfig, dijkstra, dijkstra_all, dijkstra_all_with};

mod astar;
pub use astar::astar;

mod bellman_ford;
pub use bellman_ford::{bellman_ford, bellman_ford_all};

mod mst;
pub use mst::{PrimConfig, kruskal, prim, prim_with};
