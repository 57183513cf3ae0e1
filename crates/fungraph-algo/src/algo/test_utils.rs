// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use fungraph_common::Graph;

/// Unweighted directed graph over `nodes` plus the endpoints of `edges`.
pub fn build_test_graph(nodes: &[u32], edges: &[(u32, u32)]) -> Graph<u32> {
    let graph = nodes
        .iter()
        .fold(Graph::empty(), |g: Graph<u32>, &id| g.ensure_node(id));
    edges.iter().fold(graph, |g, &(src, dst)| {
        g.ensure_node(src)
            .ensure_node(dst)
            .link(src, dst)
            .expect("endpoints were just ensured")
    })
}

/// Weighted directed graph over `nodes` plus the endpoints of `edges`.
pub fn build_weighted_graph(nodes: &[u32], edges: &[(u32, u32, f64)]) -> Graph<u32, (), f64> {
    let graph = nodes
        .iter()
        .fold(Graph::empty(), |g: Graph<u32, (), f64>, &id| g.ensure_node(id));
    edges.iter().fold(graph, |g, &(src, dst, w)| {
        g.ensure_node(src)
            .ensure_node(dst)
            .add_edge(src, dst, w)
            .expect("endpoints were just ensured")
    })
}

/// Weighted graph with every edge inserted in both directions.
pub fn build_undirected_graph(nodes: &[u32], edges: &[(u32, u32, f64)]) -> Graph<u32, (), f64> {
    let both: Vec<(u32, u32, f64)> = edges
        .iter()
        .flat_map(|&(a, b, w)| [(a, b, w), (b, a, w)])
        .collect();
    build_weighted_graph(nodes, &both)
}
