// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Bipartite Check Algorithm (BFS two-coloring).

use fungraph_common::{Graph, GraphError, NodeId, Result};
use fxhash::FxHashMap;
use std::collections::{BTreeSet, VecDeque};
use tracing::{debug, instrument};

/// Two-coloring of a bipartite graph. Every edge joins `red` and `blue`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bipartition<N> {
    pub red: BTreeSet<N>,
    pub blue: BTreeSet<N>,
}

/// Color the graph with two colors, edges read as undirected.
///
/// Each component is colored independently; its smallest node is red.
/// Fails with `NotBipartite` on the first edge joining two nodes of the same
/// color, which includes any self-loop.
#[instrument(skip_all, level = "debug", fields(nodes = graph.size()))]
pub fn bipartite_partition<N: NodeId, L: Clone, E: Clone>(
    graph: &Graph<N, L, E>,
) -> Result<Bipartition<N>> {
    // true = red
    let mut color: FxHashMap<N, bool> = FxHashMap::default();
    let mut queue = VecDeque::new();

    for root in graph.node_ids() {
        if color.contains_key(root) {
            continue;
        }
        color.insert(root.clone(), true);
        queue.push_back(root.clone());

        while let Some(u) = queue.pop_front() {
            let Some(ctx) = graph.context(&u) else {
                continue;
            };
            let u_color = color.get(&u).copied().unwrap_or(true);
            for v in ctx.neighbors() {
                match color.get(v) {
                    Some(&v_color) if v_color == u_color => {
                        debug!(u = ?u, v = ?v, "Color conflict");
                        return Err(GraphError::NotBipartite);
                    }
                    Some(_) => {}
                    None => {
                        color.insert(v.clone(), !u_color);
                        queue.push_back(v.clone());
                    }
                }
            }
        }
    }

    let mut partition = Bipartition {
        red: BTreeSet::new(),
        blue: BTreeSet::new(),
    };
    for (node, red) in color {
        if red {
            partition.red.insert(node);
        } else {
            partition.blue.insert(node);
        }
    }
    Ok(partition)
}

pub fn is_bipartite<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> bool {
    bipartite_partition(graph).is_ok()
}
