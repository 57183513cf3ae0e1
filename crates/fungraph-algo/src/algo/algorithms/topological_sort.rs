// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Topological Sort (three-color DFS).

use fungraph_common::{Graph, GraphError, NodeId, Result};
use fxhash::FxHashMap;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// On the DFS stack.
    Gray,
    /// Finished.
    Black,
}

/// Outcome of a full three-color DFS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ColoredDfs<N> {
    /// Every node in finishing order.
    Acyclic(Vec<N>),
    /// The first cycle met, closed: first and last node are equal.
    Cycle(Vec<N>),
}

/// Iterative three-color DFS over every node, roots taken in ascending id
/// order. Stops at the first back edge to a gray node.
pub(crate) fn colored_dfs<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> ColoredDfs<N> {
    let successors = |node: &N| -> std::vec::IntoIter<N> {
        graph
            .context(node)
            .map(|ctx| ctx.successors().cloned().collect::<Vec<_>>())
            .unwrap_or_default()
            .into_iter()
    };

    let mut color: FxHashMap<N, Color> = FxHashMap::default();
    let mut finished = Vec::with_capacity(graph.size());

    for root in graph.node_ids() {
        if color.contains_key(root) {
            continue;
        }
        color.insert(root.clone(), Color::Gray);
        let mut stack = vec![(root.clone(), successors(root))];

        loop {
            let step = match stack.last_mut() {
                Some((_, pending)) => pending.next(),
                None => break,
            };
            match step {
                Some(next) => match color.get(&next) {
                    None => {
                        color.insert(next.clone(), Color::Gray);
                        let children = successors(&next);
                        stack.push((next, children));
                    }
                    Some(Color::Gray) => {
                        // gray nodes are exactly the ones on the stack
                        let from = stack.iter().position(|(n, _)| *n == next).unwrap_or(0);
                        let mut cycle: Vec<N> = stack[from..].iter().map(|(n, _)| n.clone()).collect();
                        cycle.push(next);
                        return ColoredDfs::Cycle(cycle);
                    }
                    Some(Color::Black) => {}
                },
                None => {
                    if let Some((done, _)) = stack.pop() {
                        color.insert(done.clone(), Color::Black);
                        finished.push(done);
                    }
                }
            }
        }
    }

    ColoredDfs::Acyclic(finished)
}

/// Order the nodes so that every edge `u -> v` has `u` before `v`.
///
/// Covers every node, including those unreachable from any single start.
/// Fails with `HasCycle` if the graph has a directed cycle.
#[instrument(skip_all, level = "debug", fields(nodes = graph.size()))]
pub fn topological_sort<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> Result<Vec<N>> {
    match colored_dfs(graph) {
        ColoredDfs::Acyclic(mut order) => {
            order.reverse();
            Ok(order)
        }
        ColoredDfs::Cycle(cycle) => {
            debug!(cycle = ?cycle, "Topological sort hit a cycle");
            Err(GraphError::HasCycle)
        }
    }
}
