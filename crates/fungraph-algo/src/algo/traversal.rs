// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Depth-first and breadth-first traversal over the graph's read contract.
//!
//! All walks use explicit stacks/queues, so deep graphs cannot exhaust the
//! call stack, and visitors can stop a walk early. Neighbors are expanded in
//! ascending id order, which makes every traversal deterministic.

use fungraph_common::{Context, Graph, GraphError, NodeId, Result};
use fxhash::{FxHashMap, FxHashSet};
use std::collections::{BTreeSet, VecDeque};
use tracing::{instrument, trace};

/// Which edges a traversal follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Follow `out_edges` (directed semantics).
    #[default]
    Outgoing,
    /// Follow `in_edges`, i.e. walk the transposed graph.
    Incoming,
    /// Follow both, treating the graph as undirected.
    Both,
}

/// Neighbors of `ctx` in `direction`, ascending and without duplicates.
pub(crate) fn adjacent<N: NodeId, L: Clone, E: Clone>(
    ctx: &Context<N, L, E>,
    direction: Direction,
) -> Vec<&N> {
    match direction {
        Direction::Outgoing => ctx.successors().collect(),
        Direction::Incoming => ctx.predecessors().collect(),
        Direction::Both => ctx.neighbors(),
    }
}

/// Visitor verdict for [`dfs_visit`] and [`bfs_visit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit<T = ()> {
    Continue,
    /// Stop the walk.
    Halt,
    /// Stop the walk and hand `T` back to the caller.
    HaltWith(T),
}

/// Configuration for the [`Bfs`] level iterator.
#[derive(Debug, Clone, Default)]
pub struct BfsConfig {
    pub direction: Direction,
    /// Nodes deeper than this are not yielded.
    pub max_depth: Option<u32>,
}

/// BFS iterator yielding `(node, depth)` pairs in level order.
pub struct Bfs<'g, N, L, E> {
    graph: &'g Graph<N, L, E>,
    frontier: VecDeque<(N, u32)>,
    visited: FxHashSet<N>,
    config: BfsConfig,
}

impl<'g, N: NodeId, L: Clone, E: Clone> Bfs<'g, N, L, E> {
    pub fn new(graph: &'g Graph<N, L, E>, source: &N, config: BfsConfig) -> Result<Self> {
        if !graph.has_node(source) {
            return Err(GraphError::not_found(source));
        }

        let mut frontier = VecDeque::new();
        let mut visited = FxHashSet::default();

        frontier.push_back((source.clone(), 0));
        visited.insert(source.clone());

        Ok(Self {
            graph,
            frontier,
            visited,
            config,
        })
    }

    /// Nodes discovered so far, including those still queued.
    pub fn discovered(&self) -> &FxHashSet<N> {
        &self.visited
    }
}

impl<N: NodeId, L: Clone, E: Clone> Iterator for Bfs<'_, N, L, E> {
    type Item = (N, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let (current, depth) = self.frontier.pop_front()?;

        let expand = self.config.max_depth.is_none_or(|max| depth < max);
        if expand && let Some(ctx) = self.graph.context(&current) {
            for neighbor in adjacent(ctx, self.config.direction) {
                if self.visited.insert(neighbor.clone()) {
                    self.frontier.push_back((neighbor.clone(), depth + 1));
                }
            }
        }

        Some((current, depth))
    }
}

// -----------------------------------------------------------------------------
// Depth-first
// -----------------------------------------------------------------------------

/// Preorder DFS from `start` following out-edges. Each reachable node appears
/// exactly once.
pub fn dfs<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>, start: &N) -> Result<Vec<N>> {
    dfs_with(graph, start, Direction::Outgoing)
}

/// Preorder DFS from `start` following `direction`.
pub fn dfs_with<N: NodeId, L: Clone, E: Clone>(
    graph: &Graph<N, L, E>,
    start: &N,
    direction: Direction,
) -> Result<Vec<N>> {
    let mut order = Vec::new();
    dfs_visit_with(graph, start, direction, |ctx| {
        order.push(ctx.id().clone());
        Visit::<()>::Continue
    })?;
    Ok(order)
}

/// DFS calling `visitor` on each node in preorder.
///
/// Returns `Ok(Some(value))` if the visitor halted with a value, `Ok(None)`
/// if it halted without one or the walk ran to completion.
pub fn dfs_visit<N, L, E, T, F>(graph: &Graph<N, L, E>, start: &N, visitor: F) -> Result<Option<T>>
where
    N: NodeId,
    L: Clone,
    E: Clone,
    F: FnMut(&Context<N, L, E>) -> Visit<T>,
{
    dfs_visit_with(graph, start, Direction::Outgoing, visitor)
}

pub fn dfs_visit_with<N, L, E, T, F>(
    graph: &Graph<N, L, E>,
    start: &N,
    direction: Direction,
    mut visitor: F,
) -> Result<Option<T>>
where
    N: NodeId,
    L: Clone,
    E: Clone,
    F: FnMut(&Context<N, L, E>) -> Visit<T>,
{
    if !graph.has_node(start) {
        return Err(GraphError::not_found(start));
    }

    let mut visited = FxHashSet::default();
    let mut stack = vec![start.clone()];

    while let Some(node) = stack.pop() {
        if !visited.insert(node.clone()) {
            continue;
        }
        let Some(ctx) = graph.context(&node) else {
            continue;
        };

        match visitor(ctx) {
            Visit::Continue => {}
            Visit::Halt => return Ok(None),
            Visit::HaltWith(value) => return Ok(Some(value)),
        }

        // reversed so the smallest neighbor is expanded first
        for next in adjacent(ctx, direction).into_iter().rev() {
            if !visited.contains(next) {
                stack.push(next.clone());
            }
        }
    }

    Ok(None)
}

/// Some path from `start` to `goal` found depth-first; not necessarily the
/// shortest. `NotFound` if an endpoint is missing or `goal` is unreachable.
#[instrument(skip_all, level = "trace", fields(start = ?start, goal = ?goal))]
pub fn dfs_path<N: NodeId, L: Clone, E: Clone>(
    graph: &Graph<N, L, E>,
    start: &N,
    goal: &N,
) -> Result<Vec<N>> {
    graph.get_node(goal)?;
    graph.get_node(start)?;

    let mut parents: FxHashMap<N, N> = FxHashMap::default();
    let mut visited = FxHashSet::default();
    let mut stack: Vec<(N, Option<N>)> = vec![(start.clone(), None)];

    while let Some((node, parent)) = stack.pop() {
        if !visited.insert(node.clone()) {
            continue;
        }
        if let Some(parent) = parent {
            parents.insert(node.clone(), parent);
        }
        if node == *goal {
            return Ok(reconstruct_path(|n| parents.get(n).cloned(), start, goal));
        }
        if let Some(ctx) = graph.context(&node) {
            for next in ctx.successors().collect::<Vec<_>>().into_iter().rev() {
                if !visited.contains(next) {
                    stack.push((next.clone(), Some(node.clone())));
                }
            }
        }
    }

    trace!("Goal unreachable");
    Err(GraphError::not_found(goal))
}

// -----------------------------------------------------------------------------
// Breadth-first
// -----------------------------------------------------------------------------

/// Level-order BFS from `start` following out-edges.
pub fn bfs<N: NodeId, L: Clone, E: Clone>(graph: &Graph<N, L, E>, start: &N) -> Result<Vec<N>> {
    bfs_with(graph, start, BfsConfig::default())
}

pub fn bfs_with<N: NodeId, L: Clone, E: Clone>(
    graph: &Graph<N, L, E>,
    start: &N,
    config: BfsConfig,
) -> Result<Vec<N>> {
    Ok(Bfs::new(graph, start, config)?.map(|(node, _)| node).collect())
}

/// BFS calling `visitor` on each node as it is dequeued.
pub fn bfs_visit<N, L, E, T, F>(
    graph: &Graph<N, L, E>,
    start: &N,
    mut visitor: F,
) -> Result<Option<T>>
where
    N: NodeId,
    L: Clone,
    E: Clone,
    F: FnMut(&Context<N, L, E>) -> Visit<T>,
{
    for (node, _) in Bfs::new(graph, start, BfsConfig::default())? {
        let Some(ctx) = graph.context(&node) else {
            continue;
        };
        match visitor(ctx) {
            Visit::Continue => {}
            Visit::Halt => return Ok(None),
            Visit::HaltWith(value) => return Ok(Some(value)),
        }
    }
    Ok(None)
}

/// Path from `start` to `goal` with the fewest edges.
#[instrument(skip_all, level = "trace", fields(start = ?start, goal = ?goal))]
pub fn bfs_path<N: NodeId, L: Clone, E: Clone>(
    graph: &Graph<N, L, E>,
    start: &N,
    goal: &N,
) -> Result<Vec<N>> {
    graph.get_node(goal)?;
    graph.get_node(start)?;
    if start == goal {
        return Ok(vec![start.clone()]);
    }

    let mut parents: FxHashMap<N, N> = FxHashMap::default();
    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::from([start.clone()]);
    visited.insert(start.clone());

    while let Some(node) = queue.pop_front() {
        let Some(ctx) = graph.context(&node) else {
            continue;
        };
        for next in ctx.successors() {
            if !visited.insert(next.clone()) {
                continue;
            }
            parents.insert(next.clone(), node.clone());
            if next == goal {
                return Ok(reconstruct_path(|n| parents.get(n).cloned(), start, goal));
            }
            queue.push_back(next.clone());
        }
    }

    trace!("Goal unreachable");
    Err(GraphError::not_found(goal))
}

/// Every node reachable from `start` via out-edges, `start` included.
pub fn reachable<N: NodeId, L: Clone, E: Clone>(
    graph: &Graph<N, L, E>,
    start: &N,
) -> Result<BTreeSet<N>> {
    Ok(Bfs::new(graph, start, BfsConfig::default())?
        .map(|(node, _)| node)
        .collect())
}

// -----------------------------------------------------------------------------
// Shared helpers
// -----------------------------------------------------------------------------

/// Walk predecessors back from `goal` to `start`.
///
/// A node without a predecessor that is not `start` ends the walk; the
/// partial path collected so far is returned as-is.
pub(crate) fn reconstruct_path<N, F>(predecessor: F, start: &N, goal: &N) -> Vec<N>
where
    N: NodeId,
    F: Fn(&N) -> Option<N>,
{
    let mut path = vec![goal.clone()];
    let mut current = goal.clone();
    while current != *start {
        match predecessor(&current) {
            Some(prev) => {
                path.push(prev.clone());
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Append the DFS postorder of everything reachable from `root` along
/// `direction` and not yet in `visited`.
pub(crate) fn postorder_from<N: NodeId, L: Clone, E: Clone>(
    graph: &Graph<N, L, E>,
    root: &N,
    direction: Direction,
    visited: &mut FxHashSet<N>,
    out: &mut Vec<N>,
) {
    if !visited.insert(root.clone()) {
        return;
    }

    let expand = |node: &N| -> std::vec::IntoIter<N> {
        graph
            .context(node)
            .map(|ctx| adjacent(ctx, direction).into_iter().cloned().collect::<Vec<_>>())
            .unwrap_or_default()
            .into_iter()
    };

    let mut stack = vec![(root.clone(), expand(root))];
    loop {
        let step = match stack.last_mut() {
            Some((_, pending)) => pending.next(),
            None => break,
        };
        match step {
            Some(next) => {
                if visited.insert(next.clone()) {
                    let children = expand(&next);
                    stack.push((next, children));
                }
            }
            None => {
                if let Some((done, _)) = stack.pop() {
                    out.push(done);
                }
            }
        }
    }
}
