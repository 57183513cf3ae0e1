// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Persistent inductive graph.
//!
//! The graph is a persistent ordered map from node id to [`Context`]. Every
//! structural operation returns a new graph and leaves the receiver untouched.
//! Clones are O(1) and an update copies only the map paths and contexts it
//! touches, so algorithms can fork graph values freely.
//!
//! Invariant: `v` is in `out_edges(u)` with label `l` exactly when `u` is in
//! `in_edges(v)` with label `l`. Every operation below maintains it;
//! [`Graph::is_consistent`] checks it.

use crate::api::error::{GraphError, Result};
use crate::core::id::NodeId;
use crate::graph::context::Context;
use imbl::OrdMap;
use std::fmt;
use tracing::trace;

/// Directed graph with node labels `L` and edge labels `E`.
#[derive(Clone)]
pub struct Graph<N, L = (), E = ()> {
    nodes: OrdMap<N, Context<N, L, E>>,
}

impl<N: NodeId, L: Clone, E: Clone> Default for Graph<N, L, E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<N: NodeId, L: Clone, E: Clone> Graph<N, L, E> {
    /// Graph with zero nodes.
    pub fn empty() -> Self {
        Self {
            nodes: OrdMap::new(),
        }
    }

    pub fn new() -> Self {
        Self::empty()
    }

    /// Build a graph from labelled nodes. Later duplicates overwrite labels.
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = (N, L)>,
    {
        let mut graph = Self::empty();
        for (id, label) in nodes {
            graph.put_in_place(id, label);
        }
        graph
    }

    /// Build a graph from edge triples, creating missing endpoints with the
    /// default label.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, E)>,
        L: Default,
    {
        let mut graph = Self::empty();
        for (from, to, label) in edges {
            graph.ensure_in_place(from.clone(), L::default());
            graph.ensure_in_place(to.clone(), L::default());
            graph.connect_in_place(from, to, label);
        }
        graph
    }

    // ---------------------------------------------------------------------
    // Node construction
    // ---------------------------------------------------------------------

    /// Graph with `id` present. Leaves an existing node's label untouched.
    pub fn ensure_node_with(&self, id: N, label: L) -> Self {
        if self.nodes.contains_key(&id) {
            return self.clone();
        }
        let mut next = self.clone();
        next.ensure_in_place(id, label);
        next
    }

    /// [`ensure_node_with`](Self::ensure_node_with) using the default label.
    pub fn ensure_node(&self, id: N) -> Self
    where
        L: Default,
    {
        self.ensure_node_with(id, L::default())
    }

    /// Graph with `id` present and labelled `label`. Existing edges of `id`
    /// are preserved.
    pub fn put_node(&self, id: N, label: L) -> Self {
        let mut next = self.clone();
        next.put_in_place(id, label);
        next
    }

    // ---------------------------------------------------------------------
    // Edges
    // ---------------------------------------------------------------------

    /// Insert or relabel the edge `from -> to`.
    ///
    /// Fails with `SourceNotFound` / `TargetNotFound` when an endpoint is
    /// missing; the receiver is never modified.
    pub fn add_edge(&self, from: N, to: N, label: E) -> Result<Self> {
        if !self.nodes.contains_key(&from) {
            return Err(GraphError::source_not_found(&from));
        }
        if !self.nodes.contains_key(&to) {
            return Err(GraphError::target_not_found(&to));
        }
        let mut next = self.clone();
        next.connect_in_place(from, to, label);
        Ok(next)
    }

    /// [`add_edge`](Self::add_edge) with the default (absent) edge label.
    pub fn link(&self, from: N, to: N) -> Result<Self>
    where
        E: Default,
    {
        self.add_edge(from, to, E::default())
    }

    /// Graph without the edge `from -> to`. Missing edges and endpoints are a
    /// no-op.
    pub fn remove_edge(&self, from: &N, to: &N) -> Self {
        if !self.has_edge(from, to) {
            return self.clone();
        }
        let mut next = self.clone();
        if let Some(source) = next.nodes.get_mut(from) {
            source.out_edges.remove(to);
        }
        if let Some(target) = next.nodes.get_mut(to) {
            target.in_edges.remove(from);
        }
        next
    }

    // ---------------------------------------------------------------------
    // Inductive primitives
    // ---------------------------------------------------------------------

    /// Split the graph into the context of `id` and the rest of the graph.
    ///
    /// The remaining graph holds no edge touching `id`. A neighbor linked in
    /// both directions is purged once from each of its maps.
    pub fn decompose(&self, id: &N) -> Result<(Context<N, L, E>, Self)> {
        let mut rest = self.clone();
        let context = rest
            .nodes
            .remove(id)
            .ok_or_else(|| GraphError::not_found(id))?;
        rest.detach(&context);
        trace!(
            node = ?id,
            in_degree = context.in_edges.len(),
            out_degree = context.out_edges.len(),
            "Decomposed node"
        );
        Ok((context, rest))
    }

    /// Insert `context` and restore its edges.
    ///
    /// Edges to neighbors that are no longer in the graph are dropped
    /// silently. If a node with the same id is present it is replaced. The
    /// context's `out_edges` decide whether a self-loop is restored.
    pub fn embed(&self, context: Context<N, L, E>) -> Self {
        let mut next = self.remove_node(context.id());
        let (id, label, in_edges, out_edges) = context.into_parts();

        let self_loop = out_edges.get(&id).cloned();
        let mut in_edges: OrdMap<N, E> = in_edges
            .iter()
            .filter(|(pred, _)| *pred != &id && next.nodes.contains_key(*pred))
            .map(|(pred, edge)| (pred.clone(), edge.clone()))
            .collect();
        let mut out_edges: OrdMap<N, E> = out_edges
            .iter()
            .filter(|(succ, _)| *succ != &id && next.nodes.contains_key(*succ))
            .map(|(succ, edge)| (succ.clone(), edge.clone()))
            .collect();

        for (pred, edge) in in_edges.iter() {
            if let Some(neighbor) = next.nodes.get_mut(pred) {
                neighbor.out_edges.insert(id.clone(), edge.clone());
            }
        }
        for (succ, edge) in out_edges.iter() {
            if let Some(neighbor) = next.nodes.get_mut(succ) {
                neighbor.in_edges.insert(id.clone(), edge.clone());
            }
        }
        if let Some(edge) = self_loop {
            in_edges.insert(id.clone(), edge.clone());
            out_edges.insert(id.clone(), edge);
        }

        trace!(
            node = ?id,
            in_degree = in_edges.len(),
            out_degree = out_edges.len(),
            "Embedded node"
        );
        next.nodes.insert(
            id.clone(),
            Context::from_parts(id, label, in_edges, out_edges),
        );
        next
    }

    /// Graph without `id` and its edges. Missing nodes are a no-op.
    pub fn remove_node(&self, id: &N) -> Self {
        match self.decompose(id) {
            Ok((_, rest)) => rest,
            Err(_) => self.clone(),
        }
    }

    // ---------------------------------------------------------------------
    // Read contract
    // ---------------------------------------------------------------------

    /// Node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.keys()
    }

    /// Node contexts in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Context<N, L, E>> + '_ {
        self.nodes.values()
    }

    pub fn get_node(&self, id: &N) -> Result<&Context<N, L, E>> {
        self.nodes.get(id).ok_or_else(|| GraphError::not_found(id))
    }

    /// Borrow a context without building an error on absence.
    #[inline]
    pub fn context(&self, id: &N) -> Option<&Context<N, L, E>> {
        self.nodes.get(id)
    }

    #[inline]
    pub fn has_node(&self, id: &N) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn out_neighbors(&self, id: &N) -> Result<Vec<N>> {
        Ok(self.get_node(id)?.successors().cloned().collect())
    }

    pub fn in_neighbors(&self, id: &N) -> Result<Vec<N>> {
        Ok(self.get_node(id)?.predecessors().cloned().collect())
    }

    /// Union of in- and out-neighbors without duplicates.
    pub fn neighbors(&self, id: &N) -> Result<Vec<N>> {
        Ok(self
            .get_node(id)?
            .neighbors()
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn has_edge(&self, from: &N, to: &N) -> bool {
        self.nodes
            .get(from)
            .is_some_and(|ctx| ctx.out_edges.contains_key(to))
    }

    pub fn get_edge(&self, from: &N, to: &N) -> Result<&E> {
        self.get_node(from)?
            .out_edges
            .get(to)
            .ok_or_else(|| GraphError::edge_not_found(from, to))
    }

    pub fn out_degree(&self, id: &N) -> Result<usize> {
        Ok(self.get_node(id)?.out_degree())
    }

    pub fn in_degree(&self, id: &N) -> Result<usize> {
        Ok(self.get_node(id)?.in_degree())
    }

    /// Distinct-neighbor count: `u -> v` plus `v -> u` counts once.
    pub fn degree(&self, id: &N) -> Result<usize> {
        Ok(self.get_node(id)?.degree())
    }

    /// All edges as `(from, to, label)`, grouped by source in id order.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, &E)> + '_ {
        self.nodes.iter().flat_map(|(from, ctx)| {
            ctx.out_edges
                .iter()
                .map(move |(to, label)| (from, to, label))
        })
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Context::out_degree).sum()
    }

    /// Number of nodes.
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ---------------------------------------------------------------------
    // Bulk operations
    // ---------------------------------------------------------------------

    /// Replace every context with `f(context)`.
    ///
    /// Edges are not reconciled: if `f` changes ids or edge maps, keeping the
    /// graph consistent is up to the caller.
    pub fn map_nodes<F>(&self, f: F) -> Self
    where
        F: FnMut(Context<N, L, E>) -> Context<N, L, E>,
    {
        let nodes = self
            .nodes
            .values()
            .cloned()
            .map(f)
            .map(|ctx| (ctx.id.clone(), ctx))
            .collect();
        Self { nodes }
    }

    /// Keep only the nodes satisfying `pred`; removed nodes take their edges
    /// with them.
    pub fn filter_nodes<P>(&self, mut pred: P) -> Self
    where
        P: FnMut(&Context<N, L, E>) -> bool,
    {
        let doomed: Vec<N> = self
            .nodes
            .values()
            .filter(|ctx| !pred(*ctx))
            .map(|ctx| ctx.id.clone())
            .collect();
        if doomed.is_empty() {
            return self.clone();
        }

        let mut next = self.clone();
        for id in &doomed {
            if let Some(context) = next.nodes.remove(id) {
                next.detach(&context);
            }
        }
        next
    }

    /// Left fold over contexts. Callers must not rely on the visiting order.
    pub fn fold_nodes<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &Context<N, L, E>) -> A,
    {
        self.nodes.values().fold(init, f)
    }

    /// Check the bidirectional adjacency invariant.
    pub fn is_consistent(&self) -> bool
    where
        E: PartialEq,
    {
        self.nodes.iter().all(|(id, ctx)| {
            ctx.id == *id
                && ctx.out_edges.iter().all(|(succ, edge)| {
                    self.nodes
                        .get(succ)
                        .and_then(|other| other.in_edges.get(id))
                        .is_some_and(|mirror| mirror == edge)
                })
                && ctx.in_edges.iter().all(|(pred, edge)| {
                    self.nodes
                        .get(pred)
                        .and_then(|other| other.out_edges.get(id))
                        .is_some_and(|mirror| mirror == edge)
                })
        })
    }

    // ---------------------------------------------------------------------
    // In-place helpers, only ever applied to a freshly cloned graph
    // ---------------------------------------------------------------------

    fn ensure_in_place(&mut self, id: N, label: L) {
        if !self.nodes.contains_key(&id) {
            self.nodes.insert(id.clone(), Context::new(id, label));
        }
    }

    fn put_in_place(&mut self, id: N, label: L) {
        match self.nodes.get_mut(&id) {
            Some(ctx) => ctx.label = label,
            None => {
                self.nodes.insert(id.clone(), Context::new(id, label));
            }
        }
    }

    /// Both endpoints must exist.
    fn connect_in_place(&mut self, from: N, to: N, label: E) {
        if let Some(source) = self.nodes.get_mut(&from) {
            source.out_edges.insert(to.clone(), label.clone());
        }
        if let Some(target) = self.nodes.get_mut(&to) {
            target.in_edges.insert(from, label);
        }
    }

    /// Purge every reference to an already removed context from its
    /// neighbors.
    fn detach(&mut self, context: &Context<N, L, E>) {
        for pred in context.in_edges.keys() {
            if *pred == context.id {
                continue;
            }
            if let Some(neighbor) = self.nodes.get_mut(pred) {
                neighbor.out_edges.remove(&context.id);
            }
        }
        for succ in context.out_edges.keys() {
            if *succ == context.id {
                continue;
            }
            if let Some(neighbor) = self.nodes.get_mut(succ) {
                neighbor.in_edges.remove(&context.id);
            }
        }
    }
}

impl<N, L, E> fmt::Debug for Graph<N, L, E>
where
    N: NodeId,
    L: fmt::Debug,
    E: fmt::Debug + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.nodes.iter().map(|(id, ctx)| (id, ctx)))
            .finish()
    }
}

/// Observational equality: same nodes, labels, and edges.
impl<N, L, E> PartialEq for Graph<N, L, E>
where
    N: NodeId,
    L: PartialEq + Clone,
    E: PartialEq + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl<N, L, E> Eq for Graph<N, L, E>
where
    N: NodeId,
    L: Eq + Clone,
    E: Eq + Clone,
{
}
