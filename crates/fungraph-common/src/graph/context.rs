// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Node context: one vertex together with its incident edges.
//!
//! A context is the unit that [`Graph::decompose`] takes apart and
//! [`Graph::embed`] puts back. Both edge maps are persistent, so cloning a
//! context or pulling it out of a graph never copies adjacency data.
//!
//! [`Graph::decompose`]: crate::graph::inductive_graph::Graph::decompose
//! [`Graph::embed`]: crate::graph::inductive_graph::Graph::embed

use crate::core::id::NodeId;
use imbl::OrdMap;
use std::fmt;

/// A vertex, its label, and its incoming and outgoing edge maps.
///
/// `in_edges` maps predecessor -> label of the edge `predecessor -> id`;
/// `out_edges` maps successor -> label of the edge `id -> successor`.
/// A self-loop appears in both maps under the node's own id.
#[derive(Clone)]
pub struct Context<N, L, E> {
    pub(crate) id: N,
    pub(crate) label: L,
    pub(crate) in_edges: OrdMap<N, E>,
    pub(crate) out_edges: OrdMap<N, E>,
}

impl<N: NodeId, L: Clone, E: Clone> Context<N, L, E> {
    /// Context with no incident edges.
    pub fn new(id: N, label: L) -> Self {
        Self {
            id,
            label,
            in_edges: OrdMap::new(),
            out_edges: OrdMap::new(),
        }
    }

    /// Assemble a context from raw parts.
    ///
    /// The graph only restores edges to neighbors that exist when the context
    /// is embedded, so stale entries here are harmless.
    pub fn from_parts(id: N, label: L, in_edges: OrdMap<N, E>, out_edges: OrdMap<N, E>) -> Self {
        Self {
            id,
            label,
            in_edges,
            out_edges,
        }
    }

    pub fn into_parts(self) -> (N, L, OrdMap<N, E>, OrdMap<N, E>) {
        (self.id, self.label, self.in_edges, self.out_edges)
    }

    #[inline]
    pub fn id(&self) -> &N {
        &self.id
    }

    #[inline]
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Same context with its label replaced.
    pub fn with_label(self, label: L) -> Self {
        Self { label, ..self }
    }

    #[inline]
    pub fn in_edges(&self) -> &OrdMap<N, E> {
        &self.in_edges
    }

    #[inline]
    pub fn out_edges(&self) -> &OrdMap<N, E> {
        &self.out_edges
    }

    /// Targets of outgoing edges, in ascending id order.
    pub fn successors(&self) -> impl Iterator<Item = &N> + '_ {
        self.out_edges.keys()
    }

    /// Sources of incoming edges, in ascending id order.
    pub fn predecessors(&self) -> impl Iterator<Item = &N> + '_ {
        self.in_edges.keys()
    }

    /// Distinct nodes adjacent in either direction, in ascending id order.
    ///
    /// A neighbor reachable both ways appears once.
    pub fn neighbors(&self) -> Vec<&N> {
        let mut merged = Vec::with_capacity(self.in_edges.len() + self.out_edges.len());
        let mut ins = self.in_edges.keys().peekable();
        let mut outs = self.out_edges.keys().peekable();

        loop {
            let next = match (ins.peek(), outs.peek()) {
                (Some(a), Some(b)) if a < b => ins.next(),
                (Some(a), Some(b)) if b < a => outs.next(),
                (Some(_), Some(_)) => {
                    ins.next();
                    outs.next()
                }
                (Some(_), None) => ins.next(),
                (None, Some(_)) => outs.next(),
                (None, None) => break,
            };
            if let Some(id) = next {
                merged.push(id);
            }
        }

        merged
    }

    #[inline]
    pub fn out_degree(&self) -> usize {
        self.out_edges.len()
    }

    #[inline]
    pub fn in_degree(&self) -> usize {
        self.in_edges.len()
    }

    /// Number of distinct neighbors, not the number of incident edges.
    pub fn degree(&self) -> usize {
        self.neighbors().len()
    }

    pub fn has_self_loop(&self) -> bool {
        self.out_edges.contains_key(&self.id)
    }

    /// Same context with incoming and outgoing edges swapped.
    pub fn reversed(self) -> Self {
        Self {
            in_edges: self.out_edges,
            out_edges: self.in_edges,
            ..self
        }
    }
}

impl<N, L, E> fmt::Debug for Context<N, L, E>
where
    N: NodeId,
    L: fmt::Debug,
    E: fmt::Debug + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("in_edges", &self.in_edges)
            .field("out_edges", &self.out_edges)
            .finish()
    }
}

impl<N, L, E> PartialEq for Context<N, L, E>
where
    N: NodeId,
    L: PartialEq,
    E: PartialEq + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.label == other.label
            && self.in_edges == other.in_edges
            && self.out_edges == other.out_edges
    }
}

impl<N, L, E> Eq for Context<N, L, E>
where
    N: NodeId,
    L: Eq,
    E: Eq + Clone,
{
}
