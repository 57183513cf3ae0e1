// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Identity mapping between caller-supplied node ids and dense algorithm slots.
//!
//! Array-based algorithms (Bellman-Ford, Kruskal's union-find) want indices
//! `0..V`. Graph ids are arbitrary ordered values, so this module provides the
//! bidirectional mapping between the two representations.

use fungraph_common::{Graph, NodeId};
use fxhash::FxHashMap;

/// Bidirectional mapping between node ids and dense slots.
///
/// # Example
///
/// ```ignore
/// let mut id_map = IdMap::new();
/// id_map.insert("a");  // slot 0
/// id_map.insert("b");  // slot 1
///
/// assert_eq!(id_map.to_slot(&"a"), Some(0));
/// assert_eq!(id_map.to_id(1), Some(&"b"));
/// ```
#[derive(Debug, Clone)]
pub struct IdMap<N> {
    /// Dense slot -> node id
    slot_to_id: Vec<N>,
    /// Node id -> dense slot (None if compacted)
    id_to_slot: Option<FxHashMap<N, u32>>,
}

impl<N: NodeId> IdMap<N> {
    /// Create an empty ID map.
    pub fn new() -> Self {
        Self {
            slot_to_id: Vec::new(),
            id_to_slot: Some(FxHashMap::default()),
        }
    }

    /// Create an ID map with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slot_to_id: Vec::with_capacity(capacity),
            id_to_slot: Some(FxHashMap::with_capacity_and_hasher(
                capacity,
                Default::default(),
            )),
        }
    }

    /// Map every node of `graph`, compacted.
    ///
    /// Graph ids iterate in ascending order, so slots follow id order and
    /// lookups can binary search without the hash index.
    pub fn from_graph<L: Clone, E: Clone>(graph: &Graph<N, L, E>) -> Self {
        let mut map = Self {
            slot_to_id: graph.node_ids().cloned().collect(),
            id_to_slot: None,
        };
        map.compact();
        map
    }

    /// Insert an id and return its slot.
    ///
    /// If the id already exists, returns the existing slot. A compacted map
    /// only accepts ids greater than every id it holds.
    pub fn insert(&mut self, id: N) -> u32 {
        if let Some(slot) = self.to_slot(&id) {
            return slot;
        }

        let slot = self.slot_to_id.len() as u32;
        match self.id_to_slot.as_mut() {
            Some(map) => {
                map.insert(id.clone(), slot);
            }
            None => {
                // keep binary search valid: fall back to the hash index
                if self.slot_to_id.last().is_some_and(|last| *last > id) {
                    self.id_to_slot = Some(
                        self.slot_to_id
                            .iter()
                            .enumerate()
                            .map(|(slot, id)| (id.clone(), slot as u32))
                            .chain(std::iter::once((id.clone(), slot)))
                            .collect(),
                    );
                }
            }
        }
        self.slot_to_id.push(id);
        slot
    }

    /// Get the slot for an id.
    ///
    /// If compacted, uses binary search (ids are held in sorted order).
    #[inline]
    pub fn to_slot(&self, id: &N) -> Option<u32> {
        if let Some(map) = &self.id_to_slot {
            map.get(id).copied()
        } else {
            self.slot_to_id.binary_search(id).ok().map(|i| i as u32)
        }
    }

    /// Get the id for a slot.
    #[inline]
    pub fn to_id(&self, slot: u32) -> Option<&N> {
        self.slot_to_id.get(slot as usize)
    }

    /// Get the id for a slot (panics if out of bounds).
    #[inline]
    pub fn to_id_unchecked(&self, slot: u32) -> &N {
        &self.slot_to_id[slot as usize]
    }

    /// Number of mapped nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.slot_to_id.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slot_to_id.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: &N) -> bool {
        self.to_slot(id).is_some()
    }

    /// Drop the hash index if the ids are sorted; lookups then binary search.
    pub fn compact(&mut self) {
        if self.slot_to_id.windows(2).all(|w| w[0] < w[1]) {
            self.id_to_slot = None;
        }
    }

    pub fn is_compact(&self) -> bool {
        self.id_to_slot.is_none()
    }

    /// Iterate over all (slot, id) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &N)> + '_ {
        self.slot_to_id
            .iter()
            .enumerate()
            .map(|(slot, id)| (slot as u32, id))
    }
}

impl<N: NodeId> Default for IdMap<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> FromIterator<N> for IdMap<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, upper) = iter.size_hint();
        let mut map = Self::with_capacity(upper.unwrap_or(lower));

        for id in iter {
            map.insert(id);
        }

        map
    }
}
