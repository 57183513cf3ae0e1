// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Min-priority queue used by the shortest path and spanning tree algorithms.
//!
//! There is no decrease-key: callers push a fresh entry when a priority
//! improves and skip stale entries on pop (lazy deletion).

use crate::pairing_heap::PairingHeap;
use std::fmt;

/// Queue that always pops the entry with the smallest priority.
///
/// Equal priorities pop in insertion order, which keeps algorithm output
/// reproducible run to run.
pub struct PriorityQueue<T, P> {
    heap: PairingHeap<T, P>,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self {
            heap: PairingHeap::new(),
        }
    }

    pub fn push(&mut self, item: T, priority: P) {
        self.heap.push(item, priority);
    }

    /// Remove the minimum-priority entry, or `None` when empty.
    pub fn pop(&mut self) -> Option<(T, P)> {
        self.heap.pop()
    }

    pub fn peek(&self) -> Option<(&T, &P)> {
        self.heap.peek()
    }

    /// Append all entries of `other`.
    pub fn merge(&mut self, other: Self) {
        self.heap.meld(other.heap);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue").finish_non_exhaustive()
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        Self {
            heap: iter.into_iter().collect(),
        }
    }
}

impl<T, P: Ord> Iterator for PriorityQueue<T, P> {
    type Item = (T, P);

    fn next(&mut self) -> Option<Self::Item> {
        self.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}
