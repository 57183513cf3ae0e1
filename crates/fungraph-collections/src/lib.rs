// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Reusable collections behind the graph algorithms: a mergeable pairing heap,
//! the min-priority queue built on it, and a union-find forest.

pub mod disjoint_set;
pub mod pairing_heap;
pub mod priority_queue;

pub use disjoint_set::DisjointSet;
pub use pairing_heap::PairingHeap;
pub use priority_queue::PriorityQueue;
