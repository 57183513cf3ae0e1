// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Disjoint-set forest over the integer labels `0..n`.
//!
//! Union by rank plus path halving on `find`, giving near-constant amortized
//! operations. `find` takes `&mut self` because it compresses paths.

use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<u32>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    /// `n` singleton sets labelled `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    #[inline]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Representative of the set containing `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut x = x as u32;
        while self.parent[x as usize] != x {
            // path halving
            self.parent[x as usize] = self.parent[self.parent[x as usize] as usize];
            x = self.parent[x as usize];
        }
        x as usize
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `false` if they were already the same set.
    ///
    /// # Panics
    ///
    /// Panics if either label is out of range.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            Ordering::Less => self.parent[ra] = rb as u32,
            Ordering::Greater => self.parent[rb] = ra as u32,
            Ordering::Equal => {
                self.parent[rb] = ra as u32;
                self.rank[ra] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut ds = DisjointSet::new(4);
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.set_count(), 4);
        for i in 0..4 {
            assert_eq!(ds.find(i), i);
        }
    }

    #[test]
    fn test_union_and_find() {
        let mut ds = DisjointSet::new(6);
        assert!(ds.union(0, 1));
        assert!(ds.union(2, 3));
        assert!(ds.union(1, 3));
        assert!(!ds.union(0, 2));
        assert!(ds.same_set(0, 3));
        assert!(!ds.same_set(0, 4));
        assert_eq!(ds.set_count(), 3);
    }

    #[test]
    fn test_union_is_idempotent() {
        let mut ds = DisjointSet::new(2);
        assert!(ds.union(0, 1));
        let root = ds.find(0);
        assert!(!ds.union(1, 0));
        assert_eq!(ds.find(1), root);
        assert_eq!(ds.set_count(), 1);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_panics() {
        let mut ds = DisjointSet::new(1);
        ds.find(3);
    }
}
