// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Mergeable min-heap (pairing heap).
//!
//! `push` and `meld` are O(1); `pop` is amortized O(log n) using the standard
//! two-pass pairing of the root's children. Among equal priorities the element
//! that has been in the heap longest wins a link, so pop order is fully
//! determined by the sequence of operations.

struct HeapNode<T, P> {
    item: T,
    priority: P,
    /// Insertion stamp, breaks priority ties.
    seq: u64,
    children: Vec<HeapNode<T, P>>,
}

impl<T, P: Ord> HeapNode<T, P> {
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        (&self.priority, self.seq) <= (&other.priority, other.seq)
    }

    fn link(mut self, mut other: Self) -> Self {
        if self.precedes(&other) {
            self.children.push(other);
            self
        } else {
            other.children.push(self);
            other
        }
    }
}

/// Min-heap of `T` keyed by priority `P`.
pub struct PairingHeap<T, P> {
    root: Option<HeapNode<T, P>>,
    len: usize,
    next_seq: u64,
}

impl<T, P: Ord> PairingHeap<T, P> {
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            next_seq: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, item: T, priority: P) {
        let node = HeapNode {
            item,
            priority,
            seq: self.next_seq,
            children: Vec::new(),
        };
        self.next_seq += 1;
        self.len += 1;
        self.root = Some(match self.root.take() {
            Some(root) => root.link(node),
            None => node,
        });
    }

    /// Smallest element without removing it.
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.root.as_ref().map(|node| (&node.item, &node.priority))
    }

    /// Remove and return the smallest element.
    pub fn pop(&mut self) -> Option<(T, P)> {
        let root = self.root.take()?;
        self.len -= 1;
        let HeapNode {
            item,
            priority,
            children,
            ..
        } = root;
        self.root = Self::merge_pairs(children);
        Some((item, priority))
    }

    /// Move every element of `other` into `self`.
    ///
    /// Elements of `other` rank after elements of `self` on priority ties.
    pub fn meld(&mut self, mut other: Self) {
        let offset = self.next_seq;
        if let Some(root) = other.root.as_mut() {
            Self::shift_seq(root, offset);
        }
        self.next_seq += other.next_seq;
        self.len += other.len;
        other.len = 0;
        self.root = match (self.root.take(), other.root.take()) {
            (Some(a), Some(b)) => Some(a.link(b)),
            (a, b) => a.or(b),
        };
    }

    pub fn clear(&mut self) {
        teardown(self.root.take());
        self.len = 0;
    }

    /// Two-pass pairing: link siblings left to right in pairs, then fold the
    /// pairs right to left.
    fn merge_pairs(children: Vec<HeapNode<T, P>>) -> Option<HeapNode<T, P>> {
        let mut paired = Vec::with_capacity(children.len().div_ceil(2));
        let mut iter = children.into_iter();
        while let Some(first) = iter.next() {
            match iter.next() {
                Some(second) => paired.push(first.link(second)),
                None => paired.push(first),
            }
        }

        let mut merged = paired.pop()?;
        while let Some(node) = paired.pop() {
            merged = node.link(merged);
        }
        Some(merged)
    }

    fn shift_seq(root: &mut HeapNode<T, P>, offset: u64) {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            node.seq += offset;
            stack.extend(node.children.iter_mut());
        }
    }
}

/// Flatten a tree before dropping it; dropping a deep chain of nested
/// children recursively would overflow the stack.
fn teardown<T, P>(root: Option<HeapNode<T, P>>) {
    let mut stack: Vec<HeapNode<T, P>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.append(&mut node.children);
    }
}

impl<T, P: Ord> Default for PairingHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> Drop for PairingHeap<T, P> {
    fn drop(&mut self) {
        teardown(self.root.take());
    }
}

impl<T, P: Ord> Extend<(T, P)> for PairingHeap<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (item, priority) in iter {
            self.push(item, priority);
        }
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for PairingHeap<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T, P: Ord>(heap: &mut PairingHeap<T, P>) -> Vec<(T, P)> {
        std::iter::from_fn(|| heap.pop()).collect()
    }

    #[test]
    fn test_pop_in_priority_order() {
        let mut heap: PairingHeap<char, u32> =
            [('d', 4), ('a', 1), ('c', 3), ('e', 5), ('b', 2)].into_iter().collect();
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.peek(), Some((&'a', &1)));
        let order: Vec<char> = drain(&mut heap).into_iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec!['a', 'b', 'c', 'd', 'e']);
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        let mut heap = PairingHeap::new();
        for item in ["x", "y", "z"] {
            heap.push(item, 1);
        }
        heap.push("w", 0);
        let order: Vec<&str> = drain(&mut heap).into_iter().map(|(s, _)| s).collect();
        assert_eq!(order, vec!["w", "x", "y", "z"]);
    }

    #[test]
    fn test_meld() {
        let mut a: PairingHeap<u32, u32> = [(1, 10), (2, 30)].into_iter().collect();
        let b: PairingHeap<u32, u32> = [(3, 20), (4, 5), (5, 10)].into_iter().collect();
        a.meld(b);
        assert_eq!(a.len(), 5);
        let order: Vec<u32> = drain(&mut a).into_iter().map(|(i, _)| i).collect();
        assert_eq!(order, vec![4, 1, 5, 3, 2]);
    }

    #[test]
    fn test_deep_heap_drops_without_recursion() {
        let mut heap = PairingHeap::new();
        for i in (0..200_000u32).rev() {
            heap.push(i, i);
        }
        assert_eq!(heap.peek(), Some((&0, &0)));
        drop(heap);
    }

    #[test]
    fn test_clear() {
        let mut heap: PairingHeap<u8, u8> = [(1, 1), (2, 2)].into_iter().collect();
        heap.clear();
        assert!(heap.is_empty());
        heap.push(3, 3);
        assert_eq!(heap.pop(), Some((3, 3)));
    }
}
