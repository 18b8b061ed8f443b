//! Array-backed binary heap ordered by a [`Comparator`].
//!
//! The element that compares greatest sits on top, so the default
//! [`Natural`] comparator gives a max-heap and [`Reversed`](crate::Reversed)
//! a min-heap. The heap is not stable: equal elements come out in no
//! particular order (see [`StablePriorityQueue`](crate::StablePriorityQueue)).

use std::cmp::Ordering;

use tilesearch_core::{Error, Result};

use crate::compare::{Comparator, Natural};

const INITIAL_CAPACITY: usize = 4;

/// A binary heap whose ordering is fully defined by `C`.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T, C = Natural> {
    items: Vec<T>,
    cmp: C,
}

impl<T: Ord> BinaryHeap<T> {
    /// Empty max-heap.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Empty max-heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> BinaryHeap<T, C> {
    /// Empty heap ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(INITIAL_CAPACITY, cmp)
    }

    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Heap ordered by `cmp`, filled from `iter`.
    pub fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, cmp: C) -> Self {
        let mut heap = Self::with_comparator(cmp);
        heap.extend(iter);
        heap
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    #[inline]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Insert `item`. Storage doubles when full.
    pub fn push(&mut self, item: T) {
        if self.items.len() == self.items.capacity() {
            let grow = self.items.capacity().max(INITIAL_CAPACITY);
            self.items.reserve_exact(grow);
        }
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the top element.
    pub fn pop(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::EmptyCollection);
        }
        // The last element takes the root slot, then sinks into place.
        let top = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(top)
    }

    /// The top element.
    pub fn peek(&self) -> Result<&T> {
        self.items.first().ok_or(Error::EmptyCollection)
    }

    /// Drop every element but keep the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Elements in internal (heap) order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The backing array, in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    #[inline]
    fn greater(&self, a: usize, b: usize) -> bool {
        self.cmp.compare(&self.items[a], &self.items[b]) == Ordering::Greater
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if !self.greater(child, parent) {
                break;
            }
            self.items.swap(child, parent);
            child = parent;
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * parent + 1;
            let right = left + 1;
            let mut largest = parent;
            if left < len && self.greater(left, largest) {
                largest = left;
            }
            if right < len && self.greater(right, largest) {
                largest = right;
            }
            if largest == parent {
                break;
            }
            self.items.swap(parent, largest);
            parent = largest;
        }
    }

    /// Whether every parent compares `>=` both of its children.
    #[cfg(test)]
    pub(crate) fn is_valid(&self) -> bool {
        (1..self.items.len()).all(|i| !self.greater(i, (i - 1) / 2))
    }
}

impl<T, C: Comparator<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, Natural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Reversed;
    use proptest::prelude::*;

    fn drain<T, C: Comparator<T>>(heap: &mut BinaryHeap<T, C>) -> Vec<T> {
        let mut out = Vec::new();
        while let Ok(x) = heap.pop() {
            out.push(x);
        }
        out
    }

    #[test]
    fn max_heap_by_default() {
        let mut heap = BinaryHeap::new();
        for x in [5, 3, 8, 1] {
            heap.push(x);
        }
        assert_eq!(heap.peek(), Ok(&8));
        assert_eq!(drain(&mut heap), vec![8, 5, 3, 1]);
    }

    #[test]
    fn reversed_comparator_gives_min_heap() {
        let mut heap: BinaryHeap<i32, _> =
            BinaryHeap::from_iter_with([5, 3, 8, 1], Reversed(Natural));
        assert_eq!(drain(&mut heap), vec![1, 3, 5, 8]);
    }

    #[test]
    fn closure_comparator() {
        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        let mut heap = BinaryHeap::from_iter_with([-7, 2, 5, -1], by_abs);
        assert_eq!(heap.pop(), Ok(-7));
        assert_eq!(heap.pop(), Ok(5));
    }

    #[test]
    fn empty_heap_errors() {
        let mut heap: BinaryHeap<u8> = BinaryHeap::new();
        assert_eq!(heap.peek(), Err(Error::EmptyCollection));
        assert_eq!(heap.pop(), Err(Error::EmptyCollection));
    }

    #[test]
    fn capacity_doubles_when_full() {
        let mut heap = BinaryHeap::with_capacity(4);
        let full = heap.capacity();
        for x in 0..full {
            heap.push(x);
        }
        assert_eq!(heap.capacity(), full);
        heap.push(full);
        assert!(heap.capacity() >= 2 * full);
        assert!(heap.is_valid());
    }

    #[test]
    fn zero_capacity_still_grows() {
        let mut heap = BinaryHeap::with_capacity(0);
        heap.push(1);
        heap.push(2);
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn clear_keeps_allocation() {
        let mut heap: BinaryHeap<i32> = (0..32).collect();
        let cap = heap.capacity();
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.capacity(), cap);
        assert_eq!(heap.pop(), Err(Error::EmptyCollection));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Push(i16),
        Pop,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![any::<i16>().prop_map(Op::Push), Just(Op::Pop)]
    }

    proptest! {
        #[test]
        fn invariant_holds_after_any_ops(ops in proptest::collection::vec(op(), 0..200)) {
            let mut heap = BinaryHeap::new();
            let mut model: Vec<i16> = Vec::new();
            for op in ops {
                match op {
                    Op::Push(x) => {
                        heap.push(x);
                        model.push(x);
                    }
                    Op::Pop => {
                        let expected = model.iter().copied().max();
                        prop_assert_eq!(heap.pop().ok(), expected);
                        if let Some(m) = expected {
                            let i = model.iter().position(|&v| v == m).unwrap();
                            model.swap_remove(i);
                        }
                    }
                }
                prop_assert!(heap.is_valid());
                prop_assert_eq!(heap.len(), model.len());
            }
        }

        #[test]
        fn min_heap_drains_sorted(mut xs in proptest::collection::vec(any::<i32>(), 0..100)) {
            let mut heap = BinaryHeap::from_iter_with(xs.clone(), Reversed(Natural));
            prop_assert!(heap.is_valid());
            xs.sort();
            prop_assert_eq!(drain(&mut heap), xs);
        }
    }
}
