//! Priority queue that breaks ties by insertion order.

use std::cmp::Ordering;

use tilesearch_core::Result;

use crate::compare::Comparator;
use crate::heap::BinaryHeap;

/// An item plus its insertion sequence number.
#[derive(Debug, Clone)]
struct Entry<T> {
    seq: u64,
    item: T,
}

/// Puts the entry that sorts first under `C` (and, among equals, the older
/// one) on top of the heap.
#[derive(Debug, Clone)]
struct FirstInOrder<C>(C);

impl<T, C: Comparator<T>> Comparator<Entry<T>> for FirstInOrder<C> {
    #[inline]
    fn compare(&self, a: &Entry<T>, b: &Entry<T>) -> Ordering {
        self.0
            .compare(&b.item, &a.item)
            .then_with(|| b.seq.cmp(&a.seq))
    }
}

/// Stable priority queue.
///
/// [`dequeue`](Self::dequeue) returns the item that sorts first under the
/// comparator; items comparing equal leave in FIFO order. Direction is the
/// comparator's business: compare costs ascending for a cheapest-first
/// queue, descending for a dearest-first one.
#[derive(Debug, Clone)]
pub struct StablePriorityQueue<T, C> {
    heap: BinaryHeap<Entry<T>, FirstInOrder<C>>,
    next_seq: u64,
}

impl<T, C: Comparator<T>> StablePriorityQueue<T, C> {
    pub fn new(cmp: C) -> Self {
        Self {
            heap: BinaryHeap::with_comparator(FirstInOrder(cmp)),
            next_seq: 0,
        }
    }

    pub fn enqueue(&mut self, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { seq, item });
    }

    pub fn dequeue(&mut self) -> Result<T> {
        self.heap.pop().map(|e| e.item)
    }

    pub fn peek(&self) -> Result<&T> {
        self.heap.peek().map(|e| &e.item)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every item. Sequence numbers keep increasing.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{Natural, Reversed};
    use proptest::prelude::*;
    use tilesearch_core::Error;

    fn by_priority(a: &(u32, char), b: &(u32, char)) -> Ordering {
        a.0.cmp(&b.0)
    }

    #[test]
    fn equal_priorities_leave_in_insertion_order() {
        let mut q = StablePriorityQueue::new(by_priority);
        q.enqueue((1, 'a'));
        q.enqueue((1, 'b'));
        q.enqueue((1, 'c'));
        assert_eq!(q.dequeue(), Ok((1, 'a')));
        assert_eq!(q.dequeue(), Ok((1, 'b')));
        assert_eq!(q.dequeue(), Ok((1, 'c')));
    }

    #[test]
    fn lower_priority_first_with_ascending_comparator() {
        let mut q = StablePriorityQueue::new(by_priority);
        for item in [(3, 'x'), (1, 'a'), (2, 'm'), (1, 'b'), (3, 'y')] {
            q.enqueue(item);
        }
        let order: Vec<char> = std::iter::from_fn(|| q.dequeue().ok())
            .map(|(_, c)| c)
            .collect();
        assert_eq!(order, vec!['a', 'b', 'm', 'x', 'y']);
    }

    #[test]
    fn descending_comparator_flips_direction_but_not_ties() {
        let mut q = StablePriorityQueue::new(Reversed(Natural));
        for x in [2, 5, 5, 1] {
            q.enqueue(x);
        }
        assert_eq!(q.peek(), Ok(&5));
        assert_eq!(q.len(), 4);
        let out: Vec<i32> = std::iter::from_fn(|| q.dequeue().ok()).collect();
        assert_eq!(out, vec![5, 5, 2, 1]);
    }

    #[test]
    fn empty_queue_errors() {
        let mut q = StablePriorityQueue::new(Natural);
        q.enqueue(1u8);
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), Err(Error::EmptyCollection));
        assert_eq!(q.peek(), Err(Error::EmptyCollection));
    }

    proptest! {
        #[test]
        fn matches_a_stable_sort(prios in proptest::collection::vec(0u32..5, 0..100)) {
            let items: Vec<(u32, usize)> = prios.into_iter().zip(0..).collect();
            let mut q = StablePriorityQueue::new(|a: &(u32, usize), b: &(u32, usize)| a.0.cmp(&b.0));
            for &item in &items {
                q.enqueue(item);
            }
            let mut expected = items.clone();
            expected.sort_by_key(|&(p, _)| p);
            let out: Vec<(u32, usize)> = std::iter::from_fn(|| q.dequeue().ok()).collect();
            prop_assert_eq!(out, expected);
        }
    }
}
