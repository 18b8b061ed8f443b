//! Frontier containers, one per exploration policy.

use std::cmp::Ordering;
use std::collections::VecDeque;

use tilesearch_core::Position;

use crate::compare::Comparator;
use crate::config::Algorithm;
use crate::queue::StablePriorityQueue;

/// A queued tile and the priority it had when it was queued.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Queued {
    pub(crate) pos: Position,
    pub(crate) priority: f64,
}

/// Smallest priority first.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Ascending;

impl Comparator<Queued> for Ascending {
    #[inline]
    fn compare(&self, a: &Queued, b: &Queued) -> Ordering {
        a.priority.total_cmp(&b.priority)
    }
}

pub(crate) enum Frontier {
    Fifo(VecDeque<Position>),
    Lifo(Vec<Position>),
    Priority(StablePriorityQueue<Queued, Ascending>),
}

impl Frontier {
    pub(crate) fn for_algorithm(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::BreadthFirst => Frontier::Fifo(VecDeque::new()),
            Algorithm::DepthFirst => Frontier::Lifo(Vec::new()),
            Algorithm::UniformCost | Algorithm::BestFirst | Algorithm::AStar => {
                Frontier::Priority(StablePriorityQueue::new(Ascending))
            }
        }
    }

    /// `priority` is ignored by the FIFO and LIFO frontiers.
    pub(crate) fn push(&mut self, pos: Position, priority: f64) {
        match self {
            Frontier::Fifo(q) => q.push_back(pos),
            Frontier::Lifo(s) => s.push(pos),
            Frontier::Priority(q) => q.enqueue(Queued { pos, priority }),
        }
    }

    pub(crate) fn pop(&mut self) -> Option<Position> {
        match self {
            Frontier::Fifo(q) => q.pop_front(),
            Frontier::Lifo(s) => s.pop(),
            Frontier::Priority(q) => q.dequeue().ok().map(|e| e.pos),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Frontier::Fifo(q) => q.len(),
            Frontier::Lifo(s) => s.len(),
            Frontier::Priority(q) => q.len(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn clear(&mut self) {
        match self {
            Frontier::Fifo(q) => q.clear(),
            Frontier::Lifo(s) => s.clear(),
            Frontier::Priority(q) => q.clear(),
        }
    }
}
