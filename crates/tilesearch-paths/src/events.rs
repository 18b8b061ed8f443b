use tilesearch_core::{Error, Position};

use crate::path::Path;

/// Something a presentation layer may want to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Removed from the frontier and expanded.
    Visited(Position),
    /// Discovered and queued for the first time.
    FrontierEntered(Position),
    /// A cheaper cumulative cost was recorded (weighted searches only).
    CostUpdated { pos: Position, cost: f64 },
    /// The goal was removed from the frontier.
    Succeeded(Path),
    /// The frontier ran dry before reaching the goal.
    Failed(Error),
    /// A goal-less traversal expanded every reachable tile.
    TraversalCompleted { visited: usize },
}

/// Lifecycle of a [`Search`](crate::Search).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Succeeded,
    Failed,
    Completed,
}

/// Result of running a search to completion.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The goal was reached.
    Found(Path),
    /// A goal-less traversal finished; tiles in expansion order.
    Traversed(Vec<Position>),
}

impl Outcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Outcome::Found(p) => Some(p),
            Outcome::Traversed(_) => None,
        }
    }
}
