use tilesearch_core::{Grid, Position, Result};

use crate::config::Algorithm;
use crate::distance::Heuristic;
use crate::search::Search;

impl<'g> Search<'g> {
    /// A* search from `start` to `goal`.
    ///
    /// Frontier order is cumulative cost plus `heuristic(tile, goal)`. The
    /// route is optimal whenever the heuristic never overestimates the
    /// remaining cost.
    pub fn astar<H: Heuristic + 'g>(
        grid: &'g Grid,
        start: Position,
        goal: Position,
        heuristic: H,
    ) -> Result<Self> {
        Self::with_parts(
            grid,
            Algorithm::AStar,
            start,
            Some(goal),
            Some(Box::new(heuristic)),
            None,
        )
    }

    /// Greedy best-first search from `start` to `goal`.
    ///
    /// Frontier order is `heuristic(tile, goal)` alone. Costs are still
    /// tracked and reported, but they do not steer the search, so the route
    /// is usually found quickly and is not necessarily the cheapest.
    pub fn best_first<H: Heuristic + 'g>(
        grid: &'g Grid,
        start: Position,
        goal: Position,
        heuristic: H,
    ) -> Result<Self> {
        Self::with_parts(
            grid,
            Algorithm::BestFirst,
            start,
            Some(goal),
            Some(Box::new(heuristic)),
            None,
        )
    }
}
