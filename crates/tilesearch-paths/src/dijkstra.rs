use tilesearch_core::{Grid, Position, Result};

use crate::config::Algorithm;
use crate::search::Search;

impl<'g> Search<'g> {
    /// Uniform-cost (Dijkstra) search towards `goal`.
    ///
    /// Entering a tile costs its weight. Tiles leave the frontier in order
    /// of cumulative cost, ties in discovery order, so the route found is
    /// the cheapest. With `goal` set to `None` the whole reachable area is
    /// expanded and [`cost_at`](Search::cost_at) gives every tile's distance.
    pub fn uniform_cost(grid: &'g Grid, start: Position, goal: Option<Position>) -> Result<Self> {
        Self::with_parts(grid, Algorithm::UniformCost, start, goal, None, None)
    }
}
