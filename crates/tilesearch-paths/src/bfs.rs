use tilesearch_core::{Grid, Position, Result};

use crate::config::Algorithm;
use crate::search::Search;

impl<'g> Search<'g> {
    /// Breadth-first search towards `goal`, or a breadth-first traversal of
    /// everything reachable from `start` when `goal` is `None`.
    ///
    /// Tile weights are ignored; the route found is shortest by hop count.
    pub fn breadth_first(grid: &'g Grid, start: Position, goal: Option<Position>) -> Result<Self> {
        Self::with_parts(grid, Algorithm::BreadthFirst, start, goal, None, None)
    }
}
