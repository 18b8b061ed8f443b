use rand::Rng;
use tilesearch_core::{Grid, Position, Result};

use crate::config::Algorithm;
use crate::search::Search;

impl<'g, R: Rng> Search<'g, R> {
    /// Depth-first search towards `goal`, or a depth-first traversal when
    /// `goal` is `None`.
    ///
    /// Passable neighbours are shuffled with `rng` before being pushed, so
    /// runs differ from seed to seed while staying reproducible for a given
    /// seed. A tile is pushed at most once. The route found is generally
    /// not the shortest.
    pub fn depth_first(
        grid: &'g Grid,
        start: Position,
        goal: Option<Position>,
        rng: R,
    ) -> Result<Self> {
        Self::with_parts(grid, Algorithm::DepthFirst, start, goal, None, Some(rng))
    }
}
