//! Grid setup configuration.

use rand::Rng;

use crate::error::Result;
use crate::geom::Position;
use crate::grid::Grid;

/// Shape and obstacle density of a randomly generated grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub rows: usize,
    pub columns: usize,
    /// Fraction of tiles (0.0–1.0) made impassable.
    pub obstacle_ratio: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            columns: 10,
            obstacle_ratio: 0.2,
        }
    }
}

impl GridConfig {
    /// Build a grid and scatter obstacles, leaving `keep` passable.
    pub fn build<R: Rng>(&self, rng: &mut R, keep: &[Position]) -> Result<Grid> {
        let mut grid = Grid::new(self.rows, self.columns)?;
        grid.scatter_obstacles(rng, self.obstacle_ratio, keep)?;
        Ok(grid)
    }
}
