//! The [`Grid`] type — a fixed-size, row-major matrix of [`Tile`]s.
//!
//! The shape never changes after construction. Tile weight and passability
//! may be edited between searches; a running search holds a shared borrow of
//! the grid, so edits during a run are rejected by the borrow checker.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{Error, Result};
use crate::geom::{Direction, Position};
use crate::tile::Tile;

/// A rows × columns matrix of tiles with 4-directional adjacency.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a grid of passable, unit-weight tiles.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidConstruction(format!(
                "grid dimensions must be non-zero, got {rows}x{cols}"
            )));
        }
        let len = rows.checked_mul(cols).ok_or_else(|| {
            Error::InvalidConstruction(format!("grid of {rows}x{cols} tiles is too large"))
        })?;
        let tiles = (0..len)
            .map(|i| Tile::new(Position::new(i / cols, i % cols)))
            .collect();
        Ok(Self { rows, cols, tiles })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`: zero-sized grids cannot be built.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.row < self.rows && p.col < self.cols
    }

    /// Row-major flat index of `p`, or `None` if out of range.
    #[inline]
    pub fn index_of(&self, p: Position) -> Option<usize> {
        self.contains(p).then(|| p.row * self.cols + p.col)
    }

    /// Inverse of [`index_of`](Grid::index_of). `idx` must be `< len()`.
    #[inline]
    pub fn position_of(&self, idx: usize) -> Position {
        Position::new(idx / self.cols, idx % self.cols)
    }

    /// Bounds-checked lookup.
    pub fn tile(&self, row: usize, col: usize) -> Result<&Tile> {
        let idx = self.checked_index(row, col)?;
        Ok(&self.tiles[idx])
    }

    /// Bounds-checked lookup by position.
    #[inline]
    pub fn tile_at(&self, p: Position) -> Result<&Tile> {
        self.tile(p.row, p.col)
    }

    /// Bounds-checked mutable lookup.
    pub fn tile_mut(&mut self, row: usize, col: usize) -> Result<&mut Tile> {
        let idx = self.checked_index(row, col)?;
        Ok(&mut self.tiles[idx])
    }

    /// Mark the tile at `p` as passable or blocked.
    pub fn set_passable(&mut self, p: Position, passable: bool) -> Result<()> {
        self.tile_mut(p.row, p.col)?.set_passable(passable);
        Ok(())
    }

    /// Change the entry cost of the tile at `p`.
    pub fn set_weight(&mut self, p: Position, weight: f64) -> Result<()> {
        self.tile_mut(p.row, p.col)?.set_weight(weight)
    }

    /// In-bounds neighbours of `p`, in the order up, right, down, left.
    ///
    /// Passability is not considered; callers filter.
    pub fn neighbors(&self, p: Position) -> Neighbors<'_> {
        Neighbors {
            grid: self,
            origin: p,
            next: 0,
        }
    }

    /// Row-major iterator over every tile.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Number of tiles that can be entered.
    pub fn passable_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_passable()).count()
    }

    /// Block `floor(len * ratio)` distinct random tiles, never touching
    /// positions listed in `keep`. Returns how many tiles were blocked.
    pub fn scatter_obstacles<R: Rng>(
        &mut self,
        rng: &mut R,
        ratio: f64,
        keep: &[Position],
    ) -> Result<usize> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(Error::InvalidConstruction(format!(
                "obstacle ratio must be within [0, 1], got {ratio}"
            )));
        }
        let mut candidates: Vec<usize> = (0..self.len())
            .filter(|&i| !keep.contains(&self.position_of(i)))
            .collect();
        candidates.shuffle(rng);

        let wanted = ((self.len() as f64) * ratio).floor() as usize;
        let count = wanted.min(candidates.len());
        for &i in &candidates[..count] {
            self.tiles[i].set_passable(false);
        }
        Ok(count)
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        self.index_of(Position::new(row, col))
            .ok_or(Error::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Neighbors
// ---------------------------------------------------------------------------

/// Iterator over the in-bounds cardinal neighbours of a position.
pub struct Neighbors<'a> {
    grid: &'a Grid,
    origin: Position,
    next: usize,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a Tile;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&dir) = Direction::ALL.get(self.next) {
            self.next += 1;
            if let Some(idx) = self.origin.step(dir).and_then(|p| self.grid.index_of(p)) {
                return Some(&self.grid.tiles[idx]);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(Direction::ALL.len() - self.next))
    }
}

// Tiles are checked one by one on the way in; the grid then checks that
// they fill its shape in row-major order.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        #[derive(serde::Deserialize)]
        struct RawGrid {
            rows: usize,
            cols: usize,
            tiles: Vec<Tile>,
        }

        let raw = <RawGrid as serde::Deserialize>::deserialize(deserializer)?;
        let mut grid = Grid::new(raw.rows, raw.cols).map_err(D::Error::custom)?;
        if raw.tiles.len() != grid.len() {
            return Err(D::Error::custom(format!(
                "a {}x{} grid needs {} tiles, got {}",
                raw.rows,
                raw.cols,
                grid.len(),
                raw.tiles.len()
            )));
        }
        for (i, tile) in raw.tiles.iter().enumerate() {
            let expected = grid.position_of(i);
            if tile.pos() != expected {
                return Err(D::Error::custom(format!(
                    "tile {i} is at {}, expected {expected}",
                    tile.pos()
                )));
            }
        }
        grid.tiles = raw.tiles;
        Ok(grid)
    }
}
