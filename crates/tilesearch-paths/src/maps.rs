//! Per-run bookkeeping: predecessor links and best known costs.
//!
//! Both maps are flat arrays indexed in the grid's row-major order, created
//! fresh for every search and dropped with it.

use tilesearch_core::{Grid, Position};

/// How a discovered tile was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Link {
    /// The search started here.
    Root,
    /// Reached by stepping from this tile.
    From(Position),
}

/// Tile → predecessor map. Presence doubles as the "discovered" test.
#[derive(Debug, Clone)]
pub struct PredecessorMap {
    rows: usize,
    cols: usize,
    links: Vec<Option<Link>>,
    len: usize,
}

impl PredecessorMap {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            links: vec![None; rows * cols],
            len: 0,
        }
    }

    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.rows(), grid.cols())
    }

    #[inline]
    fn idx(&self, p: Position) -> Option<usize> {
        (p.row < self.rows && p.col < self.cols).then(|| p.row * self.cols + p.col)
    }

    fn set(&mut self, p: Position, link: Link) {
        if let Some(i) = self.idx(p) {
            if self.links[i].replace(link).is_none() {
                self.len += 1;
            }
        }
    }

    /// Record `p` as a search root.
    pub fn insert_root(&mut self, p: Position) {
        self.set(p, Link::Root);
    }

    /// Record (or rewrite) the predecessor of `p`.
    pub fn insert(&mut self, p: Position, from: Position) {
        self.set(p, Link::From(from));
    }

    #[inline]
    pub fn get(&self, p: Position) -> Option<Link> {
        self.idx(p).and_then(|i| self.links[i])
    }

    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.get(p).is_some()
    }

    /// Number of discovered tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Forget every link.
    pub fn clear(&mut self) {
        self.links.fill(None);
        self.len = 0;
    }

    /// Discovered tiles and their links, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Link)> + '_ {
        self.links.iter().enumerate().filter_map(|(i, link)| {
            link.map(|l| (Position::new(i / self.cols, i % self.cols), l))
        })
    }
}

/// Tile → best known cumulative cost. Unknown tiles cost `+∞`.
#[derive(Debug, Clone)]
pub struct CostMap {
    cols: usize,
    rows: usize,
    costs: Vec<f64>,
}

impl CostMap {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            costs: vec![f64::INFINITY; rows * cols],
        }
    }

    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.rows(), grid.cols())
    }

    #[inline]
    fn idx(&self, p: Position) -> Option<usize> {
        (p.row < self.rows && p.col < self.cols).then(|| p.row * self.cols + p.col)
    }

    #[inline]
    pub fn get(&self, p: Position) -> f64 {
        self.idx(p).map_or(f64::INFINITY, |i| self.costs[i])
    }

    pub fn set(&mut self, p: Position, cost: f64) {
        if let Some(i) = self.idx(p) {
            self.costs[i] = cost;
        }
    }

    pub fn clear(&mut self) {
        self.costs.fill(f64::INFINITY);
    }
}
