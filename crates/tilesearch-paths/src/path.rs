//! Finished routes and predecessor-chain reconstruction.

use tilesearch_core::{Error, Grid, Position, Result};

use crate::maps::{Link, PredecessorMap};

/// An ordered route from start to goal, both inclusive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path {
    tiles: Vec<Position>,
    cost: f64,
}

impl Path {
    /// Wrap a reconstructed route, pricing it as the sum of the weights of
    /// every tile entered after the start.
    pub fn from_route(grid: &Grid, tiles: Vec<Position>) -> Result<Self> {
        if tiles.is_empty() {
            return Err(Error::InvalidConstruction("a path needs at least one tile".into()));
        }
        let mut cost = 0.0;
        for &p in &tiles[1..] {
            cost += grid.tile_at(p)?.weight();
        }
        Ok(Self { tiles, cost })
    }

    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.tiles
    }

    pub fn into_positions(self) -> Vec<Position> {
        self.tiles
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.tiles[0]
    }

    #[inline]
    pub fn goal(&self) -> Position {
        self.tiles[self.tiles.len() - 1]
    }

    /// Number of tiles, endpoints included. Always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of moves.
    #[inline]
    pub fn edges(&self) -> usize {
        self.tiles.len() - 1
    }

    /// Total weight of the tiles entered along the way.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The route without its start and goal tiles.
    pub fn interior(&self) -> &[Position] {
        match self.tiles.len() {
            0..=2 => &[],
            n => &self.tiles[1..n - 1],
        }
    }

    pub fn contains(&self, p: Position) -> bool {
        self.tiles.contains(&p)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        #[derive(serde::Deserialize)]
        struct RawPath {
            tiles: Vec<Position>,
            cost: f64,
        }

        let raw = <RawPath as serde::Deserialize>::deserialize(deserializer)?;
        if raw.tiles.is_empty() {
            return Err(D::Error::custom("a path needs at least one tile"));
        }
        if let Some(w) = raw.tiles.windows(2).find(|w| !w[0].is_adjacent(w[1])) {
            return Err(D::Error::custom(format!("{} and {} are not adjacent", w[0], w[1])));
        }
        if !raw.cost.is_finite() || raw.cost < 0.0 {
            return Err(D::Error::custom(format!("invalid path cost {}", raw.cost)));
        }
        Ok(Self {
            tiles: raw.tiles,
            cost: raw.cost,
        })
    }
}

/// Walk predecessor links back from `goal` to the root.
///
/// Returns the route in start → goal order. Fails with
/// [`Error::Unreachable`] if `goal` was never discovered.
pub fn reconstruct(goal: Position, predecessors: &PredecessorMap) -> Result<Vec<Position>> {
    let mut route = vec![goal];
    let mut current = goal;
    // A well-formed chain visits each discovered tile at most once.
    for _ in 0..=predecessors.len() {
        match predecessors.get(current) {
            None => return Err(Error::Unreachable),
            Some(Link::Root) => {
                route.reverse();
                return Ok(route);
            }
            Some(Link::From(prev)) => {
                route.push(prev);
                current = prev;
            }
        }
    }
    Err(Error::Unreachable)
}
