//! The [`Tile`] type — one weighted, possibly blocked grid node.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};
use crate::geom::Position;

/// Traversal cost of an ordinary tile.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A grid node.
///
/// Equality and hashing only look at [`Tile::pos`]: two tiles at the same
/// position are the same node no matter their weight or passability.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tile {
    pos: Position,
    weight: f64,
    passable: bool,
}

impl Tile {
    /// A passable tile with the default weight.
    #[inline]
    pub const fn new(pos: Position) -> Self {
        Self {
            pos,
            weight: DEFAULT_WEIGHT,
            passable: true,
        }
    }

    /// A passable tile with a custom weight.
    pub fn with_weight(pos: Position, weight: f64) -> Result<Self> {
        let mut tile = Self::new(pos);
        tile.set_weight(weight)?;
        Ok(tile)
    }

    #[inline]
    pub fn pos(&self) -> Position {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.pos.col
    }

    /// Cost of entering this tile.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Change the entry cost. Weights must be finite and strictly positive.
    pub fn set_weight(&mut self, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(Error::InvalidConstruction(format!(
                "tile {} weight must be a positive finite number, got {weight}",
                self.pos
            )));
        }
        self.weight = weight;
        Ok(())
    }

    #[inline]
    pub fn is_passable(&self) -> bool {
        self.passable
    }

    #[inline]
    pub fn set_passable(&mut self, passable: bool) {
        self.passable = passable;
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pos.fmt(f)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        #[derive(serde::Deserialize)]
        struct RawTile {
            pos: Position,
            weight: f64,
            passable: bool,
        }

        let raw = <RawTile as serde::Deserialize>::deserialize(deserializer)?;
        let mut tile = Tile::with_weight(raw.pos, raw.weight).map_err(D::Error::custom)?;
        tile.set_passable(raw.passable);
        Ok(tile)
    }
}
