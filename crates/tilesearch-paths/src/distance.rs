use std::fmt;
use std::str::FromStr;

use tilesearch_core::{Error, Position};

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Position, b: Position) -> f64 {
    a.manhattan(b) as f64
}

/// Euclidean (L2) distance between two positions.
#[inline]
pub fn euclidean(a: Position, b: Position) -> f64 {
    let dr = a.row.abs_diff(b.row) as f64;
    let dc = a.col.abs_diff(b.col) as f64;
    dr.hypot(dc)
}

/// Distance estimate used by best-first and A* ordering.
///
/// A* returns optimal routes only when the estimate never exceeds the true
/// remaining cost. Both built-in distances satisfy that on grids whose tile
/// weights are all at least 1. Any `Fn(Position, Position) -> f64` is a
/// heuristic.
pub trait Heuristic {
    fn estimate(&self, from: Position, to: Position) -> f64;
}

impl<F: Fn(Position, Position) -> f64> Heuristic for F {
    #[inline]
    fn estimate(&self, from: Position, to: Position) -> f64 {
        self(from, to)
    }
}

/// Selectable built-in heuristic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeuristicKind {
    Manhattan,
    #[default]
    Euclidean,
}

impl Heuristic for HeuristicKind {
    #[inline]
    fn estimate(&self, from: Position, to: Position) -> f64 {
        match self {
            HeuristicKind::Manhattan => manhattan(from, to),
            HeuristicKind::Euclidean => euclidean(from, to),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HeuristicKind::Manhattan => "manhattan",
            HeuristicKind::Euclidean => "euclidean",
        })
    }
}

impl FromStr for HeuristicKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" => Ok(HeuristicKind::Manhattan),
            "euclidean" => Ok(HeuristicKind::Euclidean),
            other => Err(Error::InvalidConstruction(format!(
                "unknown heuristic {other:?}"
            ))),
        }
    }
}
