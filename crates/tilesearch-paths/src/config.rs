//! Algorithm selection and search configuration.

use std::fmt;
use std::str::FromStr;

use tilesearch_core::Error;

use crate::distance::HeuristicKind;

/// The five frontier-exploration strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    /// FIFO frontier; shortest route by hop count.
    BreadthFirst,
    /// LIFO frontier with shuffled neighbours; any route.
    DepthFirst,
    /// Cheapest cumulative cost first (Dijkstra).
    UniformCost,
    /// Smallest heuristic distance to the goal first (greedy).
    BestFirst,
    /// Smallest cost + heuristic first.
    #[default]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::UniformCost,
        Algorithm::BestFirst,
        Algorithm::AStar,
    ];

    /// Whether tile weights and cost relaxation are used.
    #[inline]
    pub fn is_weighted(self) -> bool {
        matches!(
            self,
            Algorithm::UniformCost | Algorithm::BestFirst | Algorithm::AStar
        )
    }

    /// Whether frontier order depends on a heuristic, which also means a
    /// goal is required.
    #[inline]
    pub fn uses_heuristic(self) -> bool {
        matches!(self, Algorithm::BestFirst | Algorithm::AStar)
    }

    /// Whether a cheaper route to a queued tile changes its place in the
    /// frontier.
    #[inline]
    pub(crate) fn reprioritizes(self) -> bool {
        matches!(self, Algorithm::UniformCost | Algorithm::AStar)
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "bfs",
            Algorithm::DepthFirst => "dfs",
            Algorithm::UniformCost => "ucs",
            Algorithm::BestFirst => "best-first",
            Algorithm::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "ucs" | "uniform-cost" | "dijkstra" => Ok(Algorithm::UniformCost),
            "best-first" | "greedy" => Ok(Algorithm::BestFirst),
            "astar" | "a*" => Ok(Algorithm::AStar),
            other => Err(Error::InvalidConstruction(format!(
                "unknown algorithm {other:?}"
            ))),
        }
    }
}

/// Everything needed to build a [`Search`](crate::Search) besides the grid
/// and the endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    /// Used by best-first and A* only.
    pub heuristic: HeuristicKind,
    /// Seed for depth-first neighbour shuffling. `None` picks a random seed.
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for a in Algorithm::ALL {
            assert_eq!(a.name().parse::<Algorithm>(), Ok(a));
        }
        assert_eq!("Dijkstra".parse::<Algorithm>(), Ok(Algorithm::UniformCost));
        assert_eq!(
            "ida*".parse::<Algorithm>(),
            Err(Error::InvalidConstruction(r#"unknown algorithm "ida*""#.into()))
        );
    }

    #[test]
    fn classification() {
        assert!(!Algorithm::BreadthFirst.is_weighted());
        assert!(!Algorithm::DepthFirst.uses_heuristic());
        assert!(Algorithm::UniformCost.is_weighted());
        assert!(!Algorithm::UniformCost.uses_heuristic());
        assert!(Algorithm::BestFirst.uses_heuristic());
        assert!(!Algorithm::BestFirst.reprioritizes());
        assert!(Algorithm::AStar.reprioritizes());
    }

    #[test]
    fn default_config() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.algorithm, Algorithm::AStar);
        assert_eq!(cfg.heuristic, HeuristicKind::Euclidean);
        assert_eq!(cfg.seed, None);
    }
}
