//! Steppable graph-search algorithms for tile grids.
//!
//! This crate explores a [`tilesearch_core::Grid`] with five frontier
//! strategies that share one expansion loop:
//!
//! - **Breadth-first** search and traversal ([`Search::breadth_first`])
//! - **Depth-first** search and traversal with seeded neighbour shuffling
//!   ([`Search::depth_first`])
//! - **Uniform-cost** (Dijkstra) search ([`Search::uniform_cost`])
//! - **Greedy best-first** search ([`Search::best_first`])
//! - **A\*** search ([`Search::astar`])
//!
//! A [`Search`] advances one frontier removal at a time through
//! [`Search::step`], reporting [`SearchEvent`]s so a presentation layer can
//! animate it at its own pace, or runs to completion with [`Search::run`].
//!
//! The building blocks are public as well: a comparator-driven
//! [`BinaryHeap`], a [`StablePriorityQueue`] that breaks ties by insertion
//! order, [`PredecessorMap`]/[`CostMap`] bookkeeping and [`reconstruct`].
//!
//! # Frontier policies
//!
//! | Algorithm | Frontier | Removed first |
//! |---|---|---|
//! | BFS | FIFO queue | oldest |
//! | DFS | LIFO stack | newest |
//! | Uniform-cost | stable priority queue | lowest cost |
//! | Best-first | stable priority queue | lowest heuristic |
//! | A* | stable priority queue | lowest cost + heuristic |

mod astar;
mod bfs;
mod compare;
mod config;
mod dfs;
mod dijkstra;
mod distance;
mod events;
mod frontier;
mod heap;
mod maps;
mod path;
mod queue;
mod search;

pub use compare::{Comparator, Natural, Reversed};
pub use config::{Algorithm, SearchConfig};
pub use distance::{Heuristic, HeuristicKind, euclidean, manhattan};
pub use events::{Outcome, SearchEvent, Status};
pub use heap::BinaryHeap;
pub use maps::{CostMap, Link, PredecessorMap};
pub use path::{Path, reconstruct};
pub use queue::StablePriorityQueue;
pub use search::{Events, Search};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tilesearch_core::{Error, Grid, Position, Result};

impl<'g> Search<'g> {
    /// Build the search described by `config`.
    ///
    /// Best-first and A* require a goal. Depth-first searches seed a
    /// [`StdRng`] from `config.seed`, or from a random seed when unset.
    pub fn from_config(
        grid: &'g Grid,
        start: Position,
        goal: Option<Position>,
        config: &SearchConfig,
    ) -> Result<Self> {
        match config.algorithm {
            Algorithm::BreadthFirst => Self::breadth_first(grid, start, goal),
            Algorithm::DepthFirst => {
                let seed = config.seed.unwrap_or_else(rand::random);
                Self::depth_first(grid, start, goal, StdRng::seed_from_u64(seed))
            }
            Algorithm::UniformCost => Self::uniform_cost(grid, start, goal),
            Algorithm::BestFirst | Algorithm::AStar => {
                let goal = goal.ok_or_else(|| {
                    Error::InvalidConstruction(format!(
                        "{} search needs a goal",
                        config.algorithm
                    ))
                })?;
                if config.algorithm == Algorithm::AStar {
                    Self::astar(grid, start, goal, config.heuristic)
                } else {
                    Self::best_first(grid, start, goal, config.heuristic)
                }
            }
        }
    }
}

/// Run the configured search from `start` to `goal` and return the route.
pub fn find_path(
    grid: &Grid,
    start: Position,
    goal: Position,
    config: &SearchConfig,
) -> Result<Path> {
    match Search::from_config(grid, start, Some(goal), config)?.run()? {
        Outcome::Found(path) => Ok(path),
        Outcome::Traversed(_) => Err(Error::Unreachable),
    }
}
