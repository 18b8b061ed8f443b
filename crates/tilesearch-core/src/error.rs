//! Error type shared by the grid model and the search engine.

use thiserror::Error;

/// Errors raised by grid lookups, frontier containers and searches.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A row or column index fell outside the grid.
    #[error("position ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// `pop`/`peek`/`dequeue` on an empty heap or queue.
    #[error("the collection is empty")]
    EmptyCollection,

    /// The frontier was exhausted before the goal was removed from it.
    #[error("the goal cannot be reached from the start")]
    Unreachable,

    /// A grid, tile, container or search was built from invalid arguments.
    #[error("invalid construction: {0}")]
    InvalidConstruction(String),
}

/// Result type alias for tilesearch operations.
pub type Result<T> = std::result::Result<T, Error>;
