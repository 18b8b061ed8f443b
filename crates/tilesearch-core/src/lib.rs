//! **tilesearch-core** — tile grid model for step-by-step graph search
//! (core types).
//!
//! This crate provides the foundational types shared by the *tilesearch*
//! workspace: grid positions, weighted tiles, a fixed-size 4-connected grid,
//! ASCII layouts, grid setup configuration and the common error type.

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;
pub mod tile;

pub use config::GridConfig;
pub use error::{Error, Result};
pub use geom::{Direction, Position};
pub use grid::Grid;
pub use layout::LayoutError;
pub use tile::{DEFAULT_WEIGHT, Tile};
