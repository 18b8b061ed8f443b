//! ASCII grid layouts.
//!
//! A layout is a block of equally wide lines, one character per tile:
//!
//! | char | tile |
//! |---|---|
//! | `.` | passable, weight 1 |
//! | `1`–`9` | passable, weight of that digit |
//! | `#` | impassable |
//!
//! Surrounding whitespace of the whole text is trimmed, individual lines are
//! not. [`Grid`]'s `Display` writes the same format back; tiles whose weight
//! has no single-character form are written as `?`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::Error;
use crate::geom::Position;
use crate::grid::Grid;
use crate::tile::Tile;

const FLOOR: char = '.';
const WALL: char = '#';
const UNKNOWN: char = '?';

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// No lines at all.
    #[error("layout is empty")]
    Empty,
    /// A line is wider or narrower than the first one.
    #[error("layout line {line} has {found} tiles, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside `.#1-9`.
    #[error("layout contains invalid character {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Position },
}

impl From<LayoutError> for Error {
    fn from(e: LayoutError) -> Self {
        Error::InvalidConstruction(e.to_string())
    }
}

impl Grid {
    /// Build a grid from an ASCII layout.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = s.trim().lines().collect();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        if cols == 0 {
            return Err(LayoutError::Empty);
        }
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(LayoutError::InconsistentWidth {
                    line: row,
                    expected: cols,
                    found,
                });
            }
        }

        // Dimensions are non-zero here, so construction cannot fail.
        let mut grid = Grid::new(lines.len(), cols).map_err(|_| LayoutError::Empty)?;
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let pos = Position::new(row, col);
                let tile = grid
                    .tile_mut(row, col)
                    .map_err(|_| LayoutError::InvalidChar { ch, pos })?;
                match ch {
                    FLOOR => {}
                    WALL => tile.set_passable(false),
                    '1'..='9' => {
                        let w = f64::from(ch as u8 - b'0');
                        tile.set_weight(w)
                            .map_err(|_| LayoutError::InvalidChar { ch, pos })?;
                    }
                    _ => return Err(LayoutError::InvalidChar { ch, pos }),
                }
            }
        }
        Ok(grid)
    }
}

impl FromStr for Grid {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}

impl Tile {
    /// Layout character for this tile: `#` for walls, `.` for unit
    /// weight, `2`-`9` for whole weights and `?` for anything else.
    pub fn layout_char(&self) -> char {
        let w = self.weight();
        if !self.is_passable() {
            WALL
        } else if w == 1.0 {
            FLOOR
        } else if w.fract() == 0.0 && (2.0..=9.0).contains(&w) {
            char::from(b'0' + w as u8)
        } else {
            UNKNOWN
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.iter().enumerate() {
            if i > 0 && i % self.cols() == 0 {
                writeln!(f)?;
            }
            write!(f, "{}", tile.layout_char())?;
        }
        Ok(())
    }
}
