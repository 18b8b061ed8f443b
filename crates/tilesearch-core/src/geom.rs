//! Geometry primitives: [`Position`] and [`Direction`].
//!
//! Positions are matrix coordinates: `row` grows downwards, `col` grows to
//! the right, and both are zero-based.

use std::fmt;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal moves. Diagonal movement is not supported.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// The neighbour order used by every grid query: up, right, down, left.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Row and column deltas of this move.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A (row, column) grid coordinate. Identity key of a tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The adjacent position in direction `dir`, or `None` when the move
    /// would leave the non-negative quadrant. Upper bounds are the grid's
    /// concern.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.delta();
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// Manhattan (L1) distance in tiles.
    #[inline]
    pub fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` is one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major ordering, matching grid enumeration.
impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_in_each_direction() {
        let p = Position::new(2, 2);
        assert_eq!(p.step(Direction::Up), Some(Position::new(1, 2)));
        assert_eq!(p.step(Direction::Right), Some(Position::new(2, 3)));
        assert_eq!(p.step(Direction::Down), Some(Position::new(3, 2)));
        assert_eq!(p.step(Direction::Left), Some(Position::new(2, 1)));
    }

    #[test]
    fn step_off_the_top_left_edge() {
        assert_eq!(Position::ZERO.step(Direction::Up), None);
        assert_eq!(Position::ZERO.step(Direction::Left), None);
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 1),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![Position::new(0, 1), Position::new(0, 2), Position::new(1, 0)]
        );
    }

    #[test]
    fn display_and_distance() {
        let a = Position::new(11, 15);
        assert_eq!(a.to_string(), "(11, 15)");
        assert_eq!(a.manhattan(Position::new(0, 16)), 12);
        assert!(a.is_adjacent(Position::new(11, 14)));
        assert!(!a.is_adjacent(Position::new(10, 14)));
    }
}
