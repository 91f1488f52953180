//! Movement directions and their fixed enumeration order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four cardinal moves.
///
/// The enumeration order Up, Down, Left, Right is stable and load-bearing:
/// action-value tables are indexed by [`Direction::index`], and arg-max scans
/// iterate [`Direction::ALL`] in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in the fixed enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Number of directions.
    pub const COUNT: usize = 4;

    /// Stable table index matching the order of [`Direction::ALL`].
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// Inverse of [`Direction::index`]. Returns `None` for indices >= 4.
    pub fn from_index(index: usize) -> Option<Direction> {
        Direction::ALL.get(index).copied()
    }

    /// Componentwise (row, col) offset applied by this move.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Arrow glyph for policy-field rendering.
    pub fn to_arrow(self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Down => 'v',
            Direction::Left => '<',
            Direction::Right => '>',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{name}")
    }
}
