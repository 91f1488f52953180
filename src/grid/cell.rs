//! Cell payload for the grid world.

use serde::{Deserialize, Serialize};

/// Classification of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Walkable, non-terminal cell.
    Open,
    /// Impassable cell; never entered, never valued.
    Wall,
    /// Episode-ending cell.
    Terminal,
}

impl CellKind {
    /// Marker used when rendering value grids as text.
    pub fn to_char(self) -> char {
        match self {
            CellKind::Open => '.',
            CellKind::Wall => '#',
            CellKind::Terminal => '*',
        }
    }
}

/// A single grid cell: the reward collected on entering it, and its kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub reward: f64,
    pub kind: CellKind,
}

impl Cell {
    /// An open cell with the given entry reward.
    pub const fn open(reward: f64) -> Self {
        Cell {
            reward,
            kind: CellKind::Open,
        }
    }

    /// A wall cell. Carries a reward field for layout uniformity, but the
    /// reward is unreachable since walls are never entered.
    pub const fn wall() -> Self {
        Cell {
            reward: 0.0,
            kind: CellKind::Wall,
        }
    }

    /// A terminal cell with the given entry reward.
    pub const fn terminal(reward: f64) -> Self {
        Cell {
            reward,
            kind: CellKind::Terminal,
        }
    }
}
