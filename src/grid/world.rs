//! Immutable grid-world definition and move resolution.

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    grid::{Cell, CellKind, Direction},
    types::Location,
};

/// Immutable rectangular grid of cells.
///
/// Constructed once at startup and never mutated; the learned value tables are
/// the only state that changes during training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl World {
    /// Build a world from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the grid is empty, ragged,
    /// has no open cell, or has no terminal cell. Detecting degenerate layouts
    /// here keeps the training loop free of mid-run failure modes.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "grid must have at least one row and one column".to_string(),
            });
        }

        let cols = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::InvalidConfiguration {
                    message: format!(
                        "grid must be rectangular: row 0 has {cols} cells, row {i} has {}",
                        row.len()
                    ),
                });
            }
        }

        let cells: Vec<Cell> = rows.iter().flatten().copied().collect();

        if !cells.iter().any(|c| c.kind == CellKind::Open) {
            return Err(Error::InvalidConfiguration {
                message: "grid has no open cells".to_string(),
            });
        }
        if !cells.iter().any(|c| c.kind == CellKind::Terminal) {
            return Err(Error::InvalidConfiguration {
                message: "grid has no terminal cells".to_string(),
            });
        }

        Ok(World {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// The classic 8x8 layout: open cells cost -1 per step, an interior wall
    /// structure shapes the value landscape, a -20 sink punishes one route and
    /// a +10 goal sits in the far corner.
    pub fn classic() -> Self {
        let f = Cell::open(-1.0);
        let w = Cell::wall();
        let s = Cell::terminal(-20.0);
        let t = Cell::terminal(10.0);

        let rows = vec![
            vec![f, f, f, f, f, f, f, f],
            vec![f, f, w, w, w, w, f, f],
            vec![f, f, f, f, f, w, f, f],
            vec![f, f, f, f, f, w, f, f],
            vec![f, f, f, f, f, w, f, f],
            vec![f, f, f, f, s, f, f, f],
            vec![f, w, w, w, f, f, f, f],
            vec![f, f, f, f, f, f, f, t],
        ];

        // The classic layout is statically well-formed.
        World::from_rows(rows).expect("classic layout is valid")
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has zero cells. Construction forbids this, so this
    /// always returns false; provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Validate raw coordinates into a [`Location`] on this grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates fall outside the grid.
    pub fn location(&self, row: usize, col: usize) -> Result<Location> {
        Location::new(row, col, self.rows, self.cols)
    }

    /// Whether signed coordinates fall inside the bounding box.
    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    fn cell(&self, loc: Location) -> &Cell {
        // Locations are bounds-validated at construction.
        &self.cells[loc.row() * self.cols + loc.col()]
    }

    /// Reward collected on entering the cell.
    pub fn reward_of(&self, loc: Location) -> f64 {
        self.cell(loc).reward
    }

    /// Classification of the cell.
    pub fn kind_of(&self, loc: Location) -> CellKind {
        self.cell(loc).kind
    }

    /// A location is valid iff it is not a wall.
    pub fn is_valid(&self, loc: Location) -> bool {
        self.kind_of(loc) != CellKind::Wall
    }

    /// Whether the cell ends an episode.
    pub fn is_terminal(&self, loc: Location) -> bool {
        self.kind_of(loc) == CellKind::Terminal
    }

    /// Resolve a move from `loc` in `direction`.
    ///
    /// Out-of-bounds and wall candidates resolve to the original location (the
    /// agent bumps and stays put); anything else resolves to the candidate.
    /// Total function: the result is always a valid location.
    pub fn resolve(&self, loc: Location, direction: Direction) -> Location {
        let (dr, dc) = direction.delta();
        let row = loc.row() as i64 + dr;
        let col = loc.col() as i64 + dc;

        if !self.in_bounds(row, col) {
            return loc;
        }

        let candidate = Location::new_unchecked(row as usize, col as usize);
        if self.kind_of(candidate) == CellKind::Wall {
            return loc;
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_world() -> World {
        // 2x2: open / wall on top, open / terminal below.
        World::from_rows(vec![
            vec![Cell::open(-1.0), Cell::wall()],
            vec![Cell::open(-1.0), Cell::terminal(10.0)],
        ])
        .unwrap()
    }

    #[test]
    fn test_classic_layout_shape() {
        let world = World::classic();
        assert_eq!(world.rows(), 8);
        assert_eq!(world.cols(), 8);

        let goal = world.location(7, 7).unwrap();
        assert_eq!(world.kind_of(goal), CellKind::Terminal);
        assert_eq!(world.reward_of(goal), 10.0);

        let sink = world.location(5, 4).unwrap();
        assert_eq!(world.kind_of(sink), CellKind::Terminal);
        assert_eq!(world.reward_of(sink), -20.0);

        let wall = world.location(1, 2).unwrap();
        assert_eq!(world.kind_of(wall), CellKind::Wall);
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        assert!(World::from_rows(vec![]).is_err());
        assert!(World::from_rows(vec![vec![]]).is_err());
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let result = World::from_rows(vec![
            vec![Cell::open(-1.0), Cell::open(-1.0)],
            vec![Cell::terminal(10.0)],
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_rows_rejects_no_open_cells() {
        let result = World::from_rows(vec![vec![Cell::wall(), Cell::terminal(10.0)]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_rows_rejects_no_terminal_cells() {
        let result = World::from_rows(vec![vec![Cell::open(-1.0), Cell::open(-1.0)]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_open_neighbor() {
        let world = tiny_world();
        let start = world.location(0, 0).unwrap();
        let down = world.resolve(start, Direction::Down);
        assert_eq!(down, world.location(1, 0).unwrap());
    }

    #[test]
    fn test_resolve_bumps_on_bounds() {
        let world = tiny_world();
        let start = world.location(0, 0).unwrap();
        assert_eq!(world.resolve(start, Direction::Up), start);
        assert_eq!(world.resolve(start, Direction::Left), start);
    }

    #[test]
    fn test_resolve_bumps_on_wall() {
        let world = tiny_world();
        let start = world.location(0, 0).unwrap();
        assert_eq!(world.resolve(start, Direction::Right), start);
    }

    #[test]
    fn test_resolve_enters_terminal() {
        let world = tiny_world();
        let below = world.location(1, 0).unwrap();
        let terminal = world.resolve(below, Direction::Right);
        assert!(world.is_terminal(terminal));
    }
}
