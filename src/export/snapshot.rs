//! Display-ready snapshots of learned values and policies.
//!
//! These are the data handed to an external renderer: a 2-D array of numbers
//! with per-cell classifications for a heat-map view, and an optional
//! best-direction field for an arrow view.

use std::{fs::File, io::BufWriter, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    grid::{CellKind, Direction},
};

/// 2-D snapshot of per-cell display values and classifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueGrid {
    /// Best (or only) learned value per cell, row-major.
    pub values: Vec<Vec<f64>>,
    /// Cell classification per cell, so renderers can mask walls and mark
    /// terminals.
    pub kinds: Vec<Vec<CellKind>>,
}

impl ValueGrid {
    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.values.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    /// Save the snapshot to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Load a snapshot from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let grid = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(grid)
    }
}

/// 2-D best-direction field derived from an action-value table.
///
/// Entries are `None` for walls and terminals (no move originates there).
/// Ties take the first direction in enumeration order; this is the documented
/// contract for rendering, distinct from the random tie-break used during
/// action selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyGrid {
    pub directions: Vec<Vec<Option<Direction>>>,
}

impl PolicyGrid {
    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.directions.len()
    }

    /// Rows in bottom-up order, for display coordinate systems whose y axis
    /// points upward.
    pub fn flipped_rows(&self) -> Vec<Vec<Option<Direction>>> {
        self.directions.iter().rev().cloned().collect()
    }
}
