//! CSV export for learned value grids
//!
//! One record per cell, suitable for downstream plotting tools.

use std::path::Path;

use serde::Serialize;

use crate::{Result, export::ValueGrid, grid::CellKind};

/// A single row in the value-grid CSV export
#[derive(Debug, Clone, Serialize)]
pub struct ValueRecord {
    pub row: usize,
    pub col: usize,
    pub kind: String,
    pub value: f64,
}

fn kind_label(kind: CellKind) -> &'static str {
    match kind {
        CellKind::Open => "open",
        CellKind::Wall => "wall",
        CellKind::Terminal => "terminal",
    }
}

/// Write a value grid to a CSV file, one record per cell in row-major order.
pub fn write_value_grid<P: AsRef<Path>>(path: P, grid: &ValueGrid) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for (row, (values, kinds)) in grid.values.iter().zip(grid.kinds.iter()).enumerate() {
        for (col, (&value, &kind)) in values.iter().zip(kinds.iter()).enumerate() {
            writer.serialize(ValueRecord {
                row,
                col,
                kind: kind_label(kind).to_string(),
                value,
            })?;
        }
    }

    writer.flush()?;
    Ok(())
}
