//! State-value table for TD(0) learning.

use serde::{Deserialize, Serialize};

use crate::types::Location;

/// Table of per-state value estimates V(s).
///
/// Backed by a flat row-major buffer covering every cell of the grid,
/// zero-initialized. Walls and terminals carry entries too; walls are simply
/// never visited and terminals are never updated as a source, so both stay at
/// the zero init.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateValues {
    values: Vec<f64>,
    rows: usize,
    cols: usize,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
}

impl StateValues {
    /// Create a zero-initialized table for a `rows` x `cols` grid.
    pub fn new(rows: usize, cols: usize, learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            values: vec![0.0; rows * cols],
            rows,
            cols,
            learning_rate,
            discount_factor,
        }
    }

    fn index(&self, loc: Location) -> usize {
        loc.row() * self.cols + loc.col()
    }

    /// Current estimate for a state.
    pub fn get(&self, loc: Location) -> f64 {
        self.values[self.index(loc)]
    }

    /// Overwrite the estimate for a state.
    pub fn set(&mut self, loc: Location, value: f64) {
        let index = self.index(loc);
        self.values[index] = value;
    }

    /// TD(0) update: V(s) ← V(s) + α[r + γ V(s') - V(s)]
    ///
    /// Overwrites exactly one entry per call.
    pub fn td0_update(&mut self, loc: Location, new_loc: Location, reward: f64) {
        let old_value = self.get(loc);
        let next_value = self.get(new_loc);
        let td_target = reward + self.discount_factor * next_value;
        let td_error = td_target - old_value;
        self.set(loc, old_value + self.learning_rate * td_error);
    }

    /// Number of rows covered by the table.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns covered by the table.
    pub fn cols(&self) -> usize {
        self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: usize, col: usize) -> Location {
        Location::new(row, col, 3, 3).unwrap()
    }

    #[test]
    fn test_zero_initialized() {
        let table = StateValues::new(3, 3, 0.3, 0.5);
        assert_eq!(table.get(loc(0, 0)), 0.0);
        assert_eq!(table.get(loc(2, 2)), 0.0);
    }

    #[test]
    fn test_set_get() {
        let mut table = StateValues::new(3, 3, 0.3, 0.5);
        table.set(loc(1, 2), -4.5);
        assert_eq!(table.get(loc(1, 2)), -4.5);
        assert_eq!(table.get(loc(2, 1)), 0.0);
    }

    #[test]
    fn test_td0_update_exact_arithmetic() {
        let mut table = StateValues::new(3, 3, 0.3, 0.5);

        // V = 0 + 0.3 * (10 + 0.5*0 - 0) = 3.0
        table.td0_update(loc(0, 0), loc(0, 1), 10.0);
        assert_eq!(table.get(loc(0, 0)), 3.0);
    }

    #[test]
    fn test_td0_update_bootstraps_next_value() {
        let mut table = StateValues::new(3, 3, 0.5, 0.9);
        table.set(loc(0, 1), 2.0);

        // V = 0 + 0.5 * (-1 + 0.9*2 - 0) = 0.4
        table.td0_update(loc(0, 0), loc(0, 1), -1.0);
        assert!((table.get(loc(0, 0)) - 0.4).abs() < 1e-12);
        // The bootstrapped state is untouched.
        assert_eq!(table.get(loc(0, 1)), 2.0);
    }
}
