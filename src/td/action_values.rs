//! Action-value table for Q-learning-style TD control.

use serde::{Deserialize, Serialize};

use crate::{grid::Direction, types::Location};

/// Table of per-(direction, state) value estimates Q(a, s).
///
/// Backed by a flat row-major buffer of 4-element arrays indexed by
/// [`Direction::index`], zero-initialized. Never-visited entries are 0 and
/// participate normally in max and arg-max scans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionValues {
    values: Vec<[f64; Direction::COUNT]>,
    rows: usize,
    cols: usize,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
}

impl ActionValues {
    /// Create a zero-initialized table for a `rows` x `cols` grid.
    pub fn new(rows: usize, cols: usize, learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            values: vec![[0.0; Direction::COUNT]; rows * cols],
            rows,
            cols,
            learning_rate,
            discount_factor,
        }
    }

    fn index(&self, loc: Location) -> usize {
        loc.row() * self.cols + loc.col()
    }

    /// Current estimate for a (direction, state) pair.
    pub fn get(&self, direction: Direction, loc: Location) -> f64 {
        self.values[self.index(loc)][direction.index()]
    }

    /// Overwrite the estimate for a (direction, state) pair.
    pub fn set(&mut self, direction: Direction, loc: Location, value: f64) {
        let index = self.index(loc);
        self.values[index][direction.index()] = value;
    }

    /// Maximum estimate over all four directions at a state.
    pub fn max_value(&self, loc: Location) -> f64 {
        self.values[self.index(loc)]
            .iter()
            .fold(f64::NEG_INFINITY, |acc, &q| acc.max(q))
    }

    /// All directions achieving the maximum estimate at a state, in
    /// enumeration order.
    ///
    /// Callers that need exploration-preserving behavior draw uniformly from
    /// this set; display code takes the first entry.
    pub fn greedy_directions(&self, loc: Location) -> Vec<Direction> {
        let best = self.max_value(loc);
        Direction::ALL
            .into_iter()
            .filter(|&d| self.get(d, loc) == best)
            .collect()
    }

    /// Best direction at a state, ties broken by enumeration order.
    pub fn greedy_direction(&self, loc: Location) -> Direction {
        self.greedy_directions(loc)[0]
    }

    /// Q-learning update: Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    ///
    /// Off-policy: the bootstrap uses the max over next-state actions no matter
    /// which policy chose the action. Overwrites exactly one entry per call.
    pub fn q_update(
        &mut self,
        loc: Location,
        direction: Direction,
        reward: f64,
        new_loc: Location,
    ) {
        let old_value = self.get(direction, loc);
        let max_next = self.max_value(new_loc);
        let td_target = reward + self.discount_factor * max_next;
        let td_error = td_target - old_value;
        self.set(direction, loc, old_value + self.learning_rate * td_error);
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
