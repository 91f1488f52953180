//! Random-walk and ε-greedy learning agents
//!
//! This module implements the two engine variants: a uniform-random walker
//! learning state values with TD(0), and an ε-greedy walker learning action
//! values with a Q-learning-style off-policy bootstrap.

use rand::{RngExt, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    error::Result,
    export::{PolicyGrid, ValueGrid},
    grid::{CellKind, Direction, World},
    ports::Agent,
    td::{ActionValues, StateValues},
    types::Location,
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Uniform-random walker learning state values (TD(0))
///
/// Every step picks one of the four directions with equal probability and
/// nudges V(s) toward `reward + γ V(s')`.
#[derive(Debug)]
pub struct RandomWalkAgent {
    values: StateValues,
    rng: StdRng,
}

impl RandomWalkAgent {
    /// Create a new random-walk agent for the given world.
    ///
    /// # Arguments
    ///
    /// * `learning_rate` - α parameter, in (0, 1]
    /// * `discount_factor` - γ parameter, in (0, 1]
    pub fn new(world: &World, learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            values: StateValues::new(world.rows(), world.cols(), learning_rate, discount_factor),
            rng: build_rng(None),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Access the learned state-value table.
    pub fn state_values(&self) -> &StateValues {
        &self.values
    }

    fn select_direction(&mut self) -> Direction {
        *Direction::ALL.choose(&mut self.rng).unwrap()
    }
}

impl Agent for RandomWalkAgent {
    fn step(&mut self, world: &World, loc: Location) -> Result<Location> {
        let direction = self.select_direction();
        let new_loc = world.resolve(loc, direction);
        let reward = world.reward_of(new_loc);
        self.values.td0_update(loc, new_loc, reward);
        Ok(new_loc)
    }

    fn name(&self) -> &str {
        "Random-walk TD(0)"
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }

    fn value_grid(&self, world: &World) -> ValueGrid {
        let mut values = Vec::with_capacity(world.rows());
        let mut kinds = Vec::with_capacity(world.rows());
        for row in 0..world.rows() {
            let mut value_row = Vec::with_capacity(world.cols());
            let mut kind_row = Vec::with_capacity(world.cols());
            for col in 0..world.cols() {
                let loc = Location::new_unchecked(row, col);
                value_row.push(self.values.get(loc));
                kind_row.push(world.kind_of(loc));
            }
            values.push(value_row);
            kinds.push(kind_row);
        }
        ValueGrid { values, kinds }
    }
}

/// ε-greedy walker learning action values (off-policy TD control)
///
/// With probability ε the step is uniform-random; otherwise it takes the
/// direction with the highest Q(a, s), breaking ties with a uniform draw over
/// the tied set. The update always bootstraps from max_a Q(a, s') regardless
/// of how the action was chosen.
#[derive(Debug)]
pub struct EpsilonGreedyAgent {
    values: ActionValues,
    epsilon: f64,
    rng: StdRng,
}

impl EpsilonGreedyAgent {
    /// Create a new ε-greedy agent for the given world.
    ///
    /// # Arguments
    ///
    /// * `learning_rate` - α parameter, in (0, 1]
    /// * `discount_factor` - γ parameter, in (0, 1]
    /// * `epsilon` - exploration rate, in [0, 1]
    pub fn new(world: &World, learning_rate: f64, discount_factor: f64, epsilon: f64) -> Self {
        Self {
            values: ActionValues::new(world.rows(), world.cols(), learning_rate, discount_factor),
            epsilon,
            rng: build_rng(None),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Access the learned action-value table.
    pub fn action_values(&self) -> &ActionValues {
        &self.values
    }

    /// Mutable access to the learned action-value table, for seeding
    /// estimates before a run.
    pub fn action_values_mut(&mut self) -> &mut ActionValues {
        &mut self.values
    }

    /// ε-greedy direction selection
    ///
    /// Ties among maximal directions are broken by a uniform random draw over
    /// the tied set, not by enumeration order; this preserves exploration
    /// symmetry between equally valued moves.
    fn select_direction(&mut self, loc: Location) -> Direction {
        if self.rng.random::<f64>() < self.epsilon {
            // Explore: random direction
            *Direction::ALL.choose(&mut self.rng).unwrap()
        } else {
            // Exploit: greedy direction based on Q-values
            let greedy = self.values.greedy_directions(loc);
            *greedy.choose(&mut self.rng).unwrap()
        }
    }
}

impl Agent for EpsilonGreedyAgent {
    fn step(&mut self, world: &World, loc: Location) -> Result<Location> {
        let direction = self.select_direction(loc);
        let new_loc = world.resolve(loc, direction);
        let reward = world.reward_of(new_loc);
        self.values.q_update(loc, direction, reward, new_loc);
        Ok(new_loc)
    }

    fn name(&self) -> &str {
        "Epsilon-greedy Q"
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }

    fn value_grid(&self, world: &World) -> ValueGrid {
        let mut values = Vec::with_capacity(world.rows());
        let mut kinds = Vec::with_capacity(world.rows());
        for row in 0..world.rows() {
            let mut value_row = Vec::with_capacity(world.cols());
            let mut kind_row = Vec::with_capacity(world.cols());
            for col in 0..world.cols() {
                let loc = Location::new_unchecked(row, col);
                value_row.push(self.values.max_value(loc));
                kind_row.push(world.kind_of(loc));
            }
            values.push(value_row);
            kinds.push(kind_row);
        }
        ValueGrid { values, kinds }
    }

    fn policy_grid(&self, world: &World) -> Option<PolicyGrid> {
        let mut directions = Vec::with_capacity(world.rows());
        for row in 0..world.rows() {
            let mut dir_row = Vec::with_capacity(world.cols());
            for col in 0..world.cols() {
                let loc = Location::new_unchecked(row, col);
                let dir = match world.kind_of(loc) {
                    CellKind::Open => Some(self.values.greedy_direction(loc)),
                    CellKind::Wall | CellKind::Terminal => None,
                };
                dir_row.push(dir);
            }
            directions.push(dir_row);
        }
        Some(PolicyGrid { directions })
    }
}
