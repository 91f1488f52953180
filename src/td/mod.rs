//! Temporal-difference learning: value tables and agents
//!
//! This module implements the two engine variants of the simulator. TD
//! methods bootstrap value estimates from successor states, so a single
//! sweep of random walks is enough to propagate reward information across
//! the grid.
//!
//! ## Variants
//!
//! - **State values**: uniform-random walk with a TD(0) update of V(s)
//! - **Action values**: ε-greedy walk with a Q-learning-style update of Q(a, s)
//!
//! ## Key Differences
//!
//! | Aspect | State values | Action values |
//! |--------|--------------|---------------|
//! | Table | one scalar per cell | four scalars per cell |
//! | Policy | always uniform-random | ε-greedy over Q |
//! | Update | toward r + γ V(s') | toward r + γ max_a Q(a, s') |
//! | Display | heat map of V | heat map of max Q, arrow field |
//!
//! ## Usage Example
//!
//! ```no_run
//! use gridworld::{
//!     grid::World,
//!     td::{EpsilonGreedyAgent, RandomWalkAgent},
//! };
//!
//! let world = World::classic();
//!
//! // State-value variant
//! let walker = RandomWalkAgent::new(&world, 0.3, 0.5);
//!
//! // Action-value variant
//! let greedy = EpsilonGreedyAgent::new(&world, 0.3, 0.5, 0.1);
//! ```

pub mod action_values;
pub mod agent;
pub mod state_values;

// Public re-exports
pub use action_values::ActionValues;
pub use agent::{EpsilonGreedyAgent, RandomWalkAgent};
pub use state_values::StateValues;
