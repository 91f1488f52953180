//! Agent port - abstraction for the per-step learning policy
//!
//! This port defines the interface the training pipeline drives, allowing it
//! to work with:
//! - Uniform-random walkers learning state values (TD(0))
//! - ε-greedy walkers learning action values (Q-learning-style control)

use crate::{
    Result,
    export::{PolicyGrid, ValueGrid},
    grid::World,
    types::Location,
};

/// Agent trait - one learning step per call
///
/// This abstraction is the seam between the episodic training loop and the
/// concrete learning rule. The pipeline owns episode structure (start
/// sampling, termination at terminals); the agent owns action selection and
/// the value-table update.
pub trait Agent: Send {
    /// Perform one step from `loc`: select a direction, resolve it against
    /// the world, observe the reward of the resolved cell, apply the TD
    /// update, and return the new location.
    ///
    /// The returned location is always valid (move resolution bumps on walls
    /// and bounds), though it may equal `loc`.
    fn step(&mut self, world: &World, loc: Location) -> Result<Location>;

    /// Get the agent's name.
    ///
    /// Used for identification in summaries and logging.
    fn name(&self) -> &str;

    /// Seed the agent's internal random number generator.
    ///
    /// Training pipelines call this method when supplied with a deterministic
    /// seed to ensure reproducible results.
    ///
    /// # Default Implementation
    ///
    /// Does nothing and returns `Ok(())`.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }

    /// Snapshot the learned estimates as a display-ready value grid.
    ///
    /// State-value agents report V(s); action-value agents report
    /// max over directions of Q(a, s).
    fn value_grid(&self, world: &World) -> ValueGrid;

    /// Snapshot the learned policy as a best-direction field, if the agent
    /// maintains per-direction estimates.
    ///
    /// # Default Implementation
    ///
    /// Returns `None`, suitable for state-value agents with no per-direction
    /// estimates.
    fn policy_grid(&self, _world: &World) -> Option<PolicyGrid> {
        None
    }
}
