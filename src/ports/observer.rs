//! Observer port - abstraction for training observation
//!
//! This port defines the interface for observing training events, allowing
//! composable data collection without coupling the episode loop to specific
//! output formats.

use crate::{Result, types::Location};

/// Observer trait for monitoring training
///
/// Observers can be composed to collect different types of data during
/// training: progress bars for user feedback, step traces for debugging,
/// metrics for evaluation.
///
/// # Event Sequence
///
/// 1. `on_training_start(total_episodes)` - Once at the beginning
/// 2. For each episode:
///    - `on_episode_start(episode)`
///    - `on_step(...)` - For each step in the episode
///    - `on_episode_end(episode, steps)`
/// 3. `on_training_end()` - Once at the end
pub trait Observer: Send {
    /// Called when training starts.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to initialize observation state.
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called when an episode starts, with the sampled start location.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to reset per-episode state.
    fn on_episode_start(&mut self, _episode: usize, _start: Location) -> Result<()> {
        Ok(())
    }

    /// Called after each resolved step within an episode.
    ///
    /// `from` and `to` may be equal when the agent bumped a wall or the grid
    /// boundary.
    fn on_step(
        &mut self,
        _episode: usize,
        _step: usize,
        _from: Location,
        _to: Location,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when an episode reaches a terminal cell.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to record episode lengths.
    fn on_episode_end(&mut self, _episode: usize, _steps: usize) -> Result<()> {
        Ok(())
    }

    /// Called when training completes.
    ///
    /// Use this to finalize outputs, close files, or display summaries.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
