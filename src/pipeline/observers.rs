//! Observers for training pipelines
//!
//! Observers allow composable data collection during training without
//! coupling the episode loop to specific output formats.

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Result, ports::Observer};

/// Progress bar observer - shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    total_steps: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            total_steps: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, steps: usize) -> Result<()> {
        self.total_steps += steps;
        if let Some(pb) = &self.progress_bar {
            pb.set_position((episode + 1) as u64);
            pb.set_message(format!("{} steps", self.total_steps));
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("{} steps", self.total_steps));
        }
        Ok(())
    }
}

/// Metrics observer - tracks episode lengths for later inspection
pub struct MetricsObserver {
    episode_steps: Vec<usize>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self {
            episode_steps: Vec::new(),
        }
    }

    /// Steps per episode, in episode order
    pub fn episode_steps(&self) -> &[usize] {
        &self.episode_steps
    }

    /// Longest episode seen so far
    pub fn max_steps(&self) -> Option<usize> {
        self.episode_steps.iter().copied().max()
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for MetricsObserver {
    fn on_episode_end(&mut self, _episode: usize, steps: usize) -> Result<()> {
        self.episode_steps.push(steps);
        Ok(())
    }
}
