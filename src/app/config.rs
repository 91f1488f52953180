//! Configuration types for learning runs.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Configuration for a grid-world learning run.
///
/// This type provides a builder-style API for configuring runs before
/// handing the parameters to an agent and a training pipeline.
///
/// # Examples
///
/// ```
/// use gridworld::app::LearningConfig;
///
/// let config = LearningConfig::new()
///     .with_alpha(0.3)
///     .with_gamma(0.5)
///     .with_episodes(10_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningConfig {
    /// Learning rate α, in (0, 1]
    pub alpha: f64,
    /// Discount factor γ, in (0, 1]
    pub gamma: f64,
    /// Exploration rate ε, in [0, 1] (action-value variant only)
    pub epsilon: f64,
    /// Number of training episodes
    pub episodes: usize,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl LearningConfig {
    /// Create a configuration with the default parameters:
    /// α = 0.03, γ = 0.9, ε = 0.1, 5000 episodes, no seed.
    pub fn new() -> Self {
        Self {
            alpha: 0.03,
            gamma: 0.9,
            epsilon: 0.1,
            episodes: 5000,
            seed: None,
        }
    }

    /// Set the learning rate.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the discount factor.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the exploration rate.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the episode count.
    pub fn with_episodes(mut self, episodes: usize) -> Self {
        self.episodes = episodes;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if α or γ is outside (0, 1],
    /// ε is outside [0, 1], or the episode count is zero.
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(Error::InvalidConfiguration {
                message: format!("alpha must be in (0, 1], got {}", self.alpha),
            });
        }
        if !(self.gamma > 0.0 && self.gamma <= 1.0) {
            return Err(Error::InvalidConfiguration {
                message: format!("gamma must be in (0, 1], got {}", self.gamma),
            });
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(Error::InvalidConfiguration {
                message: format!("epsilon must be in [0, 1], got {}", self.epsilon),
            });
        }
        if self.episodes == 0 {
            return Err(Error::InvalidConfiguration {
                message: "episode count must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(LearningConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_alpha_out_of_range() {
        assert!(LearningConfig::new().with_alpha(0.0).validate().is_err());
        assert!(LearningConfig::new().with_alpha(1.5).validate().is_err());
        assert!(LearningConfig::new().with_alpha(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_rejects_gamma_out_of_range() {
        assert!(LearningConfig::new().with_gamma(-0.1).validate().is_err());
        assert!(LearningConfig::new().with_gamma(1.01).validate().is_err());
    }

    #[test]
    fn test_rejects_epsilon_out_of_range() {
        assert!(LearningConfig::new().with_epsilon(-0.01).validate().is_err());
        assert!(LearningConfig::new().with_epsilon(1.01).validate().is_err());
        // Both endpoints are meaningful: pure greedy and pure random.
        assert!(LearningConfig::new().with_epsilon(0.0).validate().is_ok());
        assert!(LearningConfig::new().with_epsilon(1.0).validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_episodes() {
        assert!(LearningConfig::new().with_episodes(0).validate().is_err());
    }
}
