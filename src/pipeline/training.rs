//! Episodic training loop for grid-world agents

use rand::{RngExt, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    grid::World,
    ports::{Agent, Observer},
    types::Location,
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of training episodes
    pub episodes: usize,

    /// Random seed
    pub seed: Option<u64>,

    /// Maximum attempts when sampling a non-wall start location
    pub max_start_attempts: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 5000,
            seed: None,
            max_start_attempts: 10_000,
        }
    }
}

/// Result of a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total episodes completed
    pub episodes: usize,

    /// Total steps taken across all episodes
    pub total_steps: usize,

    /// Mean steps per episode
    pub mean_steps: f64,
}

impl TrainingResult {
    /// Create a new training result
    pub fn new(episodes: usize, total_steps: usize) -> Self {
        let mean_steps = if episodes > 0 {
            total_steps as f64 / episodes as f64
        } else {
            0.0
        };
        Self {
            episodes,
            total_steps,
            mean_steps,
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Training pipeline driving one agent through repeated episodes
///
/// The pipeline owns episode structure: it samples a valid start, drives the
/// agent step by step until a terminal cell is reached, and repeats for the
/// configured episode count. Termination is by episode count only; there is
/// no convergence check.
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run training with the given world and agent
    pub fn run(&mut self, world: &World, agent: &mut dyn Agent) -> Result<TrainingResult> {
        let mut sampler_rng = self.seed_agent(agent)?;

        for observer in &mut self.observers {
            observer.on_training_start(self.config.episodes)?;
        }

        let mut total_steps = 0;
        for episode in 0..self.config.episodes {
            let steps = self.run_episode(episode, world, agent, &mut sampler_rng)?;
            total_steps += steps;

            for observer in &mut self.observers {
                observer.on_episode_end(episode, steps)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(TrainingResult::new(self.config.episodes, total_steps))
    }

    /// Run one episode: sampled start to terminal entry. Returns the step
    /// count.
    fn run_episode(
        &mut self,
        episode: usize,
        world: &World,
        agent: &mut dyn Agent,
        sampler_rng: &mut StdRng,
    ) -> Result<usize> {
        let start = self.sample_start(world, sampler_rng)?;

        for observer in &mut self.observers {
            observer.on_episode_start(episode, start)?;
        }

        let mut location = start;
        let mut steps = 0;
        while !world.is_terminal(location) {
            let new_location = agent.step(world, location)?;

            for observer in &mut self.observers {
                observer.on_step(episode, steps, location, new_location)?;
            }

            location = new_location;
            steps += 1;
        }

        Ok(steps)
    }

    /// Sample a uniformly-random location in the bounding box, resampling
    /// while the draw lands on a wall.
    ///
    /// Bounded retry: a layout pathological enough to exhaust the budget is a
    /// configuration problem, not something to spin on forever.
    fn sample_start(&self, world: &World, rng: &mut StdRng) -> Result<Location> {
        for _ in 0..self.config.max_start_attempts {
            let row = rng.random_range(0..world.rows());
            let col = rng.random_range(0..world.cols());
            let location = world.location(row, col)?;
            if world.is_valid(location) {
                return Ok(location);
            }
        }
        Err(Error::StartSamplingExhausted {
            attempts: self.config.max_start_attempts,
        })
    }

    /// Seed the agent and derive the pipeline's own start-sampler RNG. The
    /// sampler gets an offset seed so it does not mirror the agent's stream.
    fn seed_agent(&self, agent: &mut dyn Agent) -> Result<StdRng> {
        if let Some(seed) = self.config.seed {
            agent.set_rng_seed(seed)?;
            Ok(StdRng::seed_from_u64(seed.wrapping_add(1)))
        } else {
            Ok(StdRng::from_rng(&mut rand::rng()))
        }
    }
}
