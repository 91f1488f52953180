//! Train command - run a TD learning pass over the classic grid

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::{
    app::LearningConfig,
    cli::output,
    export::{self, PolicyGrid, ValueGrid},
    grid::World,
    pipeline::{ProgressObserver, TrainingConfig, TrainingPipeline},
    ports::Agent,
    td::{EpsilonGreedyAgent, RandomWalkAgent},
};

/// Which engine variant to train
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Variant {
    /// Uniform-random walk learning state values with TD(0)
    StateValue,
    /// ε-greedy walk learning action values (Q-learning-style)
    ActionValue,
}

#[derive(Parser, Debug)]
#[command(about = "Train a TD learner on the classic grid", allow_negative_numbers = true)]
pub struct TrainArgs {
    /// Engine variant to train
    #[arg(value_enum)]
    pub variant: Variant,

    /// Learning rate α
    #[arg(long, default_value_t = 0.3)]
    pub alpha: f64,

    /// Discount factor γ
    #[arg(long, default_value_t = 0.5)]
    pub gamma: f64,

    /// Exploration rate ε (action-value variant only)
    #[arg(long, default_value_t = 0.1)]
    pub epsilon: f64,

    /// Number of training episodes
    #[arg(long, short = 'e', default_value_t = 10_000)]
    pub episodes: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Optional path for writing the value grid as CSV
    #[arg(long)]
    pub export_csv: Option<PathBuf>,

    /// Also render the learned policy as an arrow field (action-value only)
    #[arg(long)]
    pub arrows: bool,
}

#[derive(Debug, Serialize)]
struct TrainingSummaryFile {
    agent: String,
    episodes: usize,
    total_steps: usize,
    mean_steps: f64,
    metadata: SummaryMetadata,
}

#[derive(Debug, Serialize)]
struct SummaryMetadata {
    alpha: f64,
    gamma: f64,
    epsilon: Option<f64>,
    seed: Option<u64>,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let config = LearningConfig::new()
        .with_alpha(args.alpha)
        .with_gamma(args.gamma)
        .with_epsilon(args.epsilon)
        .with_episodes(args.episodes);
    let config = match args.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    };
    config.validate()?;

    let world = World::classic();

    let mut agent: Box<dyn Agent> = match args.variant {
        Variant::StateValue => Box::new(RandomWalkAgent::new(&world, config.alpha, config.gamma)),
        Variant::ActionValue => Box::new(EpsilonGreedyAgent::new(
            &world,
            config.alpha,
            config.gamma,
            config.epsilon,
        )),
    };

    let training_config = TrainingConfig {
        episodes: config.episodes,
        seed: config.seed,
        ..TrainingConfig::default()
    };
    let mut pipeline =
        TrainingPipeline::new(training_config).with_observer(Box::new(ProgressObserver::new()));

    let result = pipeline.run(&world, agent.as_mut())?;

    let value_grid: ValueGrid = agent.value_grid(&world);
    let policy_grid: Option<PolicyGrid> = agent.policy_grid(&world);

    output::print_section(&format!("Learned values: {}", agent.name()));
    output::print_value_grid(&value_grid);

    if args.arrows {
        match &policy_grid {
            Some(policy) => {
                output::print_section("Greedy policy (bottom-up)");
                output::print_policy_grid(policy, &value_grid);
            }
            None => eprintln!("Note: --arrows requires the action-value variant; skipping."),
        }
    }

    output::print_section("Run summary");
    output::print_kv("episodes", &result.episodes.to_string());
    output::print_kv("total steps", &result.total_steps.to_string());
    output::print_kv("mean steps", &format!("{:.2}", result.mean_steps));

    if let Some(path) = &args.summary {
        let epsilon = match args.variant {
            Variant::ActionValue => Some(config.epsilon),
            Variant::StateValue => None,
        };
        let summary = TrainingSummaryFile {
            agent: agent.name().to_string(),
            episodes: result.episodes,
            total_steps: result.total_steps,
            mean_steps: result.mean_steps,
            metadata: SummaryMetadata {
                alpha: config.alpha,
                gamma: config.gamma,
                epsilon,
                seed: config.seed,
            },
        };
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &summary)?;
        println!("Summary written to {}", path.display());
    }

    if let Some(path) = &args.export_csv {
        export::write_value_grid(path, &value_grid)?;
        println!("Value grid written to {}", path.display());
    }

    Ok(())
}
