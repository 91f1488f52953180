//! Gridworld CLI - TD learning on a fixed grid world
//!
//! This CLI provides a unified interface for:
//! - Training the state-value and action-value TD learners
//! - Rendering learned values and greedy policies
//! - Exporting value grids for further analysis
//! - Running the prisoner's-dilemma side simulation

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gridworld")]
#[command(version, about = "TD learning on a fixed grid world", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a TD learner on the classic grid
    Train(gridworld::cli::commands::train::TrainArgs),

    /// Run the iterated prisoner's dilemma simulation
    Dilemma(gridworld::cli::commands::dilemma::DilemmaArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => gridworld::cli::commands::train::execute(args),
        Commands::Dilemma(args) => gridworld::cli::commands::dilemma::execute(args),
    }
}
