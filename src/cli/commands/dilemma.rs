//! Dilemma command - run the iterated prisoner's dilemma simulation

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output,
    dilemma::{DilemmaConfig, Strategy},
};

#[derive(Parser, Debug)]
#[command(about = "Run the iterated prisoner's dilemma with strategy inference")]
pub struct DilemmaArgs {
    /// Number of rounds to play
    #[arg(long, short = 'r', default_value_t = 10_000)]
    pub rounds: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: DilemmaArgs) -> Result<()> {
    let config = DilemmaConfig {
        rounds: args.rounds,
        seed: args.seed,
    };
    let result = crate::dilemma::run(&config)?;

    output::print_section("Inferred strategy histories");
    output::print_kv(
        "player one",
        &format!(
            "silent: {}, defect: {} (defect ratio {:.3})",
            result.history_player_one.count(Strategy::Silent),
            result.history_player_one.count(Strategy::Defect),
            result.history_player_one.defect_ratio()
        ),
    );
    output::print_kv(
        "player two",
        &format!(
            "silent: {}, defect: {} (defect ratio {:.3})",
            result.history_player_two.count(Strategy::Silent),
            result.history_player_two.count(Strategy::Defect),
            result.history_player_two.defect_ratio()
        ),
    );

    Ok(())
}
