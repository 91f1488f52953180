//! Iterated prisoner's dilemma with strategy inference
//!
//! An independent side simulation: two players repeatedly choose between
//! staying silent and defecting, observe noisy payoffs, and infer each
//! other's choices from the observed reward alone. Each player keeps a
//! running count of the opponent strategies it has inferred and biases its
//! own choice by the expected utilities under that history.

use rand::{Rng, RngExt, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use statrs::distribution::Normal;

use crate::{Error, Result};

/// Standard deviation of the Gaussian noise added to observed payoffs.
const PAYOFF_NOISE_STD: f64 = 0.5;

/// A player's choice in a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    Silent,
    Defect,
}

impl Strategy {
    /// Both strategies, in table index order.
    pub const ALL: [Strategy; 2] = [Strategy::Silent, Strategy::Defect];

    /// Stable table index.
    pub fn index(self) -> usize {
        match self {
            Strategy::Silent => 0,
            Strategy::Defect => 1,
        }
    }
}

/// 2x2 payoff matrix. Entry `(row, col)` holds the pair
/// (row player's payoff, column player's payoff).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PayoffMatrix {
    entries: [[(f64, f64); 2]; 2],
}

impl PayoffMatrix {
    /// The classic payoffs: mutual silence costs little, betrayal is free for
    /// the betrayer and ruinous for the betrayed, mutual defection hurts both.
    pub fn classic() -> Self {
        Self {
            entries: [[(-1.0, -1.0), (-12.0, 0.0)], [(0.0, -12.0), (-8.0, -8.0)]],
        }
    }

    /// Payoff pair for the given pair of choices.
    pub fn get(&self, row: Strategy, col: Strategy) -> (f64, f64) {
        self.entries[row.index()][col.index()]
    }
}

/// Running counts of inferred opponent strategies.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StrategyHistory {
    counts: [u64; 2],
}

impl StrategyHistory {
    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one inferred strategy.
    pub fn record(&mut self, strategy: Strategy) {
        self.counts[strategy.index()] += 1;
    }

    /// Count of inferred occurrences of the given strategy.
    pub fn count(&self, strategy: Strategy) -> u64 {
        self.counts[strategy.index()]
    }

    /// Fraction of observed rounds in which the opponent defected.
    ///
    /// Defaults to a neutral 0.5 before any observation exists; this is a
    /// recovered local condition, never an error.
    pub fn defect_ratio(&self) -> f64 {
        let total = self.counts[0] + self.counts[1];
        if total == 0 {
            0.5
        } else {
            self.counts[Strategy::Defect.index()] as f64 / total as f64
        }
    }
}

/// Choose a strategy given the opponent's observed history.
///
/// Computes the expected utility of each choice under the observed defect
/// ratio, then draws: the probability of defecting is
/// silent_utility / (silent_utility + defect_utility). With the all-negative
/// classic payoffs this defects more often the worse silence looks.
pub fn choose_strategy<R: Rng>(
    matrix: &PayoffMatrix,
    opponent_history: &StrategyHistory,
    rng: &mut R,
) -> Strategy {
    let defect_ratio = opponent_history.defect_ratio();

    let silent_utility = matrix.get(Strategy::Silent, Strategy::Silent).0 * (1.0 - defect_ratio)
        + matrix.get(Strategy::Silent, Strategy::Defect).0 * defect_ratio;
    let defect_utility = matrix.get(Strategy::Defect, Strategy::Silent).0 * (1.0 - defect_ratio)
        + matrix.get(Strategy::Defect, Strategy::Defect).0 * defect_ratio;

    let p_defect = silent_utility / (silent_utility + defect_utility);
    if rng.random::<f64>() < p_defect {
        Strategy::Defect
    } else {
        Strategy::Silent
    }
}

/// Play one round: the matrix payoff for the chosen pair, with independent
/// Gaussian noise on each player's observed reward.
pub fn play_round<R: Rng>(
    matrix: &PayoffMatrix,
    first: Strategy,
    second: Strategy,
    noise: Normal,
    rng: &mut R,
) -> (f64, f64) {
    let (mut reward_first, mut reward_second) = matrix.get(first, second);
    reward_first += rng.sample(noise);
    reward_second += rng.sample(noise);
    (reward_first, reward_second)
}

/// Infer the opponent's strategy from a noisy observed reward: the candidate
/// whose noiseless payoff in the chooser's row is closest to the observation.
pub fn infer_strategy(matrix: &PayoffMatrix, own: Strategy, observed_reward: f64) -> Strategy {
    let silent_gap = (matrix.get(own, Strategy::Silent).0 - observed_reward).abs();
    let defect_gap = (matrix.get(own, Strategy::Defect).0 - observed_reward).abs();
    if defect_gap < silent_gap {
        Strategy::Defect
    } else {
        Strategy::Silent
    }
}

/// Dilemma simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DilemmaConfig {
    /// Number of rounds to play
    pub rounds: usize,

    /// Random seed
    pub seed: Option<u64>,
}

impl Default for DilemmaConfig {
    fn default() -> Self {
        Self {
            rounds: 10_000,
            seed: None,
        }
    }
}

/// Result of a dilemma run: each player's history of inferred opponent
/// strategies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DilemmaResult {
    /// What player two inferred about player one, per strategy index.
    pub history_player_one: StrategyHistory,
    /// What player one inferred about player two, per strategy index.
    pub history_player_two: StrategyHistory,
}

/// Run the iterated simulation for the configured number of rounds.
pub fn run(config: &DilemmaConfig) -> Result<DilemmaResult> {
    let matrix = PayoffMatrix::classic();
    let noise = Normal::new(0.0, PAYOFF_NOISE_STD).map_err(|e| Error::InvalidConfiguration {
        message: format!("payoff noise distribution: {e}"),
    })?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut history_player_one = StrategyHistory::new();
    let mut history_player_two = StrategyHistory::new();

    for _ in 0..config.rounds {
        let strategy_one = choose_strategy(&matrix, &history_player_two, &mut rng);
        let strategy_two = choose_strategy(&matrix, &history_player_one, &mut rng);

        let (reward_one, reward_two) =
            play_round(&matrix, strategy_one, strategy_two, noise, &mut rng);

        let inferred_two = infer_strategy(&matrix, strategy_one, reward_one);
        let inferred_one = infer_strategy(&matrix, strategy_two, reward_two);

        history_player_one.record(inferred_one);
        history_player_two.record(inferred_two);
    }

    Ok(DilemmaResult {
        history_player_one,
        history_player_two,
    })
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_defect_ratio_defaults_to_half() {
        let history = StrategyHistory::new();
        assert_eq!(history.defect_ratio(), 0.5);
    }

    #[test]
    fn test_defect_ratio_tracks_counts() {
        let mut history = StrategyHistory::new();
        history.record(Strategy::Defect);
        history.record(Strategy::Defect);
        history.record(Strategy::Silent);
        assert!((history.defect_ratio() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_infer_strategy_picks_nearest_payoff() {
        let matrix = PayoffMatrix::classic();

        // Own choice Silent: candidates are -1 (opponent silent) and -12
        // (opponent defected).
        assert_eq!(
            infer_strategy(&matrix, Strategy::Silent, -0.7),
            Strategy::Silent
        );
        assert_eq!(
            infer_strategy(&matrix, Strategy::Silent, -11.2),
            Strategy::Defect
        );

        // Own choice Defect: candidates are 0 and -8.
        assert_eq!(
            infer_strategy(&matrix, Strategy::Defect, 0.4),
            Strategy::Silent
        );
        assert_eq!(
            infer_strategy(&matrix, Strategy::Defect, -7.6),
            Strategy::Defect
        );
    }

    #[test]
    fn test_play_round_noise_stays_near_payoff() {
        let matrix = PayoffMatrix::classic();
        let noise = Normal::new(0.0, PAYOFF_NOISE_STD).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..100 {
            let (one, two) = play_round(&matrix, Strategy::Silent, Strategy::Silent, noise, &mut rng);
            // 0.5 std; five sigma keeps this deterministic in practice.
            assert!((one - -1.0).abs() < 2.5);
            assert!((two - -1.0).abs() < 2.5);
        }
    }

    #[test]
    fn test_run_counts_every_round() {
        let config = DilemmaConfig {
            rounds: 500,
            seed: Some(42),
        };
        let result = run(&config).unwrap();

        let total_one = result.history_player_one.count(Strategy::Silent)
            + result.history_player_one.count(Strategy::Defect);
        let total_two = result.history_player_two.count(Strategy::Silent)
            + result.history_player_two.count(Strategy::Defect);
        assert_eq!(total_one, 500);
        assert_eq!(total_two, 500);
    }

    #[test]
    fn test_run_is_deterministic_under_seed() {
        let config = DilemmaConfig {
            rounds: 200,
            seed: Some(9),
        };
        let first = run(&config).unwrap();
        let second = run(&config).unwrap();
        assert_eq!(
            first.history_player_one.count(Strategy::Defect),
            second.history_player_one.count(Strategy::Defect)
        );
        assert_eq!(
            first.history_player_two.count(Strategy::Silent),
            second.history_player_two.count(Strategy::Silent)
        );
    }
}
