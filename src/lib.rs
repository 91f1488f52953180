//! Grid-world temporal-difference learning
//!
//! This crate provides:
//! - An immutable grid-world model with bump-on-collision move resolution
//! - Two TD learning engines: state-value TD(0) and ε-greedy action values
//! - An episodic training pipeline with composable observers
//! - Display-ready value and policy snapshots with JSON/CSV export
//! - An independent prisoner's-dilemma strategy-inference simulation

pub mod app;
pub mod cli;
pub mod dilemma;
pub mod error;
pub mod export;
pub mod grid;
pub mod pipeline;
pub mod ports;
pub mod td;
pub mod types;

pub use app::LearningConfig;
pub use error::{Error, Result};
pub use export::{PolicyGrid, ValueGrid};
pub use grid::{Cell, CellKind, Direction, World};
pub use pipeline::{TrainingConfig, TrainingPipeline, TrainingResult};
pub use ports::{Agent, Observer};
pub use td::{ActionValues, EpsilonGreedyAgent, RandomWalkAgent, StateValues};
pub use types::Location;
