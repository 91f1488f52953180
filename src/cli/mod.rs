//! CLI infrastructure for the gridworld toolkit
//!
//! This module provides the command-line interface for training the TD
//! learners and running the dilemma side simulation.

pub mod commands;
pub mod output;
