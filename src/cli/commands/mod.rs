//! CLI command implementations

pub mod dilemma;
pub mod train;
