//! Ports (trait boundaries) for the training pipeline.
//!
//! These traits are owned by the domain and implemented by the concrete
//! agents and observers, keeping the episode loop decoupled from specific
//! learning rules and output formats.

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::Observer;
