//! Grid-world model: cells, movement directions, and the immutable world.
//!
//! The world is laid out once at construction and never mutated afterwards.
//! Move resolution lives here too: a move that would leave the grid or enter
//! a wall resolves to the original location, so walls shape the learned value
//! landscape without any special-cased rewards.

pub mod cell;
pub mod movement;
pub mod world;

pub use cell::{Cell, CellKind};
pub use movement::Direction;
pub use world::World;
