//! Export surface for display collaborators: snapshots and CSV records.

pub mod snapshot;
pub mod value_csv;

pub use snapshot::{PolicyGrid, ValueGrid};
pub use value_csv::write_value_grid;
