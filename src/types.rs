//! Newtype wrappers for improved type safety and domain modeling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A validated (row, col) coordinate on a grid.
///
/// A `Location` can only be constructed through bounds checking against a
/// concrete grid shape, so downstream table indexing never reads out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    row: usize,
    col: usize,
}

impl Location {
    /// Create a new location, validating it against the given grid shape.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if the coordinates fall outside
    /// the `rows` x `cols` bounding box.
    pub fn new(row: usize, col: usize, rows: usize, cols: usize) -> Result<Self, crate::Error> {
        if row < rows && col < cols {
            Ok(Location { row, col })
        } else {
            Err(crate::Error::OutOfBounds {
                row,
                col,
                rows,
                cols,
            })
        }
    }

    /// Construct without validation. Callers must have already established
    /// that the coordinates are in bounds.
    pub(crate) fn new_unchecked(row: usize, col: usize) -> Self {
        Location { row, col }
    }

    /// Row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(&self) -> usize {
        self.col
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_in_bounds() {
        let loc = Location::new(2, 3, 8, 8).unwrap();
        assert_eq!(loc.row(), 2);
        assert_eq!(loc.col(), 3);
    }

    #[test]
    fn test_location_out_of_bounds() {
        assert!(Location::new(8, 0, 8, 8).is_err());
        assert!(Location::new(0, 8, 8, 8).is_err());
    }
}
