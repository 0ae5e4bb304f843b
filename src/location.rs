//! Board coordinates and offsets (C1).
//!
//! `Location` is signed so that the sentinel `(-1, -1)` ("no location") can be
//! represented without an `Option` wrapper; this matches how the sentinel is
//! threaded through the rest of the core (e.g. `SolverInstance::previous_shift`).

use std::ops::Add;

/// A cell on the board, or the sentinel `(-1, -1)` meaning "none".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub row: isize,
    pub column: isize,
}

/// The sentinel location used throughout the core for "no location" (absent
/// opponent, absent previous shift, objective not found on the board).
pub const NONE: Location = Location { row: -1, column: -1 };

impl Location {
    pub const fn new(row: isize, column: isize) -> Location {
        Location { row, column }
    }

    /// Whether this location is the `(-1, -1)` sentinel.
    pub fn is_none(&self) -> bool {
        *self == NONE
    }

    /// Whether this location lies within a square board of the given extent.
    pub fn in_bounds(&self, extent: isize) -> bool {
        self.row >= 0 && self.row < extent && self.column >= 0 && self.column < extent
    }

    /// The flat row-major index into a tile matrix of the given extent.
    ///
    /// Panics if `self` is out of bounds; callers are expected to have
    /// validated the location first (§7: invalid instance is a programmer
    /// error).
    pub fn index(&self, extent: isize) -> usize {
        assert!(self.in_bounds(extent), "location {self:?} out of bounds for extent {extent}");
        (self.row * extent + self.column) as usize
    }
}

/// A (Δrow, Δcolumn) displacement, used for neighbor directions and shift
/// travel directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offset {
    pub d_row: isize,
    pub d_column: isize,
}

impl Offset {
    pub const fn new(d_row: isize, d_column: isize) -> Offset {
        Offset { d_row, d_column }
    }

    /// Scales the offset by an integer factor, e.g. walking `n` steps along it.
    pub fn scale(&self, factor: isize) -> Offset {
        Offset::new(self.d_row * factor, self.d_column * factor)
    }
}

impl Add<Offset> for Location {
    type Output = Location;
    fn add(self, rhs: Offset) -> Location {
        Location::new(self.row + rhs.d_row, self.column + rhs.d_column)
    }
}

impl Add<&Offset> for Location {
    type Output = Location;
    fn add(self, rhs: &Offset) -> Location {
        self + *rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_not_in_bounds() {
        assert!(!NONE.in_bounds(7));
    }

    #[test]
    fn add_offset() {
        let loc = Location::new(2, 3) + Offset::new(1, 0);
        assert_eq!(loc, Location::new(3, 3));
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Location::new(0, 5) < Location::new(1, 0));
        assert!(Location::new(1, 0) < Location::new(1, 1));
    }

    #[test]
    fn index_is_row_major() {
        assert_eq!(Location::new(2, 3).index(7), 2 * 7 + 3);
    }

    #[test]
    #[should_panic]
    fn index_panics_out_of_bounds() {
        Location::new(-1, -1).index(7);
    }
}
