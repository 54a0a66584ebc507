//! Grid coordinate type.

use std::fmt;

/// An immutable (row, col) position on the field.
///
/// A `Location` carries no bounds of its own; validity is relative to a
/// field's depth and width (see [`Location::within`]).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `true` if this location lies inside a `depth` x `width` grid.
    #[inline]
    pub fn within(self, depth: usize, width: usize) -> bool {
        self.row < depth && self.col < width
    }

    /// The up-to-8 neighbors inside a `depth` x `width` grid, in row-major
    /// order.  Never includes `self`.
    pub fn neighbors(self, depth: usize, width: usize) -> Vec<Location> {
        let mut out = Vec::with_capacity(8);
        for dr in [-1_isize, 0, 1] {
            for dc in [-1_isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let (Some(row), Some(col)) = (
                    self.row.checked_add_signed(dr),
                    self.col.checked_add_signed(dc),
                ) else {
                    continue;
                };
                if row < depth && col < width {
                    out.push(Location { row, col });
                }
            }
        }
        out
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
