//! Grid positions.

use core::fmt;

/// Row/column offsets of a cell's 3×3 neighbourhood, the cell itself included.
const NEIGHBOURHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A 0-indexed `(row, col)` position.
///
/// Coordinates are plain values and may lie outside any particular grid;
/// bounds are checked by the [`Grid`](crate::Grid) that receives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The coordinate shifted by `(d_row, d_col)`.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// The 3×3 block centred on this coordinate, row by row.
    pub fn neighbourhood(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOURHOOD
            .into_iter()
            .map(move |(dr, dc)| self.offset(dr, dc))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
