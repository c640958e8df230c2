//! Vessel definitions: a straight ship anchored at one end.

use core::fmt;

use super::coordinate::Coordinate;

/// Orientation of a vessel on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along the column axis from its anchor.
    Horizontal,
    /// Extends along the row axis from its anchor.
    Vertical,
}

impl Orientation {
    /// `(d_row, d_col)` of one step away from the anchor.
    const fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A linear ship of fixed length.
///
/// The occupied cells are derived from `anchor`, `length` and `orientation`
/// and never stored. Apart from its hit counter a vessel is a passive record:
/// only the [`Grid`](crate::Grid) holding it registers hits.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    length: usize,
    anchor: Coordinate,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Vessel {
    pub const fn new(length: usize, anchor: Coordinate, orientation: Orientation) -> Self {
        Self {
            length,
            anchor,
            orientation,
            remaining_hits: length,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Hits still needed to sink the vessel.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }

    /// The `length` cells starting at the anchor, in order away from it.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> {
        let (dr, dc) = self.orientation.step();
        let anchor = self.anchor;
        (0..self.length as i32).map(move |i| anchor.offset(dr * i, dc * i))
    }

    /// `true` if `cell` is one of the occupied cells.
    pub fn occupies(&self, cell: Coordinate) -> bool {
        let (dr, dc) = self.orientation.step();
        let (along, across) = if dr == 0 {
            (cell.col - self.anchor.col, cell.row - self.anchor.row)
        } else {
            (cell.row - self.anchor.row, cell.col - self.anchor.col)
        };
        across == 0 && along >= 0 && (along as usize) < self.length
    }

    /// Count one hit. Returns `true` if this hit sank the vessel.
    pub(crate) fn register_hit(&mut self) -> bool {
        if self.remaining_hits == 0 {
            return false;
        }
        self.remaining_hits -= 1;
        self.remaining_hits == 0
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ length: {}, anchor: {}, orientation: {:?}, remaining_hits: {} }}",
            self.length, self.anchor, self.orientation, self.remaining_hits,
        )
    }
}
