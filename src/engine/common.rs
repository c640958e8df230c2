//! Common types for the engine: shot outcomes and the error taxonomy.

use core::fmt;

/// Result of a shot that the grid accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Struck a vessel that is still afloat. The shooter goes again.
    Hit,
    /// Struck open water.
    Miss,
    /// Struck the last intact cell of a vessel.
    Sunk,
}

impl ShotOutcome {
    /// `true` when the same side shoots again.
    pub fn repeats_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

/// Errors returned by [`Grid::place`](crate::Grid::place).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A vessel cell lies outside the grid.
    OutOfBounds,
    /// A vessel cell lies on, or next to, an already placed vessel.
    Overlap,
    /// The vessel has no cells.
    EmptyVessel,
    /// The shooting phase has already begun.
    PlacementClosed,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Vessel does not fit on the board"),
            PlacementError::Overlap => write!(f, "Vessel touches another vessel"),
            PlacementError::EmptyVessel => write!(f, "Vessel must occupy at least one cell"),
            PlacementError::PlacementClosed => {
                write!(f, "Vessels cannot be placed once shooting has begun")
            }
        }
    }
}

impl core::error::Error for PlacementError {}

/// Errors returned by [`Grid::resolve_shot`](crate::Grid::resolve_shot).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// The target lies outside the grid.
    OutOfBounds,
    /// The target was shot at before, or marked around a sunk vessel.
    AlreadyTargeted,
    /// The grid is still in its placement phase.
    NotStarted,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds => write!(f, "Shot is off the board!"),
            ShotError::AlreadyTargeted => write!(f, "That cell has already been targeted!"),
            ShotError::NotStarted => write!(f, "The board is not ready for shooting"),
        }
    }
}

impl core::error::Error for ShotError {}

/// Errors returned by the [`PlacementGenerator`](crate::PlacementGenerator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    /// The shared attempt budget ran out after `placed` vessels.
    BudgetExhausted { placed: usize, attempts: usize },
    /// The fleet is empty, or lists a vessel of length zero or longer than the grid.
    InvalidFleet,
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::BudgetExhausted { placed, attempts } => write!(
                f,
                "placed only {} vessels within {} attempts",
                placed, attempts
            ),
            GenerationError::InvalidFleet => {
                write!(f, "fleet must list at least one vessel, each fitting on the grid")
            }
        }
    }
}

impl core::error::Error for GenerationError {}
