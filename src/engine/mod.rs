//! Sea battle engine (no_std compatible)
//!
//! Grid model, shot resolution, fleet generation and the turn state machine.
//! Needs only `core`, `alloc`, `num-traits`, `rand` and `log`.

pub mod cellset;
pub mod common;
pub mod config;
pub mod coordinate;
pub mod game;
pub mod grid;
pub mod placement;
pub mod vessel;

pub use cellset::CellSet;
pub use common::{GenerationError, PlacementError, ShotError, ShotOutcome};
pub use config::*;
pub use coordinate::Coordinate;
pub use game::{GameError, Side, TurnState};
pub use grid::{CellState, Grid, GridSnapshot, Phase, StandardGrid};
pub use placement::PlacementGenerator;
pub use vessel::{Orientation, Vessel};
