//! Agent trait and implementations
//!
//! An agent picks targets for one side of the game:
//! - AutomatedAgent: computer opponent that samples the enemy fleet's cells
//! - HumanAgent: reads targets from a console
//! - TurnController: drives two agents against each other's grids

use rand::Rng;

use crate::engine::{Coordinate, Grid, ShotError};

/// Supplies the next target for one side.
pub trait Agent<const N: usize> {
    /// Choose the next cell to fire at on `opponent`.
    fn propose_target<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        opponent: &Grid<N>,
    ) -> anyhow::Result<Coordinate>;

    /// Called when the opponent's grid rejected `target`.
    ///
    /// Returning `Ok` asks for another proposal within the same turn. The
    /// default treats any rejection as fatal.
    fn shot_rejected(&mut self, _target: Coordinate, error: ShotError) -> Result<(), ShotError> {
        Err(error)
    }
}

pub mod ai;
pub use ai::AutomatedAgent;

pub mod controller;
pub use controller::{GameObserver, ShotReport, TurnController};

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_target, HumanAgent, InputFormatError};
