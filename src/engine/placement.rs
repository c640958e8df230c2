//! Randomised fleet placement with a shared retry budget.

use log::debug;
use rand::Rng;

use super::common::GenerationError;
use super::config::{FLEET, PLACEMENT_ATTEMPTS};
use super::coordinate::Coordinate;
use super::grid::Grid;
use super::vessel::{Orientation, Vessel};

/// Builds grids holding a whole fleet at random, non-touching positions.
///
/// Vessels are placed in fleet order. Each attempt draws an anchor with both
/// axes in `0..=N` and a random orientation. Anchors on row or column `N` are
/// always off the grid and simply burn an attempt; the range is kept as is
/// because it only affects how many attempts a layout takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementGenerator<'a> {
    fleet: &'a [usize],
    attempt_budget: usize,
}

impl<'a> PlacementGenerator<'a> {
    pub const fn new(fleet: &'a [usize]) -> Self {
        Self {
            fleet,
            attempt_budget: PLACEMENT_ATTEMPTS,
        }
    }

    /// Replace the number of attempts shared by the whole fleet (at least one).
    pub const fn with_attempt_budget(mut self, attempt_budget: usize) -> Self {
        self.attempt_budget = if attempt_budget == 0 { 1 } else { attempt_budget };
        self
    }

    pub fn fleet(&self) -> &'a [usize] {
        self.fleet
    }

    fn validate<const N: usize>(&self) -> Result<(), GenerationError> {
        if self.fleet.is_empty() || self.fleet.iter().any(|&len| len == 0 || len > N) {
            return Err(GenerationError::InvalidFleet);
        }
        Ok(())
    }

    /// One pass over the fleet on a fresh grid.
    ///
    /// Returns the grid in its shooting phase, or `BudgetExhausted` once the
    /// shared attempt counter runs out.
    pub fn try_generate<const N: usize, R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Grid<N>, GenerationError> {
        self.validate::<N>()?;
        let mut grid = Grid::<N>::new();
        let mut attempts = 0;
        for (placed, &length) in self.fleet.iter().enumerate() {
            loop {
                if attempts == self.attempt_budget {
                    return Err(GenerationError::BudgetExhausted { placed, attempts });
                }
                attempts += 1;
                let vessel = random_vessel::<N, R>(rng, length);
                if grid.place(vessel).is_ok() {
                    break;
                }
            }
        }
        debug!(
            "placed {} vessels on a {}x{} grid in {} attempts",
            self.fleet.len(),
            N,
            N,
            attempts
        );
        grid.begin();
        Ok(grid)
    }

    /// Generate grids until one holds the whole fleet.
    ///
    /// Exhausted passes are discarded wholesale. There is no cap on restarts,
    /// so a fleet that cannot fit loops forever; only an empty fleet or a
    /// vessel of length zero or longer than `N` is rejected up front.
    pub fn generate<const N: usize, R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Grid<N>, GenerationError> {
        self.validate::<N>()?;
        let mut restarts = 0usize;
        loop {
            match self.try_generate::<N, R>(rng) {
                Ok(grid) => return Ok(grid),
                Err(GenerationError::BudgetExhausted { placed, attempts }) => {
                    restarts += 1;
                    debug!(
                        "discarding grid after {} attempts with {} of {} vessels placed (restart {})",
                        attempts,
                        placed,
                        self.fleet.len(),
                        restarts
                    );
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl Default for PlacementGenerator<'static> {
    fn default() -> Self {
        Self::new(&FLEET)
    }
}

fn random_vessel<const N: usize, R: Rng + ?Sized>(rng: &mut R, length: usize) -> Vessel {
    let anchor = Coordinate::new(
        rng.random_range(0..=N as i32),
        rng.random_range(0..=N as i32),
    );
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Vessel::new(length, anchor, orientation)
}
