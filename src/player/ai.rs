use anyhow::anyhow;
use rand::Rng;

use crate::engine::{Coordinate, Grid};

use super::Agent;

/// Computer opponent.
///
/// It knows where the enemy fleet lies: it keeps drawing uniform cells until
/// one holds an unsunk vessel and has not been shot at. Its shots therefore
/// never miss and are never rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutomatedAgent;

impl AutomatedAgent {
    pub fn new() -> Self {
        Self
    }
}

impl<const N: usize> Agent<N> for AutomatedAgent {
    fn propose_target<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        opponent: &Grid<N>,
    ) -> anyhow::Result<Coordinate> {
        if opponent.fleet().iter().all(|v| v.is_sunk()) {
            return Err(anyhow!("no vessel left afloat to target"));
        }
        loop {
            let cell = Coordinate::new(
                rng.random_range(0..N as i32),
                rng.random_range(0..N as i32),
            );
            let live = opponent.vessel_at(cell).is_some_and(|v| !v.is_sunk());
            if live && !opponent.is_targeted(cell) {
                return Ok(cell);
            }
        }
    }
}
