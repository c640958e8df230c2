//! Game session orchestration: two agents, two grids, one turn state.

use log::{debug, error, info};
use rand::Rng;

use crate::engine::{
    Coordinate, GameError, GenerationError, Grid, PlacementGenerator, ShotOutcome, Side,
    TurnState,
};

use super::Agent;

/// Receives session events, e.g. to narrate them on a console.
///
/// Every hook defaults to doing nothing.
pub trait GameObserver<const N: usize> {
    /// A side is about to choose a target.
    fn turn_started(
        &mut self,
        _side: Side,
        _user_grid: &Grid<N>,
        _automated_grid: &Grid<N>,
    ) -> anyhow::Result<()> {
        Ok(())
    }

    /// A shot by `side` was accepted by the opponent grid.
    fn shot_resolved(&mut self, _report: &ShotReport) -> anyhow::Result<()> {
        Ok(())
    }

    /// The game reached a terminal state.
    fn game_over(
        &mut self,
        _winner: Side,
        _user_grid: &Grid<N>,
        _automated_grid: &Grid<N>,
    ) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event.
impl<const N: usize> GameObserver<N> for () {}

/// One accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub shooter: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// State after the shot.
    pub state: TurnState,
}

/// Runs one game between a user-side agent `U` and an automated-side agent `A`.
///
/// Each side fires at the other's grid. The controller owns both grids for the
/// whole session.
pub struct TurnController<U, A, const N: usize> {
    user: U,
    automated: A,
    user_grid: Grid<N>,
    automated_grid: Grid<N>,
    state: TurnState,
    shots: usize,
}

impl<U, A, const N: usize> TurnController<U, A, N>
where
    U: Agent<N>,
    A: Agent<N>,
{
    /// Bind the agents to their grids. The automated side's grid is hidden
    /// from viewers and both grids are moved into the shooting phase.
    pub fn new(user: U, automated: A, mut user_grid: Grid<N>, mut automated_grid: Grid<N>) -> Self {
        user_grid.begin();
        automated_grid.begin();
        automated_grid.set_hidden(true);
        Self {
            user,
            automated,
            user_grid,
            automated_grid,
            state: TurnState::default(),
            shots: 0,
        }
    }

    /// Start a session on freshly generated grids for the standard fleet.
    pub fn with_random_grids<R: Rng + ?Sized>(
        rng: &mut R,
        user: U,
        automated: A,
    ) -> Result<Self, GenerationError> {
        let generator = PlacementGenerator::default();
        let user_grid = generator.generate::<N, R>(rng)?;
        let automated_grid = generator.generate::<N, R>(rng)?;
        Ok(Self::new(user, automated, user_grid, automated_grid))
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn winner(&self) -> Option<Side> {
        self.state.winner()
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Number of accepted shots so far, both sides together.
    pub fn shots(&self) -> usize {
        self.shots
    }

    pub fn user_grid(&self) -> &Grid<N> {
        &self.user_grid
    }

    pub fn automated_grid(&self) -> &Grid<N> {
        &self.automated_grid
    }

    pub fn user(&self) -> &U {
        &self.user
    }

    pub fn automated(&self) -> &A {
        &self.automated
    }

    /// Resolve exactly one shot by the active side.
    ///
    /// Rejected targets go back to the agent, which may propose again without
    /// losing its turn. An agent that refuses to retry aborts the game with
    /// [`GameError::InvariantViolation`].
    pub fn step<R, O>(&mut self, rng: &mut R, observer: &mut O) -> anyhow::Result<ShotReport>
    where
        R: Rng + ?Sized,
        O: GameObserver<N>,
    {
        let side = self.state.active().ok_or(GameError::GameOver)?;
        observer.turn_started(side, &self.user_grid, &self.automated_grid)?;

        let (target, outcome) = match side {
            Side::User => fire(side, &mut self.user, rng, &mut self.automated_grid)?,
            Side::Automated => fire(side, &mut self.automated, rng, &mut self.user_grid)?,
        };
        self.shots += 1;
        self.state = self.state.after_shot(
            outcome,
            self.user_grid.is_defeated(),
            self.automated_grid.is_defeated(),
        );
        debug!(
            "shot {}: {} fired at {} -> {:?}, now {:?}",
            self.shots, side, target, outcome, self.state
        );

        let report = ShotReport {
            shooter: side,
            target,
            outcome,
            state: self.state,
        };
        observer.shot_resolved(&report)?;
        if let Some(winner) = self.state.winner() {
            info!("{} won after {} shots", winner, self.shots);
            observer.game_over(winner, &self.user_grid, &self.automated_grid)?;
        }
        Ok(report)
    }

    /// Play until one side has sunk the other's fleet and return the winner.
    pub fn run<R, O>(&mut self, rng: &mut R, observer: &mut O) -> anyhow::Result<Side>
    where
        R: Rng + ?Sized,
        O: GameObserver<N>,
    {
        loop {
            if let Some(winner) = self.state.winner() {
                return Ok(winner);
            }
            self.step(rng, observer)?;
        }
    }
}

/// Ask `agent` for targets until `target_grid` accepts one.
fn fire<G, R, const N: usize>(
    side: Side,
    agent: &mut G,
    rng: &mut R,
    target_grid: &mut Grid<N>,
) -> anyhow::Result<(Coordinate, ShotOutcome)>
where
    G: Agent<N>,
    R: Rng + ?Sized,
{
    loop {
        let target = agent.propose_target(rng, target_grid)?;
        match target_grid.resolve_shot(target) {
            Ok(outcome) => return Ok((target, outcome)),
            Err(err) => {
                if let Err(err) = agent.shot_rejected(target, err) {
                    error!("{} proposed rejected target {}: {}", side, target, err);
                    return Err(GameError::InvariantViolation {
                        side,
                        target,
                        error: err,
                    }
                    .into());
                }
            }
        }
    }
}
