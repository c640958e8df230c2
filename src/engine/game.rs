//! Turn order state machine.

use core::fmt;

use super::common::{ShotError, ShotOutcome};
use super::coordinate::Coordinate;

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Driven by a person through the console.
    User,
    /// Driven by the computer.
    Automated,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::User => Side::Automated,
            Side::Automated => Side::User,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::User => write!(f, "user"),
            Side::Automated => write!(f, "computer"),
        }
    }
}

/// Whose move it is, or who has won. The user moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnState {
    #[default]
    UserTurn,
    AutomatedTurn,
    UserWon,
    AutomatedWon,
}

impl TurnState {
    /// The side to move, or `None` once the game is over.
    pub fn active(self) -> Option<Side> {
        match self {
            TurnState::UserTurn => Some(Side::User),
            TurnState::AutomatedTurn => Some(Side::Automated),
            TurnState::UserWon | TurnState::AutomatedWon => None,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            TurnState::UserWon => Some(Side::User),
            TurnState::AutomatedWon => Some(Side::Automated),
            TurnState::UserTurn | TurnState::AutomatedTurn => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.winner().is_some()
    }

    fn turn_of(side: Side) -> TurnState {
        match side {
            Side::User => TurnState::UserTurn,
            Side::Automated => TurnState::AutomatedTurn,
        }
    }

    fn won_by(side: Side) -> TurnState {
        match side {
            Side::User => TurnState::UserWon,
            Side::Automated => TurnState::AutomatedWon,
        }
    }

    /// State after the active side's shot resolved with `outcome`.
    ///
    /// `user_defeated` and `automated_defeated` are the grids' defeat flags
    /// after the shot. A hit keeps the turn, a miss or a sink passes it.
    /// Terminal states never change.
    pub fn after_shot(
        self,
        outcome: ShotOutcome,
        user_defeated: bool,
        automated_defeated: bool,
    ) -> TurnState {
        let Some(side) = self.active() else {
            return self;
        };
        if automated_defeated {
            return TurnState::won_by(Side::User);
        }
        if user_defeated {
            return TurnState::won_by(Side::Automated);
        }
        if outcome.repeats_turn() {
            TurnState::turn_of(side)
        } else {
            TurnState::turn_of(side.opponent())
        }
    }
}

/// Errors that end a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A side whose targets are always valid proposed a rejected shot.
    InvariantViolation {
        side: Side,
        target: Coordinate,
        error: ShotError,
    },
    /// A move was requested after the game ended.
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvariantViolation {
                side,
                target,
                error,
            } => write!(f, "{} proposed invalid target {}: {}", side, target, error),
            GameError::GameOver => write!(f, "the game is already over"),
        }
    }
}

impl core::error::Error for GameError {}
