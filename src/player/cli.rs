#![cfg(feature = "std")]

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::bail;
use log::warn;
use rand::Rng;

use crate::engine::{Coordinate, Grid, ShotError};

use super::Agent;

/// Why a line of console input is not a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFormatError {
    /// The line did not hold exactly two tokens.
    TokenCount(usize),
    /// A token is not a non-negative whole number.
    NotANumber(String),
}

impl fmt::Display for InputFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormatError::TokenCount(_) => {
                write!(f, "Enter two coordinates separated by a space!")
            }
            InputFormatError::NotANumber(token) => {
                write!(f, "Coordinates must be whole numbers, got '{}'!", token)
            }
        }
    }
}

impl std::error::Error for InputFormatError {}

fn parse_index(token: &str) -> Result<i32, InputFormatError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputFormatError::NotANumber(token.to_string()));
    }
    // All digits, so parsing fails only on overflow. Saturate and let the
    // grid reject it as off the board.
    Ok(token.parse::<i32>().unwrap_or(i32::MAX))
}

/// Parse a `row col` line of 1-indexed numbers into a 0-indexed coordinate.
///
/// Range is not checked here: `0 0` parses to `(-1, -1)` and numbers too
/// large for `i32` saturate; both are left for the grid to reject.
pub fn parse_target(line: &str) -> Result<Coordinate, InputFormatError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputFormatError::TokenCount(tokens.len()));
    };
    let row = parse_index(row)?;
    let col = parse_index(col)?;
    Ok(Coordinate::new(row - 1, col - 1))
}

/// Console-driven agent: prompts on `output` and reads targets from `input`.
pub struct HumanAgent<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> HumanAgent<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Give back the input and output handles.
    pub fn into_inner(self) -> (I, O) {
        (self.input, self.output)
    }
}

impl<I: BufRead, O: Write, const N: usize> Agent<N> for HumanAgent<I, O> {
    fn propose_target<R: Rng + ?Sized>(
        &mut self,
        _rng: &mut R,
        _opponent: &Grid<N>,
    ) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input closed before a target was entered");
            }
            match parse_target(&line) {
                Ok(target) => return Ok(target),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    fn shot_rejected(&mut self, target: Coordinate, error: ShotError) -> Result<(), ShotError> {
        match error {
            ShotError::OutOfBounds | ShotError::AlreadyTargeted => {
                if let Err(err) = writeln!(self.output, "{}", error) {
                    warn!("could not report rejected target {}: {}", target, err);
                }
                Ok(())
            }
            ShotError::NotStarted => Err(error),
        }
    }
}
