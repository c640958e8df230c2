#![cfg(feature = "std")]

//! Console rendering of grids and session narration.

use std::fmt::Write as _;
use std::io::Write;

use crate::engine::{CellState, Coordinate, Grid, GridSnapshot, ShotOutcome, Side};
use crate::player::{GameObserver, ShotReport};

const RULE_WIDTH: usize = 28;

fn symbol(state: CellState) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Ship => 'S',
        CellState::Hit => 'X',
        CellState::Miss => 'o',
        CellState::MissMarker => '-',
    }
}

/// 1-indexed `row col` label, the form the user types targets in.
pub fn coord_label(cell: Coordinate) -> String {
    format!("{} {}", cell.row + 1, cell.col + 1)
}

/// Render a snapshot as a numbered table. Ships of a hidden grid render
/// exactly like open water.
pub fn render_snapshot<const N: usize>(snapshot: &GridSnapshot<N>) -> String {
    let mut out = String::from("  |");
    for c in 0..N {
        let _ = write!(out, " {} |", c + 1);
    }
    for (r, row) in snapshot.cells.iter().enumerate() {
        let _ = write!(out, "\n{} |", r + 1);
        for &state in row {
            let _ = write!(out, " {} |", symbol(state.visible(snapshot.hidden)));
        }
    }
    out
}

pub fn render_grid<const N: usize>(grid: &Grid<N>) -> String {
    render_snapshot(&grid.snapshot())
}

/// Print the static greeting and input instructions.
pub fn write_greeting<W: Write>(out: &mut W) -> std::io::Result<()> {
    let rule = "-".repeat(RULE_WIDTH);
    writeln!(out, "{}", rule)?;
    writeln!(out, "          Welcome!")?;
    writeln!(out, "    This is Sea Battle.")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, " Enter targets as: row col")?;
    writeln!(out, "  row - row number")?;
    writeln!(out, "  col - column number")?;
    writeln!(out, " Legend: S ship, X hit,")?;
    writeln!(out, "  o miss, - cleared water")?;
    Ok(())
}

/// Narrates a session: boards before every move, shot outcomes, the winner.
pub struct ConsoleObserver<W> {
    out: W,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_boards<const N: usize>(
        &mut self,
        user_grid: &Grid<N>,
        automated_grid: &Grid<N>,
    ) -> std::io::Result<()> {
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "Your board:")?;
        writeln!(self.out, "{}", render_grid(user_grid))?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "Computer's board:")?;
        writeln!(self.out, "{}", render_grid(automated_grid))?;
        writeln!(self.out, "{}", rule)?;
        Ok(())
    }
}

impl<W: Write, const N: usize> GameObserver<N> for ConsoleObserver<W> {
    fn turn_started(
        &mut self,
        side: Side,
        user_grid: &Grid<N>,
        automated_grid: &Grid<N>,
    ) -> anyhow::Result<()> {
        self.print_boards(user_grid, automated_grid)?;
        match side {
            Side::User => writeln!(self.out, "Your turn!")?,
            Side::Automated => writeln!(self.out, "Computer's turn!")?,
        }
        Ok(())
    }

    fn shot_resolved(&mut self, report: &ShotReport) -> anyhow::Result<()> {
        if report.shooter == Side::Automated {
            writeln!(self.out, "Computer fires at: {}", coord_label(report.target))?;
        }
        let message = match report.outcome {
            ShotOutcome::Sunk => "Ship sunk!",
            ShotOutcome::Hit => "Ship hit!",
            ShotOutcome::Miss => "Miss!",
        };
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    fn game_over(
        &mut self,
        winner: Side,
        user_grid: &Grid<N>,
        automated_grid: &Grid<N>,
    ) -> anyhow::Result<()> {
        self.print_boards(user_grid, automated_grid)?;
        match winner {
            Side::User => writeln!(self.out, "You won!")?,
            Side::Automated => writeln!(self.out, "The computer won!")?,
        }
        self.out.flush()?;
        Ok(())
    }
}
