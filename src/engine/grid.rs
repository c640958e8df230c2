//! Grid state: vessel placement, shot resolution and defeat detection.

use alloc::vec::Vec;
use core::fmt;

use super::cellset::CellSet;
use super::common::{PlacementError, ShotError, ShotOutcome};
use super::config::GRID_SIZE;
use super::coordinate::Coordinate;
use super::vessel::Vessel;

type Cells<const N: usize> = CellSet<u128, N>;

/// Display and logical state of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Ship,
    Hit,
    Miss,
    /// Water next to a sunk vessel, known to be empty without being shot.
    MissMarker,
}

impl CellState {
    /// The state an outside viewer may see. Hidden grids show ships as water.
    pub fn visible(self, hidden: bool) -> CellState {
        match self {
            CellState::Ship if hidden => CellState::Empty,
            other => other,
        }
    }
}

/// Lifecycle phase of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Vessels are being placed; the exclusion zone blocks new vessels.
    Placement,
    /// Vessels are fixed; the shot history blocks repeated shots.
    Shooting,
}

/// Copy of a grid's cell states, as handed to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSnapshot<const N: usize> {
    pub cells: [[CellState; N]; N],
    pub hidden: bool,
}

/// An `N×N` board owned by one side.
///
/// Placement-time exclusion and shooting-time deduplication are kept in two
/// separate sets. [`Grid::begin`] is the boundary between them: it drops the
/// exclusion zone and opens the grid for shots.
#[derive(Clone)]
pub struct Grid<const N: usize> {
    phase: Phase,
    fleet: Vec<Vessel>,
    ship_cells: Cells<N>,
    hits: Cells<N>,
    misses: Cells<N>,
    markers: Cells<N>,
    exclusion_zone: Cells<N>,
    shot_history: Cells<N>,
    sunk: usize,
    hidden: bool,
}

/// Grid of the standard size.
pub type StandardGrid = Grid<GRID_SIZE>;

impl<const N: usize> Grid<N> {
    /// An empty grid in its placement phase.
    pub fn new() -> Self {
        Self {
            phase: Phase::Placement,
            fleet: Vec::new(),
            ship_cells: Cells::new(),
            hits: Cells::new(),
            misses: Cells::new(),
            markers: Cells::new(),
            exclusion_zone: Cells::new(),
            shot_history: Cells::new(),
            sunk: 0,
            hidden: false,
        }
    }

    /// Side length of the grid.
    pub const fn size(&self) -> usize {
        N
    }

    /// `true` if `cell` lies inside `[0, N)×[0, N)`.
    pub fn in_bounds(&self, cell: Coordinate) -> bool {
        Cells::<N>::in_bounds(cell)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Placed vessels, in placement order.
    pub fn fleet(&self) -> &[Vessel] {
        &self.fleet
    }

    /// Number of vessels sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hide ship cells from outside viewers. Has no effect on play.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Place a vessel.
    ///
    /// Every cell must lie on the grid and outside the exclusion zone. On
    /// success the vessel's cells and its surrounding ring join the zone, so
    /// no later vessel can touch it, diagonals included.
    pub fn place(&mut self, vessel: Vessel) -> Result<(), PlacementError> {
        if self.phase != Phase::Placement {
            return Err(PlacementError::PlacementClosed);
        }
        if vessel.length() == 0 {
            return Err(PlacementError::EmptyVessel);
        }
        // Checked before deriving cells so cell arithmetic stays small.
        if vessel.length() > N || !self.in_bounds(vessel.anchor()) {
            return Err(PlacementError::OutOfBounds);
        }
        if vessel.occupied_cells().any(|cell| !self.in_bounds(cell)) {
            return Err(PlacementError::OutOfBounds);
        }
        if vessel
            .occupied_cells()
            .any(|cell| self.exclusion_zone.contains(cell))
        {
            return Err(PlacementError::Overlap);
        }

        for cell in vessel.occupied_cells() {
            self.ship_cells.insert(cell);
            self.exclusion_zone.insert(cell);
        }
        for cell in vessel.occupied_cells().flat_map(Coordinate::neighbourhood) {
            self.exclusion_zone.insert(cell);
        }
        self.fleet.push(vessel);
        Ok(())
    }

    /// End the placement phase.
    ///
    /// The exclusion zone only guards placement; dropping it here keeps ring
    /// cells from being mistaken for shot-at cells. Calling this again is a
    /// no-op.
    pub fn begin(&mut self) {
        if self.phase == Phase::Placement {
            self.exclusion_zone.clear();
            self.phase = Phase::Shooting;
        }
    }

    /// Fire at `target`.
    ///
    /// Sinking a vessel marks the untouched water around it as
    /// [`CellState::MissMarker`] and records those cells in the shot history.
    /// No vessel can lie there, so this never hides a live target.
    pub fn resolve_shot(&mut self, target: Coordinate) -> Result<ShotOutcome, ShotError> {
        if self.phase != Phase::Shooting {
            return Err(ShotError::NotStarted);
        }
        if !self.in_bounds(target) {
            return Err(ShotError::OutOfBounds);
        }
        if !self.shot_history.insert(target) {
            return Err(ShotError::AlreadyTargeted);
        }

        let Some(idx) = self.fleet.iter().position(|v| v.occupies(target)) else {
            self.misses.insert(target);
            return Ok(ShotOutcome::Miss);
        };

        self.hits.insert(target);
        if !self.fleet[idx].register_hit() {
            return Ok(ShotOutcome::Hit);
        }

        self.sunk += 1;
        let vessel = self.fleet[idx];
        for cell in vessel.occupied_cells().flat_map(Coordinate::neighbourhood) {
            if self.shot_history.insert(cell) {
                self.markers.insert(cell);
            }
        }
        Ok(ShotOutcome::Sunk)
    }

    /// `true` once every vessel has sunk. A grid without vessels is never
    /// defeated.
    pub fn is_defeated(&self) -> bool {
        !self.fleet.is_empty() && self.sunk == self.fleet.len()
    }

    /// `true` if `cell` is in the shot history.
    pub fn is_targeted(&self, cell: Coordinate) -> bool {
        self.shot_history.contains(cell)
    }

    /// The vessel occupying `cell`, if any.
    pub fn vessel_at(&self, cell: Coordinate) -> Option<&Vessel> {
        if !self.ship_cells.contains(cell) {
            return None;
        }
        self.fleet.iter().find(|v| v.occupies(cell))
    }

    /// State of `cell`, or `None` off the grid.
    pub fn cell(&self, cell: Coordinate) -> Option<CellState> {
        if !self.in_bounds(cell) {
            return None;
        }
        let state = if self.hits.contains(cell) {
            CellState::Hit
        } else if self.misses.contains(cell) {
            CellState::Miss
        } else if self.markers.contains(cell) {
            CellState::MissMarker
        } else if self.ship_cells.contains(cell) {
            CellState::Ship
        } else {
            CellState::Empty
        };
        Some(state)
    }

    /// Copy of all cell states together with the `hidden` flag.
    pub fn snapshot(&self) -> GridSnapshot<N> {
        let cells = core::array::from_fn(|r| {
            core::array::from_fn(|c| {
                self.cell(Coordinate::new(r as i32, c as i32))
                    .unwrap_or(CellState::Empty)
            })
        });
        GridSnapshot {
            cells,
            hidden: self.hidden,
        }
    }
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid<{}> {{\n  phase: {:?},\n  sunk: {}/{},\n  fleet: {:?},\n  shots: {:?}\n}}",
            N,
            self.phase,
            self.sunk,
            self.fleet.len(),
            self.fleet,
            self.shot_history,
        )
    }
}
