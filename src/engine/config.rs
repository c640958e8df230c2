/// Side length of the standard square grid.
pub const GRID_SIZE: usize = 6;

/// Vessel lengths of the standard fleet, in placement order: one 3-cell vessel,
/// two 2-cell vessels and four 1-cell vessels.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Random placement attempts shared by the whole fleet before the generator
/// discards a grid and starts over.
pub const PLACEMENT_ATTEMPTS: usize = 2000;

/// Total number of vessel cells in the standard fleet.
pub const TOTAL_FLEET_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;
