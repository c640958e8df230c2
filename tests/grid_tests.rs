use seabattle::{
    CellState, Coordinate, Grid, Orientation, Phase, PlacementError, ShotError, ShotOutcome,
    Vessel,
};

type Grid6 = Grid<6>;

fn at(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

fn vessel(length: usize, row: i32, col: i32, orientation: Orientation) -> Vessel {
    Vessel::new(length, at(row, col), orientation)
}

#[test]
fn test_single_vessel_sinks_and_defeats_grid() {
    let mut grid = Grid6::new();
    grid.place(vessel(1, 2, 2, Orientation::Horizontal)).unwrap();
    grid.begin();

    assert!(!grid.is_defeated());
    assert_eq!(grid.resolve_shot(at(2, 2)).unwrap(), ShotOutcome::Sunk);
    assert!(grid.is_defeated());
    assert_eq!(grid.sunk_count(), 1);
    assert_eq!(grid.cell(at(2, 2)), Some(CellState::Hit));
}

#[test]
fn test_place_out_of_bounds() {
    let mut grid = Grid6::new();
    let err = grid
        .place(vessel(3, 0, 4, Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err, PlacementError::OutOfBounds);
    assert!(grid.fleet().is_empty());
    assert_eq!(grid.cell(at(0, 4)), Some(CellState::Empty));

    let err = grid.place(vessel(2, 5, 0, Orientation::Vertical)).unwrap_err();
    assert_eq!(err, PlacementError::OutOfBounds);
    let err = grid.place(vessel(1, -1, 0, Orientation::Vertical)).unwrap_err();
    assert_eq!(err, PlacementError::OutOfBounds);
}

#[test]
fn test_diagonal_neighbour_is_rejected() {
    let mut grid = Grid6::new();
    grid.place(vessel(1, 0, 0, Orientation::Horizontal)).unwrap();
    let err = grid.place(vessel(1, 1, 1, Orientation::Horizontal)).unwrap_err();
    assert_eq!(err, PlacementError::Overlap);
    assert_eq!(grid.fleet().len(), 1);
    assert_eq!(grid.cell(at(1, 1)), Some(CellState::Empty));
}

#[test]
fn test_direct_overlap_is_rejected() {
    let mut grid = Grid6::new();
    grid.place(vessel(3, 2, 1, Orientation::Horizontal)).unwrap();
    let err = grid.place(vessel(3, 0, 2, Orientation::Vertical)).unwrap_err();
    assert_eq!(err, PlacementError::Overlap);
}

#[test]
fn test_one_cell_gap_is_allowed() {
    let mut grid = Grid6::new();
    grid.place(vessel(1, 0, 0, Orientation::Horizontal)).unwrap();
    grid.place(vessel(2, 0, 2, Orientation::Vertical)).unwrap();
    grid.place(vessel(3, 3, 0, Orientation::Horizontal)).unwrap();
    assert_eq!(grid.fleet().len(), 3);
    assert_eq!(grid.cell(at(1, 2)), Some(CellState::Ship));
    assert_eq!(grid.cell(at(1, 1)), Some(CellState::Empty));
}

#[test]
fn test_zero_length_vessel_is_rejected() {
    let mut grid = Grid6::new();
    let err = grid.place(vessel(0, 1, 1, Orientation::Vertical)).unwrap_err();
    assert_eq!(err, PlacementError::EmptyVessel);
}

#[test]
fn test_oversized_vessel_is_rejected_before_deriving_cells() {
    let mut grid = Grid6::new();
    let huge = vessel((1 << 32) + 1, 0, 0, Orientation::Vertical);
    assert_eq!(grid.place(huge).unwrap_err(), PlacementError::OutOfBounds);
    assert_eq!(
        grid.place(vessel(7, 0, 0, Orientation::Horizontal))
            .unwrap_err(),
        PlacementError::OutOfBounds
    );
    assert_eq!(
        grid.place(vessel(1, i32::MAX, i32::MAX, Orientation::Vertical))
            .unwrap_err(),
        PlacementError::OutOfBounds
    );
    assert!(grid.fleet().is_empty());

    grid.place(vessel(6, 0, 0, Orientation::Horizontal)).unwrap();
    assert_eq!(grid.fleet()[0].occupied_cells().count(), 6);
}

#[test]
fn test_vessel_sinks_after_exactly_length_hits() {
    let mut grid = Grid6::new();
    grid.place(vessel(3, 1, 1, Orientation::Vertical)).unwrap();
    grid.place(vessel(1, 5, 5, Orientation::Vertical)).unwrap();
    grid.begin();

    assert_eq!(grid.resolve_shot(at(3, 1)).unwrap(), ShotOutcome::Hit);
    assert_eq!(grid.fleet()[0].remaining_hits(), 2);
    assert_eq!(grid.resolve_shot(at(1, 1)).unwrap(), ShotOutcome::Hit);
    assert_eq!(grid.sunk_count(), 0);
    assert_eq!(grid.resolve_shot(at(2, 1)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(grid.sunk_count(), 1);
    assert!(grid.fleet()[0].is_sunk());
    assert!(!grid.is_defeated());

    assert_eq!(grid.resolve_shot(at(5, 5)).unwrap(), ShotOutcome::Sunk);
    assert!(grid.is_defeated());
}

#[test]
fn test_repeated_shot_is_rejected() {
    let mut grid = Grid6::new();
    grid.place(vessel(2, 0, 0, Orientation::Horizontal)).unwrap();
    grid.begin();

    assert_eq!(grid.resolve_shot(at(4, 4)).unwrap(), ShotOutcome::Miss);
    assert_eq!(grid.cell(at(4, 4)), Some(CellState::Miss));
    assert_eq!(
        grid.resolve_shot(at(4, 4)).unwrap_err(),
        ShotError::AlreadyTargeted
    );

    assert_eq!(grid.resolve_shot(at(0, 0)).unwrap(), ShotOutcome::Hit);
    assert_eq!(
        grid.resolve_shot(at(0, 0)).unwrap_err(),
        ShotError::AlreadyTargeted
    );
    assert_eq!(grid.fleet()[0].remaining_hits(), 1);
}

#[test]
fn test_off_grid_shot_is_rejected_and_not_recorded() {
    let mut grid = Grid6::new();
    grid.place(vessel(1, 0, 0, Orientation::Horizontal)).unwrap();
    grid.begin();

    for target in [at(-1, 0), at(0, -1), at(6, 0), at(0, 6)] {
        assert_eq!(
            grid.resolve_shot(target).unwrap_err(),
            ShotError::OutOfBounds
        );
        assert!(!grid.is_targeted(target));
    }
}

#[test]
fn test_phase_boundary() {
    let mut grid = Grid6::new();
    grid.place(vessel(1, 0, 0, Orientation::Horizontal)).unwrap();
    assert_eq!(grid.phase(), Phase::Placement);
    assert_eq!(
        grid.resolve_shot(at(0, 0)).unwrap_err(),
        ShotError::NotStarted
    );

    grid.begin();
    assert_eq!(grid.phase(), Phase::Shooting);
    assert_eq!(
        grid.place(vessel(1, 4, 4, Orientation::Horizontal))
            .unwrap_err(),
        PlacementError::PlacementClosed
    );

    // The ring around (0, 0) only blocked placement.
    assert!(!grid.is_targeted(at(1, 1)));
    assert_eq!(grid.resolve_shot(at(1, 1)).unwrap(), ShotOutcome::Miss);

    grid.begin();
    assert_eq!(
        grid.resolve_shot(at(1, 1)).unwrap_err(),
        ShotError::AlreadyTargeted
    );
}

#[test]
fn test_sinking_marks_surrounding_water() {
    let mut grid = Grid6::new();
    grid.place(vessel(2, 2, 2, Orientation::Horizontal)).unwrap();
    grid.place(vessel(1, 5, 0, Orientation::Horizontal)).unwrap();
    grid.begin();

    assert_eq!(grid.resolve_shot(at(1, 2)).unwrap(), ShotOutcome::Miss);
    assert_eq!(grid.resolve_shot(at(2, 2)).unwrap(), ShotOutcome::Hit);
    assert_eq!(grid.cell(at(3, 3)), Some(CellState::Empty));
    assert_eq!(grid.resolve_shot(at(2, 3)).unwrap(), ShotOutcome::Sunk);

    for r in 1..=3 {
        for c in 1..=4 {
            let cell = at(r, c);
            let expected = if r == 2 && (c == 2 || c == 3) {
                CellState::Hit
            } else if cell == at(1, 2) {
                CellState::Miss
            } else {
                CellState::MissMarker
            };
            assert_eq!(grid.cell(cell), Some(expected), "cell {}", cell);
            assert!(grid.is_targeted(cell));
        }
    }
    assert_eq!(
        grid.resolve_shot(at(3, 4)).unwrap_err(),
        ShotError::AlreadyTargeted
    );
    assert!(!grid.is_targeted(at(4, 1)));
}

#[test]
fn test_markers_never_block_live_vessels() {
    let mut grid = Grid6::new();
    grid.place(vessel(1, 0, 0, Orientation::Horizontal)).unwrap();
    grid.place(vessel(3, 2, 0, Orientation::Horizontal)).unwrap();
    grid.place(vessel(2, 0, 2, Orientation::Horizontal)).unwrap();
    grid.begin();

    assert_eq!(grid.resolve_shot(at(0, 0)).unwrap(), ShotOutcome::Sunk);
    let markers: Vec<_> = (0..6)
        .flat_map(|r| (0..6).map(move |c| at(r, c)))
        .filter(|&cell| grid.cell(cell) == Some(CellState::MissMarker))
        .collect();
    assert_eq!(markers, vec![at(0, 1), at(1, 0), at(1, 1)]);
    for &cell in &markers {
        assert!(grid.vessel_at(cell).is_none());
    }

    let live: Vec<_> = grid
        .fleet()
        .iter()
        .filter(|v| !v.is_sunk())
        .flat_map(|v| v.occupied_cells())
        .collect();
    for &cell in &live {
        assert!(!grid.is_targeted(cell));
    }
    let outcomes: Vec<_> = live
        .into_iter()
        .map(|cell| grid.resolve_shot(cell).unwrap())
        .collect();
    assert_eq!(
        outcomes,
        vec![
            ShotOutcome::Hit,
            ShotOutcome::Hit,
            ShotOutcome::Sunk,
            ShotOutcome::Hit,
            ShotOutcome::Sunk
        ]
    );
    assert!(grid.is_defeated());
}

#[test]
fn test_empty_grid_is_never_defeated() {
    let mut grid = Grid6::new();
    grid.begin();
    assert!(!grid.is_defeated());
}

#[test]
fn test_snapshot_hides_ships_only_from_viewers() {
    let mut grid = Grid6::new();
    grid.place(vessel(2, 4, 1, Orientation::Horizontal)).unwrap();
    grid.begin();
    grid.resolve_shot(at(4, 1)).unwrap();
    grid.resolve_shot(at(0, 5)).unwrap();
    grid.set_hidden(true);

    let snapshot = grid.snapshot();
    assert!(snapshot.hidden);
    assert_eq!(snapshot.cells[4][1], CellState::Hit);
    assert_eq!(snapshot.cells[4][2], CellState::Ship);
    assert_eq!(snapshot.cells[4][2].visible(snapshot.hidden), CellState::Empty);
    assert_eq!(snapshot.cells[0][5].visible(snapshot.hidden), CellState::Miss);

    // Hiding changes nothing about play.
    assert_eq!(grid.resolve_shot(at(4, 2)).unwrap(), ShotOutcome::Sunk);
}

#[test]
fn test_vessel_lookup() {
    let mut grid = Grid6::new();
    grid.place(vessel(3, 1, 4, Orientation::Vertical)).unwrap();
    assert_eq!(grid.vessel_at(at(3, 4)).map(|v| v.length()), Some(3));
    assert!(grid.vessel_at(at(4, 4)).is_none());
    assert!(grid.vessel_at(at(-1, 4)).is_none());
    assert_eq!(grid.cell(at(6, 0)), None);
    assert_eq!(grid.size(), 6);
}
