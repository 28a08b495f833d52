use broadside::coords::CanvasPoint;
use broadside::{Grid, GridError, ShotResult, CANVAS_HEIGHT, CANVAS_WIDTH, CELL_SIZE, GRID_Y_OFFSET};

fn center(row: usize, col: usize) -> CanvasPoint {
    CanvasPoint {
        x: (col as f32 + 0.5) * CELL_SIZE,
        y: GRID_Y_OFFSET + (row as f32 + 0.5) * CELL_SIZE,
    }
}

#[test]
fn test_cell_geometry() {
    let grid = Grid::new();
    assert_eq!(grid.cell(0, 0).center(), (50.0, GRID_Y_OFFSET + 50.0));
    assert_eq!(grid.cell(2, 5).center(), (550.0, GRID_Y_OFFSET + 250.0));
    assert_eq!(grid.cell(0, 0).width(), CELL_SIZE);
}

#[test]
fn test_toggle_tracks_highlight_count() {
    let mut grid = Grid::new();
    assert!(grid.toggle_highlight_at(center(3, 4)));
    assert!(grid.toggle_highlight_at(center(0, 0)));
    assert_eq!(grid.highlighted_count(), 2);
    assert!(grid.cell(3, 4).highlighted());

    // toggling the same cell again deselects it
    assert!(grid.toggle_highlight_at(center(3, 4)));
    assert_eq!(grid.highlighted_count(), 1);
    assert!(!grid.cell(3, 4).highlighted());

    grid.deselect_all();
    assert_eq!(grid.highlighted_count(), 0);
    assert!(!grid.cell(0, 0).highlighted());
}

#[test]
fn test_clicks_outside_the_board_are_ignored() {
    let mut grid = Grid::new();
    // status band above the board
    assert!(!grid.toggle_highlight_at(CanvasPoint { x: 300.0, y: 50.0 }));
    // beyond the right edge and below the bottom edge
    assert!(!grid.toggle_highlight_at(CanvasPoint {
        x: CANVAS_WIDTH + 10.0,
        y: 300.0
    }));
    assert!(!grid.toggle_highlight_at(CanvasPoint {
        x: 300.0,
        y: CANVAS_HEIGHT + 10.0
    }));
    assert!(!grid.toggle_highlight_at(CanvasPoint { x: -5.0, y: 300.0 }));
    assert_eq!(grid.highlighted_count(), 0);
}

#[test]
fn test_selected_cells_in_row_major_order() {
    let mut grid = Grid::new();
    grid.toggle_highlight_at(center(3, 4));
    grid.toggle_highlight_at(center(0, 2));
    grid.toggle_highlight_at(center(3, 1));
    assert_eq!(grid.selected_cells(), vec![(0, 2), (3, 1), (3, 4)]);
}

#[test]
fn test_overlapping_placement_changes_nothing() {
    let mut grid = Grid::new();
    grid.place_ship(0, 0, 0, 1).unwrap();
    assert!(grid.cell(0, 0).has_ship());
    assert!(grid.cell(0, 1).has_ship());

    assert_eq!(grid.place_ship(0, 0, 0, 2), Err(GridError::ShipOverlaps));
    assert!(!grid.cell(0, 2).has_ship());
}

#[test]
fn test_place_accepts_reversed_endpoints() {
    let mut grid = Grid::new();
    grid.place_ship(5, 7, 5, 4).unwrap();
    for col in 4..=7 {
        assert!(grid.cell(5, col).has_ship());
    }
    grid.place_ship(8, 2, 6, 2).unwrap();
    for row in 6..=8 {
        assert!(grid.cell(row, 2).has_ship());
    }
}

#[test]
fn test_place_rejects_diagonal_and_out_of_bounds() {
    let mut grid = Grid::new();
    assert_eq!(grid.place_ship(0, 0, 1, 1), Err(GridError::NotStraight));
    assert_eq!(
        grid.place_ship(0, 8, 0, 11),
        Err(GridError::OutOfBounds { row: 0, col: 11 })
    );
}

#[test]
fn test_record_shot_and_reject_repeat() {
    let mut grid = Grid::new();
    grid.record_shot(3, 4, ShotResult::Hit).unwrap();
    assert!(grid.cell(3, 4).hit());
    assert!(!grid.cell(3, 4).miss());
    assert_eq!(grid.hits(), 1);

    assert_eq!(
        grid.record_shot(3, 4, ShotResult::Miss),
        Err(GridError::AlreadyResolved)
    );
    assert!(grid.cell(3, 4).hit());
    assert_eq!(grid.hits(), 1);

    grid.record_shot(0, 0, ShotResult::Miss).unwrap();
    assert!(grid.cell(0, 0).miss());
    assert_eq!(grid.hits(), 1);
}
