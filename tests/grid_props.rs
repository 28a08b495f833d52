use broadside::coords::CanvasPoint;
use broadside::{Grid, GridError, ShotResult, BOARD_SIZE, CELL_SIZE, GRID_Y_OFFSET};
use proptest::prelude::*;

fn center(row: usize, col: usize) -> CanvasPoint {
    CanvasPoint {
        x: (col as f32 + 0.5) * CELL_SIZE,
        y: GRID_Y_OFFSET + (row as f32 + 0.5) * CELL_SIZE,
    }
}

fn ship_cells(grid: &Grid) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if grid.cell(row, col).has_ship() {
                cells.push((row, col));
            }
        }
    }
    cells
}

fn highlighted_cells(grid: &Grid) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if grid.cell(row, col).highlighted() {
                cells.push((row, col));
            }
        }
    }
    cells
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn highlight_count_matches_cells(
        toggles in prop::collection::vec((0..BOARD_SIZE, 0..BOARD_SIZE), 0..40)
    ) {
        let mut grid = Grid::new();
        for (row, col) in toggles {
            grid.toggle_highlight_at(center(row, col));
            let live = highlighted_cells(&grid);
            prop_assert_eq!(grid.highlighted_count(), live.len());
            // selection listing follows row-major scan order
            prop_assert_eq!(grid.selected_cells(), live);
        }
        grid.deselect_all();
        prop_assert_eq!(grid.highlighted_count(), 0);
        prop_assert!(highlighted_cells(&grid).is_empty());
    }

    #[test]
    fn placement_is_all_or_nothing(
        first_row in 0..BOARD_SIZE,
        first_col in 0..BOARD_SIZE - 3,
        len in 2..=4usize,
        vertical in any::<bool>(),
        start in 0..BOARD_SIZE,
        cross in 0..BOARD_SIZE,
    ) {
        let mut grid = Grid::new();
        grid.place_ship(first_row, first_col, first_row, first_col + 3).unwrap();

        let span = len - 1;
        let (r1, c1, r2, c2) = if vertical {
            let row = start.min(BOARD_SIZE - len);
            (row, cross, row + span, cross)
        } else {
            let col = start.min(BOARD_SIZE - len);
            (cross, col, cross, col + span)
        };

        let before = ship_cells(&grid);
        match grid.place_ship(r1, c1, r2, c2) {
            Ok(()) => {
                prop_assert_eq!(ship_cells(&grid).len(), before.len() + len);
                for i in 0..len {
                    let (row, col) = if vertical { (r1 + i, c1) } else { (r1, c1 + i) };
                    prop_assert!(grid.cell(row, col).has_ship());
                }
            }
            Err(err) => {
                prop_assert_eq!(err, GridError::ShipOverlaps);
                prop_assert_eq!(ship_cells(&grid), before);
            }
        }
    }

    #[test]
    fn record_shot_is_idempotent_safe(
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
        hit in any::<bool>(),
    ) {
        let mut grid = Grid::new();
        let result = if hit { ShotResult::Hit } else { ShotResult::Miss };
        grid.record_shot(row, col, result).unwrap();
        let hits_after = grid.hits();
        prop_assert_eq!(hits_after, usize::from(hit));

        prop_assert_eq!(
            grid.record_shot(row, col, ShotResult::Hit).unwrap_err(),
            GridError::AlreadyResolved
        );
        prop_assert_eq!(grid.hits(), hits_after);
        prop_assert_eq!(grid.cell(row, col).hit(), hit);
        prop_assert_eq!(grid.cell(row, col).miss(), !hit);
    }
}
