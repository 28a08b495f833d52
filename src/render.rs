//! Read-only macroquad rendering of the current session state.
//!
//! All game geometry lives in canvas units; everything here is scaled to
//! the actual window size at draw time. Nothing in this module mutates
//! the game.

use std::f32::consts::FRAC_PI_2;

use macroquad::prelude::*;

use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH, CELL_SIZE};
use crate::game::{Game, Phase};
use crate::ship::Orientation;
use crate::{Cell, BOARD_SIZE};

const SEA: Color = Color::new(0.04, 0.18, 0.32, 1.0);
const CELL_OUTLINE: Color = Color::new(0.0, 0.0, 0.0, 1.0);
const HIGHLIGHT: Color = Color::new(1.0, 1.0, 0.0, 0.5);
const HIT: Color = Color::new(1.0, 0.0, 0.0, 0.5);
const MISS: Color = Color::new(1.0, 1.0, 1.0, 0.5);
const HULL: Color = Color::new(0.35, 0.37, 0.40, 1.0);

const OUTLINE_WIDTH: f32 = 10.0;
const STATUS_TEXT_SIZE: f32 = 40.0;

/// Draw one frame: background, status line, and (outside the hand-over and
/// game-over screens) the current player's board and fleet.
pub fn draw(game: &Game) {
    clear_background(SEA);
    draw_status(game);
    if game.phase() != Phase::NextPlayer && game.phase() != Phase::GameOver {
        draw_board(game);
        draw_fleet(game);
    }
}

fn scale() -> (f32, f32) {
    (
        screen_width() / CANVAS_WIDTH,
        screen_height() / CANVAS_HEIGHT,
    )
}

fn draw_status(game: &Game) {
    let (sx, sy) = scale();
    draw_text(
        &game.status_line(),
        0.0,
        CELL_SIZE * sy,
        STATUS_TEXT_SIZE * ((sx + sy) / 2.0),
        WHITE,
    );
}

fn draw_board(game: &Game) {
    let grid = game.grid(game.current_player());
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            draw_cell(grid.cell(row, col));
        }
    }
}

fn draw_cell(cell: &Cell) {
    let (sx, sy) = scale();
    let (cx, cy) = cell.center();
    let w = cell.width() * sx;
    let h = cell.height() * sy;
    let x = cx * sx - w / 2.0;
    let y = cy * sy - h / 2.0;
    if cell.highlighted() {
        draw_rectangle(x, y, w, h, HIGHLIGHT);
    } else if cell.hit() {
        draw_rectangle(x, y, w, h, HIT);
    } else if cell.miss() {
        draw_rectangle(x, y, w, h, MISS);
    }
    draw_rectangle_lines(x, y, w, h, OUTLINE_WIDTH * sx, CELL_OUTLINE);
}

fn draw_fleet(game: &Game) {
    let (sx, sy) = scale();
    for ship in game.ships(game.current_player()) {
        let (cx, cy) = ship.center();
        let rotation = match ship.orientation() {
            Orientation::Horizontal => 0.0,
            Orientation::Vertical => FRAC_PI_2,
        };
        draw_rectangle_ex(
            cx * sx,
            cy * sy,
            ship.width() * sx,
            ship.height() * sy,
            DrawRectangleParams {
                offset: vec2(0.5, 0.5),
                rotation,
                color: HULL,
            },
        );
    }
}
