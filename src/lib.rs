//! Broadside: a same-screen, two-player, turn-based Battleship game.
//!
//! The core is the [`Game`] phase machine (placement, hand-over, aiming,
//! shot resolution, game over) over two 10×10 [`Grid`]s. The macroquad
//! frontend in `render`/`main` polls the mouse once per frame, feeds a
//! [`FrameInput`] to [`Game::update`] and draws the result read-only.

mod cell;
mod common;
mod config;
pub mod coords;
mod game;
mod grid;
mod logging;
pub mod render;
mod ship;

pub use cell::Cell;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::Grid;
pub use logging::init_logging;
pub use ship::*;
