//! Session state and the per-frame turn/phase state machine.

use log::{debug, info};

use crate::common::{GridError, ShotResult};
use crate::config::{NUM_SHIPS, SHIPS, TOTAL_SHIP_CELLS};
use crate::coords::CanvasPoint;
use crate::grid::Grid;
use crate::ship::{Orientation, Ship};

/// Current stage of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Current player is selecting endpoints for their next ship.
    Placing,
    /// Transitional screen before the turn is handed over.
    NextPlayer,
    /// Current player must pick a cell to shoot at.
    Aiming,
    /// Shot resolved; waiting for a click to end the turn.
    ShotResolved,
    /// Terminal: the current player has sunk the whole opposing fleet.
    GameOver,
}

/// Pointer state sampled once per frame by the frontend.
///
/// `fire` is the released-this-frame edge of the left button, so every
/// transition below runs at most once per click.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub cursor: CanvasPoint,
    pub fire: bool,
}

/// Root of all mutable session state: both boards, both fleets, the turn
/// flag and the phase machine. Created once at startup, mutated by
/// [`Game::update`] every frame and read by the draw code.
pub struct Game {
    grids: [Grid; 2],
    ships: [[Option<Ship>; NUM_SHIPS]; 2],
    player_one: bool,
    phase: Phase,
    text: String,
}

impl Game {
    pub fn new() -> Self {
        Game {
            grids: [Grid::new(), Grid::new()],
            ships: [[None; NUM_SHIPS]; 2],
            player_one: true,
            phase: Phase::Placing,
            text: String::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the player whose turn it is (0 or 1).
    pub fn current_player(&self) -> usize {
        if self.player_one {
            0
        } else {
            1
        }
    }

    pub fn grid(&self, player: usize) -> &Grid {
        &self.grids[player]
    }

    /// Placed ships of one player, in placement order.
    pub fn ships(&self, player: usize) -> impl Iterator<Item = &Ship> {
        self.ships[player].iter().flatten()
    }

    /// Status line shown above the board. During the hand-over screen the
    /// displayed number is the upcoming player, not the one who just moved.
    pub fn status_line(&self) -> String {
        let mut shown = if self.player_one { 1 } else { 2 };
        if self.phase == Phase::NextPlayer {
            shown = shown % 2 + 1;
        }
        format!("Player {}: {}", shown, self.text)
    }

    /// Advance the state machine by one frame.
    ///
    /// The elapsed time is unused; all transitions are driven by the
    /// pointer edge in `input`.
    pub fn update(&mut self, _dt_ms: f32, input: FrameInput) {
        let pid = self.current_player();
        match self.phase {
            Phase::GameOver => {
                self.text = "Congratulations, you won!".to_owned();
            }
            Phase::NextPlayer => {
                self.text = "Click anywhere to play".to_owned();
                if input.fire {
                    self.change_player();
                }
            }
            Phase::Placing => self.update_placement(pid, input),
            Phase::Aiming => {
                self.text = "Shoot at a cell!".to_owned();
                if input.fire {
                    let _ = self.grids[pid].toggle_highlight_at(input.cursor);
                    match self.shoot() {
                        Ok(result) => {
                            info!("player {} shot: {:?}", pid + 1, result);
                            self.text = "Click anywhere to end turn".to_owned();
                            self.phase = Phase::ShotResolved;
                            if self.grids[pid].hits() == TOTAL_SHIP_CELLS {
                                info!("player {} sank the whole fleet", pid + 1);
                                self.phase = Phase::GameOver;
                            }
                        }
                        Err(err) => debug!("player {} shot rejected: {}", pid + 1, err),
                    }
                    self.grids[pid].deselect_all();
                }
            }
            Phase::ShotResolved => {
                self.text = "Click anywhere to end turn".to_owned();
                if input.fire {
                    self.grids[pid].deselect_all();
                    self.phase = Phase::NextPlayer;
                }
            }
        }
    }

    /// Resolve a shot at the single selected cell of the current player's
    /// grid against the opponent's board.
    ///
    /// The outcome is recorded on the shooter's own grid; a cell that was
    /// already resolved rejects the shot with no state change.
    pub fn shoot(&mut self) -> Result<ShotResult, GridError> {
        let pid = self.current_player();
        let other = 1 - pid;
        let (row, col) = *self.grids[pid]
            .selected_cells()
            .first()
            .ok_or(GridError::NoSelection)?;
        let result = if self.grids[other].cell(row, col).has_ship() {
            ShotResult::Hit
        } else {
            ShotResult::Miss
        };
        self.grids[pid].record_shot(row, col, result)?;
        Ok(result)
    }

    fn update_placement(&mut self, pid: usize, input: FrameInput) {
        let Some(slot) = self.next_unplaced(pid) else {
            self.phase = Phase::NextPlayer;
            return;
        };
        let length = SHIPS[slot].length();
        match self.grids[pid].highlighted_count() {
            0 => self.text = format!("Select starting cell for {length}-cell ship"),
            1 => self.text = format!("Select ending cell for {length}-cell ship"),
            _ => {
                let _ = self.try_place(pid, slot);
                self.grids[pid].deselect_all();
                if self.next_unplaced(pid).is_none() {
                    self.phase = Phase::NextPlayer;
                    return;
                }
            }
        }
        if input.fire {
            let _ = self.grids[pid].toggle_highlight_at(input.cursor);
        }
    }

    /// Attempt to place ship `slot` on the two selected cells. Invalid
    /// geometry and overlaps are discarded silently; the player just
    /// selects again.
    fn try_place(&mut self, pid: usize, slot: usize) -> bool {
        let class = SHIPS[slot];
        let selected = self.grids[pid].selected_cells();
        if selected.len() != 2 {
            return false;
        }
        let (a, b) = (selected[0], selected[1]);
        let Some(orientation) = Orientation::of_segment(a, b, class.length()) else {
            debug!(
                "player {}: cells {:?} and {:?} do not span a {}-cell ship",
                pid + 1,
                a,
                b,
                class.length()
            );
            return false;
        };
        if let Err(err) = self.grids[pid].place_ship(a.0, a.1, b.0, b.1) {
            debug!("player {} placement rejected: {}", pid + 1, err);
            return false;
        }
        let ship = Ship::spanning(
            class,
            self.grids[pid].cell(a.0, a.1),
            self.grids[pid].cell(b.0, b.1),
            orientation,
        );
        self.ships[pid][slot] = Some(ship);
        info!(
            "player {} placed {} from {:?} to {:?}",
            pid + 1,
            class.name(),
            a,
            b
        );
        true
    }

    fn next_unplaced(&self, pid: usize) -> Option<usize> {
        self.ships[pid].iter().position(Option::is_none)
    }

    fn change_player(&mut self) {
        self.player_one = !self.player_one;
        let pid = self.current_player();
        self.phase = if self.next_unplaced(pid).is_some() {
            Phase::Placing
        } else {
            Phase::Aiming
        };
        info!("player {}'s turn", pid + 1);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
