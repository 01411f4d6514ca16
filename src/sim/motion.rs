//! Entity motion: free-direction player movement and cell-interpolated pursuers
//!
//! The player moves continuously in pixel space and is stopped outright by walls.
//! Pursuers travel along the segment between their current and target cell centers,
//! re-targeting only on arrival, so sub-cell positions are always on that segment.

use glam::Vec2;

use super::grid::{Cell, Grid};
use super::pursuit;
use super::state::{Player, Pursuer};
use crate::{cell_center, pos_to_cell};

/// Advance the maze player one tick. If the candidate position falls in a blocked
/// or out-of-bounds cell the whole move is rejected; there is no wall sliding.
pub fn step_player(player: &mut Player, grid: &Grid) {
    let Some(dir) = player.intent else {
        return;
    };
    let (drow, dcol) = dir.delta();
    let candidate = player.pos + Vec2::new(dcol as f32, drow as f32) * player.speed;
    if grid.is_passable(pos_to_cell(candidate, grid.cell_size())) {
        player.pos = candidate;
    }
}

/// Advance a pursuer one tick. Within `speed` of the target-cell center the
/// position snaps exactly, the target cell becomes current and the pursuit policy
/// picks the next target; otherwise move by `speed` toward the center.
pub fn step_pursuer(pursuer: &mut Pursuer, grid: &Grid, player_cell: Cell) {
    let target_center = cell_center(pursuer.target, grid.cell_size());
    let to_target = target_center - pursuer.pos;
    let dist = to_target.length();
    if dist < pursuer.speed {
        pursuer.pos = target_center;
        pursuer.cell = pursuer.target;
        pursuer.target = pursuit::choose_target(grid, pursuer.cell, player_cell);
    } else {
        pursuer.pos += to_target / dist * pursuer.speed;
    }
}
