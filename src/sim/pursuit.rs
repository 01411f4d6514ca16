//! Greedy pursuit policy
//!
//! Deliberately myopic: no pathfinding, just a preference-ordered walk over the
//! four neighbors biased toward the player's cell. Pursuers can pick locally bad
//! moves around walls; that wobble is part of the game's feel, not a bug.

use super::grid::{Cell, Direction, Grid};

/// Preference order for one re-targeting decision: the row direction toward the
/// player first, then the column direction, then the remaining cardinals in
/// canonical order so all four are eventually tried.
fn preference_order(from: Cell, player: Cell) -> Vec<Direction> {
    let mut order = Vec::with_capacity(4);
    let drow = player.row - from.row;
    let dcol = player.col - from.col;
    if drow < 0 {
        order.push(Direction::Up);
    } else if drow > 0 {
        order.push(Direction::Down);
    }
    if dcol < 0 {
        order.push(Direction::Left);
    } else if dcol > 0 {
        order.push(Direction::Right);
    }
    for dir in Direction::ALL {
        if !order.contains(&dir) {
            order.push(dir);
        }
    }
    order
}

/// Pick the next target cell for a pursuer standing at `from`.
///
/// The passable-direction filter is computed once and shared between the greedy
/// walk and its fallback: the first open direction in preference order wins, and
/// with no open neighbor at all the pursuer parks on its own cell. (The original
/// selection procedure re-filtered the four directions for a randomized fallback,
/// but that draw only runs when the filtered set is empty, so folding the two
/// passes together changes no observable behavior.)
pub fn choose_target(grid: &Grid, from: Cell, player: Cell) -> Cell {
    let open: Vec<Cell> = preference_order(from, player)
        .into_iter()
        .map(|dir| from.offset(dir))
        .filter(|&cell| grid.is_passable(cell))
        .collect();
    match open.first() {
        Some(&cell) => cell,
        None => from,
    }
}
