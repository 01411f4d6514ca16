//! Per-tick session orchestration
//!
//! One host callback = one tick. While Running the order is fixed: apply the
//! latest intent, advance the player or trail, advance pursuers, then run the
//! collision engine. Outside Running a tick is a no-op, so the host can simply
//! stop scheduling once the phase turns terminal.

use super::collision::{self, Outcome};
use super::grid::Direction;
use super::motion;
use super::state::{Entities, Phase, SessionState};
use crate::settings::Variant;

/// Input for a single tick. Key handling lives in the host; the core only ever
/// sees the latest requested direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// None = no request: the maze player stands still, the trail keeps heading
    pub intent: Option<Direction>,
}

/// Advance the session by one tick
pub fn tick(state: &mut SessionState, input: &TickInput) {
    if state.phase != Phase::Running {
        return;
    }
    state.time_ticks += 1;

    // Apply intent; input only ever overwrites direction, never positions
    match &mut state.entities {
        Entities::Maze { player, .. } => player.intent = input.intent,
        Entities::Trail { trail, .. } => {
            if let Some(dir) = input.intent {
                trail.set_heading(dir);
            }
        }
    }

    // Advance motion: player first, then each pursuer
    let cell_size = state.grid.cell_size();
    match &mut state.entities {
        Entities::Maze {
            player, pursuers, ..
        } => {
            motion::step_player(player, &state.grid);
            let player_cell = player.cell(cell_size);
            for pursuer in pursuers.iter_mut() {
                motion::step_pursuer(pursuer, &state.grid, player_cell);
            }
        }
        Entities::Trail { trail, .. } => {
            let _ = trail.advance();
        }
    }

    match collision::resolve(state) {
        Outcome::Continue => {}
        Outcome::Won => finish(state, Phase::Won),
        Outcome::Lost => finish(state, Phase::Lost),
    }
}

fn finish(state: &mut SessionState, phase: Phase) {
    state.phase = phase;
    state.message = Some(end_message(state));
    log::info!(
        "session over after {} ticks: {:?}, score {}",
        state.time_ticks,
        phase,
        state.score
    );
}

fn end_message(state: &SessionState) -> String {
    match (state.config.variant, state.phase) {
        (Variant::MazeChase, Phase::Won) => format!("You Win! Score: {}", state.score),
        (Variant::MazeChase, _) => format!("Game Over! Score: {}", state.score),
        (Variant::TrailRun, Phase::Won) => match state.config.target_score {
            Some(target) if state.score >= target => {
                format!("Congratulations! You reached a score of {target}!")
            }
            _ => format!("You Win! Score: {}", state.score),
        },
        (Variant::TrailRun, _) => format!("Game Over! Final Score: {}", state.score),
    }
}
