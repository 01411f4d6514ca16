//! Grid Arcade demo entry point
//!
//! Headless host standing in for a browser's animation-frame loop: runs one
//! session with a scripted input policy, one tick per frame, and prints the
//! final snapshot as JSON. Usage: `grid-arcade [maze|trail] [difficulty] [seed]`.

use grid_arcade::consts::TICKS_PER_SECOND;
use grid_arcade::sim::{
    Cell, Direction, Entities, Phase, SessionState, TickInput, choose_target, tick,
};
use grid_arcade::{Difficulty, GameConfig, Variant, pos_to_cell};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let variant = match args.next().as_deref() {
        None | Some("maze") => Variant::MazeChase,
        Some("trail") => Variant::TrailRun,
        Some(other) => {
            eprintln!("unknown variant '{other}', expected maze or trail");
            std::process::exit(2);
        }
    };
    let difficulty = args
        .next()
        .and_then(|s| Difficulty::from_str(&s))
        .unwrap_or_default();
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let config = match variant {
        Variant::MazeChase => GameConfig::maze(difficulty, seed),
        Variant::TrailRun => GameConfig::trail(seed),
    };
    let mut state = SessionState::new(config);
    state.start();

    // One simulated minute, or until the session reaches a verdict
    let max_ticks = 60 * TICKS_PER_SECOND as u64;
    while state.phase == Phase::Running && state.time_ticks < max_ticks {
        let input = TickInput {
            intent: demo_intent(&state),
        };
        tick(&mut state, &input);
        if state.time_ticks % TICKS_PER_SECOND as u64 == 0 {
            log::debug!("t={} score={}", state.time_ticks, state.score);
        }
    }

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("snapshot serialization failed: {err}"),
    }
    if let Some(message) = &state.message {
        println!("{message}");
    }
}

/// Demo input policy: chase the nearest pellet in the maze variant, keep the
/// trail on open cells in the trail variant.
fn demo_intent(state: &SessionState) -> Option<Direction> {
    let cell_size = state.grid.cell_size();
    match &state.entities {
        Entities::Maze {
            player, pellets, ..
        } => {
            let nearest = pellets.iter().min_by(|a, b| {
                a.pos
                    .distance_squared(player.pos)
                    .partial_cmp(&b.pos.distance_squared(player.pos))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })?;
            let player_cell = player.cell(cell_size);
            // Reuse the pursuit policy, pointed at the pellet instead of the player
            let step = choose_target(&state.grid, player_cell, pos_to_cell(nearest.pos, cell_size));
            direction_between(player_cell, step)
        }
        Entities::Trail { trail, .. } => {
            let heading = trail.heading();
            let mut candidates = vec![heading];
            candidates.extend(
                Direction::ALL
                    .into_iter()
                    .filter(|&dir| dir != heading && dir != heading.opposite()),
            );
            candidates.into_iter().find(|&dir| {
                let next = trail.head().offset(dir);
                state.grid.is_passable(next) && !trail.contains(next)
            })
        }
    }
}

fn direction_between(from: Cell, to: Cell) -> Option<Direction> {
    Direction::ALL.into_iter().find(|&dir| from.offset(dir) == to)
}
