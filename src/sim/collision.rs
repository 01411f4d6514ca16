//! Collision and termination engine
//!
//! One evaluation per tick, in fixed order. Trail variant: wall, self, consumption,
//! win. Maze variant: consumption, pursuer, win — wall contact never terminates
//! there (blocked moves are rejected in motion instead) and pellets eaten on the
//! tick a pursuer connects still count. At most one terminal outcome per tick.

use glam::Vec2;

use super::state::{Entities, SessionState, spawn_food};

/// Result of one collision-engine evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Won,
    Lost,
}

/// Disc overlap by Euclidean center distance
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Run the per-tick checks against the freshly advanced entities.
/// Consumption (non-terminal) is applied before the win check so collecting the
/// last pellet and winning land on the same tick.
pub fn resolve(state: &mut SessionState) -> Outcome {
    let SessionState {
        grid,
        entities,
        score,
        rng,
        config,
        ..
    } = state;
    match entities {
        Entities::Maze {
            player,
            pursuers,
            pellets,
        } => {
            // Eat every pellet the player overlaps this tick. Consumption is
            // non-terminal and runs before the pursuer check, so a pellet
            // grabbed on the tick a pursuer connects still counts.
            let before = pellets.len();
            let (pos, radius) = (player.pos, player.radius);
            pellets.retain(|pellet| !circles_overlap(pos, radius, pellet.pos, pellet.radius));
            *score += (before - pellets.len()) as u32;
            // Pursuer contact ends the run
            if pursuers
                .iter()
                .any(|p| circles_overlap(player.pos, player.radius, p.pos, p.radius))
            {
                return Outcome::Lost;
            }
            if pellets.is_empty() {
                Outcome::Won
            } else {
                Outcome::Continue
            }
        }
        Entities::Trail { trail, food } => {
            let head = trail.head();
            if !grid.is_passable(head) {
                return Outcome::Lost;
            }
            if trail.hits_self() {
                return Outcome::Lost;
            }
            if *food == Some(head) {
                *score += 1;
                trail.grow();
                *food = spawn_food(grid, trail, rng);
                if food.is_none() {
                    // No open cell left for food: the trail owns the board
                    return Outcome::Won;
                }
            }
            if config.target_score.is_some_and(|target| *score >= target) {
                return Outcome::Won;
            }
            Outcome::Continue
        }
    }
}
