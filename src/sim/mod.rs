//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One host callback = one tick, fixed conceptual timestep
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod grid;
pub mod motion;
pub mod pursuit;
pub mod state;
pub mod tick;
pub mod trail;

pub use collision::{Outcome, circles_overlap};
pub use grid::{Cell, Direction, Grid};
pub use pursuit::choose_target;
pub use state::{
    Entities, MAZE_LAYOUT, PLAYER_SPAWN, PURSUER_SPAWNS, Pellet, Phase, Player, Pursuer, Scene,
    SessionState, Snapshot, TRAIL_SPAWN,
};
pub use tick::{TickInput, tick};
pub use trail::Trail;
