//! Grid Arcade - deterministic cores for grid-based arcade games
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, motion, pursuit, collisions, session state)
//! - `settings`: Difficulty presets and session configuration
//!
//! Rendering, audio and input wiring are external collaborators: the host feeds one
//! [`sim::TickInput`] per animation frame and reads back a [`sim::Snapshot`] to draw.

pub mod settings;
pub mod sim;

pub use settings::{Difficulty, GameConfig, Variant};

use glam::Vec2;

use crate::sim::Cell;

/// Game configuration constants
pub mod consts {
    /// Side length of one grid cell in pixels (coordinate conversion only)
    pub const CELL_SIZE: f32 = 40.0;

    /// Authored maze dimensions (maze-chase variant)
    pub const MAZE_ROWS: usize = 15;
    pub const MAZE_COLS: usize = 20;

    /// Procedural grid dimensions (trail-run variant)
    pub const TRAIL_ROWS: usize = 15;
    pub const TRAIL_COLS: usize = 20;

    /// Radius of the player and pursuer discs
    pub const ACTOR_RADIUS: f32 = CELL_SIZE / 2.0 - 5.0;
    /// Radius of a pellet
    pub const PELLET_RADIUS: f32 = 4.0;

    /// Interior obstacle density for the trail-run grid
    pub const TRAIL_OBSTACLE_DENSITY: f64 = 0.05;
    /// Denser preset kept for the alternate procedural layout
    pub const DENSE_OBSTACLE_DENSITY: f64 = 0.15;

    /// Bounded retry cap for randomized collectible placement
    pub const SPAWN_ATTEMPTS: usize = 128;

    /// Score at which a trail-run session ends in a win
    pub const TRAIL_TARGET_SCORE: u32 = 100;

    /// Demo host tick rate (one tick per animation frame at 60 Hz)
    pub const TICKS_PER_SECOND: u32 = 60;
}

/// Convert a pixel-space position to the cell containing it
#[inline]
pub fn pos_to_cell(pos: Vec2, cell_size: f32) -> Cell {
    Cell::new(
        (pos.y / cell_size).floor() as i32,
        (pos.x / cell_size).floor() as i32,
    )
}

/// Pixel-space center of a cell
#[inline]
pub fn cell_center(cell: Cell, cell_size: f32) -> Vec2 {
    Vec2::new(
        cell.col as f32 * cell_size + cell_size / 2.0,
        cell.row as f32 * cell_size + cell_size / 2.0,
    )
}
