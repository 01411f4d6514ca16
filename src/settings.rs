//! Difficulty presets and session configuration
//!
//! A [`GameConfig`] fully determines a session: variant, difficulty, seed and
//! procedural-grid parameters. Same config + same input stream = same session.

use serde::{Deserialize, Serialize};

use crate::consts::{DENSE_OBSTACLE_DENSITY, TRAIL_OBSTACLE_DENSITY, TRAIL_TARGET_SCORE};

/// Difficulty presets for the maze-chase variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Pursuer speed in pixels per tick
    pub fn pursuer_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
        }
    }

    /// Number of pursuers spawned
    pub fn pursuer_count(&self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// The maze player moves at pursuer speed
    pub fn player_speed(&self) -> f32 {
        self.pursuer_speed()
    }
}

/// Which game the session runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Authored maze, pellets everywhere, pursuers chase the player
    MazeChase,
    /// Procedural obstacle grid, self-growing trail, one food at a time
    TrailRun,
}

/// Full session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub variant: Variant,
    pub difficulty: Difficulty,
    /// RNG seed for grid generation and food placement
    pub seed: u64,
    /// Interior obstacle density for procedural grids (trail variant)
    pub obstacle_density: f64,
    /// Optional score at which a trail run ends in a win
    pub target_score: Option<u32>,
}

impl GameConfig {
    /// Maze-chase session at the given difficulty
    pub fn maze(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            variant: Variant::MazeChase,
            difficulty,
            seed,
            obstacle_density: 0.0,
            target_score: None,
        }
    }

    /// Trail-run session (difficulty does not apply; the trail steps one cell per tick)
    pub fn trail(seed: u64) -> Self {
        Self {
            variant: Variant::TrailRun,
            difficulty: Difficulty::default(),
            seed,
            obstacle_density: TRAIL_OBSTACLE_DENSITY,
            target_score: Some(TRAIL_TARGET_SCORE),
        }
    }

    /// Trail-run session on the denser obstacle layout
    pub fn dense_trail(seed: u64) -> Self {
        Self {
            obstacle_density: DENSE_OBSTACLE_DENSITY,
            ..Self::trail(seed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_presets() {
        assert_eq!(Difficulty::Easy.pursuer_speed(), 1.0);
        assert_eq!(Difficulty::Easy.pursuer_count(), 1);
        assert_eq!(Difficulty::Medium.pursuer_speed(), 1.5);
        assert_eq!(Difficulty::Medium.pursuer_count(), 2);
        assert_eq!(Difficulty::Hard.pursuer_speed(), 2.0);
        assert_eq!(Difficulty::Hard.pursuer_count(), 3);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("MED"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }

    #[test]
    fn test_dense_trail_preset() {
        let config = GameConfig::dense_trail(9);
        assert_eq!(config.variant, Variant::TrailRun);
        assert_eq!(config.obstacle_density, DENSE_OBSTACLE_DENSITY);
        assert_eq!(config.target_score, Some(TRAIL_TARGET_SCORE));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = GameConfig::trail(42);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
