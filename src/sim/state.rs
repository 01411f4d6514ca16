//! Session state and core simulation types
//!
//! One owned aggregate holds everything a session mutates: grid, entities, score,
//! phase and RNG. There is no module-level state; the host passes the session
//! through the tick loop explicitly.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, Direction, Grid};
use super::trail::Trail;
use crate::consts::*;
use crate::settings::{GameConfig, Variant};
use crate::{cell_center, pos_to_cell};

/// Authored maze for the maze-chase variant, 1 = wall and 0 = path
pub const MAZE_LAYOUT: [[u8; MAZE_COLS]; MAZE_ROWS] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 0, 1],
    [1, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 1, 0, 1],
    [1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 0, 0, 1],
    [1, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Fixed spawn cell for the maze player
pub const PLAYER_SPAWN: Cell = Cell::new(1, 1);
/// Fixed pursuer spawn cells; difficulty takes a prefix of this list
pub const PURSUER_SPAWNS: [Cell; 3] = [Cell::new(5, 10), Cell::new(8, 15), Cell::new(3, 15)];
/// Trail start cell (heading right, length one)
pub const TRAIL_SPAWN: Cell = Cell::new(5, 5);

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Created but not started; ticking is a no-op
    Idle,
    /// Active gameplay
    Running,
    /// Terminal: all pellets collected or target score reached
    Won,
    /// Terminal: pursuer contact, wall hit or self-collision
    Lost,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// The free-moving maze player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Pixels per tick
    pub speed: f32,
    /// Latest requested direction; None = idle
    pub intent: Option<Direction>,
}

impl Player {
    pub fn new(spawn: Cell, speed: f32, cell_size: f32) -> Self {
        Self {
            pos: cell_center(spawn, cell_size),
            radius: ACTOR_RADIUS,
            speed,
            intent: None,
        }
    }

    /// Cell currently containing the player's center
    pub fn cell(&self, cell_size: f32) -> Cell {
        pos_to_cell(self.pos, cell_size)
    }
}

/// A cell-to-cell interpolating pursuer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pursuer {
    /// Cell most recently arrived at
    pub cell: Cell,
    /// Cell currently moving toward; equals `cell` when parked
    pub target: Cell,
    /// Always on the segment between the two cell centers
    pub pos: Vec2,
    pub radius: f32,
    /// Pixels per tick
    pub speed: f32,
}

impl Pursuer {
    pub fn new(spawn: Cell, speed: f32, cell_size: f32) -> Self {
        Self {
            cell: spawn,
            target: spawn,
            pos: cell_center(spawn, cell_size),
            radius: ACTOR_RADIUS,
            speed,
        }
    }
}

/// A collectible pellet in the maze variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pellet {
    pub pos: Vec2,
    pub radius: f32,
}

/// Variant-specific entity set
#[derive(Debug, Clone)]
pub enum Entities {
    Maze {
        player: Player,
        pursuers: Vec<Pursuer>,
        pellets: Vec<Pellet>,
    },
    Trail {
        trail: Trail,
        food: Option<Cell>,
    },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct SessionState {
    pub config: GameConfig,
    pub grid: Grid,
    pub phase: Phase,
    /// Monotonically non-decreasing while Running; zeroed on reset
    pub score: u32,
    pub time_ticks: u64,
    /// Termination message for display, set when the phase turns terminal
    pub message: Option<String>,
    pub entities: Entities,
    pub(crate) rng: Pcg32,
}

impl SessionState {
    /// Create a fresh session in the Idle phase
    pub fn new(config: GameConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let (grid, entities) = build_entities(&config, &mut rng);
        Self {
            config,
            grid,
            phase: Phase::Idle,
            score: 0,
            time_ticks: 0,
            message: None,
            entities,
            rng,
        }
    }

    /// Begin play from the Idle phase
    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            log::info!(
                "session start: {:?} {:?} seed={}",
                self.config.variant,
                self.config.difficulty,
                self.config.seed
            );
            self.phase = Phase::Running;
        }
    }

    /// Reinitialize with a (possibly new) config and go straight to Running:
    /// fresh entities, regenerated grid, score back to zero.
    pub fn reset(&mut self, config: GameConfig) {
        *self = SessionState::new(config);
        self.phase = Phase::Running;
        log::info!(
            "session reset: {:?} {:?} seed={}",
            self.config.variant,
            self.config.difficulty,
            self.config.seed
        );
    }

    /// Plain-data view of the current frame for the rendering collaborator
    pub fn snapshot(&self) -> Snapshot {
        let cell_size = self.grid.cell_size();
        let scene = match &self.entities {
            Entities::Maze {
                player,
                pursuers,
                pellets,
            } => Scene::Maze {
                player: player.pos,
                pursuers: pursuers.iter().map(|p| p.pos).collect(),
                pellets: pellets.iter().map(|p| p.pos).collect(),
            },
            Entities::Trail { trail, food } => Scene::Trail {
                segments: trail
                    .segments()
                    .map(|cell| cell_center(cell, cell_size))
                    .collect(),
                food: food.map(|cell| cell_center(cell, cell_size)),
            },
        };
        Snapshot {
            phase: self.phase,
            score: self.score,
            message: self.message.clone(),
            scene,
        }
    }
}

/// Build grid and entities for a config, drawing from the session RNG
fn build_entities(config: &GameConfig, rng: &mut Pcg32) -> (Grid, Entities) {
    match config.variant {
        Variant::MazeChase => {
            let grid = Grid::from_layout(&MAZE_LAYOUT, CELL_SIZE);
            let speed = config.difficulty.pursuer_speed();
            let player = Player::new(PLAYER_SPAWN, config.difficulty.player_speed(), CELL_SIZE);
            let pursuers = PURSUER_SPAWNS
                .iter()
                .take(config.difficulty.pursuer_count())
                .map(|&spawn| Pursuer::new(spawn, speed, CELL_SIZE))
                .collect();
            let pellets = grid
                .passable_cells()
                .map(|cell| Pellet {
                    pos: cell_center(cell, CELL_SIZE),
                    radius: PELLET_RADIUS,
                })
                .collect();
            (
                grid,
                Entities::Maze {
                    player,
                    pursuers,
                    pellets,
                },
            )
        }
        Variant::TrailRun => {
            let grid = Grid::generate(
                TRAIL_ROWS,
                TRAIL_COLS,
                CELL_SIZE,
                config.obstacle_density,
                &[TRAIL_SPAWN],
                rng,
            );
            let trail = Trail::new(TRAIL_SPAWN, Direction::Right);
            let food = spawn_food(&grid, &trail, rng);
            (grid, Entities::Trail { trail, food })
        }
    }
}

/// Place a collectible on a passable, unoccupied cell: bounded random retries over
/// the session RNG, then a deterministic row-major scan. None means the board is
/// full.
pub(crate) fn spawn_food<R: Rng>(grid: &Grid, trail: &Trail, rng: &mut R) -> Option<Cell> {
    for _ in 0..SPAWN_ATTEMPTS {
        let cell = Cell::new(
            rng.random_range(0..grid.rows() as i32),
            rng.random_range(0..grid.cols() as i32),
        );
        if grid.is_passable(cell) && !trail.contains(cell) {
            return Some(cell);
        }
    }
    grid.passable_cells().find(|&cell| !trail.contains(cell))
}

/// Per-tick state view emitted to rendering and UI collaborators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub score: u32,
    pub message: Option<String>,
    pub scene: Scene,
}

/// Variant-shaped entity positions, all in pixel space
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scene {
    Maze {
        player: Vec2,
        pursuers: Vec<Vec2>,
        pellets: Vec<Vec2>,
    },
    Trail {
        segments: Vec<Vec2>,
        food: Option<Vec2>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Difficulty;

    #[test]
    fn test_maze_layout_spawns_passable() {
        let grid = Grid::from_layout(&MAZE_LAYOUT, CELL_SIZE);
        assert!(grid.is_passable(PLAYER_SPAWN));
        for spawn in PURSUER_SPAWNS {
            assert!(grid.is_passable(spawn));
        }
    }

    #[test]
    fn test_new_maze_session() {
        let state = SessionState::new(GameConfig::maze(Difficulty::Medium, 1));
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.score, 0);
        let Entities::Maze {
            player,
            pursuers,
            pellets,
        } = &state.entities
        else {
            panic!("expected maze entities");
        };
        assert_eq!(pursuers.len(), 2);
        assert_eq!(player.pos, cell_center(PLAYER_SPAWN, CELL_SIZE));
        // One pellet per passable cell
        assert_eq!(pellets.len(), state.grid.passable_cells().count());
    }

    #[test]
    fn test_reset_easy_difficulty() {
        let mut state = SessionState::new(GameConfig::maze(Difficulty::Hard, 1));
        state.start();
        state.score = 17;
        state.reset(GameConfig::maze(Difficulty::Easy, 2));
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.score, 0);
        let Entities::Maze {
            player, pursuers, ..
        } = &state.entities
        else {
            panic!("expected maze entities");
        };
        assert_eq!(pursuers.len(), 1);
        assert_eq!(pursuers[0].speed, 1.0);
        assert_eq!(player.speed, 1.0);
    }

    #[test]
    fn test_trail_session_food_on_open_cell() {
        let state = SessionState::new(GameConfig::trail(99));
        let Entities::Trail { trail, food } = &state.entities else {
            panic!("expected trail entities");
        };
        let food = food.expect("fresh board has room for food");
        assert!(state.grid.is_passable(food));
        assert!(!trail.contains(food));
    }

    #[test]
    fn test_dense_trail_session_is_playable() {
        // Denser obstacle preset still guarantees a passable spawn cell
        let state = SessionState::new(GameConfig::dense_trail(7));
        let Entities::Trail { trail, .. } = &state.entities else {
            panic!("expected trail entities");
        };
        assert!(state.grid.is_passable(trail.head()));
    }

    #[test]
    fn test_spawn_food_full_board_reports_none() {
        // 3x3 bordered grid has exactly one open cell; occupy it with the trail.
        let mut rng = Pcg32::seed_from_u64(5);
        let grid = Grid::generate(3, 3, CELL_SIZE, 0.0, &[], &mut rng);
        let trail = Trail::new(Cell::new(1, 1), Direction::Right);
        assert_eq!(spawn_food(&grid, &trail, &mut rng), None);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = SessionState::new(GameConfig::maze(Difficulty::Easy, 3));
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"kind\":\"maze\""));
    }
}
