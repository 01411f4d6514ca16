//! Discrete maze grid and cardinal directions
//!
//! A grid is an immutable (per session) map of passable/blocked cells plus the cell
//! size used for pixel conversion. Cells are addressed by (row, col); lookups are
//! bounds-checked so out-of-range coordinates simply read as blocked.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A grid cell address. Signed so neighbor math can step off the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Neighbor cell one step in the given direction
    pub fn offset(&self, dir: Direction) -> Cell {
        let (drow, dcol) = dir.delta();
        Cell::new(self.row + drow, self.col + dcol)
    }
}

/// The four cardinal movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Canonical ordering used wherever all four directions are enumerated
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row delta, col delta) for one cell step
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Fixed-size passable/blocked map, immutable for the lifetime of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cell_size: f32,
    /// Row-major; true = blocked
    blocked: Vec<bool>,
}

impl Grid {
    /// Build from an authored layout where 1 = wall and 0 = path
    pub fn from_layout<const C: usize>(layout: &[[u8; C]], cell_size: f32) -> Self {
        let rows = layout.len();
        let blocked = layout
            .iter()
            .flat_map(|row| row.iter().map(|&v| v != 0))
            .collect();
        Self {
            rows,
            cols: C,
            cell_size,
            blocked,
        }
    }

    /// Procedurally generate a bordered grid with independently blocked interior
    /// cells at the given density, then force-clear the `keep_clear` spawn cells.
    pub fn generate<R: Rng>(
        rows: usize,
        cols: usize,
        cell_size: f32,
        density: f64,
        keep_clear: &[Cell],
        rng: &mut R,
    ) -> Self {
        let mut blocked = vec![false; rows * cols];
        for row in 0..rows {
            for col in 0..cols {
                let border = row == 0 || col == 0 || row == rows - 1 || col == cols - 1;
                blocked[row * cols + col] = border || rng.random_bool(density);
            }
        }
        let mut grid = Self {
            rows,
            cols,
            cell_size,
            blocked,
        };
        // Repair pass: spawn cells must be passable or the session is unplayable
        for &cell in keep_clear {
            if grid.in_bounds(cell) {
                grid.blocked[cell.row as usize * cols + cell.col as usize] = false;
            }
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && (cell.row as usize) < self.rows
            && cell.col >= 0
            && (cell.col as usize) < self.cols
    }

    /// False when out of bounds or blocked
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.blocked[cell.row as usize * self.cols + cell.col as usize]
    }

    /// All passable cells in row-major order
    pub fn passable_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows as i32).flat_map(move |row| {
            (0..self.cols as i32)
                .map(move |col| Cell::new(row, col))
                .filter(|&cell| self.is_passable(cell))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_layout_passability() {
        let layout = [[1u8, 1, 1], [1, 0, 1], [1, 1, 1]];
        let grid = Grid::from_layout(&layout, 40.0);
        assert!(grid.is_passable(Cell::new(1, 1)));
        assert!(!grid.is_passable(Cell::new(0, 1)));
        assert!(!grid.is_passable(Cell::new(2, 2)));
    }

    #[test]
    fn test_out_of_bounds_reads_blocked() {
        let layout = [[0u8, 0], [0, 0]];
        let grid = Grid::from_layout(&layout, 40.0);
        assert!(!grid.is_passable(Cell::new(-1, 0)));
        assert!(!grid.is_passable(Cell::new(0, -1)));
        assert!(!grid.is_passable(Cell::new(2, 0)));
        assert!(!grid.is_passable(Cell::new(0, 2)));
    }

    #[test]
    fn test_generate_clears_spawn_cells() {
        let spawn = Cell::new(5, 5);
        let mut rng = Pcg32::seed_from_u64(7);
        // Density 1.0 blocks every interior cell, so only the repair pass can
        // make the spawn passable.
        let grid = Grid::generate(15, 20, 40.0, 1.0, &[spawn], &mut rng);
        assert!(grid.is_passable(spawn));
        assert!(!grid.is_passable(Cell::new(5, 6)));
    }

    #[test]
    fn test_direction_opposites() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
        }
    }

    #[test]
    fn test_passable_cells_iterates_open_cells() {
        let layout = [[1u8, 1, 1], [1, 0, 0], [1, 1, 1]];
        let grid = Grid::from_layout(&layout, 40.0);
        let open: Vec<Cell> = grid.passable_cells().collect();
        assert_eq!(open, vec![Cell::new(1, 1), Cell::new(1, 2)]);
    }

    proptest! {
        #[test]
        fn prop_generated_border_always_blocked(seed in any::<u64>(), density in 0.0f64..1.0) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let grid = Grid::generate(10, 12, 40.0, density, &[], &mut rng);
            for row in 0..10i32 {
                prop_assert!(!grid.is_passable(Cell::new(row, 0)));
                prop_assert!(!grid.is_passable(Cell::new(row, 11)));
            }
            for col in 0..12i32 {
                prop_assert!(!grid.is_passable(Cell::new(0, col)));
                prop_assert!(!grid.is_passable(Cell::new(9, col)));
            }
        }

        #[test]
        fn prop_keep_clear_cells_passable(seed in any::<u64>(), density in 0.0f64..1.0) {
            let spawns = [Cell::new(5, 5), Cell::new(3, 8)];
            let mut rng = Pcg32::seed_from_u64(seed);
            let grid = Grid::generate(15, 20, 40.0, density, &spawns, &mut rng);
            for spawn in spawns {
                prop_assert!(grid.is_passable(spawn));
            }
        }
    }
}
