// grid.rs - Grid type and the transition rule for Conway's Game of Life

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::Rng;

use crate::LifeError;

/// Default grid size (500x500 playing area)
pub const DEFAULT_COLUMNS: usize = 500;
pub const DEFAULT_ROWS: usize = 500;

/// Offsets of the 8 cells around (x, y)
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Conway's rule: the next state of a cell given its state and live neighbor count.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// A fixed-size grid of cells, stored row-major.
///
/// Coordinates are `(x, y)` with `x` the column and `y` the row. The grid does
/// not wrap: anything outside it reads as dead.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// An all-dead grid.
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        if width == 0 || height == 0 {
            return Err(LifeError::EmptyGrid { width, height });
        }
        let len = width
            .checked_mul(height)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(LifeError::GridTooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    /// A grid where each cell is alive with probability `density`.
    pub fn random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self, LifeError> {
        let mut grid = Self::new(width, height)?;
        grid.fill_random(density, rng)?;
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// State of (x, y); false outside the grid.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    /// Sets (x, y). Returns false and leaves the grid untouched when out of bounds.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = alive;
                true
            }
            None => false,
        }
    }

    /// Flips (x, y). Returns false when out of bounds.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = !self.cells[i];
                true
            }
            None => false,
        }
    }

    /// Number of live cells among the 8 around (x, y). Off-grid neighbors count as dead.
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for (dx, dy) in NEIGHBORS {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };
            if self.get(nx, ny) {
                count += 1;
            }
        }
        count
    }

    /// The state (x, y) takes in the next generation.
    pub fn next_cell(&self, x: usize, y: usize) -> bool {
        next_state(self.get(x, y), self.live_neighbors(x, y))
    }

    pub fn row(&self, y: usize) -> &[bool] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [bool] {
        &mut self.cells[y * self.width..(y + 1) * self.width]
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// True when no cell is alive.
    pub fn is_dead(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Coordinates of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i % width, i / width))
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn fill_random<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) -> Result<(), LifeError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(LifeError::InvalidDensity(density));
        }
        for cell in &mut self.cells {
            *cell = rng.random_bool(density);
        }
        Ok(())
    }

    /// Hash of the cell states, used to spot repeated generations.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.cells.hash(&mut hasher);
        hasher.finish()
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}
