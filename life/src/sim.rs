// sim.rs - Double-buffered simulation state

use std::collections::VecDeque;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::grid::Grid;
use crate::patterns::{self, Pattern};
use crate::rows::RowScheduler;
use crate::LifeError;

/// Number of past generations remembered for cycle detection
pub const HISTORY_LEN: usize = 10;

/// What a single step produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub generation: u64,
    pub population: usize,
    /// The new state matches one of the last `HISTORY_LEN` states.
    pub repeated: bool,
}

/// Remembers fingerprints of recent generations.
#[derive(Debug, Default)]
pub struct CycleDetector {
    history: VecDeque<u64>,
}

impl CycleDetector {
    /// Records `fingerprint`, returning true if it was already among the recent ones.
    pub fn observe(&mut self, fingerprint: u64) -> bool {
        if self.history.contains(&fingerprint) {
            return true;
        }
        if self.history.len() == HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(fingerprint);
        false
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }
}

/// Game of Life state owned by the caller.
///
/// Each step reads from `current` and writes every cell of `next`, then the two
/// buffers are swapped, so the order in which cells are visited never matters.
/// `current` sits behind an `Arc` so row tasks can share it read-only.
#[derive(Debug)]
pub struct Simulation {
    current: Arc<Grid>,
    next: Grid,
    generation: u64,
    cycles: CycleDetector,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        let next = grid.clone();
        let mut sim = Self {
            current: Arc::new(grid),
            next,
            generation: 0,
            cycles: CycleDetector::default(),
        };
        sim.restart();
        sim
    }

    /// A `width` x `height` simulation with each cell alive with probability `density`.
    pub fn random(width: usize, height: usize, density: f64, seed: u64) -> Result<Self, LifeError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = Grid::random(width, height, density, &mut rng)?;
        debug!(width, height, density, seed, population = grid.population(), "seeded random grid");
        Ok(Self::new(grid))
    }

    /// A simulation holding only `pattern`, centered.
    pub fn with_pattern(width: usize, height: usize, pattern: &Pattern) -> Result<Self, LifeError> {
        let mut grid = Grid::new(width, height)?;
        patterns::place_centered(&mut grid, pattern);
        Ok(Self::new(grid))
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances one generation.
    pub fn step(&mut self) -> Step {
        let current = &*self.current;
        for y in 0..current.height() {
            let row = self.next.row_mut(y);
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = current.next_cell(x, y);
            }
        }
        self.swap()
    }

    /// Advances one generation, computing each row as a task on `scheduler`.
    pub fn step_rows(&mut self, scheduler: &RowScheduler) -> Result<Step, LifeError> {
        scheduler.advance(&self.current, &mut self.next)?;
        Ok(self.swap())
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.grid_mut().clear();
        self.restart();
    }

    /// Refills the grid at random.
    pub fn reseed(&mut self, density: f64, seed: u64) -> Result<(), LifeError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.grid_mut().fill_random(density, &mut rng)?;
        self.restart();
        debug!(density, seed, population = self.current.population(), "reseeded grid");
        Ok(())
    }

    /// Clears the grid and places `pattern` in the middle.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        let grid = self.grid_mut();
        grid.clear();
        patterns::place_centered(grid, pattern);
        self.restart();
        debug!(pattern = pattern.name, "applied pattern");
    }

    /// Flips one cell. Out-of-bounds coordinates are ignored.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        self.grid_mut().toggle(x, y)
    }

    fn grid_mut(&mut self) -> &mut Grid {
        Arc::make_mut(&mut self.current)
    }

    fn swap(&mut self) -> Step {
        std::mem::swap(Arc::make_mut(&mut self.current), &mut self.next);
        self.generation += 1;
        let repeated = self.cycles.observe(self.current.fingerprint());
        let step = Step {
            generation: self.generation,
            population: self.current.population(),
            repeated,
        };
        trace!(?step, "stepped");
        step
    }

    fn restart(&mut self) {
        self.generation = 0;
        self.cycles.reset();
        let fingerprint = self.current.fingerprint();
        self.cycles.observe(fingerprint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{BLINKER, BLOCK, GLIDER};

    fn grid_with(width: usize, height: usize, cells: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y) in cells {
            grid.set(x, y, true);
        }
        grid
    }

    /// Next generation computed from an untouched snapshot, one fresh grid per step.
    fn reference_step(grid: &Grid) -> Grid {
        let mut out = Grid::new(grid.width(), grid.height()).unwrap();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let mut count = 0;
                for dy in -1isize..=1 {
                    for dx in -1isize..=1 {
                        if (dx, dy) == (0, 0) {
                            continue;
                        }
                        let (nx, ny) = (x as isize + dx, y as isize + dy);
                        if nx >= 0 && ny >= 0 && grid.get(nx as usize, ny as usize) {
                            count += 1;
                        }
                    }
                }
                let alive = grid.get(x, y);
                out.set(x, y, (alive && (count == 2 || count == 3)) || (!alive && count == 3));
            }
        }
        out
    }

    #[test]
    fn test_dead_cell_with_three_neighbors_is_born() {
        let mut sim = Simulation::new(grid_with(5, 5, &[(1, 1), (3, 1), (2, 3)]));
        assert!(!sim.grid().get(2, 2));
        sim.step();
        assert!(sim.grid().get(2, 2));
    }

    #[test]
    fn test_live_cell_survives_with_two_or_three() {
        // (2, 2) has two neighbors
        let mut sim = Simulation::new(grid_with(5, 5, &[(1, 1), (2, 2), (3, 3)]));
        sim.step();
        assert!(sim.grid().get(2, 2));

        // (2, 2) has three neighbors
        let mut sim = Simulation::new(grid_with(5, 5, &[(1, 1), (3, 1), (2, 2), (2, 3)]));
        sim.step();
        assert!(sim.grid().get(2, 2));
    }

    #[test]
    fn test_live_cell_dies_when_lonely_or_crowded() {
        let mut sim = Simulation::new(grid_with(5, 5, &[(2, 2), (1, 1)]));
        sim.step();
        assert!(!sim.grid().get(2, 2));

        // Plus sign: the center has four neighbors
        let mut sim = Simulation::new(grid_with(5, 5, &[(2, 2), (2, 1), (1, 2), (3, 2), (2, 3)]));
        sim.step();
        assert!(!sim.grid().get(2, 2));
    }

    #[test]
    fn test_corner_forms_block() {
        // Off-grid cells never add births at the corner
        let mut sim = Simulation::new(grid_with(4, 4, &[(0, 0), (1, 0), (0, 1)]));
        sim.step();
        let live: Vec<_> = sim.grid().live_cells().collect();
        assert_eq!(live, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_dead_grid_stays_dead() {
        let mut sim = Simulation::new(Grid::new(20, 20).unwrap());
        for _ in 0..25 {
            let step = sim.step();
            assert_eq!(step.population, 0);
        }
        assert!(sim.grid().is_dead());
        assert_eq!(sim.generation(), 25);
    }

    #[test]
    fn test_step_matches_snapshot_reference() {
        let mut sim = Simulation::random(64, 48, 0.4, 99).unwrap();
        for _ in 0..10 {
            let expected = reference_step(sim.grid());
            sim.step();
            assert_eq!(sim.grid(), &expected);
        }
    }

    #[test]
    fn test_same_seed_same_history() {
        let mut a = Simulation::random(32, 32, 0.5, 3).unwrap();
        let mut b = Simulation::random(32, 32, 0.5, 3).unwrap();
        for _ in 0..5 {
            assert_eq!(a.step(), b.step());
        }
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_still_life_reports_repeat() {
        let mut sim = Simulation::with_pattern(8, 8, &BLOCK).unwrap();
        let step = sim.step();
        assert!(step.repeated);
        assert_eq!(step.population, 4);
    }

    #[test]
    fn test_oscillator_repeat_after_period() {
        let mut sim = Simulation::with_pattern(7, 7, &BLINKER).unwrap();
        assert!(!sim.step().repeated);
        assert!(sim.step().repeated);
    }

    #[test]
    fn test_glider_does_not_repeat() {
        let mut sim = Simulation::with_pattern(40, 40, &GLIDER).unwrap();
        for _ in 0..20 {
            assert!(!sim.step().repeated);
        }
    }

    #[test]
    fn test_edits_reset_generation() {
        let mut sim = Simulation::random(16, 16, 0.5, 11).unwrap();
        sim.step();
        sim.step();
        assert_eq!(sim.generation(), 2);

        sim.clear();
        assert_eq!(sim.generation(), 0);
        assert!(sim.grid().is_dead());

        sim.apply_pattern(&BLINKER);
        assert_eq!(sim.grid().population(), 3);

        sim.reseed(1.0, 5).unwrap();
        assert_eq!(sim.grid().population(), 256);
        assert!(matches!(sim.reseed(-0.1, 5), Err(LifeError::InvalidDensity(_))));
    }

    #[test]
    fn test_toggle() {
        let mut sim = Simulation::new(Grid::new(3, 3).unwrap());
        assert!(sim.toggle(1, 1));
        assert!(sim.grid().get(1, 1));
        assert!(!sim.toggle(9, 9));
    }

    #[test]
    fn test_cycle_detector_window() {
        let mut cycles = CycleDetector::default();
        for f in 0..HISTORY_LEN as u64 {
            assert!(!cycles.observe(f));
        }
        assert!(cycles.observe(0));
        // One more new entry pushes 0 out
        assert!(!cycles.observe(100));
        assert!(!cycles.observe(0));
    }
}
