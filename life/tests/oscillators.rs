// Known patterns evolve with their textbook periods.

use life::patterns::{self, BEACON, BLINKER, BLOCK, GLIDER, PULSAR, TOAD};
use life::{Grid, Pattern, Simulation};

fn period_of(pattern: &Pattern, size: usize, max: u64) -> Option<u64> {
    let mut sim = Simulation::with_pattern(size, size, pattern).unwrap();
    let start = sim.grid().clone();
    (1..=max).find(|_| {
        sim.step();
        sim.grid() == &start
    })
}

#[test]
fn test_block_is_still() {
    assert_eq!(period_of(&BLOCK, 6, 5), Some(1));
}

#[test]
fn test_blinker_period_two() {
    assert_eq!(period_of(&BLINKER, 5, 10), Some(2));
}

#[test]
fn test_blinker_phases() {
    let mut sim = Simulation::with_pattern(5, 5, &BLINKER).unwrap();
    assert_eq!(sim.grid().live_cells().collect::<Vec<_>>(), vec![(1, 2), (2, 2), (3, 2)]);
    sim.step();
    assert_eq!(sim.grid().live_cells().collect::<Vec<_>>(), vec![(2, 1), (2, 2), (2, 3)]);
    sim.step();
    assert_eq!(sim.grid().live_cells().collect::<Vec<_>>(), vec![(1, 2), (2, 2), (3, 2)]);
}

#[test]
fn test_toad_period_two() {
    assert_eq!(period_of(&TOAD, 8, 10), Some(2));
}

#[test]
fn test_beacon_period_two() {
    assert_eq!(period_of(&BEACON, 8, 10), Some(2));
}

#[test]
fn test_pulsar_period_three() {
    assert_eq!(period_of(&PULSAR, 19, 10), Some(3));
}

#[test]
fn test_blinker_against_edge() {
    // Vertical blinker in the first column: off-grid cells must not add births
    let mut grid = Grid::new(5, 5).unwrap();
    for y in 1..4 {
        grid.set(0, y, true);
    }
    let mut sim = Simulation::new(grid);
    sim.step();
    assert_eq!(sim.grid().live_cells().collect::<Vec<_>>(), vec![(0, 2), (1, 2)]);
}

#[test]
fn test_glider_translates() {
    let mut grid = Grid::new(20, 20).unwrap();
    patterns::place(&mut grid, &GLIDER, 2, 2);
    let mut sim = Simulation::new(grid);
    for _ in 0..4 {
        sim.step();
    }
    let mut expected = Grid::new(20, 20).unwrap();
    patterns::place(&mut expected, &GLIDER, 3, 3);
    assert_eq!(sim.grid(), &expected);
}

