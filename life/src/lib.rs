//! Conway's Game of Life on a fixed, non-wrapping grid.
//!
//! [`Simulation`] owns two [`Grid`] buffers and swaps them every step. Steps can
//! run as a plain scan ([`Simulation::step`]) or as one cooperative tokio task per
//! row ([`Simulation::step_rows`]); both give the same result.

mod error;
pub mod grid;
pub mod patterns;
mod rows;
mod sim;

pub use error::LifeError;
pub use grid::{DEFAULT_COLUMNS, DEFAULT_ROWS, Grid, next_state};
pub use patterns::Pattern;
pub use rows::RowScheduler;
pub use sim::{CycleDetector, HISTORY_LEN, Simulation, Step};
