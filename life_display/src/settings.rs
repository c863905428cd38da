// settings.rs - Command-line settings

use clap::Parser;
use life::{DEFAULT_COLUMNS, DEFAULT_ROWS, LifeError, Pattern, Simulation, patterns};

use crate::AppError;

/// Window title
pub const TITLE: &str = "Game-of-Life-GDX";

/// Game of Life display settings.
///
/// Every flag is optional; the defaults give a 1600x900 window over a
/// randomly seeded 500x500 grid.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "life", about = "Conway's Game of Life")]
pub struct Settings {
    /// Window width in pixels.
    #[arg(long, default_value_t = 1600)]
    pub width: u32,

    /// Window height in pixels.
    #[arg(long, default_value_t = 900)]
    pub height: u32,

    /// Grid columns.
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Grid rows.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Chance of each cell starting alive.
    #[arg(long, default_value_t = 0.5)]
    pub density: f64,

    /// Seed for the random start; picked at random when absent.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start from a named pattern instead of random cells.
    #[arg(long)]
    pub pattern: Option<String>,

    /// Compute each row as a cooperative task.
    #[arg(long)]
    pub row_tasks: bool,

    /// Start paused.
    #[arg(long)]
    pub paused: bool,

    /// Pause once the grid repeats a recent state.
    #[arg(long)]
    pub pause_on_cycle: bool,

    /// Log filter (error, warn, info, debug, trace or a full directive). RUST_LOG wins.
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::parse_from([TITLE])
    }
}

impl Settings {
    /// Rejects settings the simulation or window cannot start with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.width == 0 || self.height == 0 {
            return Err(AppError::WindowSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.columns == 0 || self.rows == 0 {
            return Err(LifeError::EmptyGrid {
                width: self.columns,
                height: self.rows,
            }
            .into());
        }
        if self.columns.checked_mul(self.rows).is_none() {
            return Err(LifeError::GridTooLarge {
                width: self.columns,
                height: self.rows,
            }
            .into());
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(LifeError::InvalidDensity(self.density).into());
        }
        self.pattern()?;
        Ok(())
    }

    /// The configured start pattern, if any.
    pub fn pattern(&self) -> Result<Option<&'static Pattern>, LifeError> {
        match &self.pattern {
            Some(name) => patterns::find(name)
                .map(Some)
                .ok_or_else(|| LifeError::UnknownPattern(name.clone())),
            None => Ok(None),
        }
    }

    /// Builds the starting simulation: the pattern if one is set, random cells otherwise.
    pub fn simulation(&self, seed: u64) -> Result<Simulation, LifeError> {
        match self.pattern()? {
            Some(pattern) => Simulation::with_pattern(self.columns, self.rows, pattern),
            None => Simulation::random(self.columns, self.rows, self.density, seed),
        }
    }
}
