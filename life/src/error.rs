// error.rs - Errors raised while building or stepping a simulation

/// Errors from grid construction, seeding and the row-task stepper.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    /// A grid needs at least one row and one column.
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    /// Width times height does not fit in memory.
    #[error("grid of {width}x{height} cells is too large")]
    GridTooLarge { width: usize, height: usize },

    /// Seeding density is a probability.
    #[error("density must be within 0.0..=1.0, got {0}")]
    InvalidDensity(f64),

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    /// The current-thread runtime used for row tasks could not be built.
    #[error("failed to start row-task runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// A row task panicked or was cancelled.
    #[error("row task failed: {0}")]
    RowTask(#[from] tokio::task::JoinError),
}
