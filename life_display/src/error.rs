// error.rs - Errors that stop the program before or while the window runs

use life::LifeError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("window size must be non-zero, got {width}x{height}")]
    WindowSize { width: u32, height: u32 },

    #[error(transparent)]
    Life(#[from] LifeError),

    /// The window or its GL context could not be created.
    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}
