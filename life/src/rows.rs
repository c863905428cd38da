// rows.rs - Stepping with one cooperative task per row

use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use crate::grid::Grid;
use crate::LifeError;

/// Computes row `y` of the next generation from a shared snapshot.
async fn process_row(y: usize, current: Arc<Grid>) -> (usize, Vec<bool>) {
    let row = (0..current.width()).map(|x| current.next_cell(x, y)).collect();
    tokio::task::yield_now().await;  // Let the other rows run
    (y, row)
}

/// Runs row tasks on a current-thread tokio runtime.
///
/// Every task reads the same immutable snapshot, so the result is identical to
/// a sequential scan no matter how the tasks interleave.
pub struct RowScheduler {
    runtime: Runtime,
}

impl RowScheduler {
    pub fn new() -> Result<Self, LifeError> {
        let runtime = Builder::new_current_thread()
            .build()
            .map_err(LifeError::Runtime)?;
        debug!("row-task runtime started");
        Ok(Self { runtime })
    }

    /// Fills every row of `next` with the generation after `current`.
    pub fn advance(&self, current: &Arc<Grid>, next: &mut Grid) -> Result<(), LifeError> {
        self.runtime.block_on(async {
            let handles: Vec<_> = (0..current.height())
                .map(|y| tokio::spawn(process_row(y, Arc::clone(current))))
                .collect();

            for handle in handles {
                let (y, row) = handle.await?;
                next.row_mut(y).copy_from_slice(&row);
            }
            Ok::<_, LifeError>(())
        })
    }

    /// Stops the runtime without waiting for stray tasks.
    pub fn shutdown(self) {
        self.runtime.shutdown_background();
        debug!("row-task runtime stopped");
    }
}

impl std::fmt::Debug for RowScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowScheduler").finish_non_exhaustive()
    }
}
