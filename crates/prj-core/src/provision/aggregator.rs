use tokio::sync::mpsc;
use tracing::{debug, info};

use super::pool::{Completion, WorkerPool};
use crate::error::CoreError;

/// Counts completion signals and stops the pool once every item was attempted.
pub struct CompletionAggregator {
    done: mpsc::Receiver<Completion>,
    expected: usize,
}

/// What the aggregator observed before and during shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drained {
    pub completed: usize,
    pub terminated: usize,
}

impl CompletionAggregator {
    pub fn new(done: mpsc::Receiver<Completion>, expected: usize) -> Self {
        Self { done, expected }
    }

    /// Block until `expected` completions arrived, then shut the pool down.
    ///
    /// Fails with [`CoreError::WorkersLost`] if every worker is gone before the
    /// count is reached; no termination tokens are sent in that case.
    pub async fn run(mut self, pool: WorkerPool) -> Result<Drained, CoreError> {
        let mut completed = 0;
        while completed < self.expected {
            match self.done.recv().await {
                Some(Completion) => {
                    completed += 1;
                    debug!(completed, expected = self.expected, "project creation request completed");
                }
                None => {
                    return Err(CoreError::WorkersLost {
                        observed: completed,
                        expected: self.expected,
                    });
                }
            }
        }
        info!(completed, "all project creation requests completed");

        let terminated = pool.shutdown().await?;
        info!(terminated, "all workers terminated");
        Ok(Drained {
            completed,
            terminated,
        })
    }
}
