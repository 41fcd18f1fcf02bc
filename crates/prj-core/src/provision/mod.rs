//! Bulk project creation: dispatcher, worker pool and completion aggregator.
//!
//! Flow: descriptors are queued up front, workers race the work queue against
//! their termination tokens, and the aggregator only releases the tokens after
//! one completion per queued descriptor.

mod dispatcher;
use dispatcher::dispatch;

mod pool;
pub use pool::{Completion, Termination, WorkerPool};

mod aggregator;
pub use aggregator::{CompletionAggregator, Drained};

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, instrument};

use crate::{config::ProvisionConfig, error::CoreError, service::ResourceService};

/// Outcome counters for a provisioning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvisionReport {
    /// Descriptors pushed onto the work queue.
    pub dispatched: usize,
    /// Completion signals observed (successful and failed attempts alike).
    pub completed: usize,
    /// Termination tokens delivered to the pool.
    pub terminated: usize,
}

/// Create `cfg.count` projects through `service` using `cfg.workers` concurrent workers.
///
/// Individual creation failures are logged by the workers and still count as
/// completed; only configuration and pool-level failures surface as errors.
#[instrument(
    level = "info",
    skip(service, cfg),
    fields(count = cfg.count, workers = cfg.workers, prefix = %cfg.prefix)
)]
pub async fn provision(
    service: Arc<dyn ResourceService>,
    cfg: &ProvisionConfig,
) -> Result<ProvisionReport, CoreError> {
    cfg.validate()?;

    let (work_tx, work_rx) = async_channel::bounded(cfg.queue_capacity());
    let (done_tx, done_rx) = mpsc::channel(cfg.queue_capacity());

    let pool = WorkerPool::start(service, cfg.workers, work_rx, done_tx);
    info!(workers = pool.size(), "all workers started");

    let dispatched = dispatcher::enqueue(&work_tx, dispatch(cfg))?;
    info!(dispatched, "all projects queued for creation");

    let drained = CompletionAggregator::new(done_rx, dispatched)
        .run(pool)
        .await?;
    drop(work_tx);

    Ok(ProvisionReport {
        dispatched,
        completed: drained.completed,
        terminated: drained.terminated,
    })
}
