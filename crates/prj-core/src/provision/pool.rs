use std::sync::Arc;

use async_channel::{Receiver, Sender};
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{Instrument, Span, debug, info, instrument, warn};

use prj_model::ProjectSpec;

use crate::{error::CoreError, service::ResourceService};

/// Emitted by a worker once per attempted creation, whatever the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion;

/// Tells exactly one worker to leave its loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Termination;

/// Fixed set of workers draining the shared work queue.
pub struct WorkerPool {
    handles: Vec<JoinHandle<()>>,
    terminate: Sender<Termination>,
}

impl WorkerPool {
    /// Spawn `size` workers on the current runtime.
    ///
    /// Every worker gets its own clone of `done`; the original is consumed so the
    /// completion channel closes once the last worker is gone.
    pub fn start(
        service: Arc<dyn ResourceService>,
        size: usize,
        work: Receiver<ProjectSpec>,
        done: mpsc::Sender<Completion>,
    ) -> Self {
        let (terminate, tokens) = async_channel::bounded(size.max(1));

        let handles = (0..size)
            .map(|id| {
                tokio::spawn(run_worker(
                    id,
                    Arc::clone(&service),
                    work.clone(),
                    tokens.clone(),
                    done.clone(),
                ))
            })
            .collect();

        Self { handles, terminate }
    }

    pub fn size(&self) -> usize {
        self.handles.len()
    }

    /// Send one termination token per worker and wait for all of them to exit.
    ///
    /// Returns the number of tokens sent.
    pub async fn shutdown(self) -> Result<usize, CoreError> {
        let mut sent = 0;
        for _ in &self.handles {
            // Sized to the pool: sending never waits.
            if self.terminate.send(Termination).await.is_err() {
                break;
            }
            sent += 1;
        }

        for handle in self.handles {
            handle
                .await
                .map_err(|e| CoreError::WorkerJoin(e.to_string()))?;
        }
        Ok(sent)
    }
}

#[instrument(level = "debug", skip_all, fields(worker = id))]
async fn run_worker(
    id: usize,
    service: Arc<dyn ResourceService>,
    work: Receiver<ProjectSpec>,
    tokens: Receiver<Termination>,
    done: mpsc::Sender<Completion>,
) {
    debug!("worker started");
    loop {
        tokio::select! {
            Ok(Termination) = tokens.recv() => {
                debug!("termination token received");
                break;
            }
            Ok(spec) = work.recv() => {
                attempt(&service, spec).await;
                if done.send(Completion).await.is_err() {
                    warn!("completion channel closed; stopping worker");
                    break;
                }
            }
            else => break,
        }
    }
    debug!("worker stopped");
}

/// Run one create call in its own task so a panicking service still yields a completed attempt.
async fn attempt(service: &Arc<dyn ResourceService>, spec: ProjectSpec) {
    let name = spec.name.clone();
    let service = Arc::clone(service);
    let call = async move { service.create(&spec).await }.instrument(Span::current());

    match tokio::spawn(call).await {
        Ok(Ok(handle)) => info!(
            project = %name,
            operation = %handle.id,
            "project creation request submitted successfully"
        ),
        Ok(Err(e)) => warn!(project = %name, error = %e, "error creating project"),
        Err(e) => warn!(project = %name, error = %e, "project creation attempt panicked"),
    }
}
