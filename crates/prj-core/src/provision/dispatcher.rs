use async_channel::{Sender, TrySendError};
use tracing::trace;

use prj_model::ProjectSpec;

use crate::{config::ProvisionConfig, error::CoreError};

/// Generate the creation descriptors for a run, in suffix order.
///
/// Yields `cfg.count` specs named `prefix{start}..prefix{start + count - 1}`,
/// all sharing the configured visibility and capabilities. A validated config
/// never overflows; otherwise generation stops at the last representable suffix.
pub(crate) fn dispatch(cfg: &ProvisionConfig) -> impl Iterator<Item = ProjectSpec> + '_ {
    (0..cfg.count)
        .map_while(move |offset| {
            i64::try_from(offset)
                .ok()
                .and_then(|offset| cfg.start_suffix.checked_add(offset))
        })
        .map(move |suffix| {
            ProjectSpec::numbered(
                &cfg.prefix,
                suffix,
                cfg.visibility,
                cfg.capabilities.clone(),
            )
        })
}

/// Push every item onto the work queue and return how many were queued.
///
/// The queue is sized to the run's item count, so this never waits.
pub(crate) fn enqueue<I>(queue: &Sender<ProjectSpec>, items: I) -> Result<usize, CoreError>
where
    I: IntoIterator<Item = ProjectSpec>,
{
    let mut queued = 0;
    for spec in items {
        trace!(project = %spec.name, "queueing project");
        queue.try_send(spec).map_err(|e| match e {
            TrySendError::Full(spec) => {
                CoreError::Enqueue(format!("work queue full at {}", spec.name))
            }
            TrySendError::Closed(spec) => {
                CoreError::Enqueue(format!("work queue closed at {}", spec.name))
            }
        })?;
        queued += 1;
    }
    Ok(queued)
}
