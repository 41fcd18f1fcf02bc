//! Project audit: walk the full listing, then optionally keep only stale projects.

mod walker;
pub use walker::collect_all;

mod filter;
pub use filter::filter_before;

use tracing::{info, instrument};

use prj_model::ProjectRecord;

use crate::{config::AuditConfig, error::CoreError, service::ResourceService};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    /// Number of projects the listing returned.
    pub total: usize,
    /// Whether a cutoff was applied to `records`.
    pub filtered: bool,
    /// Qualifying projects, in listing order.
    pub records: Vec<ProjectRecord>,
}

#[instrument(level = "info", skip(service, cfg), fields(cutoff = ?cfg.cutoff.map(|c| c.to_string())))]
pub async fn audit(service: &dyn ResourceService, cfg: &AuditConfig) -> Result<AuditReport, CoreError> {
    let all = collect_all(service).await?;
    let total = all.len();
    info!(count = total, "count of all projects");

    let Some(cutoff) = cfg.cutoff else {
        return Ok(AuditReport {
            total,
            filtered: false,
            records: all,
        });
    };

    info!(%cutoff, "filtering projects by last update time");
    let records = filter_before(&all, &cutoff);
    info!(count = records.len(), "count of all filtered projects");

    Ok(AuditReport {
        total,
        filtered: true,
        records,
    })
}
