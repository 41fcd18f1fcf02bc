use thiserror::Error;

use prj_model::ModelError;

/// Startup-time configuration problems. Always fatal, raised before any work is dispatched.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting: {0}")]
    Missing(&'static str),
    #[error("worker count must be at least 1")]
    NoWorkers,
    #[error("project name prefix must not be empty")]
    EmptyPrefix,
    #[error("name suffix overflows: start {start} + count {count}")]
    SuffixOverflow { start: i64, count: usize },
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Failure reported by a [`crate::ResourceService`] call.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("service responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("listing failed on page {page}: {source}")]
    Listing {
        page: usize,
        #[source]
        source: ServiceError,
    },

    #[error("failed to enqueue work item: {0}")]
    Enqueue(String),

    #[error("all workers exited after {observed} of {expected} completions")]
    WorkersLost { observed: usize, expected: usize },

    #[error("worker task failed to join: {0}")]
    WorkerJoin(String),
}
