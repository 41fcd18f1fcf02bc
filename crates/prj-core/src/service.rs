use async_trait::async_trait;

use prj_model::{CreateHandle, Cursor, Page, ProjectSpec};

use crate::error::ServiceError;

/// Remote management service the orchestrator and the walker talk to.
///
/// Implementations must be shareable across workers.
#[async_trait]
pub trait ResourceService: Send + Sync {
    /// Queue creation of a single project.
    async fn create(&self, spec: &ProjectSpec) -> Result<CreateHandle, ServiceError>;

    /// Fetch one page of the project listing. `None` requests the first page.
    async fn list(&self, cursor: Option<&Cursor>) -> Result<Page, ServiceError>;
}
