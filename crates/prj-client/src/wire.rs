use serde::Deserialize;

use prj_model::ProjectRecord;

/// Continuation header set by the listing endpoint when more pages exist.
pub(crate) const CONTINUATION_HEADER: &str = "x-ms-continuationtoken";
pub(crate) const CONTINUATION_PARAM: &str = "continuationToken";
pub(crate) const API_VERSION_PARAM: &str = "api-version";

/// Body of `GET _apis/projects`.
#[derive(Debug, Deserialize)]
pub(crate) struct ProjectList {
    #[serde(default)]
    pub value: Vec<ProjectRecord>,
}
