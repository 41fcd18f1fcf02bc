use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference to the asynchronous operation a create request was queued as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHandle {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl CreateHandle {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            status: None,
            url: None,
        }
    }
}
