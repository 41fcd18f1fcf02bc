use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// A project as reported by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: Uuid,
    pub name: String,
    /// Last time anything about the project changed.
    #[serde(with = "time::serde::rfc3339")]
    pub last_update_time: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

impl ProjectRecord {
    pub fn new(id: Uuid, name: impl Into<String>, last_update_time: OffsetDateTime) -> Self {
        Self {
            id,
            name: name.into(),
            last_update_time,
            description: None,
            state: None,
            visibility: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn deserializes_listing_entry() {
        let json = r#"{
            "id": "eb6e4656-77fc-42a1-9181-4c6d8e9da5d1",
            "name": "Fabrikam-Fiber-TFVC",
            "description": "Team Foundation Version Control projects.",
            "url": "https://dev.azure.com/fabrikam/_apis/projects/eb6e4656-77fc-42a1-9181-4c6d8e9da5d1",
            "state": "wellFormed",
            "revision": 411,
            "visibility": "private",
            "lastUpdateTime": "2023-06-01T10:15:30.123Z"
        }"#;

        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Fabrikam-Fiber-TFVC");
        assert_eq!(record.state.as_deref(), Some("wellFormed"));
        assert_eq!(
            record.last_update_time,
            datetime!(2023-06-01 10:15:30.123 UTC)
        );
    }

    #[test]
    fn optional_fields_are_skipped() {
        let record = ProjectRecord::new(Uuid::nil(), "p1", datetime!(2024-01-01 0:00 UTC));
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("description"));
        assert!(json.contains("lastUpdateTime"));
    }
}
