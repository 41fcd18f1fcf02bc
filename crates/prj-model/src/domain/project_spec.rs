use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Capabilities, ModelError};

/// Who can see a newly created project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Private => f.write_str("private"),
            Visibility::Public => f.write_str("public"),
        }
    }
}

impl FromStr for Visibility {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "private" => Ok(Visibility::Private),
            "public" => Ok(Visibility::Public),
            _ => Err(ModelError::InvalidVisibility(s.to_string())),
        }
    }
}

/// Creation descriptor for a single project.
///
/// Immutable once queued: workers only ever read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSpec {
    pub name: String,
    pub description: String,
    pub visibility: Visibility,
    pub capabilities: Capabilities,
}

impl ProjectSpec {
    /// Build a descriptor named `{prefix}{suffix}`, with the name doubling as description.
    pub fn numbered(
        prefix: &str,
        suffix: i64,
        visibility: Visibility,
        capabilities: Capabilities,
    ) -> Self {
        let name = format!("{prefix}{suffix}");
        Self {
            description: name.clone(),
            name,
            visibility,
            capabilities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_derives_name_and_description() {
        let spec = ProjectSpec::numbered("proj", 42, Visibility::Private, Capabilities::default());
        assert_eq!(spec.name, "proj42");
        assert_eq!(spec.description, "proj42");
    }

    #[test]
    fn negative_suffix_is_kept_verbatim() {
        let spec = ProjectSpec::numbered("p", -2, Visibility::Private, Capabilities::default());
        assert_eq!(spec.name, "p-2");
    }

    #[test]
    fn serializes_request_body() {
        let spec = ProjectSpec::numbered("p", 1, Visibility::Private, Capabilities::default());
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["name"], "p1");
        assert_eq!(json["visibility"], "private");
        assert_eq!(json["capabilities"]["versioncontrol"]["sourceControlType"], "Git");
    }

    #[test]
    fn visibility_from_str() {
        assert_eq!("Public".parse::<Visibility>().unwrap(), Visibility::Public);
        assert!("internal".parse::<Visibility>().is_err());
    }
}
