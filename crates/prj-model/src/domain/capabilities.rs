use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::{Uuid, uuid};

use crate::ModelError;

/// Identifier of the stock "Agile" process template.
pub const AGILE_PROCESS_TEMPLATE: Uuid = uuid!("6b724908-ef14-45cf-84f8-768b5384da45");

const VERSION_CONTROL: &str = "versioncontrol";
const SOURCE_CONTROL_TYPE: &str = "sourceControlType";
const PROCESS_TEMPLATE: &str = "processTemplate";
const TEMPLATE_TYPE_ID: &str = "templateTypeId";

/// Version control backend a new project is created with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceControl {
    #[default]
    Git,
    Tfvc,
}

impl SourceControl {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceControl::Git => "Git",
            SourceControl::Tfvc => "Tfvc",
        }
    }
}

impl fmt::Display for SourceControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceControl {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "git" => Ok(SourceControl::Git),
            "tfvc" => Ok(SourceControl::Tfvc),
            _ => Err(ModelError::InvalidSourceControl(s.to_string())),
        }
    }
}

/// Capability mapping attached to a project creation request.
///
/// Serialized as a transparent two-level string map, e.g.
/// `{"versioncontrol": {"sourceControlType": "Git"}, "processTemplate": {"templateTypeId": "..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capabilities(BTreeMap<String, BTreeMap<String, String>>);

impl Capabilities {
    /// Build the version-control and process-template capabilities.
    pub fn new(source_control: SourceControl, process_template: Uuid) -> Self {
        let mut caps = Self(BTreeMap::new());
        caps.insert(VERSION_CONTROL, SOURCE_CONTROL_TYPE, source_control.as_str());
        caps.insert(PROCESS_TEMPLATE, TEMPLATE_TYPE_ID, process_template.to_string());
        caps
    }

    /// Set `key` inside the `section` sub-mapping, creating the section if needed.
    pub fn insert<S, K, V>(&mut self, section: S, key: K, value: V)
    where
        S: Into<String>,
        K: Into<String>,
        V: Into<String>,
    {
        self.0
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.0
            .get(section)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    pub fn source_control_type(&self) -> Option<&str> {
        self.get(VERSION_CONTROL, SOURCE_CONTROL_TYPE)
    }

    pub fn template_type_id(&self) -> Option<&str> {
        self.get(PROCESS_TEMPLATE, TEMPLATE_TYPE_ID)
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::new(SourceControl::Git, AGILE_PROCESS_TEMPLATE)
    }
}
