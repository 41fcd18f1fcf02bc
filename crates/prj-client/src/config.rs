use prj_core::ConfigError;

pub const DEFAULT_API_VERSION: &str = "7.1";

/// Where and as whom to connect.
#[derive(Clone)]
pub struct ConnectionConfig {
    /// Organization URL, e.g. `https://dev.azure.com/fabrikam`.
    pub organization_url: String,
    pub personal_access_token: String,
    pub api_version: String,
}

impl ConnectionConfig {
    pub fn new(organization_url: impl Into<String>, personal_access_token: impl Into<String>) -> Self {
        Self {
            organization_url: organization_url.into(),
            personal_access_token: personal_access_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.organization_url.trim().is_empty() {
            return Err(ConfigError::Missing("organization url"));
        }
        if self.personal_access_token.is_empty() {
            return Err(ConfigError::Missing("personal access token"));
        }
        if self.api_version.trim().is_empty() {
            return Err(ConfigError::Missing("api version"));
        }
        Ok(())
    }
}

// Keep the token out of logs.
impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("organization_url", &self.organization_url)
            .field("personal_access_token", &"<redacted>")
            .field("api_version", &self.api_version)
            .finish()
    }
}
