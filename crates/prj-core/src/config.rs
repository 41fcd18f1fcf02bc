use prj_model::{AGILE_PROCESS_TEMPLATE, Capabilities, Cutoff, SourceControl, Visibility};

use crate::error::ConfigError;

pub const DEFAULT_COUNT: usize = 100;
pub const DEFAULT_PREFIX: &str = "testazdproject";
pub const DEFAULT_START_SUFFIX: i64 = 1;
pub const DEFAULT_WORKERS: usize = 1;

/// Settings for one bulk provisioning run.
#[derive(Debug, Clone)]
pub struct ProvisionConfig {
    /// Number of projects to create.
    pub count: usize,
    /// First integer suffix; names run `prefix{start_suffix}..prefix{start_suffix + count - 1}`.
    pub start_suffix: i64,
    pub prefix: String,
    /// Number of concurrent workers.
    pub workers: usize,
    pub visibility: Visibility,
    /// Shared by every generated project.
    pub capabilities: Capabilities,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            start_suffix: DEFAULT_START_SUFFIX,
            prefix: DEFAULT_PREFIX.to_string(),
            workers: DEFAULT_WORKERS,
            visibility: Visibility::Private,
            capabilities: Capabilities::new(SourceControl::Git, AGILE_PROCESS_TEMPLATE),
        }
    }
}

impl ProvisionConfig {
    pub fn new(count: usize, start_suffix: i64, prefix: impl Into<String>, workers: usize) -> Self {
        Self {
            count,
            start_suffix,
            prefix: prefix.into(),
            workers,
            ..Self::default()
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Check the settings before anything is spawned or sent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        if self.prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        if self.count > 0 {
            let last = i64::try_from(self.count - 1)
                .ok()
                .and_then(|n| self.start_suffix.checked_add(n));
            if last.is_none() {
                return Err(ConfigError::SuffixOverflow {
                    start: self.start_suffix,
                    count: self.count,
                });
            }
        }
        Ok(())
    }

    /// Channel capacity for per-item queues. Never zero.
    #[inline]
    pub(crate) fn queue_capacity(&self) -> usize {
        self.count.max(1)
    }
}

/// Settings for an audit run.
#[derive(Debug, Clone, Default)]
pub struct AuditConfig {
    /// When set, only projects last updated strictly before it are reported.
    pub cutoff: Option<Cutoff>,
    /// Emit the tabular report of qualifying projects.
    pub show_details: bool,
}

impl AuditConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cutoff(mut self, cutoff: Cutoff) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    /// Parse an optional `YYYY-MM-DD HH:MM` cutoff; empty input disables filtering.
    pub fn with_cutoff_str(mut self, value: Option<&str>) -> Result<Self, ConfigError> {
        self.cutoff = match value.map(str::trim) {
            None | Some("") => None,
            Some(v) => Some(Cutoff::parse(v)?),
        };
        Ok(self)
    }

    pub fn with_details(mut self, show: bool) -> Self {
        self.show_details = show;
        self
    }
}
