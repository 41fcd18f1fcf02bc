use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use prj_client::{ConnectionConfig, DEFAULT_API_VERSION};
use prj_core::{
    AuditConfig, ConfigError, ProvisionConfig,
    config::{DEFAULT_COUNT, DEFAULT_PREFIX, DEFAULT_START_SUFFIX, DEFAULT_WORKERS},
};
use prj_model::{AGILE_PROCESS_TEMPLATE, Capabilities, SourceControl, Visibility};
use prj_observe::{LoggerConfig, LoggerFormat};

/// Bulk-create and audit Azure DevOps projects.
#[derive(Debug, Parser)]
#[command(name = "prjctl", version)]
pub struct Cli {
    /// Organization URL, e.g. https://dev.azure.com/fabrikam
    #[arg(long, env = "PRJ_ORGANIZATION_URL", global = true)]
    pub organization_url: Option<String>,

    /// Personal access token used for basic auth.
    #[arg(long, env = "PRJ_PERSONAL_ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub personal_access_token: Option<String>,

    /// REST API version sent with every request.
    #[arg(long, default_value = DEFAULT_API_VERSION, global = true)]
    pub api_version: String,

    /// Log filter directive.
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Log output format (text|json|journald).
    #[arg(long, default_value_t = LoggerFormat::Text, global = true)]
    pub log_format: LoggerFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Queue creation of numbered projects using a pool of workers.
    Create(CreateArgs),
    /// List every project, optionally keeping only those not updated since a date.
    List(ListArgs),
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Number of projects to create.
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Project name prefix.
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Suffix of the first project name (may be negative).
    #[arg(long, default_value_t = DEFAULT_START_SUFFIX, allow_negative_numbers = true)]
    pub start_suffix: i64,

    /// Number of concurrent workers.
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    #[arg(long, default_value_t = Visibility::Private)]
    pub visibility: Visibility,

    #[arg(long, default_value_t = SourceControl::Git)]
    pub source_control: SourceControl,

    /// Process template id.
    #[arg(long, default_value_t = AGILE_PROCESS_TEMPLATE)]
    pub process_template: Uuid,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Keep only projects last updated before this time ("YYYY-MM-DD HH:MM", UTC).
    #[arg(long)]
    pub filter_date: Option<String>,

    /// Print Name,Id,LastUpdated rows for the resulting projects.
    #[arg(long)]
    pub show_details: bool,
}

impl Cli {
    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig::new(self.log_format, self.log_level.clone())
    }

    pub fn connection(&self) -> Result<ConnectionConfig, ConfigError> {
        let cfg = ConnectionConfig::new(
            self.organization_url.clone().unwrap_or_default(),
            self.personal_access_token.clone().unwrap_or_default(),
        )
        .with_api_version(self.api_version.clone());
        cfg.validate()?;
        Ok(cfg)
    }
}

impl CreateArgs {
    pub fn provision_config(&self) -> Result<ProvisionConfig, ConfigError> {
        let cfg = ProvisionConfig::new(self.count, self.start_suffix, self.prefix.clone(), self.workers)
            .with_visibility(self.visibility)
            .with_capabilities(Capabilities::new(self.source_control, self.process_template));
        cfg.validate()?;
        Ok(cfg)
    }
}

impl ListArgs {
    pub fn audit_config(&self) -> Result<AuditConfig, ConfigError> {
        Ok(AuditConfig::new()
            .with_cutoff_str(self.filter_date.as_deref())?
            .with_details(self.show_details))
    }
}
