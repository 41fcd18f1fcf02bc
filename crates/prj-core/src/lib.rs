pub mod error;
pub use error::{ConfigError, CoreError, ServiceError};

mod service;
pub use service::ResourceService;

pub mod config;
pub use config::{AuditConfig, ProvisionConfig};

pub mod provision;
pub use provision::{ProvisionReport, provision};

pub mod audit;
pub use audit::{AuditReport, audit};

#[cfg(test)]
pub(crate) mod testing;
