//! Azure DevOps implementation of [`prj_core::ResourceService`].

mod config;
pub use config::{ConnectionConfig, DEFAULT_API_VERSION};

mod errors;
pub use errors::ClientError;

mod client;
pub use client::DevOpsClient;

mod wire;
