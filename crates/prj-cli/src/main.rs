mod cli;
mod report;

use std::{io, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use prj_client::DevOpsClient;
use prj_core::{audit, provision};
use prj_observe::logger_init;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger_init(&cli.logger_config()).context("failed to initialize logger")?;

    let connection = cli.connection()?;
    match &cli.command {
        Command::Create(args) => {
            let cfg = args.provision_config()?;
            let client = DevOpsClient::new(connection)?;

            let report = provision(Arc::new(client), &cfg)
                .await
                .context("project provisioning failed")?;
            info!(
                dispatched = report.dispatched,
                completed = report.completed,
                terminated = report.terminated,
                "provisioning finished"
            );
        }
        Command::List(args) => {
            let cfg = args.audit_config()?;
            let client = DevOpsClient::new(connection)?;

            let report = audit(&client, &cfg)
                .await
                .context("project listing failed")?;
            if cfg.show_details {
                report::write_report(io::stdout().lock(), &report.records)
                    .context("failed to write project report")?;
            }
        }
    }
    Ok(())
}
