use anyhow::Context;
use clap::Parser;

use onlives::cli::{Cli, execute_command, init_logger_from_settings, load_and_merge_config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_and_merge_config(&cli)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    init_logger_from_settings(&settings).context("Failed to initialize logger")?;

    tracing::debug!(version = onlives::pkg_version(), "onlives starting");

    match execute_command(&cli, &settings).await {
        Ok(rooms) => {
            tracing::info!(rooms = rooms.len(), "Report finished");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Report failed");
            std::process::exit(1);
        }
    }
}
