use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sitebuilder_kernel::settings::Settings;

/// One-time MongoDB bootstrap for the site builder backing store.
#[derive(Debug, Parser)]
#[command(name = "sitebuilder-cli", version)]
struct Cli {
    /// Directory holding base.toml and the environment overlays
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Deployment environment overlay to load (local/staging/production)
    #[arg(long, value_name = "NAME")]
    environment: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Flags take precedence over whatever is already in the environment.
    if let Some(dir) = &cli.config_dir {
        std::env::set_var("SITEBUILDER_CONFIG_DIR", dir);
    }
    if let Some(environment) = &cli.environment {
        std::env::set_var("SITEBUILDER_ENV", environment);
    }

    let settings = Settings::load().with_context(|| "failed to load bootstrap settings")?;
    sitebuilder_telemetry::init(&settings.telemetry.log_format)?;

    tracing::info!(
        env = ?settings.environment,
        database = %settings.mongodb.database,
        "database bootstrap starting"
    );

    sitebuilder_bootstrap::run(&settings).await
}
