use anyhow::Context;
use sitebuilder_kernel::settings::Settings;
use sitebuilder_kernel::{StepCtx, StepRegistry};

use crate::steps;

/// Operator-facing message printed once every step has succeeded.
pub const SUCCESS_MESSAGE: &str = "Database bootstrap completed successfully";

/// Execute the full bootstrap sequence against the configured server.
///
/// Fail-fast: the first step error aborts the remaining sequence and
/// propagates to the caller. The client is shut down on both outcomes.
pub async fn run(settings: &Settings) -> anyhow::Result<()> {
    let uri = settings.mongodb.connection_uri();
    let client = sitebuilder_db::connect(&uri)
        .await
        .context("failed to connect to MongoDB")?;

    // Selecting the database is a local operation; the server creates the
    // namespace on the first persisted write.
    let db = client.database(&settings.mongodb.database);
    tracing::info!(database = db.name(), "selected target database");

    let mut registry = StepRegistry::new();
    steps::register_all(&mut registry);

    let ctx = StepCtx {
        settings,
        db: &db,
    };

    let outcome = async {
        registry.run_core_steps(&ctx).await?;
        registry.run_custom_steps(&ctx).await
    }
    .await;

    client.shutdown().await;
    outcome?;

    println!("{SUCCESS_MESSAGE}");
    Ok(())
}
