//! MongoDB client factory for the bootstrap runner.

use anyhow::Context;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;

/// Application name reported to the server for connection attribution.
pub const APP_NAME: &str = "sitebuilder-bootstrap";

/// Connect to the server behind `uri` and verify it is reachable.
///
/// The ping goes to the `admin` database so a dead or unreachable server
/// fails the run here rather than inside the first administrative command.
pub async fn connect(uri: &str) -> anyhow::Result<Client> {
    let mut options = ClientOptions::parse(uri)
        .await
        .context("failed to parse MongoDB connection string")?;
    options.app_name = Some(APP_NAME.to_string());

    let client = Client::with_options(options).context("failed to construct MongoDB client")?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .context("failed to reach MongoDB server")?;

    tracing::info!("connected to MongoDB");
    Ok(client)
}
