use anyhow::Context;
use async_trait::async_trait;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use sitebuilder_kernel::{Step, StepCtx};

/// Name field of the document every fresh deployment starts with.
pub const SEED_DOCUMENT_NAME: &str = "Initial document";

/// The single document inserted into the seed collection.
#[derive(Debug, Serialize, Deserialize)]
pub struct SeedDocument {
    pub name: String,
    pub created_at: DateTime,
}

/// Inserts the seed document into the configured collection.
pub struct SeedStep;

impl SeedStep {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Step for SeedStep {
    fn name(&self) -> &'static str {
        "seed-document"
    }

    async fn run(&self, ctx: &StepCtx<'_>) -> anyhow::Result<()> {
        let collection = ctx
            .db
            .collection::<SeedDocument>(&ctx.settings.bootstrap.collection);

        // Timestamp is captured at the moment of insertion, not at step start.
        let document = SeedDocument {
            name: SEED_DOCUMENT_NAME.to_string(),
            created_at: DateTime::now(),
        };

        collection
            .insert_one(&document)
            .await
            .context("failed to insert seed document")?;

        tracing::info!(
            collection = %ctx.settings.bootstrap.collection,
            "inserted seed document"
        );
        Ok(())
    }
}

/// Create a new instance of the seed step
pub fn create_step() -> std::sync::Arc<dyn Step> {
    std::sync::Arc::new(SeedStep::new())
}
