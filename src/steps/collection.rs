use anyhow::Context;
use async_trait::async_trait;
use sitebuilder_kernel::{Step, StepCtx};

/// Creates the seed collection inside the target database. Whether an
/// existing collection is an error is left to server semantics.
pub struct CollectionStep;

impl CollectionStep {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Step for CollectionStep {
    fn name(&self) -> &'static str {
        "collection"
    }

    async fn run(&self, ctx: &StepCtx<'_>) -> anyhow::Result<()> {
        let collection = &ctx.settings.bootstrap.collection;

        ctx.db
            .create_collection(collection)
            .await
            .with_context(|| format!("createCollection '{}' failed", collection))?;

        tracing::info!(
            collection = %collection,
            database = ctx.db.name(),
            "created collection"
        );
        Ok(())
    }
}

/// Create a new instance of the collection step
pub fn create_step() -> std::sync::Arc<dyn Step> {
    std::sync::Arc::new(CollectionStep::new())
}
