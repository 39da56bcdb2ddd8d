use async_trait::async_trait;
use mongodb::Database;

/// Context provided to steps while the bootstrap runs. The database handle
/// is the namespace every step operates on; steps never reach for an
/// ambient connection.
pub struct StepCtx<'a> {
    pub settings: &'a crate::settings::Settings,
    pub db: &'a Database,
}

/// One named administrative operation in the bootstrap sequence.
#[async_trait]
pub trait Step: Send + Sync {
    /// Unique name for this step; core steps are scheduled by this name.
    fn name(&self) -> &'static str;

    /// Execute the step. Any error aborts the remaining sequence.
    async fn run(&self, ctx: &StepCtx<'_>) -> anyhow::Result<()>;
}
