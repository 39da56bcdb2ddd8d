use anyhow::Context;
use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use sitebuilder_kernel::{Step, StepCtx};

const ROLE_READ_WRITE: &str = "readWrite";
const ROLE_DB_ADMIN: &str = "dbAdmin";

/// Creates the application user with read/write and db-admin grants.
///
/// Duplicate users are not special-cased: if the principal already exists
/// the server error propagates as-is.
pub struct AppUserStep;

impl AppUserStep {
    pub const fn new() -> Self {
        Self
    }
}

/// Build the `createUser` command. Both role grants are scoped to the
/// database the command will run against.
fn create_user_command(username: &str, password: &str, database: &str) -> Document {
    doc! {
        "createUser": username,
        "pwd": password,
        "roles": [
            { "role": ROLE_READ_WRITE, "db": database },
            { "role": ROLE_DB_ADMIN, "db": database },
        ],
    }
}

#[async_trait]
impl Step for AppUserStep {
    fn name(&self) -> &'static str {
        "app-user"
    }

    async fn run(&self, ctx: &StepCtx<'_>) -> anyhow::Result<()> {
        let bootstrap = &ctx.settings.bootstrap;

        anyhow::ensure!(
            !bootstrap.username.is_empty(),
            "bootstrap username must not be empty"
        );
        anyhow::ensure!(
            !bootstrap.password.is_empty(),
            "bootstrap password must not be empty; set SITEBUILDER_BOOTSTRAP_PASSWORD"
        );

        let command = create_user_command(&bootstrap.username, &bootstrap.password, ctx.db.name());
        ctx.db
            .run_command(command)
            .await
            .with_context(|| format!("createUser '{}' failed", bootstrap.username))?;

        tracing::info!(
            username = %bootstrap.username,
            database = ctx.db.name(),
            "created application user"
        );
        Ok(())
    }
}

/// Create a new instance of the app-user step
pub fn create_step() -> std::sync::Arc<dyn Step> {
    std::sync::Arc::new(AppUserStep::new())
}
