use anyhow::Context;
use std::sync::Arc;

use crate::step::{Step, StepCtx};

/// Core step execution order. The application user must exist before the
/// collection it will read from, and both precede any seeding.
const CORE_STEP_ORDER: &[&str] = &[
    "app-user",   // authenticatable principal with role grants
    "collection", // named container inside the target database
];

/// Step registry for managing the bootstrap sequence with core/custom separation
pub struct StepRegistry {
    core_steps: Vec<Arc<dyn Step>>,
    custom_steps: Vec<Arc<dyn Step>>,
}

impl StepRegistry {
    /// Create a new step registry
    pub fn new() -> Self {
        Self {
            core_steps: Vec::new(),
            custom_steps: Vec::new(),
        }
    }

    /// Register a core step with the registry
    pub fn register_core(&mut self, step: Arc<dyn Step>) {
        self.core_steps.push(step);
    }

    /// Register a custom step (seeders and the like) with the registry
    pub fn register_custom(&mut self, step: Arc<dyn Step>) {
        self.custom_steps.push(step);
    }

    /// Get all registered steps (core + custom)
    pub fn steps(&self) -> Vec<&Arc<dyn Step>> {
        let mut all_steps = Vec::new();
        all_steps.extend(self.core_steps.iter());
        all_steps.extend(self.custom_steps.iter());
        all_steps
    }

    /// Get a step by name (searches both core and custom steps)
    pub fn get_step(&self, name: &str) -> Option<&Arc<dyn Step>> {
        self.core_steps
            .iter()
            .find(|step| step.name() == name)
            .or_else(|| self.custom_steps.iter().find(|step| step.name() == name))
    }

    /// Get the number of core steps
    pub fn core_step_count(&self) -> usize {
        self.core_steps.len()
    }

    /// Get the number of custom steps
    pub fn custom_step_count(&self) -> usize {
        self.custom_steps.len()
    }

    /// Run core steps in the correct order, aborting on the first failure
    pub async fn run_core_steps(&self, ctx: &StepCtx<'_>) -> anyhow::Result<()> {
        tracing::info!("running core steps in order: {:?}", CORE_STEP_ORDER);

        for &step_name in CORE_STEP_ORDER {
            if let Some(step) = self.core_steps.iter().find(|s| s.name() == step_name) {
                tracing::info!(step = step.name(), "running core step");

                step.run(ctx)
                    .await
                    .with_context(|| format!("failed to run core step '{}'", step.name()))?;
            }
        }

        Ok(())
    }

    /// Run custom steps in registration order, aborting on the first failure
    pub async fn run_custom_steps(&self, ctx: &StepCtx<'_>) -> anyhow::Result<()> {
        tracing::info!("running {} custom steps", self.custom_steps.len());

        for step in &self.custom_steps {
            tracing::info!(step = step.name(), "running custom step");

            step.run(ctx)
                .await
                .with_context(|| format!("failed to run custom step '{}'", step.name()))?;
        }

        Ok(())
    }
}

impl Default for StepRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use async_trait::async_trait;
    use mongodb::Client;
    use std::sync::Mutex;

    struct RecordingStep {
        name: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
        fail: bool,
    }

    #[async_trait]
    impl Step for RecordingStep {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn run(&self, _ctx: &StepCtx<'_>) -> anyhow::Result<()> {
            self.log.lock().unwrap().push(self.name);
            if self.fail {
                anyhow::bail!("step '{}' exploded", self.name);
            }
            Ok(())
        }
    }

    // Client construction is lazy; no server is contacted here.
    async fn test_ctx_parts() -> (Settings, mongodb::Database) {
        let client = Client::with_uri_str("mongodb://127.0.0.1:27017")
            .await
            .unwrap();
        let db = client.database("bootstrap_tests");
        (Settings::default(), db)
    }

    fn recording(
        name: &'static str,
        log: &Arc<Mutex<Vec<&'static str>>>,
        fail: bool,
    ) -> Arc<dyn Step> {
        Arc::new(RecordingStep {
            name,
            log: Arc::clone(log),
            fail,
        })
    }

    #[test]
    fn test_step_registry_creation() {
        let registry = StepRegistry::new();
        assert!(registry.steps().is_empty()); // No steps registered yet
    }

    #[tokio::test]
    async fn core_steps_follow_declared_order() {
        let (settings, db) = test_ctx_parts().await;
        let ctx = StepCtx {
            settings: &settings,
            db: &db,
        };

        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = StepRegistry::new();
        // Registered backwards on purpose; the order constant must win.
        registry.register_core(recording("collection", &log, false));
        registry.register_core(recording("app-user", &log, false));

        registry.run_core_steps(&ctx).await.unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["app-user", "collection"]);
    }

    #[tokio::test]
    async fn failing_core_step_stops_the_sequence() {
        let (settings, db) = test_ctx_parts().await;
        let ctx = StepCtx {
            settings: &settings,
            db: &db,
        };

        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = StepRegistry::new();
        registry.register_core(recording("app-user", &log, true));
        registry.register_core(recording("collection", &log, false));

        let err = registry.run_core_steps(&ctx).await.unwrap_err();
        assert!(err.to_string().contains("app-user"));
        assert_eq!(*log.lock().unwrap(), vec!["app-user"]);
    }

    #[tokio::test]
    async fn failing_custom_step_stops_later_custom_steps() {
        let (settings, db) = test_ctx_parts().await;
        let ctx = StepCtx {
            settings: &settings,
            db: &db,
        };

        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = StepRegistry::new();
        registry.register_custom(recording("seed-document", &log, true));
        registry.register_custom(recording("extra-seed", &log, false));

        let err = registry.run_custom_steps(&ctx).await.unwrap_err();
        assert!(err.to_string().contains("seed-document"));
        assert_eq!(*log.lock().unwrap(), vec!["seed-document"]);
    }

    #[tokio::test]
    async fn get_step_searches_core_and_custom() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = StepRegistry::new();
        registry.register_core(recording("app-user", &log, false));
        registry.register_custom(recording("seed-document", &log, false));

        assert!(registry.get_step("app-user").is_some());
        assert!(registry.get_step("seed-document").is_some());
        assert!(registry.get_step("nope").is_none());
        assert_eq!(registry.core_step_count(), 1);
        assert_eq!(registry.custom_step_count(), 1);
    }
}
