pub mod registry;
pub mod settings;
pub mod step;

pub use registry::StepRegistry;
pub use step::{Step, StepCtx};
