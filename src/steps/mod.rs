pub mod app_user;
pub mod collection;
pub mod seed;

use sitebuilder_kernel::StepRegistry;

/// Register the bootstrap steps with the registry
pub fn register_all(registry: &mut StepRegistry) {
    registry.register_core(app_user::create_step());
    registry.register_core(collection::create_step());
    registry.register_custom(seed::create_step());
}
