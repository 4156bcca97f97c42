//! Application services (use case orchestration).

mod artifact_service;
mod registry_service;
mod scaffold_service;

pub use artifact_service::ArtifactService;
pub use registry_service::RegistryService;
pub use scaffold_service::ScaffoldService;
