//! `cleanforge controller` — generate an entry-point controller.

use tracing::{debug, instrument};

use cleanforge_adapters::templates;
use cleanforge_core::application::ArtifactService;

use crate::{
    cli::ControllerArgs,
    commands::{display_path, filesystem, project_paths, resource_name},
    error::CliResult,
    output::OutputManager,
};

/// When a `{name}-service-impl` already exists, the controller is generated
/// with the service injected through its constructor; otherwise a bare
/// controller is emitted.
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(args: ControllerArgs, output: OutputManager) -> CliResult<()> {
    let name = resource_name(&args.name)?;
    let paths = project_paths()?;
    let fs = filesystem();
    let artifact = ArtifactService::new(fs.clone());

    let inject_service = fs.exists(&paths.service_impl_file(&name));
    debug!(inject_service, "Controller variant selected");

    let file = paths.controller_file(&name);
    artifact.create_file(&file, &templates::controller::controller(&name, inject_service))?;
    output.success(&format!("Created {}", display_path(&paths, &file)))?;

    if inject_service {
        output.info(&format!("Injected {}-service-impl", name))?;
    }

    Ok(())
}
