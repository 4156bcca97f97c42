//! `cleanforge interface` and `cleanforge interface-resource`.

use tracing::instrument;

use cleanforge_adapters::templates;
use cleanforge_core::application::ArtifactService;

use crate::{
    cli::{InterfaceArgs, InterfaceResourceArgs},
    commands::{convert_location, display_path, filesystem, project_paths, resource_name},
    error::CliResult,
    output::OutputManager,
};

/// Generate a standalone interface contract in the chosen layer.
#[instrument(skip_all, fields(name = %args.name, path = %args.path))]
pub fn execute(args: InterfaceArgs, output: OutputManager) -> CliResult<()> {
    let name = resource_name(&args.name)?;
    let location = convert_location(args.path);
    let paths = project_paths()?;
    let artifact = ArtifactService::new(filesystem());

    let file = paths.interface_file(&name, location);
    artifact.create_file(&file, &templates::interfaces::interface(&name, location))?;
    output.success(&format!("Created {}", display_path(&paths, &file)))?;

    Ok(())
}

/// Generate a CRUD repository contract; the entity model must already exist.
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute_resource(args: InterfaceResourceArgs, output: OutputManager) -> CliResult<()> {
    let name = resource_name(&args.name)?;
    let paths = project_paths()?;
    let artifact = ArtifactService::new(filesystem());

    artifact.require_entity(&paths, &name)?;

    let file = paths.interface_resource_file(&name);
    artifact.create_file(&file, &templates::interfaces::interface_resource(&name))?;
    output.success(&format!("Created {}", display_path(&paths, &file)))?;

    Ok(())
}
