//! `cleanforge entity` — generate a domain entity and its gateway contract.

use tracing::instrument;

use cleanforge_adapters::templates;
use cleanforge_core::application::ArtifactService;

use crate::{
    cli::EntityArgs,
    commands::{display_path, filesystem, project_paths, resource_name},
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(args: EntityArgs, output: OutputManager) -> CliResult<()> {
    let name = resource_name(&args.name)?;
    let paths = project_paths()?;
    let artifact = ArtifactService::new(filesystem());

    let model_file = paths.entity_file(&name);
    artifact.create_file(&model_file, &templates::entity::entity_model(&name))?;
    output.success(&format!("Created {}", display_path(&paths, &model_file)))?;

    let gateway_file = paths.entity_gateway_file(&name);
    artifact.create_file(&gateway_file, &templates::entity::entity_gateway(&name))?;
    output.success(&format!("Created {}", display_path(&paths, &gateway_file)))?;

    Ok(())
}
