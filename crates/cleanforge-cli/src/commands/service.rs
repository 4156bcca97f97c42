//! `cleanforge service` and `cleanforge service-resource`.
//!
//! Both generate a use-case pair: the contract under `use-cases/` and the
//! `@Service`-decorated implementation under `use-cases/impl/`.

use tracing::instrument;

use cleanforge_adapters::templates;
use cleanforge_core::application::ArtifactService;

use crate::{
    cli::{ServiceArgs, ServiceResourceArgs},
    commands::{display_path, filesystem, project_paths, resource_name},
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(args: ServiceArgs, output: OutputManager) -> CliResult<()> {
    let name = resource_name(&args.name)?;
    let paths = project_paths()?;
    let artifact = ArtifactService::new(filesystem());

    let contract = paths.service_contract_file(&name);
    artifact.create_file(&contract, &templates::service::service_contract(&name))?;
    output.success(&format!("Created {}", display_path(&paths, &contract)))?;

    let implementation = paths.service_impl_file(&name);
    artifact.create_file(&implementation, &templates::service::service_impl(&name))?;
    output.success(&format!(
        "Created {}",
        display_path(&paths, &implementation)
    ))?;

    Ok(())
}

#[instrument(skip_all, fields(name = %args.name))]
pub fn execute_resource(args: ServiceResourceArgs, output: OutputManager) -> CliResult<()> {
    let name = resource_name(&args.name)?;
    let paths = project_paths()?;
    let artifact = ArtifactService::new(filesystem());

    let contract = paths.service_resource_contract_file(&name);
    artifact.create_file(
        &contract,
        &templates::service::service_resource_contract(&name),
    )?;
    output.success(&format!("Created {}", display_path(&paths, &contract)))?;

    let implementation = paths.service_resource_impl_file(&name);
    artifact.create_file(
        &implementation,
        &templates::service::service_resource_impl(&name),
    )?;
    output.success(&format!(
        "Created {}",
        display_path(&paths, &implementation)
    ))?;

    Ok(())
}
