//! `cleanforge adapter` and `cleanforge adapter-orm`.
//!
//! The ORM variant is the composite generator: repository adapter, ORM
//! model, shared instance config, singleton registry patch, package.json
//! patch, and finally `npm install`.

use tracing::{debug, info, instrument};

use cleanforge_adapters::{NpmInstaller, templates};
use cleanforge_core::{
    application::{ArtifactService, RegistryService, ports::PackageInstaller},
    domain::{Manager, registry::SingletonRegistration},
};

use crate::{
    cli::{AdapterArgs, AdapterOrmArgs, GlobalArgs},
    commands::{
        convert_manager, convert_orm, display_path, filesystem, install_spinner, project_paths,
        resource_name,
    },
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Generate a plain driven adapter.
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(args: AdapterArgs, output: OutputManager) -> CliResult<()> {
    let name = resource_name(&args.name)?;
    let paths = project_paths()?;
    let artifact = ArtifactService::new(filesystem());

    let file = paths.simple_adapter_file(&name);
    artifact.create_file(&file, &templates::adapter::simple_adapter(&name))?;
    output.success(&format!("Created {}", display_path(&paths, &file)))?;

    Ok(())
}

/// Generate the full ORM wiring for an existing entity.
///
/// Step order matters: every precondition is checked before the first file
/// is written, and the registry patch runs before the manifest patch so a
/// failed parse leaves package.json untouched.
#[instrument(skip_all, fields(name = %args.name, orm = %args.orm))]
pub fn execute_orm(
    args: AdapterOrmArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let name = resource_name(&args.name)?;
    let orm = convert_orm(args.orm);
    let manager = resolve_manager(&args)?;
    orm.validate_manager(manager)
        .map_err(|e| CliError::Core(e.into()))?;

    let paths = project_paths()?;
    let fs = filesystem();
    let artifact = ArtifactService::new(fs.clone());

    // Preconditions
    artifact.check_manager_conflict(&paths, orm, manager)?;
    artifact.require_entity(&paths, &name)?;

    // Adapter + model
    let adapter_file = paths.orm_adapter_file(&name, orm, manager);
    artifact.create_file(&adapter_file, &templates::adapter::orm_adapter(&name, orm, manager))?;
    output.success(&format!("Created {}", display_path(&paths, &adapter_file)))?;

    let model_file = paths.orm_model_file(&name, orm, manager);
    artifact.create_file(&model_file, &templates::model::orm_model(&name, orm, manager))?;
    output.success(&format!("Created {}", display_path(&paths, &model_file)))?;

    // Shared singleton wiring
    let registration = SingletonRegistration::new(manager, orm.as_str());

    let instance_file = paths.instance_config_file(manager);
    if artifact.create_file_if_absent(
        &instance_file,
        &templates::instance::instance_config(&registration),
    )? {
        output.success(&format!("Created {}", display_path(&paths, &instance_file)))?;
    } else {
        debug!(path = %instance_file.display(), "Instance config already present");
    }

    let registry = RegistryService::new(fs.clone());
    let registry_file = paths.registry_file();
    if registry.ensure_singleton_registered(&registry_file, &registration)? {
        output.success(&format!(
            "Registered {} in {}",
            registration.config_symbol(),
            display_path(&paths, &registry_file),
        ))?;
    } else {
        output.info(&format!(
            "{} already registered",
            registration.config_symbol()
        ))?;
    }

    // Dependency patch + install
    patch_manifest(&paths, &fs, |manifest| {
        templates::manifest::patch_for_orm(manifest, orm, manager)
    })?;
    output.success("Patched package.json")?;

    if !(args.skip_install || config.install.skip) {
        let spinner = install_spinner(global.quiet);
        let result = NpmInstaller::new().install(paths.root());
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }
        result?;
        output.success("Dependencies installed")?;
    }

    info!(name = %name, manager = %manager, "ORM adapter generated");
    Ok(())
}

/// `--manager` wins; mongo implies mongoose; sequelize has no implied
/// manager and must be told.
fn resolve_manager(args: &AdapterOrmArgs) -> CliResult<Manager> {
    if let Some(manager) = args.manager {
        return Ok(convert_manager(manager));
    }
    convert_orm(args.orm)
        .default_manager()
        .ok_or_else(|| CliError::MissingManager {
            orm: args.orm.to_string(),
        })
}

/// Read, transform, and rewrite `package.json` in one pass.
pub(crate) fn patch_manifest<F>(
    paths: &cleanforge_core::domain::ProjectPaths,
    fs: &std::sync::Arc<dyn cleanforge_core::application::ports::Filesystem>,
    patch: F,
) -> CliResult<()>
where
    F: FnOnce(&str) -> cleanforge_core::error::ForgeResult<String>,
{
    let manifest_file = paths.manifest_file();
    let manifest = fs.read_file(&manifest_file)?;
    let patched = patch(&manifest)?;
    fs.write_file(&manifest_file, &patched)?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ManagerArg, Orm};

    fn orm_args(orm: Orm, manager: Option<ManagerArg>) -> AdapterOrmArgs {
        AdapterOrmArgs {
            name: "user".into(),
            orm,
            manager,
            skip_install: true,
        }
    }

    #[test]
    fn mongo_implies_mongoose() {
        let manager = resolve_manager(&orm_args(Orm::Mongo, None)).unwrap();
        assert_eq!(manager, Manager::Mongoose);
    }

    #[test]
    fn sequelize_without_manager_is_an_error() {
        assert!(matches!(
            resolve_manager(&orm_args(Orm::Sequelize, None)),
            Err(CliError::MissingManager { .. })
        ));
    }

    #[test]
    fn explicit_manager_wins() {
        let manager = resolve_manager(&orm_args(Orm::Sequelize, Some(ManagerArg::Postgres))).unwrap();
        assert_eq!(manager, Manager::Postgres);
    }
}
