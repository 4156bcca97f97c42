//! `cleanforge database` — wire a database helper into the project.
//!
//! Rewrites the server entry point for the chosen backend, drops the
//! connection helper next to the driven adapters, and patches package.json
//! with the driver dependencies.

use tracing::{debug, info, instrument};

use cleanforge_adapters::{NpmInstaller, templates};
use cleanforge_core::application::{ArtifactService, ports::PackageInstaller};

use crate::{
    cli::{DatabaseArgs, GlobalArgs},
    commands::{
        adapter::patch_manifest, convert_database, display_path, filesystem, install_spinner,
        project_paths,
    },
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(database = %args.database))]
pub fn execute(
    args: DatabaseArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let database = convert_database(args.database);
    let paths = project_paths()?;
    let fs = filesystem();
    let artifact = ArtifactService::new(fs.clone());

    // Connection helper, shared with any earlier database invocation.
    let helper_file = paths.database_helper_file(database);
    if artifact.create_file_if_absent(&helper_file, templates::database::helper(database))? {
        output.success(&format!("Created {}", display_path(&paths, &helper_file)))?;
    } else {
        debug!(path = %helper_file.display(), "Database helper already present");
    }

    // The server entry is replaced wholesale: the generated index.ts is
    // owned by this command, not by the user.
    let entry_file = paths.server_entry_file();
    if fs.exists(&entry_file) {
        fs.delete_file(&entry_file)?;
    }
    if let Some(parent) = entry_file.parent() {
        fs.create_dir_all(parent)?;
    }
    fs.write_file(&entry_file, templates::database::server_entry(database))?;
    output.success(&format!(
        "Rewrote {} to boot with {}",
        display_path(&paths, &entry_file),
        database.helper_symbol()
    ))?;

    patch_manifest(&paths, &fs, |manifest| {
        templates::manifest::patch_for_database(manifest, database)
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

    info!(database = %database, "Database wiring completed");
    Ok(())
}
